/// Labeled scores ordered by score, highest first.
///
/// `SortedScores` can only be built by sorting or by a checked claim of
/// sortedness, so the enumerator never sees unsorted input.
use std::cmp::Ordering;

use crate::error::{PerfError, Result};
use crate::types::LabeledScore;

/// Examples ordered by score descending.
///
/// Scores are compared with [`f64::total_cmp`] after folding `-0.0` into
/// `0.0`, so the two zeros tie. Positive NaN ranks above `+inf` and negative
/// NaN below `-inf`. Equal scores keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedScores {
    examples: Vec<LabeledScore>,
    positives: usize,
}

impl SortedScores {
    /// Label and merge two score groups, then sort.
    ///
    /// Positives are placed before negatives prior to the stable sort, so a
    /// positive and a negative with the same score come out positive first.
    pub fn merge(positives: &[f64], negatives: &[f64]) -> Self {
        let examples = positives
            .iter()
            .map(|&s| LabeledScore::positive(s))
            .chain(negatives.iter().map(|&s| LabeledScore::negative(s)))
            .collect();
        Self::sort(examples)
    }

    /// Sort-on-demand: stable sort, descending by score.
    pub fn sort(mut examples: Vec<LabeledScore>) -> Self {
        sort_descending(&mut examples);
        Self::new_unchecked(examples)
    }

    /// Accept a sequence already sorted descending by score.
    ///
    /// Performs one linear scan and fails on the first adjacent pair where
    /// the later score is greater. The input is never re-sorted.
    pub fn from_sorted(examples: Vec<LabeledScore>) -> Result<Self> {
        let out_of_order = examples
            .windows(2)
            .position(|w| descending(&w[0], &w[1]) == Ordering::Greater);

        if let Some(i) = out_of_order {
            return Err(PerfError::NotDescending {
                index: i + 1,
                previous: examples[i].score,
                current: examples[i + 1].score,
            });
        }

        Ok(Self::new_unchecked(examples))
    }

    fn new_unchecked(examples: Vec<LabeledScore>) -> Self {
        let positives = examples.iter().filter(|e| e.is_positive).count();
        SortedScores { examples, positives }
    }

    pub fn as_slice(&self) -> &[LabeledScore] {
        &self.examples
    }

    pub fn into_inner(self) -> Vec<LabeledScore> {
        self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Number of positive examples.
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Number of negative examples.
    pub fn negatives(&self) -> usize {
        self.examples.len() - self.positives
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledScore> {
        self.examples.iter()
    }
}

impl<'a> IntoIterator for &'a SortedScores {
    type Item = &'a LabeledScore;
    type IntoIter = std::slice::Iter<'a, LabeledScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

/// Ordering for a descending sort: `Less` when `a` belongs before `b`.
pub(crate) fn descending(a: &LabeledScore, b: &LabeledScore) -> Ordering {
    unsigned_zero(b.score).total_cmp(&unsigned_zero(a.score))
}

// No threshold separates the two zeros.
fn unsigned_zero(score: f64) -> f64 {
    if score == 0.0 {
        0.0
    } else {
        score
    }
}

#[cfg(feature = "parallel")]
fn sort_descending(examples: &mut [LabeledScore]) {
    use rayon::prelude::*;

    if examples.len() >= crate::constants::PARALLEL_SORT_MIN_LEN {
        // Rayon's par_sort_by is stable, so tie order matches the sequential path.
        examples.par_sort_by(descending);
    } else {
        examples.sort_by(descending);
    }
}

#[cfg(not(feature = "parallel"))]
fn sort_descending(examples: &mut [LabeledScore]) {
    examples.sort_by(descending);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

    fn scores(sorted: &SortedScores) -> Vec<f64> {
        sorted.iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_merge_sorts_descending() {
        let sorted = SortedScores::merge(&[0.9, 0.6, 0.2], &[0.8, 0.5, 0.1]);
        assert_eq!(scores(&sorted), vec![0.9, 0.8, 0.6, 0.5, 0.2, 0.1]);
        let labels: Vec<bool> = sorted.iter().map(|e| e.is_positive).collect();
        assert_eq!(labels, vec![true, false, true, false, true, false]);
        assert_eq!(sorted.positives(), 3);
        assert_eq!(sorted.negatives(), 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            LabeledScore::negative(0.5),
            LabeledScore::positive(0.7),
            LabeledScore::positive(0.5),
            LabeledScore::negative(0.5),
        ];
        let sorted = SortedScores::sort(input);
        assert_eq!(
            sorted.as_slice(),
            &[
                LabeledScore::positive(0.7),
                LabeledScore::negative(0.5),
                LabeledScore::positive(0.5),
                LabeledScore::negative(0.5),
            ]
        );
    }

    #[test]
    fn test_merge_puts_tied_positives_first() {
        let sorted = SortedScores::merge(&[0.5], &[0.5]);
        assert!(sorted.as_slice()[0].is_positive);
        assert!(!sorted.as_slice()[1].is_positive);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = SortedScores::merge(&[3.0, -1.0, 2.5, 2.5], &[0.0, 4.0, 2.5]);
        let twice = SortedScores::sort(once.clone().into_inner());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_from_sorted_accepts_descending() {
        let input = vec![
            LabeledScore::positive(2.0),
            LabeledScore::negative(2.0),
            LabeledScore::negative(1.0),
        ];
        let sorted = SortedScores::from_sorted(input.clone()).unwrap();
        assert_eq!(sorted.as_slice(), input.as_slice());
        assert_eq!(sorted.positives(), 1);
    }

    #[test]
    fn test_from_sorted_reports_first_violation() {
        let input = vec![
            LabeledScore::positive(0.9),
            LabeledScore::negative(0.3),
            LabeledScore::positive(0.4),
        ];
        let err = SortedScores::from_sorted(input).unwrap_err();
        assert_eq!(
            err,
            PerfError::NotDescending { index: 2, previous: 0.3, current: 0.4 }
        );
        assert!(err.to_string().starts_with("invariant violation"));
    }

    #[test]
    fn test_from_sorted_rejects_shuffled_input() {
        let descending_input: Vec<LabeledScore> = (0..50)
            .map(|i| LabeledScore { score: 50.0 - i as f64, is_positive: i % 3 == 0 })
            .collect();
        assert!(SortedScores::from_sorted(descending_input.clone()).is_ok());

        let mut rng = SmallRng::seed_from_u64(7);
        let mut shuffled = descending_input.clone();
        while shuffled == descending_input {
            shuffled.shuffle(&mut rng);
        }
        assert!(matches!(
            SortedScores::from_sorted(shuffled),
            Err(PerfError::NotDescending { .. })
        ));
    }

    #[test]
    fn test_from_sorted_rejects_ascending_pair() {
        let input = vec![LabeledScore::negative(0.1), LabeledScore::positive(0.2)];
        assert!(SortedScores::from_sorted(input).is_err());
    }

    #[test]
    fn test_empty_and_single_inputs() {
        let empty = SortedScores::from_sorted(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.negatives(), 0);

        let one = SortedScores::from_sorted(vec![LabeledScore::negative(1.0)]).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one.negatives(), 1);
    }

    #[test]
    fn test_special_values_have_fixed_positions() {
        let sorted = SortedScores::merge(
            &[f64::NEG_INFINITY, 0.0, f64::NAN],
            &[-0.0, f64::INFINITY],
        );
        let s = scores(&sorted);
        assert!(s[0].is_nan());
        assert_eq!(s[1], f64::INFINITY);
        // Tied zeros keep merge order: the positive's 0.0, then the negative's -0.0.
        assert!(s[2] == 0.0 && s[2].is_sign_positive());
        assert!(s[3] == 0.0 && s[3].is_sign_negative());
        assert_eq!(s[4], f64::NEG_INFINITY);
    }

    #[test]
    fn test_signed_zeros_tie() {
        let sorted = SortedScores::merge(&[-0.0], &[0.0]);
        assert!(sorted.as_slice()[0].is_positive);
        assert!(sorted.as_slice()[0].score.is_sign_negative());

        let strict = SortedScores::from_sorted(vec![
            LabeledScore::negative(-0.0),
            LabeledScore::positive(0.0),
            LabeledScore::negative(-0.0),
        ]);
        assert!(strict.is_ok());
    }
}
