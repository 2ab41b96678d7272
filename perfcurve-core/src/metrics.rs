/// Scalar metrics derived from a single confusion-matrix snapshot.
///
/// Every ratio with a zero denominator is `f64::NAN`. Consumers that need to
/// skip undefined values must test for NaN explicitly.
use crate::types::ConfusionMatrix;

/// `num / den`, or NaN when `den == 0`.
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        f64::NAN
    } else {
        num as f64 / den as f64
    }
}

impl ConfusionMatrix {
    /// True positives over reported positives.
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// True positives over actual positives.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// Fraction of examples classified correctly.
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total())
    }

    /// Harmonic mean of precision and recall, `2TP / (2TP + FP + FN)`.
    pub fn f1(&self) -> f64 {
        ratio(
            2 * self.true_positives,
            2 * self.true_positives + self.false_positives + self.false_negatives,
        )
    }

    /// True positive rate. Same value as [`recall`](Self::recall).
    pub fn tpr(&self) -> f64 {
        self.recall()
    }

    /// True negative rate (specificity).
    pub fn tnr(&self) -> f64 {
        ratio(self.true_negatives, self.true_negatives + self.false_positives)
    }

    /// False positive rate. Equal to one minus TNR.
    pub fn fpr(&self) -> f64 {
        ratio(self.false_positives, self.false_positives + self.true_negatives)
    }

    /// False negative rate. Equal to one minus recall.
    pub fn fnr(&self) -> f64 {
        ratio(self.false_negatives, self.false_negatives + self.true_positives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_metrics_on_mixed_snapshot() {
        // TP=2, FP=1, FN=1, TN=2
        let cm = ConfusionMatrix::new(2, 1, 1, 2);
        assert!((cm.precision() - 2.0 / 3.0).abs() < EPS);
        assert!((cm.recall() - 2.0 / 3.0).abs() < EPS);
        assert!((cm.accuracy() - 4.0 / 6.0).abs() < EPS);
        assert!((cm.f1() - 4.0 / 6.0).abs() < EPS);
        assert!((cm.tnr() - 2.0 / 3.0).abs() < EPS);
        assert!((cm.fpr() - 1.0 / 3.0).abs() < EPS);
        assert!((cm.fnr() - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_complementary_rates() {
        let cm = ConfusionMatrix::new(3, 2, 4, 7);
        assert!((cm.tpr() + cm.fnr() - 1.0).abs() < EPS);
        assert!((cm.tnr() + cm.fpr() - 1.0).abs() < EPS);
        assert_eq!(cm.tpr(), cm.recall());
    }

    #[test]
    fn test_f1_matches_harmonic_mean() {
        let cm = ConfusionMatrix::new(5, 3, 2, 10);
        let p = cm.precision();
        let r = cm.recall();
        assert!((cm.f1() - 2.0 * p * r / (p + r)).abs() < EPS);
    }

    #[test]
    fn test_nothing_accepted_has_undefined_precision() {
        let cm = ConfusionMatrix::reject_all(3, 3);
        assert!(cm.precision().is_nan());
        assert_eq!(cm.recall(), 0.0);
        assert_eq!(cm.fpr(), 0.0);
        assert_eq!(cm.tnr(), 1.0);
        assert_eq!(cm.f1(), 0.0);
    }

    #[test]
    fn test_no_negatives_has_undefined_negative_rates() {
        let cm = ConfusionMatrix::new(2, 0, 1, 0);
        assert!(cm.tnr().is_nan());
        assert!(cm.fpr().is_nan());
        assert_eq!(cm.precision(), 1.0);
    }

    #[test]
    fn test_no_positives_has_undefined_recall() {
        let cm = ConfusionMatrix::new(0, 2, 0, 1);
        assert!(cm.recall().is_nan());
        assert!(cm.tpr().is_nan());
        assert!(cm.fnr().is_nan());
        assert_eq!(cm.precision(), 0.0);
        assert_eq!(cm.f1(), 0.0);
    }

    #[test]
    fn test_empty_matrix_is_all_nan() {
        let cm = ConfusionMatrix::default();
        assert!(cm.precision().is_nan());
        assert!(cm.recall().is_nan());
        assert!(cm.accuracy().is_nan());
        assert!(cm.f1().is_nan());
        assert!(cm.tnr().is_nan());
        assert!(cm.fpr().is_nan());
        assert!(cm.fnr().is_nan());
    }
}
