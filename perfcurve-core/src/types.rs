//! Value types shared by the sorter, enumerator and integrators.

/// A classifier score paired with its ground-truth label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledScore {
    /// Classifier output. Higher means "more likely positive".
    pub score: f64,
    /// Ground truth.
    pub is_positive: bool,
}

impl LabeledScore {
    pub fn positive(score: f64) -> Self {
        LabeledScore { score, is_positive: true }
    }

    pub fn negative(score: f64) -> Self {
        LabeledScore { score, is_positive: false }
    }
}

/// Confusion-matrix counts at a single threshold position.
///
/// For a dataset with `P` positives and `N` negatives every snapshot keeps
/// `true_positives + false_negatives == P` and
/// `true_negatives + false_positives == N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusionMatrix {
    /// Positives at or above the threshold.
    pub true_positives: usize,
    /// Negatives at or above the threshold.
    pub false_positives: usize,
    /// Positives below the threshold.
    pub false_negatives: usize,
    /// Negatives below the threshold.
    pub true_negatives: usize,
}

impl ConfusionMatrix {
    /// Build a snapshot from counts in (TP, FP, FN, TN) order.
    pub fn new(
        true_positives: usize,
        false_positives: usize,
        false_negatives: usize,
        true_negatives: usize,
    ) -> Self {
        ConfusionMatrix {
            true_positives,
            false_positives,
            false_negatives,
            true_negatives,
        }
    }

    /// Threshold above every score: everything is classified negative.
    pub fn reject_all(positives: usize, negatives: usize) -> Self {
        ConfusionMatrix::new(0, 0, positives, negatives)
    }

    /// Threshold below every score: everything is classified positive.
    pub fn accept_all(positives: usize, negatives: usize) -> Self {
        ConfusionMatrix::new(positives, negatives, 0, 0)
    }

    /// Snapshot after lowering the threshold past one more example.
    ///
    /// The example must currently be on the rejected side, i.e. there is a
    /// false negative left to convert (positive) or a true negative left to
    /// convert (negative).
    #[must_use]
    pub(crate) fn accept(self, is_positive: bool) -> Self {
        if is_positive {
            self.accept_run(1, 0)
        } else {
            self.accept_run(0, 1)
        }
    }

    /// Snapshot after lowering the threshold past `positives` positive and
    /// `negatives` negative examples at once. Only the sweep advances
    /// snapshots, and it never moves more examples than remain.
    #[must_use]
    pub(crate) fn accept_run(self, positives: usize, negatives: usize) -> Self {
        debug_assert!(positives <= self.false_negatives, "accepted more positives than remain");
        debug_assert!(negatives <= self.true_negatives, "accepted more negatives than remain");
        ConfusionMatrix {
            true_positives: self.true_positives + positives,
            false_positives: self.false_positives + negatives,
            false_negatives: self.false_negatives - positives,
            true_negatives: self.true_negatives - negatives,
        }
    }

    /// Ground-truth positives, `TP + FN`.
    pub fn positives(&self) -> usize {
        self.true_positives + self.false_negatives
    }

    /// Ground-truth negatives, `TN + FP`.
    pub fn negatives(&self) -> usize {
        self.true_negatives + self.false_positives
    }

    /// Examples classified positive, `TP + FP`.
    pub fn predicted_positives(&self) -> usize {
        self.true_positives + self.false_positives
    }

    pub fn total(&self) -> usize {
        self.positives() + self.negatives()
    }
}

/// One row of a precision-recall curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrPoint {
    pub recall: f64,
    pub precision: f64,
}

/// One row of a ROC curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocPoint {
    /// False positive rate, `FP / (FP + TN)`.
    pub fpr: f64,
    /// True positive rate, `TP / (TP + FN)`.
    pub tpr: f64,
}
