/// Threshold sweep: sorted examples → one confusion matrix per threshold position.
///
/// The sweep is a fold over the sorted examples. Once built, a [`PerfPath`]
/// is never mutated.
use std::cmp::Ordering;

use log::debug;

use crate::error::{PerfError, Result};
use crate::sorter::{descending, SortedScores};
use crate::types::{ConfusionMatrix, LabeledScore, PrPoint, RocPoint};

/// How examples that share a score are turned into snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TiePolicy {
    /// One snapshot per example, ties included. Path length is always
    /// `P + N + 1` and every step moves exactly one example. Snapshots inside
    /// a tied run are not reachable by any real-valued threshold.
    #[default]
    Distinct,
    /// A run of equal scores is crossed in a single step. Only snapshots a
    /// real threshold can produce are emitted; one step may move several
    /// examples.
    Collapse,
}

/// Confusion matrices ordered from the most conservative threshold (reject
/// everything) to the most permissive (accept everything).
///
/// Recall is non-decreasing along the path and class totals are the same in
/// every snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PerfPath {
    snapshots: Vec<ConfusionMatrix>,
}

impl PerfPath {
    /// Sweep the threshold down through `sorted`.
    pub fn enumerate(sorted: &SortedScores, ties: TiePolicy) -> Self {
        let start = ConfusionMatrix::reject_all(sorted.positives(), sorted.negatives());
        let snapshots = match ties {
            TiePolicy::Distinct => sweep_distinct(sorted.as_slice(), start),
            TiePolicy::Collapse => sweep_collapsed(sorted.as_slice(), start),
        };

        debug!(
            "enumerated {} snapshots from {} positives and {} negatives ({:?})",
            snapshots.len(),
            sorted.positives(),
            sorted.negatives(),
            ties,
        );

        PerfPath { snapshots }
    }

    /// Checked constructor for snapshots produced elsewhere.
    ///
    /// Requires at least one snapshot, identical class totals in every
    /// snapshot, and TP and FP that never decrease from one snapshot to the
    /// next.
    pub fn from_snapshots(snapshots: Vec<ConfusionMatrix>) -> Result<Self> {
        let first = match snapshots.first() {
            Some(first) => *first,
            None => return Err(PerfError::MalformedPath("path has no snapshots".into())),
        };

        for (i, cm) in snapshots.iter().enumerate() {
            if cm.positives() != first.positives() || cm.negatives() != first.negatives() {
                return Err(PerfError::MalformedPath(format!(
                    "snapshot {i} has {} positives and {} negatives, expected {} and {}",
                    cm.positives(),
                    cm.negatives(),
                    first.positives(),
                    first.negatives(),
                )));
            }
        }

        for (i, w) in snapshots.windows(2).enumerate() {
            if w[1].true_positives < w[0].true_positives
                || w[1].false_positives < w[0].false_positives
            {
                return Err(PerfError::MalformedPath(format!(
                    "snapshot {} accepts fewer examples than snapshot {i}",
                    i + 1,
                )));
            }
        }

        Ok(PerfPath { snapshots })
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true for a path from `enumerate` or `from_snapshots`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn as_slice(&self) -> &[ConfusionMatrix] {
        &self.snapshots
    }

    pub fn get(&self, index: usize) -> Option<&ConfusionMatrix> {
        self.snapshots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfusionMatrix> {
        self.snapshots.iter()
    }

    /// The reject-everything snapshot.
    pub fn first(&self) -> Option<&ConfusionMatrix> {
        self.snapshots.first()
    }

    /// The accept-everything snapshot.
    pub fn last(&self) -> Option<&ConfusionMatrix> {
        self.snapshots.last()
    }

    /// Ground-truth positives (`P`) of the underlying dataset.
    pub fn positives(&self) -> usize {
        self.snapshots.first().map_or(0, ConfusionMatrix::positives)
    }

    /// Ground-truth negatives (`N`) of the underlying dataset.
    pub fn negatives(&self) -> usize {
        self.snapshots.first().map_or(0, ConfusionMatrix::negatives)
    }

    /// (recall, precision) for every snapshot whose precision is defined.
    pub fn precision_recall(&self) -> Vec<PrPoint> {
        self.snapshots
            .iter()
            .filter(|cm| !cm.precision().is_nan())
            .map(|cm| PrPoint { recall: cm.recall(), precision: cm.precision() })
            .collect()
    }

    /// (FPR, TPR) for every snapshot where both rates are defined. Empty when
    /// the dataset lacks either class.
    pub fn roc(&self) -> Vec<RocPoint> {
        self.snapshots
            .iter()
            .map(|cm| RocPoint { fpr: cm.fpr(), tpr: cm.tpr() })
            .filter(|p| !p.fpr.is_nan() && !p.tpr.is_nan())
            .collect()
    }

    /// See [`crate::integrate::average_precision`].
    pub fn average_precision(&self) -> f64 {
        crate::integrate::average_precision(self)
    }

    /// See [`crate::integrate::roc_auc`].
    pub fn roc_auc(&self) -> f64 {
        crate::integrate::roc_auc(self)
    }

    pub fn into_inner(self) -> Vec<ConfusionMatrix> {
        self.snapshots
    }
}

impl<'a> IntoIterator for &'a PerfPath {
    type Item = &'a ConfusionMatrix;
    type IntoIter = std::slice::Iter<'a, ConfusionMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

fn sweep_distinct(examples: &[LabeledScore], start: ConfusionMatrix) -> Vec<ConfusionMatrix> {
    let mut snapshots = Vec::with_capacity(examples.len() + 1);
    snapshots.push(start);
    snapshots.extend(examples.iter().scan(start, |cm, example| {
        *cm = cm.accept(example.is_positive);
        Some(*cm)
    }));
    snapshots
}

fn sweep_collapsed(examples: &[LabeledScore], start: ConfusionMatrix) -> Vec<ConfusionMatrix> {
    let runs = examples.chunk_by(|a, b| descending(a, b) == Ordering::Equal);

    let mut snapshots = vec![start];
    snapshots.extend(runs.scan(start, |cm, run| {
        let positives = run.iter().filter(|e| e.is_positive).count();
        *cm = cm.accept_run(positives, run.len() - positives);
        Some(*cm)
    }));

    debug!(
        "collapsed {} examples into {} tie runs",
        examples.len(),
        snapshots.len() - 1,
    );
    snapshots
}
