//! perfcurve-core: threshold sweeps and average precision for binary classifiers.
//!
//! Scores for positives + scores for negatives → one confusion matrix per
//! threshold position → precision, recall, F1, ROC rates, average precision.
//! No IO, no filesystem, no global state.
//!
//! # Quick start
//!
//! ```rust
//! use perfcurve_core::{average_precision, enumerate, ConfusionMatrix};
//!
//! let positives = [0.9, 0.6, 0.2];
//! let negatives = [0.8, 0.5, 0.1];
//!
//! let path = enumerate(&positives, &negatives);
//! assert_eq!(path.len(), 7);
//! assert_eq!(path.first(), Some(&ConfusionMatrix::new(0, 0, 3, 3)));
//!
//! for cm in &path {
//!     println!("recall {:.3} precision {:.3}", cm.recall(), cm.precision());
//! }
//!
//! let ap = average_precision(&path);
//! assert!((ap - 0.7556).abs() < 1e-4);
//! ```

pub mod constants;
pub mod enumerate;
pub mod error;
pub mod integrate;
pub mod metrics;
pub mod sorter;
pub mod types;

// Re-export primary public API at crate root.
pub use enumerate::{PerfPath, TiePolicy};
pub use error::{PerfError, Result};
pub use integrate::{average_precision, roc_auc};
pub use sorter::SortedScores;
pub use types::{ConfusionMatrix, LabeledScore, PrPoint, RocPoint};

/// Merge, label and sort both groups, then sweep with [`TiePolicy::Distinct`].
///
/// The returned path has `positives.len() + negatives.len() + 1` snapshots.
pub fn enumerate(positives: &[f64], negatives: &[f64]) -> PerfPath {
    enumerate_with(positives, negatives, TiePolicy::Distinct)
}

/// Like [`enumerate`], with an explicit tie policy.
pub fn enumerate_with(positives: &[f64], negatives: &[f64], ties: TiePolicy) -> PerfPath {
    PerfPath::enumerate(&SortedScores::merge(positives, negatives), ties)
}
