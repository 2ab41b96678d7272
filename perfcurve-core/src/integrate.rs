/// Curve integration over a [`PerfPath`].
use crate::enumerate::PerfPath;

/// Average precision: right-endpoint sum of precision over recall increments.
///
/// Walks the path from the most conservative snapshot. Each snapshot with
/// defined precision and recall contributes `precision * (recall - prev)`,
/// where `prev` is the recall of the last snapshot that contributed (starting
/// at 0). Snapshots with NaN precision or NaN recall are skipped and leave
/// `prev` unchanged.
///
/// A dataset without positives has NaN recall everywhere and gets `0.0`.
pub fn average_precision(path: &PerfPath) -> f64 {
    let mut ap = 0.0;
    let mut prev_recall = 0.0;

    for cm in path {
        let precision = cm.precision();
        if precision.is_nan() {
            continue;
        }
        let recall = cm.recall();
        if recall.is_nan() {
            continue;
        }
        ap += precision * (recall - prev_recall);
        prev_recall = recall;
    }

    ap
}

/// Area under the ROC curve, trapezoidal rule over (FPR, TPR).
///
/// NaN when the dataset lacks positives or negatives. Under
/// [`TiePolicy::Distinct`](crate::TiePolicy::Distinct) tied runs are crossed
/// positive-first, which is the optimistic reading of a tie; use
/// [`TiePolicy::Collapse`](crate::TiePolicy::Collapse) for the usual
/// diagonal through tied runs.
pub fn roc_auc(path: &PerfPath) -> f64 {
    if path.positives() == 0 || path.negatives() == 0 {
        return f64::NAN;
    }

    path.roc()
        .windows(2)
        .map(|w| (w[1].fpr - w[0].fpr) * (w[1].tpr + w[0].tpr) / 2.0)
        .sum()
}
