/// Output formatting: curve files and the AP summary (text or JSON).
use perfcurve_core::PerfPath;
use serde::Serialize;
use std::io::{self, Write};

/// Layout of the curve file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFormat {
    /// `Recall\tPrecision`, rows with defined precision only.
    Pr,
    /// `TP\tFP\tFN\tTN`, every snapshot.
    Confusion,
    /// `FPR\tTPR`, rows where both rates are defined.
    Roc,
    /// The whole path as a JSON array of confusion matrices.
    Json,
}

impl CurveFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pr" => Some(CurveFormat::Pr),
            "confusion" => Some(CurveFormat::Confusion),
            "roc" => Some(CurveFormat::Roc),
            "json" => Some(CurveFormat::Json),
            _ => None,
        }
    }
}

/// Headline numbers printed after every run.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub positives: usize,
    pub negatives: usize,
    /// Number of snapshots in the path.
    pub thresholds: usize,
    pub average_precision: f64,
    /// NaN (serialized as `null`) when either class is empty.
    pub roc_auc: f64,
}

impl Summary {
    pub fn from_path(path: &PerfPath) -> Self {
        Summary {
            positives: path.positives(),
            negatives: path.negatives(),
            thresholds: path.len(),
            average_precision: path.average_precision(),
            roc_auc: path.roc_auc(),
        }
    }
}

/// Write the curve table for `path` in the requested layout.
pub fn write_curve<W: Write>(out: &mut W, path: &PerfPath, format: CurveFormat) -> io::Result<()> {
    match format {
        CurveFormat::Pr => {
            writeln!(out, "Recall\tPrecision")?;
            for p in path.precision_recall() {
                writeln!(out, "{}\t{}", p.recall, p.precision)?;
            }
        }
        CurveFormat::Confusion => {
            writeln!(out, "TP\tFP\tFN\tTN")?;
            for cm in path {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    cm.true_positives, cm.false_positives, cm.false_negatives, cm.true_negatives,
                )?;
            }
        }
        CurveFormat::Roc => {
            writeln!(out, "FPR\tTPR")?;
            for p in path.roc() {
                writeln!(out, "{}\t{}", p.fpr, p.tpr)?;
            }
        }
        CurveFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, path)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Print the summary as plain text.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Average Precision: {}", summary.average_precision)?;
    if !summary.roc_auc.is_nan() {
        writeln!(out, "ROC AUC: {}", summary.roc_auc)?;
    }
    Ok(())
}

/// Print the summary as JSON.
pub fn write_summary_json<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}
