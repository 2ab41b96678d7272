/// Optional TOML defaults for `perfcurve eval`.
///
/// Every key is optional and any CLI flag overrides it.
use perfcurve_core::TiePolicy;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PerfcurveConfig {
    pub format: Option<String>,
    pub ties: Option<TiePolicy>,
    pub json: Option<bool>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# perfcurve configuration
# All values here can be overridden by CLI flags.

# Curve file layout: \"pr\" (Recall, Precision), \"confusion\" (TP, FP, FN, TN),
# \"roc\" (FPR, TPR) or \"json\" (every confusion matrix as a JSON array)
# format = \"pr\"

# Tied scores: \"distinct\" (one row per example) or \"collapse\" (one row per score)
# ties = \"distinct\"

# Print the summary as JSON instead of text
# json = false
";

impl PerfcurveConfig {
    /// Read the config at `path`. A missing file yields the defaults; an
    /// unreadable or malformed one aborts.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
        };

        let cfg: Self = toml::from_str(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())));
        log::info!("loaded config from {}", path.display());
        cfg
    }
}

/// ~/.config/perfcurve/config.toml
pub fn default_path() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_else(|| bail("HOME environment variable not set"));
    let mut path = PathBuf::from(home);
    path.extend([".config", "perfcurve", "config.toml"]);
    path
}

/// Write the commented template to `path`, creating parent directories.
/// Fails with `AlreadyExists` rather than overwrite an existing file.
pub fn write_template(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())
}
