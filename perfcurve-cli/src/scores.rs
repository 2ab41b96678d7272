/// Score file reading: one floating-point score per line.
///
/// Fail fast: the first bad line aborts the whole read, nothing partial is returned.
use std::io::{self, Read};
use std::num::ParseFloatError;
use std::path::Path;

use thiserror::Error;

/// Path that reads from stdin instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum ScoreFileError {
    #[error("failed to read {source_name}: {error}")]
    Io { source_name: String, error: io::Error },

    #[error("{source_name}:{line}: invalid score \"{text}\": {error}")]
    Parse {
        source_name: String,
        line: usize,
        text: String,
        error: ParseFloatError,
    },

    #[error("{source_name}:{line}: score is NaN")]
    NotANumber { source_name: String, line: usize },
}

/// Parse scores from text. `source_name` only labels error messages.
///
/// Lines are trimmed and blank lines skipped. Infinities are accepted; NaN is
/// rejected because it has no place in a score ranking.
pub fn parse_scores(source_name: &str, content: &str) -> Result<Vec<f64>, ScoreFileError> {
    let mut scores = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        let score: f64 = text.parse().map_err(|error| ScoreFileError::Parse {
            source_name: source_name.to_string(),
            line: i + 1,
            text: text.to_string(),
            error,
        })?;

        if score.is_nan() {
            return Err(ScoreFileError::NotANumber {
                source_name: source_name.to_string(),
                line: i + 1,
            });
        }
        scores.push(score);
    }

    Ok(scores)
}

/// Read scores from a file, or from stdin when `path` is `-`.
pub fn read_scores(path: &Path) -> Result<Vec<f64>, ScoreFileError> {
    let (source_name, content) = if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|error| ScoreFileError::Io { source_name: "<stdin>".to_string(), error })?;
        ("<stdin>".to_string(), content)
    } else {
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|error| ScoreFileError::Io { source_name: source_name.clone(), error })?;
        (source_name, content)
    };

    let scores = parse_scores(&source_name, &content)?;
    log::info!("read {} scores from {}", scores.len(), source_name);
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_per_line() {
        let scores = parse_scores("pos.txt", "0.9\n0.25\n-1.5\n1e-3\n").unwrap();
        assert_eq!(scores, vec![0.9, 0.25, -1.5, 0.001]);
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let scores = parse_scores("pos.txt", "  0.5 \r\n\n\t0.75\n   \n").unwrap();
        assert_eq!(scores, vec![0.5, 0.75]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_scores("empty.txt", "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_accepts_infinity() {
        let scores = parse_scores("pos.txt", "inf\n-inf\n").unwrap();
        assert_eq!(scores, vec![f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_scores("neg.txt", "0.1\n\n0.2x\n0.3\n").unwrap_err();
        match &err {
            ScoreFileError::Parse { line, text, .. } => {
                assert_eq!(*line, 3);
                assert_eq!(text, "0.2x");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("neg.txt:3: invalid score \"0.2x\""));
    }

    #[test]
    fn test_parse_rejects_nan() {
        let err = parse_scores("pos.txt", "0.1\nNaN\n").unwrap_err();
        assert!(matches!(err, ScoreFileError::NotANumber { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_two_scores_on_one_line() {
        assert!(parse_scores("pos.txt", "0.1 0.2\n").is_err());
    }

    #[test]
    fn test_read_scores_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pos.txt");
        std::fs::write(&path, "0.9\n0.6\n0.2\n").unwrap();
        assert_eq!(read_scores(&path).unwrap(), vec![0.9, 0.6, 0.2]);
    }

    #[test]
    fn test_read_scores_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_scores(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ScoreFileError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
