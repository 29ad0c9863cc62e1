// PBIX Analyzer - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every error keeps enough context
// to produce an actionable message at the display boundary.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type, categorised by the subsystem that produced it.
#[derive(Debug)]
pub enum AnalyzerError {
    /// File selection failed client-side validation.
    Validation(ValidationError),

    /// The simulated analysis worker reported a failure.
    Analysis(AnalysisError),

    /// The simulated export worker reported a failure.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Analysis(e) => write!(f, "Analysis error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Analysis(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// The two user-visible upload rejection conditions.
///
/// Both are surfaced as inline alert text beneath the drop zone, localised
/// by the UI layer. The enum carries the raw facts; no display strings.
#[derive(Debug)]
pub enum ValidationError {
    /// File exceeds the maximum accepted size.
    TooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File is not an accepted Power BI file (wrong extension, missing,
    /// or not a regular file).
    InvalidType { path: PathBuf },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, above the {max_size} byte limit",
                path.display()
            ),
            Self::InvalidType { path } => {
                write!(f, "'{}' is not an accepted .pbix file", path.display())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Analysis errors
// ---------------------------------------------------------------------------

/// Failures reported by the simulated analysis worker.
///
/// The worker is a stub, so the only failure mode today is the generic
/// catch-all the UI surfaces as a toast-style notice.
#[derive(Debug)]
pub enum AnalysisError {
    /// The background worker failed before producing results.
    WorkerFailed { message: String },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerFailed { message } => write!(f, "worker failed: {message}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Failures reported by the simulated export worker.
#[derive(Debug)]
pub enum ExportError {
    /// The background worker failed before reporting completion.
    WorkerFailed { message: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerFailed { message } => write!(f, "worker failed: {message}"),
        }
    }
}

impl std::error::Error for ExportError {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors related to config.toml loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config file could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "cannot parse '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_carry_the_raw_facts() {
        let err = ValidationError::TooLarge {
            path: PathBuf::from("big.pbix"),
            size: 300,
            max_size: 200,
        };
        let text = err.to_string();
        assert!(text.contains("big.pbix"));
        assert!(text.contains("300"));
        assert!(text.contains("200"));
    }

    #[test]
    fn top_level_errors_prefix_the_subsystem() {
        let err = AnalyzerError::Analysis(AnalysisError::WorkerFailed {
            message: "channel closed".to_string(),
        });
        assert_eq!(err.to_string(), "Analysis error: worker failed: channel closed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
