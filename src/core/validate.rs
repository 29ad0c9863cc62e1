// PBIX Analyzer - core/validate.rs
//
// Client-side upload validation: accepted extension, size ceiling,
// regular-file check. The only gate between a picked path and the
// simulated analysis pipeline.

use crate::core::model::SelectedFile;
use crate::util::constants;
use crate::util::error::ValidationError;
use std::path::Path;

/// Validation limits. Defaults mirror the production ceiling (200 MB, .pbix);
/// tests override them to exercise the rejection paths with small fixtures.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum accepted file size in bytes (inclusive).
    pub max_size_bytes: u64,

    /// Accepted extension, without the dot, compared case-insensitively.
    pub accepted_extension: &'static str,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: constants::MAX_UPLOAD_BYTES,
            accepted_extension: constants::ACCEPTED_EXTENSION,
        }
    }
}

/// Validate a picked path against the accepted type and size ceiling.
///
/// Order matters for the user-visible message: a missing path or wrong
/// extension is an invalid-type rejection; only a readable .pbix file can
/// be rejected as too large. A size exactly at the ceiling is accepted.
pub fn validate_selection(
    path: &Path,
    config: &ValidationConfig,
) -> Result<SelectedFile, ValidationError> {
    let extension_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(config.accepted_extension));

    if !extension_ok {
        return Err(ValidationError::InvalidType {
            path: path.to_path_buf(),
        });
    }

    // A directory named something.pbix, or a dangling path, is still not an
    // acceptable file.
    let metadata = match std::fs::metadata(path) {
        Ok(m) if m.is_file() => m,
        _ => {
            return Err(ValidationError::InvalidType {
                path: path.to_path_buf(),
            });
        }
    };

    let size = metadata.len();
    if size > config.max_size_bytes {
        return Err(ValidationError::TooLarge {
            path: path.to_path_buf(),
            size,
            max_size: config.max_size_bytes,
        });
    }

    Ok(SelectedFile {
        path: path.to_path_buf(),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn small_config(max: u64) -> ValidationConfig {
        ValidationConfig {
            max_size_bytes: max,
            ..Default::default()
        }
    }

    #[test]
    fn accepts_pbix_under_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pbix");
        fs::write(&path, b"stub").unwrap();

        let selected = validate_selection(&path, &small_config(1024)).unwrap();
        assert_eq!(selected.path, path);
        assert_eq!(selected.size, 4);
    }

    #[test]
    fn accepts_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("REPORT.PBIX");
        fs::write(&path, b"stub").unwrap();

        assert!(validate_selection(&path, &ValidationConfig::default()).is_ok());
    }

    #[test]
    fn size_at_limit_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edge.pbix");
        fs::write(&path, vec![0u8; 16]).unwrap();

        assert!(validate_selection(&path, &small_config(16)).is_ok());
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.pbix");
        fs::write(&path, vec![0u8; 17]).unwrap();

        let err = validate_selection(&path, &small_config(16)).unwrap_err();
        assert!(
            matches!(err, ValidationError::TooLarge { size: 17, max_size: 16, .. }),
            "expected TooLarge, got {err:?}"
        );
    }

    #[test]
    fn rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, b"a,b").unwrap();

        let err = validate_selection(&path, &ValidationConfig::default()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { .. }));
    }

    #[test]
    fn rejects_missing_path_and_directory() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.pbix");
        assert!(matches!(
            validate_selection(&missing, &ValidationConfig::default()),
            Err(ValidationError::InvalidType { .. })
        ));

        let subdir = dir.path().join("folder.pbix");
        fs::create_dir(&subdir).unwrap();
        assert!(matches!(
            validate_selection(&subdir, &ValidationConfig::default()),
            Err(ValidationError::InvalidType { .. })
        ));
    }
}
