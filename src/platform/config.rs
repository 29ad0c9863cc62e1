// PBIX Analyzer - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. The config file is only ever read: nothing
// in this application persists state between sessions.

use crate::core::i18n::Language;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PBIX Analyzer configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/pbixanalyzer/ or
    /// %APPDATA%\PbixAnalyzer\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();

            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");

            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[analysis]` section.
    pub analysis: AnalysisSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Interface locale: "pt", "en", or "es".
    pub language: Option<String>,
}

/// `[analysis]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Interval between simulated progress ticks (ms).
    pub progress_tick_ms: Option<u64>,
    /// Simulated analysis duration (ms).
    pub completion_delay_ms: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Startup interface locale.
    pub language: Language,

    // -- Analysis timing --
    /// Interval between simulated progress ticks (ms).
    pub progress_tick_ms: u64,
    /// Simulated analysis duration (ms).
    pub completion_delay_ms: u64,

    // -- Logging --
    /// Logging level string (applied during tracing init).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: Language::Pt,
            progress_tick_ms: constants::PROGRESS_TICK_MS,
            completion_delay_ms: constants::ANALYSIS_DELAY_MS,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unreadable or unparseable, returns defaults
/// with an error warning -- the application still starts but the user is
/// informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw(&config_path) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("Config file ignored: {e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, mut validation_warnings) = validate(raw);
    warnings.append(&mut validation_warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

/// Read and parse a config file into its raw shape.
fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate a raw config against named constants, accumulating all warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: language --
    if let Some(ref language) = raw.ui.language {
        match Language::from_code(language) {
            Some(lang) => config.language = lang,
            None => {
                warnings.push(format!(
                    "[ui] language = \"{language}\" is not recognised. Expected \"pt\", \"en\", or \"es\". Using default (pt).",
                ));
            }
        }
    }

    // -- Analysis: progress_tick_ms --
    if let Some(tick) = raw.analysis.progress_tick_ms {
        if (constants::MIN_PROGRESS_TICK_MS..=constants::MAX_PROGRESS_TICK_MS).contains(&tick) {
            config.progress_tick_ms = tick;
        } else {
            warnings.push(format!(
                "[analysis] progress_tick_ms = {tick} is out of range ({}-{}). Using default ({}).",
                constants::MIN_PROGRESS_TICK_MS,
                constants::MAX_PROGRESS_TICK_MS,
                constants::PROGRESS_TICK_MS,
            ));
        }
    }

    // -- Analysis: completion_delay_ms --
    if let Some(delay) = raw.analysis.completion_delay_ms {
        if (constants::MIN_ANALYSIS_DELAY_MS..=constants::MAX_ANALYSIS_DELAY_MS).contains(&delay) {
            config.completion_delay_ms = delay;
        } else {
            warnings.push(format!(
                "[analysis] completion_delay_ms = {delay} is out of range ({}-{}). Using default ({}).",
                constants::MIN_ANALYSIS_DELAY_MS,
                constants::MAX_ANALYSIS_DELAY_MS,
                constants::ANALYSIS_DELAY_MS,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_absent() {
        let raw: RawConfig = toml::from_str("").unwrap();
        let (config, warnings) = validate(raw);
        assert!(warnings.is_empty());
        assert!(config.dark_mode);
        assert_eq!(config.language, Language::Pt);
        assert_eq!(config.progress_tick_ms, constants::PROGRESS_TICK_MS);
    }

    #[test]
    fn valid_values_are_applied() {
        let raw: RawConfig = toml::from_str(
            r#"
            [ui]
            theme = "light"
            language = "es"

            [analysis]
            progress_tick_ms = 250
            completion_delay_ms = 1000

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        let (config, warnings) = validate(raw);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.language, Language::Es);
        assert_eq!(config.progress_tick_ms, 250);
        assert_eq!(config.completion_delay_ms, 1000);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let raw: RawConfig = toml::from_str(
            r#"
            [ui]
            theme = "neon"
            language = "fr"

            [analysis]
            progress_tick_ms = 1
            "#,
        )
        .unwrap();

        let (config, warnings) = validate(raw);
        assert_eq!(warnings.len(), 3, "warnings: {warnings:?}");
        assert!(config.dark_mode);
        assert_eq!(config.language, Language::Pt);
        assert_eq!(config.progress_tick_ms, constants::PROGRESS_TICK_MS);
    }

    #[test]
    fn missing_file_is_first_run_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert!(config.dark_mode);
    }

    #[test]
    fn malformed_file_warns_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "[ui\ntheme=").unwrap();

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Using defaults"));
        assert_eq!(config.progress_tick_ms, constants::PROGRESS_TICK_MS);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw: Result<RawConfig, _> = toml::from_str(
            r#"
            [ui]
            theme = "dark"
            future_knob = 42

            [brand_new_section]
            x = 1
            "#,
        );
        assert!(raw.is_ok());
    }
}
