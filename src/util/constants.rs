// PBIX Analyzer - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PBIX Analyzer";

/// Application identifier used for config directories.
pub const APP_ID: &str = "PbixAnalyzer";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file name, resolved inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Upload validation limits
// =============================================================================

/// Maximum accepted file size in bytes (inclusive).
pub const MAX_UPLOAD_BYTES: u64 = 200 * 1024 * 1024; // 200 MB

/// Accepted file extension, compared case-insensitively.
pub const ACCEPTED_EXTENSION: &str = "pbix";

// =============================================================================
// Simulated analysis timing
// =============================================================================

/// Interval between progress ticks (ms).
pub const PROGRESS_TICK_MS: u64 = 500;

/// Upper bound on a single random progress increment (percent).
pub const PROGRESS_MAX_INCREMENT: f32 = 15.0;

/// Percent ceiling while the simulated completion delay is still pending.
/// Progress jumps to 100 only once the delay elapses.
pub const PROGRESS_PRE_COMPLETION_CAP: f32 = 90.0;

/// Simulated analysis duration (ms) before results are produced.
pub const ANALYSIS_DELAY_MS: u64 = 3_000;

/// How often a sleeping worker re-checks its cancel flag (ms).
pub const CANCEL_CHECK_INTERVAL_MS: u64 = 50;

/// Configurable bounds for the tick interval.
pub const MIN_PROGRESS_TICK_MS: u64 = 50;
pub const MAX_PROGRESS_TICK_MS: u64 = 5_000;

/// Configurable bounds for the simulated analysis duration.
pub const MIN_ANALYSIS_DELAY_MS: u64 = 500;
pub const MAX_ANALYSIS_DELAY_MS: u64 = 60_000;

// =============================================================================
// Simulated export timing
// =============================================================================

/// Simulated export duration (ms) between the start and success notices.
pub const EXPORT_DELAY_MS: u64 = 2_000;

// =============================================================================
// Mock result ranges (half-open, as produced by the stub analysis)
// =============================================================================

pub const MOCK_TABLES: std::ops::Range<u32> = 5..25;
pub const MOCK_MEASURES: std::ops::Range<u32> = 10..60;
pub const MOCK_COLUMNS: std::ops::Range<u32> = 50..250;
pub const MOCK_RELATIONSHIPS: std::ops::Range<u32> = 3..18;

// =============================================================================
// UI behaviour
// =============================================================================

/// How long a status notice stays visible before reverting to the idle text (ms).
pub const STATUS_NOTICE_TTL_MS: u64 = 5_000;

/// Repaint cadence while a background worker is active (ms).
pub const WORKER_REPAINT_INTERVAL_MS: u64 = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
