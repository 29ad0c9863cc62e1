// PBIX Analyzer - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// Everything here is transient UI-session state: nothing has identity or
// a lifecycle beyond the running process, and nothing is persisted.

use serde::Serialize;
use std::path::PathBuf;

// =============================================================================
// Selected file
// =============================================================================

/// A user selection that passed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Full path to the file.
    pub path: PathBuf,

    /// File size in bytes.
    pub size: u64,
}

impl SelectedFile {
    /// File name component for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// File size in megabytes, for display.
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }
}

// =============================================================================
// Analysis report
// =============================================================================

/// The four result counters produced when the simulated analysis resolves.
///
/// All values are randomly generated placeholders standing in for a future
/// real analysis output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct AnalysisReport {
    /// Number of tables.
    pub tables: u32,

    /// Number of measures.
    pub measures: u32,

    /// Number of columns.
    pub columns: u32,

    /// Number of relationships.
    pub relationships: u32,
}

// =============================================================================
// Theme
// =============================================================================

/// The two visual themes. The header toggle alternates between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

// =============================================================================
// Analysis progress (for UI updates)
// =============================================================================

/// Progress messages sent from the analysis worker to the UI thread.
///
/// Invariants enforced by the worker (and re-checked at the UI boundary):
/// percent is in [0, 100], non-decreasing, and stays at or below the
/// pre-completion cap until the simulated delay elapses, at which point a
/// final `Tick { percent: 100.0 }` immediately precedes `Completed`.
#[derive(Debug, Clone)]
pub enum AnalysisProgress {
    /// The worker has started.
    Started,

    /// The progress indicator advanced.
    Tick { percent: f32 },

    /// The simulated analysis resolved with mock counters.
    Completed { report: AnalysisReport },

    /// The worker failed before producing results.
    Failed { error: String },

    /// The analysis was cancelled by the user before completion.
    Cancelled,
}

// =============================================================================
// Export progress
// =============================================================================

/// Progress messages sent from the simulated export worker.
///
/// The export is an explicit placeholder: no spreadsheet is produced.
#[derive(Debug, Clone)]
pub enum ExportProgress {
    /// The simulated export has started.
    Started,

    /// The simulated export finished.
    Completed,

    /// The worker failed before reporting completion.
    Failed { error: String },
}
