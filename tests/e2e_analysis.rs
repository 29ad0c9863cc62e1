// PBIX Analyzer - tests/e2e_analysis.rs
//
// End-to-end tests for the selection and simulated-analysis pipeline.
//
// These tests exercise the real filesystem and real background threads —
// no mocks, no stubs. This exercises the full path from a picked path on
// disk, through validation, to the progress messages and mock report the
// analysis worker streams back to the UI thread.

use pbix_analyzer::app::analysis::{AnalysisConfig, AnalysisManager};
use pbix_analyzer::app::export::{ExportConfig, ExportManager};
use pbix_analyzer::core::i18n::{tr, Language, TextKey};
use pbix_analyzer::core::model::{AnalysisProgress, ExportProgress, SelectedFile, ThemeMode};
use pbix_analyzer::core::validate::{validate_selection, ValidationConfig};
use pbix_analyzer::util::constants;
use pbix_analyzer::util::error::ValidationError;
use std::fs;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

/// Write a .pbix fixture of the given size into `dir` and return its path.
fn pbix_fixture(dir: &tempfile::TempDir, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, vec![0u8; size]).unwrap();
    path
}

/// Fast timing parameters so worker tests finish in well under a second.
fn fast_analysis_config() -> AnalysisConfig {
    AnalysisConfig {
        tick_interval: Duration::from_millis(10),
        completion_delay: Duration::from_millis(120),
        ..Default::default()
    }
}

/// Drain the manager until the predicate matches a message or the timeout
/// expires. Returns every message received.
fn collect_until<F>(manager: &AnalysisManager, timeout: Duration, done: F) -> Vec<AnalysisProgress>
where
    F: Fn(&AnalysisProgress) -> bool,
{
    let deadline = Instant::now() + timeout;
    let mut messages = Vec::new();
    while Instant::now() < deadline {
        for msg in manager.poll_progress() {
            let finished = done(&msg);
            messages.push(msg);
            if finished {
                return messages;
            }
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    messages
}

// =============================================================================
// Validation E2E
// =============================================================================

/// A file above the size ceiling is rejected as too large and never
/// becomes a selection.
#[test]
fn e2e_oversized_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = pbix_fixture(&dir, "big.pbix", 64);

    let config = ValidationConfig {
        max_size_bytes: 63,
        ..Default::default()
    };
    let result = validate_selection(&path, &config);
    assert!(
        matches!(
            result,
            Err(ValidationError::TooLarge {
                size: 64,
                max_size: 63,
                ..
            })
        ),
        "expected TooLarge, got {result:?}"
    );
}

/// A non-.pbix file is rejected as an invalid type.
#[test]
fn e2e_non_pbix_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");
    fs::write(&path, b"not a pbix").unwrap();

    let result = validate_selection(&path, &ValidationConfig::default());
    assert!(
        matches!(result, Err(ValidationError::InvalidType { .. })),
        "expected InvalidType, got {result:?}"
    );
}

/// A valid .pbix under the ceiling validates to exactly that file, once.
#[test]
fn e2e_valid_pbix_is_selected() {
    let dir = tempfile::tempdir().unwrap();
    let path = pbix_fixture(&dir, "sales.pbix", 1024);

    let selected = validate_selection(&path, &ValidationConfig::default()).unwrap();
    assert_eq!(selected.path, path);
    assert_eq!(selected.size, 1024);
    assert_eq!(selected.display_name(), "sales.pbix");
}

// =============================================================================
// Analysis lifecycle E2E
// =============================================================================

/// A full run: Started, monotone capped ticks, a final 100% tick, then
/// Completed with counters inside the mock ranges.
#[test]
fn e2e_analysis_progress_is_monotone_capped_and_completes() {
    let dir = tempfile::tempdir().unwrap();
    let path = pbix_fixture(&dir, "model.pbix", 256);
    let file = validate_selection(&path, &ValidationConfig::default()).unwrap();

    let mut manager = AnalysisManager::new();
    manager.start(file, fast_analysis_config());

    let messages = collect_until(&manager, Duration::from_secs(5), |msg| {
        matches!(msg, AnalysisProgress::Completed { .. })
    });

    assert!(
        matches!(messages.first(), Some(AnalysisProgress::Started)),
        "first message should be Started, got {messages:?}"
    );

    let ticks: Vec<f32> = messages
        .iter()
        .filter_map(|m| match m {
            AnalysisProgress::Tick { percent } => Some(*percent),
            _ => None,
        })
        .collect();
    assert!(!ticks.is_empty(), "expected at least one tick");

    // Monotone, bounded, and capped until the final jump to 100.
    let mut previous = 0.0f32;
    for &percent in &ticks {
        assert!(
            (0.0..=100.0).contains(&percent),
            "percent {percent} out of [0, 100]"
        );
        assert!(
            percent >= previous,
            "progress went backwards: {previous} -> {percent}"
        );
        previous = percent;
    }
    for &percent in &ticks[..ticks.len() - 1] {
        assert!(
            percent <= constants::PROGRESS_PRE_COMPLETION_CAP,
            "pre-completion tick {percent} exceeds the cap"
        );
    }
    assert_eq!(*ticks.last().unwrap(), 100.0);

    let report = match messages.last() {
        Some(AnalysisProgress::Completed { report }) => *report,
        other => panic!("expected Completed last, got {other:?}"),
    };
    assert!(constants::MOCK_TABLES.contains(&report.tables));
    assert!(constants::MOCK_MEASURES.contains(&report.measures));
    assert!(constants::MOCK_COLUMNS.contains(&report.columns));
    assert!(constants::MOCK_RELATIONSHIPS.contains(&report.relationships));
}

/// Cancelling a running analysis yields Cancelled and never Completed.
#[test]
fn e2e_cancelled_analysis_never_completes() {
    let dir = tempfile::tempdir().unwrap();
    let path = pbix_fixture(&dir, "slow.pbix", 256);
    let file = validate_selection(&path, &ValidationConfig::default()).unwrap();

    let mut manager = AnalysisManager::new();
    manager.start(
        file,
        AnalysisConfig {
            tick_interval: Duration::from_millis(10),
            completion_delay: Duration::from_secs(30),
            ..Default::default()
        },
    );

    // Let a few ticks through, then cancel.
    std::thread::sleep(Duration::from_millis(50));
    manager.cancel();

    let messages = collect_until(&manager, Duration::from_secs(5), |msg| {
        matches!(msg, AnalysisProgress::Cancelled)
    });

    assert!(
        messages
            .iter()
            .any(|m| matches!(m, AnalysisProgress::Cancelled)),
        "expected Cancelled, got {messages:?}"
    );
    assert!(
        !messages
            .iter()
            .any(|m| matches!(m, AnalysisProgress::Completed { .. })),
        "cancelled run must not complete: {messages:?}"
    );
}

/// Starting a new analysis cancels the previous run's flag; the fresh
/// channel only carries the new run's messages.
#[test]
fn e2e_restart_replaces_previous_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = pbix_fixture(&dir, "twice.pbix", 128);
    let file = validate_selection(&path, &ValidationConfig::default()).unwrap();

    let mut manager = AnalysisManager::new();
    manager.start(
        file.clone(),
        AnalysisConfig {
            tick_interval: Duration::from_millis(10),
            completion_delay: Duration::from_secs(30),
            ..Default::default()
        },
    );
    manager.start(file, fast_analysis_config());

    let messages = collect_until(&manager, Duration::from_secs(5), |msg| {
        matches!(msg, AnalysisProgress::Completed { .. })
    });
    assert!(
        messages
            .iter()
            .any(|m| matches!(m, AnalysisProgress::Completed { .. })),
        "second run should complete, got {messages:?}"
    );
    assert!(
        !messages
            .iter()
            .any(|m| matches!(m, AnalysisProgress::Cancelled)),
        "the replaced run's messages must not leak into the new channel"
    );
}

// =============================================================================
// Export lifecycle E2E
// =============================================================================

/// The simulated export reports a start and, after the delay, completion.
#[test]
fn e2e_export_reports_start_then_completion() {
    let mut manager = ExportManager::new();
    manager.start(ExportConfig {
        delay: Duration::from_millis(30),
    });

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut messages = Vec::new();
    while Instant::now() < deadline {
        for msg in manager.poll_progress() {
            messages.push(msg);
        }
        if messages
            .iter()
            .any(|m| matches!(m, ExportProgress::Completed))
        {
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    assert!(
        matches!(messages.first(), Some(ExportProgress::Started)),
        "expected Started first, got {messages:?}"
    );
    assert!(
        matches!(messages.last(), Some(ExportProgress::Completed)),
        "expected Completed last, got {messages:?}"
    );
}

// =============================================================================
// Localisation and theme
// =============================================================================

/// Every visible string resolves in each supported locale, and the
/// selector locales render the dictionary entries verbatim.
#[test]
fn e2e_all_locales_cover_every_string() {
    for &lang in Language::all() {
        for &key in TextKey::all() {
            assert!(!tr(key, lang).is_empty(), "missing {key:?} for {lang:?}");
        }
    }

    assert_eq!(
        tr(TextKey::UploadArea, Language::Pt),
        "Arraste e solte seu arquivo .PBIX aqui ou clique para selecionar"
    );
    assert_eq!(
        tr(TextKey::UploadArea, Language::En),
        "Drag and drop your .PBIX file here or click to select"
    );
    assert_eq!(
        tr(TextKey::UploadArea, Language::Es),
        "Arrastra y suelta tu archivo .PBIX aquí o haz clic para seleccionar"
    );
    assert_eq!(tr(TextKey::ExportExcel, Language::Pt), "Exportar para Excel");
    assert_eq!(tr(TextKey::ExportExcel, Language::En), "Export to Excel");
    assert_eq!(tr(TextKey::ExportExcel, Language::Es), "Exportar a Excel");
}

/// The theme toggle alternates between exactly two states.
#[test]
fn e2e_theme_toggle_alternates_between_two_states() {
    let start = ThemeMode::Dark;
    let once = start.toggled();
    let twice = once.toggled();

    assert_eq!(once, ThemeMode::Light);
    assert_eq!(twice, start);
}

// =============================================================================
// Display helpers
// =============================================================================

/// Selected-file display values match what the upload widget renders.
#[test]
fn e2e_selected_file_display() {
    let file = SelectedFile {
        path: std::path::PathBuf::from("/data/finance.pbix"),
        size: 3 * 1024 * 1024,
    };
    assert_eq!(file.display_name(), "finance.pbix");
    assert!((file.size_mb() - 3.0).abs() < f64::EPSILON);
}
