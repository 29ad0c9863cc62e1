// PBIX Analyzer - app/analysis.rs
//
// Simulated analysis lifecycle. Drives the progress indicator on a
// background thread, sending progress messages to the UI thread via
// an mpsc channel.
//
// Architecture:
//   - `AnalysisManager` lives on the UI thread; `run_analysis` runs on a
//     background thread.
//   - An `Arc<AtomicBool>` cancel flag allows the UI to stop the run
//     cooperatively.
//   - All cross-thread communication is via `AnalysisProgress` messages.
//
// The worker is a stub: no file content is read. Progress advances by a
// random increment each tick, capped at PROGRESS_PRE_COMPLETION_CAP until
// the simulated completion delay elapses, then jumps to 100 alongside a
// `Completed` message carrying mock counters.

use crate::core::model::{AnalysisProgress, AnalysisReport, SelectedFile};
use crate::util::constants;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

// =============================================================================
// AnalysisConfig
// =============================================================================

/// Timing parameters for the simulated analysis.
///
/// Defaults mirror the production behaviour (500 ms ticks, 3 s total);
/// tests shrink the delays to keep runs fast.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Interval between progress ticks.
    pub tick_interval: Duration,

    /// Total simulated duration before results are produced.
    pub completion_delay: Duration,

    /// Upper bound on a single random increment (percent).
    pub max_increment: f32,

    /// Percent ceiling until the completion delay elapses.
    pub pre_completion_cap: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(constants::PROGRESS_TICK_MS),
            completion_delay: Duration::from_millis(constants::ANALYSIS_DELAY_MS),
            max_increment: constants::PROGRESS_MAX_INCREMENT,
            pre_completion_cap: constants::PROGRESS_PRE_COMPLETION_CAP,
        }
    }
}

// =============================================================================
// AnalysisManager
// =============================================================================

/// Manages a simulated analysis on a background thread.
pub struct AnalysisManager {
    /// Channel receiver for the UI to poll progress messages.
    pub progress_rx: Option<mpsc::Receiver<AnalysisProgress>>,

    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl AnalysisManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            cancel_flag: None,
        }
    }

    /// Start a simulated analysis of `file`.
    ///
    /// Spawns a background thread immediately; progress is sent over the
    /// channel. If an analysis is already running it is cancelled first.
    pub fn start(&mut self, file: SelectedFile, config: AnalysisConfig) {
        self.cancel();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        std::thread::spawn(move || {
            run_analysis(file, config, tx, cancel);
        });

        tracing::info!("Analysis started");
    }

    /// Request cancellation of the running analysis.
    /// The background thread will send `AnalysisProgress::Cancelled` and exit.
    pub fn cancel(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
        }
        self.cancel_flag = None;
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<AnalysisProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for AnalysisManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background worker
// =============================================================================

/// Simulated analysis pipeline: timed progress ticks, then mock results.
///
/// Runs on a background thread. Sends `AnalysisProgress` messages to `tx`.
/// Checks `cancel` before every tick.
fn run_analysis(
    file: SelectedFile,
    config: AnalysisConfig,
    tx: mpsc::Sender<AnalysisProgress>,
    cancel: Arc<AtomicBool>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return; // Receiver dropped (UI closed); exit quietly.
            }
        };
    }

    macro_rules! check_cancel {
        () => {
            if cancel.load(Ordering::SeqCst) {
                send!(AnalysisProgress::Cancelled);
                return;
            }
        };
    }

    tracing::debug!(
        file = %file.path.display(),
        size = file.size,
        "Simulated analysis worker running"
    );

    send!(AnalysisProgress::Started);

    let start = Instant::now();
    let mut rng = rand::thread_rng();
    let mut percent: f32 = 0.0;

    // Cosmetic progress: advance by a random increment each tick, never past
    // the cap, until the simulated delay has fully elapsed.
    while start.elapsed() < config.completion_delay {
        check_cancel!();

        let remaining = config.completion_delay.saturating_sub(start.elapsed());
        std::thread::sleep(config.tick_interval.min(remaining));

        check_cancel!();

        if start.elapsed() >= config.completion_delay {
            break;
        }

        let increment = rng.gen_range(0.0..config.max_increment);
        percent = (percent + increment).min(config.pre_completion_cap);
        send!(AnalysisProgress::Tick { percent });
    }

    check_cancel!();

    let report = AnalysisReport::mock(&mut rng);

    send!(AnalysisProgress::Tick { percent: 100.0 });
    send!(AnalysisProgress::Completed { report });

    tracing::info!(
        tables = report.tables,
        measures = report.measures,
        columns = report.columns,
        relationships = report.relationships,
        duration_ms = start.elapsed().as_millis() as u64,
        "Simulated analysis complete"
    );
}
