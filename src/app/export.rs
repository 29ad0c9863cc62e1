// PBIX Analyzer - app/export.rs
//
// Simulated "export to Excel". The export action is an explicit placeholder
// for a future backend call: the worker reports a start, waits the simulated
// delay, and reports success. No spreadsheet is produced.
//
// Same manager shape as app::analysis — progress channel, cancel flag,
// non-blocking poll — so the UI treats both workers identically.

use crate::core::model::ExportProgress;
use crate::util::constants;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// Timing parameters for the simulated export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Simulated duration between the start and success notices.
    pub delay: Duration,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(constants::EXPORT_DELAY_MS),
        }
    }
}

/// Manages a simulated export on a background thread.
pub struct ExportManager {
    /// Channel receiver for the UI to poll progress messages.
    pub progress_rx: Option<mpsc::Receiver<ExportProgress>>,

    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl ExportManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            cancel_flag: None,
        }
    }

    /// Start a simulated export. A running export is cancelled first.
    pub fn start(&mut self, config: ExportConfig) {
        self.cancel();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        std::thread::spawn(move || {
            run_export(config, tx, cancel);
        });

        tracing::info!("Export started");
    }

    /// Request cancellation of the running export. The worker exits quietly;
    /// no completion notice is sent.
    pub fn cancel(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
        }
        self.cancel_flag = None;
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<ExportProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulated export: start notice, cancel-aware delay, success notice.
fn run_export(config: ExportConfig, tx: mpsc::Sender<ExportProgress>, cancel: Arc<AtomicBool>) {
    if tx.send(ExportProgress::Started).is_err() {
        return;
    }

    // Sleep in slices so cancellation takes effect promptly.
    let slice = Duration::from_millis(constants::CANCEL_CHECK_INTERVAL_MS);
    let mut remaining = config.delay;
    while !remaining.is_zero() {
        if cancel.load(Ordering::SeqCst) {
            tracing::debug!("Export cancelled");
            return;
        }
        let step = slice.min(remaining);
        std::thread::sleep(step);
        remaining = remaining.saturating_sub(step);
    }

    if cancel.load(Ordering::SeqCst) {
        return;
    }

    let _ = tx.send(ExportProgress::Completed);
    tracing::info!("Simulated export complete");
}
