use crate::extract::extract_event;
use crate::stats::AggregateStore;
use crate::tail::cursor::{PollOutcome, TailCursor};
use crate::tail::settings::TailSettings;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailState {
    Uninitialized,
    /// Positioning at end-of-file; retried while the file is unreadable.
    Seeking,
    /// File absent; re-checked until it appears, then read from its start.
    WaitingForFile,
    Polling,
    Stopped,
}

#[derive(Debug, Error)]
pub enum TailError {
    #[error("failed to spawn tail thread for {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
struct SharedState(Arc<Mutex<TailState>>);

impl SharedState {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(TailState::Uninitialized)))
    }

    fn get(&self) -> TailState {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, state: TailState) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// Handle to a running tail thread.
///
/// Dropping the handle asks the thread to stop without waiting for it.
pub struct Tailer {
    path: PathBuf,
    running: Arc<AtomicBool>,
    state: SharedState,
    skipped_existing: bool,
    stop_timeout: Duration,
    exited: Option<mpsc::Receiver<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Tailer {
    /// Begin following `path`.
    ///
    /// An existing file is positioned at its current end before this returns,
    /// so historical lines are never replayed and anything appended after
    /// `start` is seen.
    pub fn start(
        path: impl Into<PathBuf>,
        settings: TailSettings,
        store: Arc<AggregateStore>,
    ) -> Result<Self, TailError> {
        let path = path.into();
        let state = SharedState::new();
        let running = Arc::new(AtomicBool::new(true));
        let mut cursor = TailCursor::new(path.clone());

        state.set(TailState::Seeking);
        seek(&mut cursor, &state);
        let skipped_existing = cursor.seeded_at_eof();

        let (exited_tx, exited_rx) = mpsc::channel();
        let worker = TailWorker {
            cursor,
            store,
            settings,
            running: running.clone(),
            state: state.clone(),
        };

        let handle = thread::Builder::new()
            .name("banwatch-tail".into())
            .spawn(move || {
                worker.run();
                let _ = exited_tx.send(());
            })
            .map_err(|source| TailError::Spawn {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), "started monitoring");

        Ok(Self {
            path,
            running,
            state,
            skipped_existing,
            stop_timeout: settings.stop_timeout,
            exited: Some(exited_rx),
            handle: Some(handle),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> TailState {
        self.state.get()
    }

    /// Whether the file existed at start and its prior content was skipped.
    pub fn skipped_existing(&self) -> bool {
        self.skipped_existing
    }

    /// Ask the polling loop to exit and wait up to the stop timeout for it.
    ///
    /// A loop that does not confirm in time is left detached; shutdown
    /// carries on regardless.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);

        if let Some(exited) = self.exited.take() {
            match exited.recv_timeout(self.stop_timeout) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    if let Some(handle) = self.handle.take() {
                        let _ = handle.join();
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        timeout_ms = self.stop_timeout.as_millis() as u64,
                        "tail thread did not stop in time; continuing shutdown"
                    );
                    self.handle.take();
                }
            }
        }

        self.state.set(TailState::Stopped);
        tracing::info!(path = %self.path.display(), "stopped log monitoring");
    }
}

impl Drop for Tailer {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

struct TailWorker {
    cursor: TailCursor,
    store: Arc<AggregateStore>,
    settings: TailSettings,
    running: Arc<AtomicBool>,
    state: SharedState,
}

impl TailWorker {
    fn run(mut self) {
        while self.running.load(Ordering::Acquire) {
            let pause = self.step();
            self.pause(pause);
        }
        self.state.set(TailState::Stopped);
    }

    /// One iteration of the state machine; returns how long to wait before the next.
    fn step(&mut self) -> Duration {
        match self.state.get() {
            TailState::Uninitialized | TailState::Seeking => {
                match seek(&mut self.cursor, &self.state) {
                    TailState::Polling => self.settings.poll_interval,
                    TailState::WaitingForFile => self.settings.missing_file_retry,
                    _ => self.settings.error_backoff,
                }
            }
            current @ (TailState::WaitingForFile | TailState::Polling) => self.poll(current),
            TailState::Stopped => Duration::ZERO,
        }
    }

    fn poll(&mut self, current: TailState) -> Duration {
        match self.cursor.poll() {
            Ok(PollOutcome::Missing) => {
                if current == TailState::Polling {
                    tracing::warn!(
                        path = %self.cursor.path().display(),
                        "log file disappeared; waiting for it to return"
                    );
                    self.cursor.rewind();
                    self.state.set(TailState::WaitingForFile);
                }
                self.settings.missing_file_retry
            }
            Ok(PollOutcome::Lines(lines)) => {
                if current == TailState::WaitingForFile {
                    tracing::info!(path = %self.cursor.path().display(), "log file appeared");
                    self.state.set(TailState::Polling);
                }
                for line in &lines {
                    if let Some(event) = extract_event(line) {
                        self.store.record(&event);
                    }
                }
                self.settings.poll_interval
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.cursor.path().display(),
                    offset = self.cursor.offset(),
                    error = %e,
                    "error reading log file; backing off"
                );
                self.settings.error_backoff
            }
        }
    }

    /// Sleep for `total`, waking every poll interval to honour a stop request.
    fn pause(&self, total: Duration) {
        let deadline = Instant::now() + total;
        let slice = self.settings.poll_interval.max(Duration::from_millis(1));

        while self.running.load(Ordering::Acquire) {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(slice.min(deadline - now));
        }
    }
}

fn seek(cursor: &mut TailCursor, state: &SharedState) -> TailState {
    let next = match cursor.seed_to_end() {
        Ok(true) => {
            tracing::debug!(
                path = %cursor.path().display(),
                offset = cursor.offset(),
                "positioned at end of existing log"
            );
            TailState::Polling
        }
        Ok(false) => {
            tracing::info!(path = %cursor.path().display(), "log file not found; waiting for it");
            TailState::WaitingForFile
        }
        Err(e) => {
            tracing::warn!(
                path = %cursor.path().display(),
                error = %e,
                "cannot read log file size; will retry"
            );
            TailState::Seeking
        }
    };
    state.set(next);
    next
}
