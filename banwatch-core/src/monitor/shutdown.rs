use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Flag set when shutdown has been requested.
///
/// [`ShutdownFlag::install`] wires it to SIGINT and SIGTERM; the handler only
/// sets the flag, and the cadence loop performs the actual shutdown work on
/// its own thread.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    flag: Arc<AtomicBool>,
}

impl ShutdownFlag {
    /// Create a flag and register it as the process termination handler.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let shutdown = Self::manual();
        let flag = shutdown.flag.clone();

        ctrlc::set_handler(move || {
            if !flag.swap(true, Ordering::SeqCst) {
                tracing::info!("termination signal received");
            }
        })?;

        Ok(shutdown)
    }

    /// A flag with no signal handler, triggered programmatically.
    pub fn manual() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
