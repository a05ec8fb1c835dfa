use crate::tail::constants::{MISSING_FILE_RETRY, POLL_INTERVAL, READ_ERROR_BACKOFF, STOP_TIMEOUT};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailSettings {
    /// Delay between reads while the file exists.
    pub poll_interval: Duration,

    /// Delay between existence checks while the file is absent.
    pub missing_file_retry: Duration,

    /// Delay after a failed read before retrying.
    pub error_backoff: Duration,

    /// Upper bound `stop()` waits for the thread to exit.
    pub stop_timeout: Duration,
}

impl Default for TailSettings {
    fn default() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            missing_file_retry: MISSING_FILE_RETRY,
            error_backoff: READ_ERROR_BACKOFF,
            stop_timeout: STOP_TIMEOUT,
        }
    }
}
