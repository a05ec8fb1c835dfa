use std::time::Duration;

pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const MISSING_FILE_RETRY: Duration = Duration::from_secs(1);
pub const READ_ERROR_BACKOFF: Duration = Duration::from_secs(5);
pub const STOP_TIMEOUT: Duration = Duration::from_secs(2);

/// Most bytes consumed in one poll; a larger backlog drains over later polls.
pub const MAX_READ_BYTES: u64 = 1024 * 1024;

/// An unterminated line longer than this is discarded.
pub const MAX_PENDING_BYTES: usize = 64 * 1024;
