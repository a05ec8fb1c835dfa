use banwatch_core::tail::TailSettings;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

/// Tail cadence short enough for tests to observe appends quickly.
pub const FAST_TAIL: TailSettings = TailSettings {
    poll_interval: Duration::from_millis(10),
    missing_file_retry: Duration::from_millis(20),
    error_backoff: Duration::from_millis(50),
    stop_timeout: Duration::from_secs(2),
};

pub fn ban_line(ts: &str, jail: &str, addr: &str) -> String {
    format!("{ts} fail2ban.actions        [1234]: NOTICE  [{jail}] Ban {addr}\n")
}

pub fn unban_line(ts: &str, jail: &str, addr: &str) -> String {
    format!("{ts} fail2ban.actions        [1234]: NOTICE  [{jail}] Unban {addr}\n")
}

pub fn detection_line(ts: &str, jail: &str, addr: &str) -> String {
    format!("{ts} fail2ban.filter         [1234]: INFO    [{jail}] Found {addr} - {ts}\n")
}

/// A fail2ban-style log in its own scratch directory.
pub struct LogFile {
    dir: TempDir,
    path: PathBuf,
}

impl LogFile {
    /// Create the directory but not the log itself.
    pub fn absent() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fail2ban.log");
        Self { dir, path }
    }

    pub fn with_content(content: &str) -> Self {
        let log = Self::absent();
        fs::write(&log.path, content).unwrap();
        log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn append(&self, text: &str) {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file.flush().unwrap();
    }

    pub fn truncate(&self) {
        fs::write(&self.path, "").unwrap();
    }
}
