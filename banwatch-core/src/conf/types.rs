use crate::report::ReportLayout;
use crate::stats::DEFAULT_TOP_N;
use crate::tail::{MISSING_FILE_RETRY, POLL_INTERVAL, READ_ERROR_BACKOFF, STOP_TIMEOUT, TailSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_PATH: &str = "/var/log/fail2ban.log";
pub const DEFAULT_OUTPUT_DIR: &str = "results";
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// fail2ban log to follow.
    pub log_path: PathBuf,

    /// Seconds between status reports and periodic exports.
    pub interval_secs: u64,

    /// Destination for exported snapshots; created if absent.
    pub output_dir: PathBuf,

    pub top_n: usize,
    pub recent_hours: usize,
    pub chart_width: usize,

    pub tail: TailConfig,
    pub logging: LoggingConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            interval_secs: DEFAULT_INTERVAL_SECS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            top_n: DEFAULT_TOP_N,
            recent_hours: ReportLayout::default().recent_hours,
            chart_width: ReportLayout::default().chart_width,
            tail: TailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MonitorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn report_layout(&self) -> ReportLayout {
        ReportLayout {
            recent_hours: self.recent_hours,
            chart_width: self.chart_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TailConfig {
    pub poll_interval_ms: u64,
    pub missing_file_retry_ms: u64,
    pub error_backoff_ms: u64,
    pub stop_timeout_ms: u64,
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL.as_millis() as u64,
            missing_file_retry_ms: MISSING_FILE_RETRY.as_millis() as u64,
            error_backoff_ms: READ_ERROR_BACKOFF.as_millis() as u64,
            stop_timeout_ms: STOP_TIMEOUT.as_millis() as u64,
        }
    }
}

impl TailConfig {
    pub fn settings(&self) -> TailSettings {
        TailSettings {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            missing_file_retry: Duration::from_millis(self.missing_file_retry_ms),
            error_backoff: Duration::from_millis(self.error_backoff_ms),
            stop_timeout: Duration::from_millis(self.stop_timeout_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,

    /// Also write JSON diagnostics to `banwatch.log` here.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}
