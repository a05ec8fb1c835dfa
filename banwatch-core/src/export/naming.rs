use crate::export::ExportFormat;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

const STATS_PREFIX: &str = "fail2ban_stats";
const BANNED_PREFIX: &str = "banned_ips";
const LATEST_SUFFIX: &str = "latest";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn file_stamp(now: DateTime<Local>) -> String {
    now.format(STAMP_FORMAT).to_string()
}

/// File names inside the output directory.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    dir: PathBuf,
}

impl ExportPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stats(&self, stamp: &str) -> PathBuf {
        self.file(STATS_PREFIX, stamp, ExportFormat::Json)
    }

    pub fn latest_stats(&self) -> PathBuf {
        self.file(STATS_PREFIX, LATEST_SUFFIX, ExportFormat::Json)
    }

    pub fn banned(&self, stamp: &str) -> PathBuf {
        self.file(BANNED_PREFIX, stamp, ExportFormat::Csv)
    }

    fn file(&self, prefix: &str, suffix: &str, format: ExportFormat) -> PathBuf {
        self.dir
            .join(format!("{prefix}_{suffix}.{}", format.extension()))
    }
}
