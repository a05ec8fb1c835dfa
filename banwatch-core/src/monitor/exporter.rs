use crate::export::{ExportFormat, ExportPaths, file_stamp, write_snapshot};
use crate::stats::{AggregateStore, StatsSnapshot};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTrigger {
    /// Report cadence: timestamped JSON plus the rolling "latest" JSON.
    Periodic,
    /// Shutdown or explicit request: timestamped JSON and CSV, plus "latest".
    Final,
}

/// Writes snapshot files into the output directory.
#[derive(Debug, Clone)]
pub struct SnapshotExporter {
    paths: ExportPaths,
}

impl SnapshotExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            paths: ExportPaths::new(output_dir),
        }
    }

    pub fn output_dir(&self) -> &Path {
        self.paths.dir()
    }

    /// Take one snapshot and write every file `trigger` calls for.
    ///
    /// Failures are logged per file and do not stop the remaining files; the
    /// next trigger simply tries again. The snapshot is returned so callers
    /// can render the same state they exported.
    pub fn export(&self, store: &AggregateStore, trigger: ExportTrigger) -> StatsSnapshot {
        let snapshot = store.detailed_snapshot();
        let stamp = file_stamp(snapshot.generated_at);

        let mut targets = vec![
            (ExportFormat::Json, self.paths.stats(&stamp)),
            (ExportFormat::Json, self.paths.latest_stats()),
        ];
        if trigger == ExportTrigger::Final {
            targets.push((ExportFormat::Csv, self.paths.banned(&stamp)));
        }

        for (format, path) in targets {
            if let Err(e) = write_snapshot(&snapshot, format, &path) {
                tracing::error!(
                    error = %e,
                    path = %path.display(),
                    ?trigger,
                    "export failed; will retry on next trigger"
                );
            }
        }

        snapshot
    }
}
