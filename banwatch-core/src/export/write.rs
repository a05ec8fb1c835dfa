use crate::export::error::ExportError;
use crate::export::{csv, json};
use crate::stats::StatsSnapshot;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Hierarchical document with every aggregate.
    Json,
    /// One row per banned address.
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

pub fn render_snapshot(
    snapshot: &StatsSnapshot,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Json => json::render(snapshot),
        ExportFormat::Csv => csv::render(snapshot),
    }
}

pub fn write_snapshot(
    snapshot: &StatsSnapshot,
    format: ExportFormat,
    destination: &Path,
) -> Result<(), ExportError> {
    let bytes = render_snapshot(snapshot, format)?;
    write_replacing(destination, &bytes)?;

    tracing::info!(
        path = %destination.display(),
        format = format.extension(),
        "statistics exported"
    );
    Ok(())
}

fn write_replacing(destination: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let tmp = temp_path(destination);

    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(ExportError::write(destination, e));
    }

    fs::rename(&tmp, destination).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ExportError::write(destination, e)
    })
}

fn temp_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    destination.with_file_name(name)
}
