//! Snapshot exporters.
//!
//! A [`StatsSnapshot`](crate::stats::StatsSnapshot) is rendered to bytes in
//! memory and then written through a temporary sibling file that is renamed
//! into place, so readers of a rolling file never see a partial document.

mod csv;
mod error;
mod json;
mod naming;
mod write;


pub use error::ExportError;
pub use naming::{ExportPaths, file_stamp};
pub use write::{ExportFormat, render_snapshot, write_snapshot};
