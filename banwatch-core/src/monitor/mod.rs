//! Monitor orchestration.
//!
//! The tail thread feeds the store continuously. The calling thread runs the
//! report cadence and, once shutdown is requested, the final
//! stop-and-export path. Periodic and final exports share
//! [`SnapshotExporter::export`].

mod constants;
mod exporter;
mod replay;
mod run;
mod shutdown;


pub use exporter::{ExportTrigger, SnapshotExporter};
pub use replay::replay_lines;
pub use run::{Tick, run_monitor, wait_for_tick};
pub use shutdown::ShutdownFlag;
