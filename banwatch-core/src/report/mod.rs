//! Console rendering of summaries.
//!
//! Renderers build a `String`; callers decide where it goes.

mod chart;
mod render;


pub use chart::{bar, render_hourly_chart, render_recent_hours};
pub use render::{ReportLayout, render_final, render_status};
