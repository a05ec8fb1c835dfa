pub mod logfile;
pub mod tracing;
pub mod wait;

pub use logfile::{FAST_TAIL, LogFile, ban_line, detection_line, unban_line};
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
pub use wait::eventually;
