pub mod cli;
pub mod conf;
pub mod export;
pub mod extract;
pub mod logging;
pub mod monitor;
pub mod report;
pub mod stats;
pub mod tail;
