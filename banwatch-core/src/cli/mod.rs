pub mod config;
mod replay;
mod run;


use crate::conf::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use replay::replay;
pub use run::run;

#[derive(Parser, Debug)]
#[command(
    name = "banwatch",
    version,
    about = "Banwatch: live fail2ban log analytics",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Settings for `run` when no subcommand is given
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl Cli {
    /// The subcommand to execute; a bare invocation means `run`.
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or(Command::Run(RunArgs { config: self.config }))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Follow the fail2ban log and report live (default)
    Run(RunArgs),

    /// Analyze a complete log file offline
    Replay(ReplayArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: config::ConfigCmd,
    },
}

impl Command {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self {
            Command::Run(args) => run(args),
            Command::Replay(args) => replay(args),
            Command::Config { cmd } => config::run(cmd),
        }
    }
}

/// Config file location plus per-field command-line overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to an HCL config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// fail2ban log file to follow
    #[arg(long = "log", value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Seconds between status reports
    #[arg(long = "interval", value_name = "SECS")]
    pub interval_secs: Option<u64>,

    /// Directory for exported snapshots
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            log_path: self.log_path.clone(),
            interval_secs: self.interval_secs,
            output_dir: self.output_dir.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReplayArgs {
    /// Log file to read; stdin when omitted
    pub file: Option<PathBuf>,

    /// Write JSON and CSV snapshots to the output directory
    #[arg(long)]
    pub export: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}
