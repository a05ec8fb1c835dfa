mod check;
mod dump;

use crate::cli::ConfigArgs;
use clap::Subcommand;

pub use check::*;
pub use dump::*;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print resolved configuration
    Dump {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { config } => check(&config),
        ConfigCmd::Dump { config, json, yaml } => dump(&config, json, yaml),
    }
}
