use crate::cli::RunArgs;
use crate::conf::load_config;
use crate::logging::init_logging;
use crate::monitor::{ShutdownFlag, run_monitor};
use anyhow::Context;

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.config.as_deref(), &args.config.overrides())?;
    let _guard = init_logging(&cfg.logging)?;

    let shutdown = ShutdownFlag::install().context("failed to install signal handler")?;

    run_monitor(&cfg, &shutdown)?;
    Ok(())
}
