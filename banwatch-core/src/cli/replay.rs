use crate::cli::ReplayArgs;
use crate::conf::load_config;
use crate::logging::init_logging;
use crate::monitor::{ExportTrigger, SnapshotExporter, replay_lines};
use crate::report::{render_final, render_status};
use crate::stats::AggregateStore;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{self, BufReader};

pub fn replay(args: ReplayArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.config.as_deref(), &args.config.overrides())?;
    let _guard = init_logging(&cfg.logging)?;

    let store = AggregateStore::new(cfg.top_n);

    let lines = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            replay_lines(BufReader::new(file), &store)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => replay_lines(io::stdin().lock(), &store).context("failed to read stdin")?,
    };

    tracing::info!(lines, "replay finished");

    let layout = cfg.report_layout();
    let summary = if args.export {
        fs::create_dir_all(&cfg.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                cfg.output_dir.display()
            )
        })?;
        SnapshotExporter::new(&cfg.output_dir)
            .export(&store, ExportTrigger::Final)
            .summary
    } else {
        store.snapshot()
    };

    print!("{}", render_status(&summary, &layout));
    print!("{}", render_final(&summary, &layout)?);

    Ok(())
}
