use crate::conf::MonitorConfig;
use crate::monitor::constants::SHUTDOWN_CHECK_INTERVAL;
use crate::monitor::exporter::{ExportTrigger, SnapshotExporter};
use crate::monitor::shutdown::ShutdownFlag;
use crate::report::{ReportLayout, render_final, render_status};
use crate::stats::AggregateStore;
use crate::tail::Tailer;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Elapsed,
    Shutdown,
}

/// Sleep for `interval`, returning early once shutdown is requested.
pub fn wait_for_tick(shutdown: &ShutdownFlag, interval: Duration) -> Tick {
    let deadline = Instant::now() + interval;

    loop {
        if shutdown.is_triggered() {
            return Tick::Shutdown;
        }
        let now = Instant::now();
        if now >= deadline {
            return Tick::Elapsed;
        }
        thread::sleep(SHUTDOWN_CHECK_INTERVAL.min(deadline - now));
    }
}

/// Monitor until `shutdown` is triggered, then export and report the final state.
///
/// Returns the store so callers can inspect what was collected.
pub fn run_monitor(config: &MonitorConfig, shutdown: &ShutdownFlag) -> Result<Arc<AggregateStore>> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    tracing::info!(
        log_path = %config.log_path.display(),
        interval_secs = config.interval_secs,
        output_dir = %config.output_dir.display(),
        "starting fail2ban monitor"
    );

    let store = Arc::new(AggregateStore::new(config.top_n));
    let mut tailer = Tailer::start(&config.log_path, config.tail.settings(), store.clone())?;
    let exporter = SnapshotExporter::new(&config.output_dir);
    let layout = config.report_layout();

    while wait_for_tick(shutdown, config.interval()) == Tick::Elapsed {
        let snapshot = exporter.export(&store, ExportTrigger::Periodic);
        emit(&render_status(&snapshot.summary, &layout));
    }

    emit("\nShutdown requested. Saving final results...\n");
    tailer.stop();
    finish(&store, &exporter, &layout)?;

    Ok(store)
}

fn finish(store: &AggregateStore, exporter: &SnapshotExporter, layout: &ReportLayout) -> Result<()> {
    let snapshot = exporter.export(store, ExportTrigger::Final);

    emit(&render_final(&snapshot.summary, layout)?);
    emit(&format!(
        "\nMonitoring completed. Final results saved to {}\n",
        exporter.output_dir().display()
    ));

    tracing::info!(
        total_bans = snapshot.summary.total_bans,
        unique_addresses = snapshot.summary.unique_addresses,
        "monitor stopped"
    );
    Ok(())
}

fn emit(text: &str) {
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}
