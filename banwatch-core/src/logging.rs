use crate::conf::LoggingConfig;
use anyhow::Context;
use std::fs;
use std::io::{self, IsTerminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

pub const LOG_FILE_NAME: &str = "banwatch.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize diagnostics output.
///
/// - `RUST_LOG` wins; otherwise the configured level applies
/// - stderr gets human-readable output on a terminal, flattened JSON otherwise
/// - with `log_dir` set, JSON lines are also appended to `banwatch.log` there
///
/// Keep the returned guard alive until exit or buffered file output is lost.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    let mut layers: Vec<BoxedLayer> = vec![stderr_layer()];

    let guard = match &cfg.log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            layers.push(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn stderr_layer() -> BoxedLayer {
    if io::stderr().is_terminal() {
        fmt::layer().with_writer(io::stderr).with_target(false).boxed()
    } else {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
            .boxed()
    }
}
