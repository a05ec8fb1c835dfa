use crate::cli::ConfigArgs;
use crate::conf::{ConfigError, MonitorConfig, load_config};
use owo_colors::OwoColorize;

pub fn check(args: &ConfigArgs) -> anyhow::Result<()> {
    match load_config(args.config.as_deref(), &args.overrides()) {
        Ok(cfg) => {
            print!("{}", check_summary(&cfg));
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

pub fn check_summary(cfg: &MonitorConfig) -> String {
    let tick = "✔".green().to_string();
    let mut out = String::new();

    out.push_str(&format!("{tick} Config loaded successfully\n"));
    out.push_str(&format!("{tick} log: {}\n", cfg.log_path.display()));
    out.push_str(&format!("{tick} reporting every {}s\n", cfg.interval_secs));
    out.push_str(&format!("{tick} output: {}\n", cfg.output_dir.display()));
    if !cfg.log_path.exists() {
        out.push_str(&format!(
            "{} log file does not exist yet; the monitor will wait for it\n",
            "!".yellow()
        ));
    }
    out
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{} {err}", "✘".red());
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Parse { .. } => Some(
            "Config files use HCL attribute syntax.\n\
             \n\
             Example:\n\
             \n\
             log_path      = \"/var/log/fail2ban.log\"\n\
             interval_secs = 60\n\
             \n\
             tail {\n\
             \x20 poll_interval_ms = 100\n\
             }",
        ),
        ConfigError::Invalid {
            field: "logging.level",
            ..
        } => Some("Use one of: trace, debug, info, warn, error."),
        ConfigError::Invalid { .. } => {
            Some("Intervals, counts, and widths must be positive; paths must not be empty.")
        }
        ConfigError::ReadFile { .. } => None,
    }
}
