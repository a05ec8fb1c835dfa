use crate::conf::error::ConfigError;
use crate::conf::types::MonitorConfig;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub fn validate_config(cfg: &MonitorConfig) -> Result<(), ConfigError> {
    if cfg.log_path.as_os_str().is_empty() {
        return Err(ConfigError::invalid("log_path", "must not be empty"));
    }

    if cfg.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::invalid("output_dir", "must not be empty"));
    }

    if cfg.interval_secs == 0 {
        return Err(ConfigError::invalid("interval_secs", "must be at least 1"));
    }

    if cfg.top_n == 0 {
        return Err(ConfigError::invalid("top_n", "must be at least 1"));
    }

    if cfg.chart_width == 0 {
        return Err(ConfigError::invalid("chart_width", "must be at least 1"));
    }

    if cfg.tail.poll_interval_ms == 0 {
        return Err(ConfigError::invalid(
            "tail.poll_interval_ms",
            "must be at least 1",
        ));
    }

    if !LEVELS.contains(&cfg.logging.level.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::invalid(
            "logging.level",
            format!(
                "'{}' is not one of {}",
                cfg.logging.level,
                LEVELS.join(", ")
            ),
        ));
    }

    Ok(())
}
