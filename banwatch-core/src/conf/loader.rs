use crate::conf::error::ConfigError;
use crate::conf::types::MonitorConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::{Path, PathBuf};

/// Values given on the command line; `None` leaves the file/default value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub log_path: Option<PathBuf>,
    pub interval_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    fn apply(&self, cfg: &mut MonitorConfig) {
        if let Some(log_path) = &self.log_path {
            cfg.log_path = log_path.clone();
        }
        if let Some(interval) = self.interval_secs {
            cfg.interval_secs = interval;
        }
        if let Some(output_dir) = &self.output_dir {
            cfg.output_dir = output_dir.clone();
        }
    }
}

pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<MonitorConfig, ConfigError> {
    let mut cfg = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
            parse_config(&text, path)?
        }
        None => MonitorConfig::default(),
    };

    overrides.apply(&mut cfg);
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Parse HCL text; `origin` is only used in error messages.
pub fn parse_config(text: &str, origin: &Path) -> Result<MonitorConfig, ConfigError> {
    hcl::from_str(text).map_err(|e| ConfigError::parse(origin, e))
}
