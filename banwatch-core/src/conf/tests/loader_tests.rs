use crate::conf::{ConfigError, ConfigOverrides, MonitorConfig, load_config, parse_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn defaults_without_file() {
    let cfg = load_config(None, &ConfigOverrides::default()).unwrap();

    assert_eq!(cfg, MonitorConfig::default());
    assert_eq!(cfg.log_path, PathBuf::from("/var/log/fail2ban.log"));
    assert_eq!(cfg.interval(), Duration::from_secs(60));
    assert_eq!(cfg.top_n, 10);
    assert_eq!(cfg.tail.settings().poll_interval, Duration::from_millis(100));
}

#[test]
fn parses_hcl_with_blocks() {
    let text = r#"
        log_path      = "/tmp/f2b.log"
        interval_secs = 15
        output_dir    = "/tmp/out"

        tail {
          poll_interval_ms = 250
        }

        logging {
          level   = "debug"
          log_dir = "/tmp/logs"
        }
    "#;

    let cfg = parse_config(text, Path::new("banwatch.hcl")).unwrap();

    assert_eq!(cfg.log_path, PathBuf::from("/tmp/f2b.log"));
    assert_eq!(cfg.interval_secs, 15);
    assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(cfg.tail.poll_interval_ms, 250);
    assert_eq!(cfg.tail.error_backoff_ms, 5000);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.log_dir, Some(PathBuf::from("/tmp/logs")));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = parse_config("log_pth = \"/x\"", Path::new("banwatch.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn overrides_beat_file_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("banwatch.hcl");
    fs::write(&path, "interval_secs = 30\nlog_path = \"/from/file.log\"\n").unwrap();

    let overrides = ConfigOverrides {
        interval_secs: Some(5),
        ..Default::default()
    };
    let cfg = load_config(Some(&path), &overrides).unwrap();

    assert_eq!(cfg.interval_secs, 5);
    assert_eq!(cfg.log_path, PathBuf::from("/from/file.log"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.hcl");

    let err = load_config(Some(&path), &ConfigOverrides::default()).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn zero_interval_is_invalid() {
    let overrides = ConfigOverrides {
        interval_secs: Some(0),
        ..Default::default()
    };

    let err = load_config(None, &overrides).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "interval_secs",
            ..
        }
    ));
}

#[test]
fn unknown_log_level_is_invalid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("banwatch.hcl");
    fs::write(&path, "logging {\n  level = \"loud\"\n}\n").unwrap();

    let err = load_config(Some(&path), &ConfigOverrides::default()).unwrap_err();

    assert!(err.to_string().contains("logging.level"));
}
