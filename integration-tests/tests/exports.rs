use banwatch_core::monitor::{ExportTrigger, SnapshotExporter, replay_lines};
use banwatch_core::stats::AggregateStore;
use integration_tests::harness::{LogFile, ban_line, detection_line, unban_line};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

fn sample_log() -> String {
    [
        detection_line("2024-01-01 10:00:00,000", "sshd", "1.2.3.4"),
        ban_line("2024-01-01 10:00:01,000", "sshd", "1.2.3.4"),
        ban_line("2024-01-01 10:30:00,000", "nginx", "1.2.3.4"),
        ban_line("2024-01-01 11:15:00,000", "sshd", "5.6.7.8"),
        unban_line("2024-01-01 11:20:00,000", "sshd", "1.2.3.4"),
        ban_line("2024-01-01 12:00:00,000", "postfix", "9.9.9.9"),
        "2024-01-01 12:00:01,000 fail2ban.server [1]: INFO Reloaded\n".to_string(),
    ]
    .concat()
}

fn replay(log: &LogFile) -> AggregateStore {
    let store = AggregateStore::default();
    let file = fs::File::open(log.path()).unwrap();
    replay_lines(std::io::BufReader::new(file), &store).unwrap();
    store
}

fn find(dir: &Path, prefix: &str, ext: &str) -> PathBuf {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| {
            let name = p.file_name().unwrap().to_string_lossy();
            name.starts_with(prefix) && name.ends_with(ext) && !name.contains("latest")
        })
        .unwrap_or_else(|| panic!("no {prefix}*{ext} in {}", dir.display()))
}

/// CSV rows account for every recorded ban
#[test]
fn csv_ban_counts_sum_to_total() {
    // Arrange
    let log = LogFile::with_content(&sample_log());
    let store = replay(&log);
    let out = log.dir().join("results");
    fs::create_dir_all(&out).unwrap();

    // Act
    let snapshot = SnapshotExporter::new(&out).export(&store, ExportTrigger::Final);

    // Assert
    let mut reader = csv::Reader::from_path(find(&out, "banned_ips_", ".csv")).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, vec!["Address", "Ban Count", "Jails"]);

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    let total: u64 = rows.iter().map(|r| r[1].parse::<u64>().unwrap()).sum();

    assert_eq!(total, snapshot.summary.total_bans);
    assert_eq!(rows[0], vec!["1.2.3.4", "2", "nginx, sshd"]);
    assert_eq!(rows.len(), 3);
}

/// JSON export carries totals, per-jail counters, and hourly buckets
#[test]
fn json_export_matches_store() {
    // Arrange
    let log = LogFile::with_content(&sample_log());
    let store = replay(&log);
    let out = log.dir().join("results");
    fs::create_dir_all(&out).unwrap();

    // Act
    SnapshotExporter::new(&out).export(&store, ExportTrigger::Periodic);

    // Assert
    let stamped: Value =
        serde_json::from_str(&fs::read_to_string(find(&out, "fail2ban_stats_", ".json")).unwrap())
            .unwrap();
    let latest: Value = serde_json::from_str(
        &fs::read_to_string(out.join("fail2ban_stats_latest.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(stamped["summary"]["total_bans"], 4);
    assert_eq!(stamped["summary"]["total_unbans"], 1);
    assert_eq!(stamped["summary"]["total_detections"], 1);
    assert_eq!(stamped["summary"]["unique_addresses"], 3);
    assert_eq!(stamped["jail_stats"]["sshd"]["bans"], 2);
    assert_eq!(stamped["jail_stats"]["sshd"]["unbans"], 1);
    assert_eq!(stamped["jail_stats"]["sshd"]["detections"], 1);
    assert_eq!(stamped["hourly_bans"]["2024-01-01 10"], 2);
    assert_eq!(stamped["hourly_bans"]["2024-01-01 11"], 1);
    assert_eq!(stamped["banned_addresses"]["1.2.3.4"]["bans"], 2);
    assert_eq!(
        stamped["address_jails"]["1.2.3.4"],
        serde_json::json!(["nginx", "sshd"])
    );
    assert_eq!(stamped["summary"], latest["summary"]);
    assert!(!out.read_dir().unwrap().any(|e| {
        e.unwrap().file_name().to_string_lossy().ends_with(".csv")
    }));
}
