use crate::stats::types::{AddressCount, HourlyCount, JailBans, JailCounters, Runtime};
use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Point-in-time statistics for reports.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub runtime: Runtime,
    pub total_bans: u64,
    pub total_unbans: u64,
    pub total_detections: u64,
    pub unique_addresses: usize,

    /// Most banned addresses, ties in first-seen order.
    pub top_addresses: Vec<AddressCount>,

    /// Every jail, by ban count descending.
    pub top_jails: Vec<JailBans>,

    /// Bans per hour of runtime.
    pub ban_rate: f64,

    /// Bans per detection, as a percentage. Zero before the first detection.
    pub detection_rate: f64,

    /// Ascending by hour.
    pub hourly_bans: Vec<HourlyCount>,
}

impl Summary {
    pub fn ban_rate_display(&self) -> String {
        format!("{:.2} bans/hour", self.ban_rate)
    }

    pub fn detection_rate_display(&self) -> String {
        format!("{:.2}%", self.detection_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressEntry {
    pub address: String,
    pub bans: u64,
    pub jails: Vec<String>,
    pub last_ban: Option<NaiveDateTime>,
}

/// Everything the exporters need, copied out under one lock acquisition.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub summary: Summary,

    /// Every banned address, ranked like `Summary::top_addresses`.
    pub banned_addresses: Vec<AddressEntry>,

    pub jail_stats: BTreeMap<String, JailCounters>,
    pub generated_at: DateTime<Local>,
}
