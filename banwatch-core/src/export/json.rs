use crate::export::error::ExportError;
use crate::stats::{HourBucket, JailCounters, Runtime, StatsSnapshot};
use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: JsonSummary,
    banned_addresses: BTreeMap<&'a str, JsonAddress>,
    jail_stats: &'a BTreeMap<String, JailCounters>,
    hourly_bans: BTreeMap<HourBucket, u64>,
    address_jails: BTreeMap<&'a str, &'a [String]>,
    generated_at: DateTime<Local>,
}

#[derive(Serialize)]
struct JsonSummary {
    runtime: Runtime,
    total_bans: u64,
    total_unbans: u64,
    total_detections: u64,
    unique_addresses: usize,
}

#[derive(Serialize)]
struct JsonAddress {
    bans: u64,
    last_ban: Option<NaiveDateTime>,
}

pub(crate) fn render(snapshot: &StatsSnapshot) -> Result<Vec<u8>, ExportError> {
    let summary = &snapshot.summary;

    let report = JsonReport {
        summary: JsonSummary {
            runtime: summary.runtime,
            total_bans: summary.total_bans,
            total_unbans: summary.total_unbans,
            total_detections: summary.total_detections,
            unique_addresses: summary.unique_addresses,
        },
        banned_addresses: snapshot
            .banned_addresses
            .iter()
            .map(|a| {
                (
                    a.address.as_str(),
                    JsonAddress {
                        bans: a.bans,
                        last_ban: a.last_ban,
                    },
                )
            })
            .collect(),
        jail_stats: &snapshot.jail_stats,
        hourly_bans: summary
            .hourly_bans
            .iter()
            .map(|h| (h.hour, h.bans))
            .collect(),
        address_jails: snapshot
            .banned_addresses
            .iter()
            .map(|a| (a.address.as_str(), a.jails.as_slice()))
            .collect(),
        generated_at: snapshot.generated_at,
    };

    let mut out = serde_json::to_vec_pretty(&report)?;
    out.push(b'\n');
    Ok(out)
}
