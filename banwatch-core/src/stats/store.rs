use crate::export::{ExportError, ExportFormat, write_snapshot};
use crate::extract::{EventKind, SecurityEvent};
use crate::stats::constants::{DEFAULT_TOP_N, MIN_RATE_HOURS};
use crate::stats::snapshot::{AddressEntry, StatsSnapshot, Summary};
use crate::stats::types::{
    AddressCount, HourBucket, HourlyCount, JailBans, JailCounters, Runtime,
};
use chrono::{Local, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Thread-safe owner of all aggregate statistics.
///
/// Shared by reference (usually `Arc`) between the tail thread, the periodic
/// reporter and the shutdown path. Every operation takes the single internal
/// lock for the duration of an in-memory update or copy and never holds it
/// across I/O.
#[derive(Debug)]
pub struct AggregateStore {
    started_at: Instant,
    top_n: usize,
    state: Mutex<AggregateState>,
}

#[derive(Debug, Default)]
struct AggregateState {
    ban_count: u64,
    unban_count: u64,
    detection_count: u64,

    // Ban frequency and jail membership live together so an address can
    // never be counted without a jail set.
    addresses: HashMap<String, AddressRecord>,
    jails: HashMap<String, JailRecord>,
    hourly_bans: BTreeMap<HourBucket, u64>,
}

#[derive(Debug)]
struct AddressRecord {
    bans: u64,
    first_seen: usize,
    jails: BTreeSet<String>,
    last_ban: Option<NaiveDateTime>,
}

#[derive(Debug)]
struct JailRecord {
    counters: JailCounters,
    first_seen: usize,
}

impl Default for AggregateStore {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl AggregateStore {
    pub fn new(top_n: usize) -> Self {
        Self {
            started_at: Instant::now(),
            top_n,
            state: Mutex::new(AggregateState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AggregateState> {
        // Each update is a handful of increments; a panic between them loses
        // at most part of one event, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Recording
impl AggregateStore {
    pub fn record(&self, event: &SecurityEvent) {
        match event.kind {
            EventKind::Ban => self.record_ban(event),
            EventKind::Unban => {
                let mut state = self.lock();
                state.unban_count += 1;
                state.jail_mut(&event.jail).unbans += 1;
            }
            EventKind::Detection => {
                let mut state = self.lock();
                state.detection_count += 1;
                state.jail_mut(&event.jail).detections += 1;
            }
        }

        tracing::debug!(
            kind = %event.kind,
            jail = %event.jail,
            address = %event.address,
            "event recorded"
        );
    }

    fn record_ban(&self, event: &SecurityEvent) {
        // Parsing is pure, so it stays outside the lock.
        let ts = match event.parsed_time() {
            Ok(ts) => Some(ts),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    jail = %event.jail,
                    address = %event.address,
                    "ban timestamp unparseable; skipping hourly bucket"
                );
                None
            }
        };

        let mut guard = self.lock();
        let state = &mut *guard;
        state.ban_count += 1;
        state.jail_mut(&event.jail).bans += 1;

        let next_seen = state.addresses.len();
        let record = state
            .addresses
            .entry(event.address.clone())
            .or_insert_with(|| AddressRecord {
                bans: 0,
                first_seen: next_seen,
                jails: BTreeSet::new(),
                last_ban: None,
            });
        record.bans += 1;
        record.jails.insert(event.jail.clone());

        if let Some(ts) = ts {
            record.last_ban = Some(record.last_ban.map_or(ts, |prev| prev.max(ts)));
            *state.hourly_bans.entry(HourBucket::containing(ts)).or_insert(0) += 1;
        }
    }
}

/// Snapshot API (read-only)
impl AggregateStore {
    pub fn snapshot(&self) -> Summary {
        let runtime = Runtime(self.elapsed());
        let state = self.lock();
        state.summary(runtime, self.top_n)
    }

    pub fn detailed_snapshot(&self) -> StatsSnapshot {
        let runtime = Runtime(self.elapsed());
        let state = self.lock();

        let summary = state.summary(runtime, self.top_n);
        let banned_addresses = state
            .ranked_addresses()
            .into_iter()
            .map(|(address, record)| AddressEntry {
                address: address.clone(),
                bans: record.bans,
                jails: record.jails.iter().cloned().collect(),
                last_ban: record.last_ban,
            })
            .collect();
        let jail_stats = state
            .jails
            .iter()
            .map(|(jail, record)| (jail.clone(), record.counters))
            .collect();
        drop(state);

        StatsSnapshot {
            summary,
            banned_addresses,
            jail_stats,
            generated_at: Local::now(),
        }
    }

    /// Render one consistent snapshot to `destination`.
    ///
    /// The copy is taken first; the file is written after the lock is released.
    pub fn export(&self, format: ExportFormat, destination: &Path) -> Result<(), ExportError> {
        let snapshot = self.detailed_snapshot();
        write_snapshot(&snapshot, format, destination)
    }
}

impl AggregateState {
    fn jail_mut(&mut self, jail: &str) -> &mut JailCounters {
        let next_seen = self.jails.len();
        &mut self
            .jails
            .entry(jail.to_string())
            .or_insert_with(|| JailRecord {
                counters: JailCounters::default(),
                first_seen: next_seen,
            })
            .counters
    }

    fn ranked_addresses(&self) -> Vec<(&String, &AddressRecord)> {
        let mut ranked: Vec<_> = self.addresses.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.bans
                .cmp(&a.bans)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        ranked
    }

    fn summary(&self, runtime: Runtime, top_n: usize) -> Summary {
        let top_addresses = self
            .ranked_addresses()
            .into_iter()
            .take(top_n)
            .map(|(address, record)| AddressCount {
                address: address.clone(),
                bans: record.bans,
            })
            .collect();

        let mut jails: Vec<_> = self.jails.iter().collect();
        jails.sort_by(|(_, a), (_, b)| {
            b.counters
                .bans
                .cmp(&a.counters.bans)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        let top_jails = jails
            .into_iter()
            .map(|(jail, record)| JailBans {
                jail: jail.clone(),
                bans: record.counters.bans,
            })
            .collect();

        let ban_rate = self.ban_count as f64 / runtime.hours().max(MIN_RATE_HOURS);

        let detection_rate = if self.detection_count > 0 {
            self.ban_count as f64 / self.detection_count as f64 * 100.0
        } else {
            0.0
        };

        let hourly_bans = self
            .hourly_bans
            .iter()
            .map(|(hour, bans)| HourlyCount {
                hour: *hour,
                bans: *bans,
            })
            .collect();

        Summary {
            runtime,
            total_bans: self.ban_count,
            total_unbans: self.unban_count,
            total_detections: self.detection_count,
            unique_addresses: self.addresses.len(),
            top_addresses,
            top_jails,
            ban_rate,
            detection_rate,
            hourly_bans,
        }
    }
}
