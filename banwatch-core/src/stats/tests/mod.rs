mod types_tests;

use crate::extract::{EventKind, SecurityEvent};

pub(super) fn ban(ts: &str, jail: &str, address: &str) -> SecurityEvent {
    SecurityEvent::new(EventKind::Ban, ts, jail, address)
}

pub(super) fn unban(ts: &str, jail: &str, address: &str) -> SecurityEvent {
    SecurityEvent::new(EventKind::Unban, ts, jail, address)
}

pub(super) fn detection(ts: &str, jail: &str, address: &str) -> SecurityEvent {
    SecurityEvent::new(EventKind::Detection, ts, jail, address)
}
