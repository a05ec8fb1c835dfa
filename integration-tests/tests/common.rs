#![allow(dead_code)]

use banwatch_core::stats::AggregateStore;
use banwatch_core::tail::Tailer;
use integration_tests::harness::{FAST_TAIL, LogFile};
use std::sync::Arc;

pub fn start_tailer(log: &LogFile) -> (Tailer, Arc<AggregateStore>) {
    let store = Arc::new(AggregateStore::default());
    let tailer = Tailer::start(log.path(), FAST_TAIL, store.clone()).unwrap();
    (tailer, store)
}
