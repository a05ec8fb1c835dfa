use crate::extract::extract_event;
use crate::stats::AggregateStore;
use std::io::{self, BufRead};

/// Feed every line of `reader` through the extractor into `store`.
///
/// Invalid UTF-8 is replaced rather than rejected, so one mangled line never
/// hides the rest of the log. Returns the number of lines read.
pub fn replay_lines<R: BufRead>(mut reader: R, store: &AggregateStore) -> io::Result<u64> {
    let mut lines = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let line = String::from_utf8_lossy(raw);
        if let Some(event) = extract_event(line.trim_end_matches('\r')) {
            store.record(&event);
        }
    }

    Ok(lines)
}
