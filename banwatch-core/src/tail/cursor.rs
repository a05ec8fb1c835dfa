use crate::tail::constants::{MAX_PENDING_BYTES, MAX_READ_BYTES};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PollOutcome {
    /// The file does not exist right now.
    Missing,
    /// Complete lines appended since the previous poll (possibly none).
    Lines(Vec<String>),
}

/// Byte-offset bookkeeping for one log file.
///
/// Bytes after the last newline are held back until their line completes.
#[derive(Debug)]
pub(crate) struct TailCursor {
    path: PathBuf,
    offset: u64,
    pending: Vec<u8>,
    /// Inside an oversized line; bytes are skipped up to the next newline.
    discarding: bool,
    seeded_at_eof: bool,
}

impl TailCursor {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: 0,
            pending: Vec::new(),
            discarding: false,
            seeded_at_eof: false,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn offset(&self) -> u64 {
        self.offset
    }

    pub(crate) fn seeded_at_eof(&self) -> bool {
        self.seeded_at_eof
    }

    /// Skip content already present. Returns `false` when the file is absent,
    /// in which case the cursor stays at offset zero.
    pub(crate) fn seed_to_end(&mut self) -> io::Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => {
                self.offset = meta.len();
                self.reset_pending();
                self.seeded_at_eof = true;
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Forget the current position; the next file to appear is read from its start.
    pub(crate) fn rewind(&mut self) {
        self.offset = 0;
        self.reset_pending();
    }

    fn reset_pending(&mut self) {
        self.pending.clear();
        self.discarding = false;
    }

    pub(crate) fn poll(&mut self) -> io::Result<PollOutcome> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PollOutcome::Missing),
            Err(e) => return Err(e),
        };

        let len = file.metadata()?.len();

        if len < self.offset {
            tracing::warn!(
                path = %self.path.display(),
                offset = self.offset,
                len,
                "log file shrank; resuming from current end"
            );
            self.offset = len;
            self.reset_pending();
            return Ok(PollOutcome::Lines(Vec::new()));
        }

        if len == self.offset {
            return Ok(PollOutcome::Lines(Vec::new()));
        }

        file.seek(SeekFrom::Start(self.offset))?;
        let mut chunk = Vec::new();
        file.take(MAX_READ_BYTES).read_to_end(&mut chunk)?;
        self.offset += chunk.len() as u64;
        self.pending.extend_from_slice(&chunk);

        let lines = self.take_complete_lines();
        self.discard_oversized_pending();

        Ok(PollOutcome::Lines(lines))
    }

    /// Drop a partial line that has outgrown [`MAX_PENDING_BYTES`]; the rest of
    /// that line is skipped up to its newline.
    fn discard_oversized_pending(&mut self) {
        if self.pending.len() <= MAX_PENDING_BYTES {
            return;
        }

        tracing::warn!(
            path = %self.path.display(),
            offset = self.offset,
            dropped = self.pending.len(),
            "unterminated line exceeds limit; discarding"
        );
        self.pending.clear();
        self.discarding = true;
    }

    fn take_complete_lines(&mut self) -> Vec<String> {
        if self.discarding {
            match self.pending.iter().position(|b| *b == b'\n') {
                Some(end) => {
                    self.pending.drain(..=end);
                    self.discarding = false;
                }
                None => {
                    self.pending.clear();
                    return Vec::new();
                }
            }
        }

        let Some(last_newline) = self.pending.iter().rposition(|b| *b == b'\n') else {
            return Vec::new();
        };

        let rest = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, rest);

        complete
            .split(|b| *b == b'\n')
            .map(|raw| String::from_utf8_lossy(raw).trim_end_matches('\r').to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}
