use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::error::{AstraError, Result};
use crate::history::History;
use crate::pipeline::{self, Output};
use crate::profile::Profile;

/// Session counters. `read == written + skipped` at all times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Lines that decoded and went through the pipeline.
    pub read: usize,
    /// Produced lines, empty or not.
    pub written: usize,
    /// Suppressed lines.
    pub skipped: usize,
}

/// A long-lived transform session: one profile, one dedup history.
///
/// Dropping the session releases the history. A session is meant for one
/// caller at a time; `transform` takes `&mut self`.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    profile: Profile,
    history: History,
    stats: SessionStats,
}

impl Session {
    /// Create a session with an empty history. The history allocates on its
    /// first insert.
    pub fn new(profile: Profile) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            profile,
            history: History::new(),
            stats: SessionStats::default(),
        };
        debug!(
            session = %session.id,
            trim = profile.trim,
            upper = profile.to_upper,
            drop_empty = profile.drop_empty,
            dedup = profile.deduplicate,
            "session created"
        );
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Number of distinct normalized lines remembered for dedup.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Transform one line of raw UTF-8 bytes.
    pub fn transform(&mut self, input: &[u8]) -> Result<Output> {
        let line = match std::str::from_utf8(input) {
            Ok(line) => line,
            Err(err) => {
                warn!(session = %self.id, valid_up_to = err.valid_up_to(), "rejected malformed input");
                return Err(err.into());
            }
        };
        self.transform_str(line)
    }

    /// Transform one line of text.
    pub fn transform_str(&mut self, line: &str) -> Result<Output> {
        let output = match pipeline::transform_line(line, &self.profile, &mut self.history) {
            Ok(output) => output,
            Err(err) => {
                if matches!(err, AstraError::AllocationFailure) {
                    warn!(session = %self.id, "allocation failed during transform");
                }
                return Err(err);
            }
        };

        self.stats.read += 1;
        if output.is_suppressed() {
            self.stats.skipped += 1;
        } else {
            self.stats.written += 1;
        }
        trace!(session = %self.id, outcome = %output.kind(), "line transformed");
        Ok(output)
    }

    /// Destroy the session, returning its final counters.
    pub fn close(self) -> SessionStats {
        self.stats
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!(
            session = %self.id,
            read = self.stats.read,
            written = self.stats.written,
            skipped = self.stats.skipped,
            history = self.history.len(),
            "session destroyed"
        );
    }
}
