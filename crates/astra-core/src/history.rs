//! Deduplication history — the set of normalized lines a session produced.

use std::collections::HashSet;

use crate::error::Result;

/// Grows for the lifetime of its session; there is no eviction and no way
/// to remove an entry.
#[derive(Debug, Default)]
pub struct History {
    seen: HashSet<String>,
}

impl History {
    pub fn new() -> Self {
        Self { seen: HashSet::new() }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    /// Record `value`. Returns `false` if it was already present.
    ///
    /// Space is reserved before the key is copied, so an allocation failure
    /// leaves the history untouched.
    pub fn insert(&mut self, value: &str) -> Result<bool> {
        if self.seen.contains(value) {
            return Ok(false);
        }
        self.seen.try_reserve(1)?;
        let mut key = String::new();
        key.try_reserve_exact(value.len())?;
        key.push_str(value);
        Ok(self.seen.insert(key))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
