//! Normalization profile — which pipeline steps a session applies.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Four independent switches, copied into a session at creation and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Strip leading/trailing ASCII whitespace.
    pub trim: bool,
    /// ASCII uppercase.
    pub to_upper: bool,
    /// Suppress results that are empty after trim/upper.
    pub drop_empty: bool,
    /// Suppress results already produced by the same session.
    pub deduplicate: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            trim: true,
            to_upper: false,
            drop_empty: true,
            deduplicate: false,
        }
    }
}

impl Profile {
    /// Every step disabled: the pipeline passes text through unchanged.
    pub fn passthrough() -> Self {
        Self { trim: false, to_upper: false, drop_empty: false, deduplicate: false }
    }

    /// Every step enabled.
    pub fn strict() -> Self {
        Self { trim: true, to_upper: true, drop_empty: true, deduplicate: true }
    }

    pub fn with_trim(mut self, on: bool) -> Self {
        self.trim = on;
        self
    }

    pub fn with_upper(mut self, on: bool) -> Self {
        self.to_upper = on;
        self
    }

    pub fn with_drop_empty(mut self, on: bool) -> Self {
        self.drop_empty = on;
        self
    }

    pub fn with_dedup(mut self, on: bool) -> Self {
        self.deduplicate = on;
        self
    }

    /// Names of the enabled steps, in pipeline order.
    pub fn steps(&self) -> Vec<&'static str> {
        let mut steps = Vec::with_capacity(4);
        if self.trim { steps.push("trim"); }
        if self.to_upper { steps.push("upper"); }
        if self.drop_empty { steps.push("drop_empty"); }
        if self.deduplicate { steps.push("dedup"); }
        steps
    }

    /// Parse a profile from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
