//! Astra — line normalization sessions.
//!
//! Steps, applied in order and each gated by a [`Profile`] switch:
//! 1. Trim — strip leading/trailing ASCII whitespace
//! 2. Upper — ASCII uppercase
//! 3. Drop empty — suppress lines that ended up empty
//! 4. Dedup — suppress lines the session already produced

pub mod error;
pub mod history;
pub mod pipeline;
pub mod profile;
pub mod session;

pub use error::{AstraError, Result};
pub use history::History;
pub use pipeline::{normalize, transform_bytes, transform_line, Output, OutputKind};
pub use profile::Profile;
pub use session::{Session, SessionStats};
