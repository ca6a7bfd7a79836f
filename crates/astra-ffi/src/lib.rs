//! C ABI for astra sessions.
//!
//! Ownership rules the caller must follow (none are checked at runtime):
//! - a session handle from `astra_session_new` is freed exactly once with
//!   `astra_session_free` and never used afterwards;
//! - every record from `astra_session_transform` is passed exactly once to
//!   `astra_buffer_free` (a no-op for suppressed records);
//! - a session is used by one thread at a time.
//!
//! Violating these is undefined behaviour.

pub mod buffer;
mod handle;

use std::os::raw::c_char;
use std::slice;

use astra_core::{AstraError, Profile, SessionStats};
use tracing::warn;

pub use buffer::{AstraBuffer, AstraRecord, AstraRecordKind};
pub use handle::AstraSession;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstraProfile {
    pub trim: bool,
    pub to_upper: bool,
    pub drop_empty: bool,
    pub deduplicate: bool,
}

impl From<AstraProfile> for Profile {
    fn from(value: AstraProfile) -> Self {
        Self {
            trim: value.trim,
            to_upper: value.to_upper,
            drop_empty: value.drop_empty,
            deduplicate: value.deduplicate,
        }
    }
}

impl From<Profile> for AstraProfile {
    fn from(value: Profile) -> Self {
        Self {
            trim: value.trim,
            to_upper: value.to_upper,
            drop_empty: value.drop_empty,
            deduplicate: value.deduplicate,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstraStatus {
    Ok = 0,
    InvalidEncoding = 1,
    AllocationFailure = 2,
}

impl From<&AstraError> for AstraStatus {
    fn from(err: &AstraError) -> Self {
        match err {
            AstraError::InvalidEncoding { .. } => AstraStatus::InvalidEncoding,
            // Config errors never come out of the C entry points.
            AstraError::AllocationFailure | AstraError::Config(_) => AstraStatus::AllocationFailure,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AstraStats {
    pub read: usize,
    pub written: usize,
    pub skipped: usize,
}

impl From<SessionStats> for AstraStats {
    fn from(value: SessionStats) -> Self {
        Self { read: value.read, written: value.written, skipped: value.skipped }
    }
}

/// Trim and drop empty lines; no uppercase, no dedup.
#[no_mangle]
pub extern "C" fn astra_profile_default() -> AstraProfile {
    Profile::default().into()
}

/// Create a session. On failure `*out` is set to NULL.
///
/// # Safety
/// `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn astra_session_new(
    profile: AstraProfile,
    out: *mut *mut AstraSession,
) -> AstraStatus {
    debug_assert!(!out.is_null());
    match handle::create(profile.into()) {
        Ok(session) => {
            out.write(session);
            AstraStatus::Ok
        }
        Err(err) => {
            warn!(error = %err, "session allocation failed");
            out.write(std::ptr::null_mut());
            AstraStatus::from(&err)
        }
    }
}

/// Destroy a session and its dedup history. NULL is ignored.
///
/// # Safety
/// `session` must be NULL or a live handle from `astra_session_new`.
#[no_mangle]
pub unsafe extern "C" fn astra_session_free(session: *mut AstraSession) {
    if session.is_null() {
        return;
    }
    handle::destroy(session);
}

/// Transform `len` bytes of UTF-8 at `data`. Whenever the status is not
/// `Ok`, `*out` is the suppressed record.
///
/// # Safety
/// `session` must be a live handle, `data` must be readable for `len` bytes
/// (it may be NULL when `len` is 0) and `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn astra_session_transform(
    session: *mut AstraSession,
    data: *const c_char,
    len: usize,
    out: *mut AstraRecord,
) -> AstraStatus {
    debug_assert!(!session.is_null() && !out.is_null());
    let session = handle::session_mut(session);
    let bytes: &[u8] = if len == 0 {
        &[]
    } else {
        slice::from_raw_parts(data as *const u8, len)
    };

    match session.transform(bytes).and_then(AstraRecord::from_output) {
        Ok(record) => {
            out.write(record);
            AstraStatus::Ok
        }
        Err(err) => {
            out.write(AstraRecord::suppressed());
            AstraStatus::from(&err)
        }
    }
}

/// Counters for a live session.
///
/// # Safety
/// `session` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn astra_session_stats(session: *const AstraSession) -> AstraStats {
    debug_assert!(!session.is_null());
    handle::session_ref(session).stats().into()
}

/// Release the buffer owned by `record`. No-op for suppressed records.
///
/// # Safety
/// `record` must come from `astra_session_transform` and not have been
/// released before.
#[no_mangle]
pub unsafe extern "C" fn astra_buffer_free(record: AstraRecord) {
    record.buffer.release();
}

/// Static description of a status code. Must not be freed.
#[no_mangle]
pub extern "C" fn astra_status_message(status: AstraStatus) -> *const c_char {
    let msg: &'static [u8] = match status {
        AstraStatus::Ok => b"ok\0",
        AstraStatus::InvalidEncoding => b"input is not valid UTF-8\0",
        AstraStatus::AllocationFailure => b"allocation failure\0",
    };
    msg.as_ptr() as *const c_char
}
