//! Opaque session handle.

use std::alloc::{alloc, Layout};

use astra_core::{AstraError, Profile, Result, Session};

/// Incomplete type on the C side; only ever seen through a pointer.
pub struct AstraSession {
    inner: Session,
}

/// Heap-allocate a session, reporting exhaustion instead of aborting.
pub(crate) fn create(profile: Profile) -> Result<*mut AstraSession> {
    let layout = Layout::new::<AstraSession>();
    // SAFETY: AstraSession is not zero-sized.
    let ptr = unsafe { alloc(layout) } as *mut AstraSession;
    if ptr.is_null() {
        return Err(AstraError::AllocationFailure);
    }
    // SAFETY: freshly allocated with the layout of AstraSession.
    unsafe { ptr.write(AstraSession { inner: Session::new(profile) }) };
    Ok(ptr)
}

/// # Safety
/// `ptr` must come from [`create`] and not have been destroyed.
pub(crate) unsafe fn destroy(ptr: *mut AstraSession) {
    // Global allocator + Layout::new::<AstraSession>() is what Box expects.
    drop(Box::from_raw(ptr));
}

/// # Safety
/// `ptr` must be a live handle with no other outstanding reference.
pub(crate) unsafe fn session_mut<'a>(ptr: *mut AstraSession) -> &'a mut Session {
    &mut (*ptr).inner
}

/// # Safety
/// `ptr` must be a live handle.
pub(crate) unsafe fn session_ref<'a>(ptr: *const AstraSession) -> &'a Session {
    &(*ptr).inner
}
