//! Output buffers handed across the C boundary.
//!
//! A produced line leaves the engine as a detached, NUL-terminated block.
//! From then on the caller owns it and must give it back exactly once via
//! `astra_buffer_free`. Nothing here tracks outstanding buffers: releasing a
//! foreign pointer or releasing twice is undefined behaviour.

use std::mem::ManuallyDrop;
use std::os::raw::c_char;
use std::ptr;

use astra_core::{Output, OutputKind, Result};

static EMPTY: [u8; 1] = [0];

/// Owned byte block. `len` excludes the trailing NUL; `capacity` is the
/// allocation size needed to reclaim it.
#[repr(C)]
#[derive(Debug)]
pub struct AstraBuffer {
    pub ptr: *mut c_char,
    pub len: usize,
    pub capacity: usize,
}

impl AstraBuffer {
    /// The "nothing to free" sentinel.
    pub const fn absent() -> Self {
        Self { ptr: ptr::null_mut(), len: 0, capacity: 0 }
    }

    pub fn is_absent(&self) -> bool {
        self.ptr.is_null()
    }

    /// A produced zero-length line: points at a static terminator and owns
    /// no allocation. Releasing it is a no-op.
    pub fn empty() -> Self {
        Self { ptr: EMPTY.as_ptr() as *mut c_char, len: 0, capacity: 0 }
    }

    /// Move `text` into a block the engine no longer references.
    ///
    /// Text coming out of the pipeline already has room for the NUL, so this
    /// only allocates for strings built elsewhere.
    pub fn detach(text: String) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::empty());
        }
        let mut bytes = text.into_bytes();
        bytes.try_reserve_exact(1)?;
        bytes.push(0);
        let len = bytes.len() - 1;
        let mut bytes = ManuallyDrop::new(bytes);
        Ok(Self {
            ptr: bytes.as_mut_ptr() as *mut c_char,
            len,
            capacity: bytes.capacity(),
        })
    }

    /// View the bytes, without the NUL.
    ///
    /// # Safety
    /// The buffer must come from [`AstraBuffer::detach`] and not have been
    /// released.
    pub unsafe fn as_bytes(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }
        std::slice::from_raw_parts(self.ptr as *const u8, self.len)
    }

    /// Reclaim the allocation. No-op on the absent sentinel and on
    /// [`AstraBuffer::empty`].
    ///
    /// # Safety
    /// The buffer must come from [`AstraBuffer::detach`] and must not have
    /// been released before.
    pub unsafe fn release(self) {
        if self.ptr.is_null() || self.capacity == 0 {
            return;
        }
        drop(Vec::from_raw_parts(self.ptr as *mut u8, self.len + 1, self.capacity));
    }
}

/// Which of the three outcomes a record carries.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstraRecordKind {
    Suppressed = 0,
    Empty = 1,
    Text = 2,
}

impl From<OutputKind> for AstraRecordKind {
    fn from(kind: OutputKind) -> Self {
        match kind {
            OutputKind::Suppressed => AstraRecordKind::Suppressed,
            OutputKind::Empty => AstraRecordKind::Empty,
            OutputKind::Text => AstraRecordKind::Text,
        }
    }
}

/// One transform result. `Empty` and `Text` own a buffer; `Suppressed`
/// carries the absent sentinel.
#[repr(C)]
#[derive(Debug)]
pub struct AstraRecord {
    pub kind: AstraRecordKind,
    pub buffer: AstraBuffer,
}

impl AstraRecord {
    pub const fn suppressed() -> Self {
        Self { kind: AstraRecordKind::Suppressed, buffer: AstraBuffer::absent() }
    }

    pub fn from_output(output: Output) -> Result<Self> {
        let kind = output.kind().into();
        match output.into_text() {
            Some(text) => Ok(Self { kind, buffer: AstraBuffer::detach(text)? }),
            None => Ok(Self::suppressed()),
        }
    }
}
