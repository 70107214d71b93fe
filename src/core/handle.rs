// Owned handle to one emulation core instance
//
// The raw instance pointer is acquired in `create` and released in `Drop`,
// so it is freed exactly once on every exit path. The handle is move-only and,
// because it holds a raw pointer, neither `Send` nor `Sync`.

use super::bindings::CoreBindings;
use super::error::CoreError;
use super::title::{RomTitle, TITLE_LEN};
use crate::display::{FrameBuffer, SCREEN_SIZE};
use std::ffi::{c_void, CString};
use std::fmt;
use std::os::raw::c_char;
use std::path::Path;
use std::ptr::NonNull;

/// Title buffer handed to the core: 16 title bytes plus the terminator the
/// core writes after a full-length title.
const TITLE_BUFFER_LEN: usize = TITLE_LEN + 1;

/// Exclusive owner of an emulation core instance
pub struct CoreHandle<B: CoreBindings> {
    raw: NonNull<c_void>,
    bindings: B,
}

impl<B: CoreBindings> CoreHandle<B> {
    /// Allocate a core instance through `bindings`
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AllocationFailed` if the factory hands back null.
    /// The factory offers no way to recover, so callers should treat this as
    /// fatal.
    pub fn create(bindings: B) -> Result<Self, CoreError> {
        let raw = NonNull::new(bindings.create()).ok_or(CoreError::AllocationFailed)?;
        Ok(Self { raw, bindings })
    }

    /// Load a ROM image into the core
    ///
    /// The core does all file I/O and header parsing. Nothing is validated
    /// here: the returned title is whatever the core wrote, trimmed at the
    /// first NUL.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPath` if the path contains a NUL byte, or
    /// on non-Unix platforms if it is not UTF-8.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<RomTitle, CoreError> {
        let path = path.as_ref();
        let c_path =
            path_to_c_string(path).ok_or_else(|| CoreError::InvalidPath(path.to_path_buf()))?;

        let mut title: [c_char; TITLE_BUFFER_LEN] = [0; TITLE_BUFFER_LEN];

        // SAFETY: `raw` is live for the lifetime of `self`, `c_path` is
        // NUL-terminated and `title` has room for the terminated title.
        unsafe {
            self.bindings
                .load_rom(self.raw.as_ptr(), c_path.as_ptr(), title.as_mut_ptr());
        }

        let bytes = title.map(|c| c as u8);
        Ok(RomTitle::from_raw(&bytes[..TITLE_LEN]))
    }

    /// Advance the core by exactly one video frame (70224 cycles)
    pub fn step_frame(&mut self) {
        // SAFETY: `raw` is live for the lifetime of `self`.
        unsafe { self.bindings.run_frame(self.raw.as_ptr()) }
    }

    /// Copy the core's current video output into a new frame buffer
    pub fn read_framebuffer(&mut self) -> FrameBuffer {
        let mut codes = vec![0u8; SCREEN_SIZE];

        // SAFETY: `raw` is live and `codes` holds exactly 160×144 bytes.
        unsafe {
            self.bindings
                .frame_buffer(self.raw.as_ptr(), codes.as_mut_ptr());
        }

        FrameBuffer::from_codes(&codes)
    }

    /// Release the core instance now
    pub fn destroy(self) {
        drop(self);
    }
}

impl<B: CoreBindings> Drop for CoreHandle<B> {
    fn drop(&mut self) {
        // SAFETY: `raw` came from `create` and is released only here.
        unsafe { self.bindings.destroy(self.raw.as_ptr()) }
    }
}

/// Unix paths are raw bytes and cross the boundary unchanged
#[cfg(unix)]
fn path_to_c_string(path: &Path) -> Option<CString> {
    use std::os::unix::ffi::OsStrExt;
    CString::new(path.as_os_str().as_bytes()).ok()
}

#[cfg(not(unix))]
fn path_to_c_string(path: &Path) -> Option<CString> {
    path.to_str().and_then(|s| CString::new(s).ok())
}

impl<B: CoreBindings> fmt::Debug for CoreHandle<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreHandle").field("raw", &self.raw).finish()
    }
}
