// Raw entry points of the emulation core
//
// The core is a C-linkage library exposing an opaque instance pointer and five
// functions. `CoreBindings` mirrors those functions so the owning handle can be
// driven by the linked library or by any other implementation (tests, mocks).

use std::ffi::c_void;
use std::os::raw::{c_char, c_uchar};

/// The five C entry points of an emulation core
///
/// # Safety
///
/// `CoreHandle` relies on these guarantees:
/// - `create` returns either null or a pointer that stays valid until it is
///   passed to `destroy`.
/// - `load_rom` reads a NUL-terminated path and writes at most 17 bytes
///   (16 title bytes plus a terminator) into `title`.
/// - `frame_buffer` writes exactly 160×144 bytes into `buf`.
/// - None of the functions retain `path`, `title` or `buf` after returning.
pub unsafe trait CoreBindings {
    /// Allocate a new core instance (`gb_create`)
    fn create(&self) -> *mut c_void;

    /// Release an instance (`gb_destroy`)
    ///
    /// # Safety
    /// `core` must come from `create` and must not be used afterwards.
    unsafe fn destroy(&self, core: *mut c_void);

    /// Load a ROM image and report its title (`gb_load_rom`)
    ///
    /// # Safety
    /// `core` must be live, `path` NUL-terminated, `title` at least 17 bytes.
    unsafe fn load_rom(&self, core: *mut c_void, path: *const c_char, title: *mut c_char);

    /// Run one video frame (`gb_run_frame`)
    ///
    /// # Safety
    /// `core` must be live.
    unsafe fn run_frame(&self, core: *mut c_void);

    /// Copy the current shade codes out of the core (`gb_get_frame_buffer`)
    ///
    /// # Safety
    /// `core` must be live and `buf` must hold 160×144 bytes.
    unsafe fn frame_buffer(&self, core: *mut c_void, buf: *mut c_uchar);
}

#[cfg(feature = "linked-core")]
pub use linked::LinkedCore;

#[cfg(feature = "linked-core")]
mod linked {
    use super::CoreBindings;
    use std::ffi::c_void;
    use std::os::raw::{c_char, c_uchar};

    #[link(name = "gb_core")]
    extern "C" {
        fn gb_create() -> *mut c_void;
        fn gb_destroy(gb: *mut c_void);
        fn gb_load_rom(gb: *mut c_void, path: *const c_char, title: *mut c_char);
        fn gb_run_frame(gb: *mut c_void);
        fn gb_get_frame_buffer(gb: *mut c_void, buf: *mut c_uchar);
    }

    /// Bindings to the `gb_core` library linked into the binary
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LinkedCore;

    // SAFETY: the gb_core library implements the contract documented on
    // `CoreBindings`.
    unsafe impl CoreBindings for LinkedCore {
        fn create(&self) -> *mut c_void {
            unsafe { gb_create() }
        }

        unsafe fn destroy(&self, core: *mut c_void) {
            gb_destroy(core)
        }

        unsafe fn load_rom(&self, core: *mut c_void, path: *const c_char, title: *mut c_char) {
            gb_load_rom(core, path, title)
        }

        unsafe fn run_frame(&self, core: *mut c_void) {
            gb_run_frame(core)
        }

        unsafe fn frame_buffer(&self, core: *mut c_void, buf: *mut c_uchar) {
            gb_get_frame_buffer(core, buf)
        }
    }
}
