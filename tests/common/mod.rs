// Common test utilities for session-level integration tests
//
// Provides a stand-in emulation core that implements the C entry points in
// Rust, counts every call, and reads ROM titles from real files the way the
// linked core does.

#![allow(dead_code)]

use gb_frontend::core::CoreBindings;
use gb_frontend::display::{FrameBuffer, SCREEN_SIZE};
use gb_frontend::{EmulatorConfig, LogLevel};
use std::cell::RefCell;
use std::ffi::{c_void, CStr};
use std::os::raw::{c_char, c_uchar};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Offset of the title field in the cartridge header
pub const TITLE_OFFSET: usize = 0x134;

/// Size of a minimal ROM image (one 32 KiB bank pair)
pub const ROM_SIZE: usize = 0x8000;

/// Everything the mock core observed
#[derive(Debug, Default)]
pub struct CoreCalls {
    pub created: u32,
    pub destroyed: u32,
    pub roms_loaded: Vec<String>,
    pub frames_run: u64,
    pub frames_read: u64,
}

/// Per-instance state behind the opaque pointer
#[derive(Default)]
struct Instance {
    frames: u64,
}

/// Mock emulation core
pub struct MockCore {
    calls: Rc<RefCell<CoreCalls>>,
    fail_create: bool,
}

impl MockCore {
    pub fn new() -> (Self, Rc<RefCell<CoreCalls>>) {
        let calls = Rc::new(RefCell::new(CoreCalls::default()));
        let core = MockCore {
            calls: Rc::clone(&calls),
            fail_create: false,
        };
        (core, calls)
    }

    /// A core whose factory always returns null
    pub fn failing() -> (Self, Rc<RefCell<CoreCalls>>) {
        let (mut core, calls) = Self::new();
        core.fail_create = true;
        (core, calls)
    }
}

/// Shade codes produced after `frames` frames
///
/// The first 16 pixels hold the frame number in base 4, the rest stay white,
/// so every frame number maps to a distinct image.
pub fn frame_pattern(frames: u64) -> Vec<u8> {
    let mut codes = vec![0u8; SCREEN_SIZE];
    let mut n = frames;
    for code in codes.iter_mut().take(16) {
        *code = (n % 4) as u8;
        n /= 4;
    }
    codes
}

/// Frame buffer the mock core shows after `frames` frames
pub fn frame_after(frames: u64) -> FrameBuffer {
    FrameBuffer::from_codes(&frame_pattern(frames))
}

unsafe impl CoreBindings for MockCore {
    fn create(&self) -> *mut c_void {
        if self.fail_create {
            return std::ptr::null_mut();
        }
        self.calls.borrow_mut().created += 1;
        Box::into_raw(Box::new(Instance::default())).cast()
    }

    unsafe fn destroy(&self, core: *mut c_void) {
        assert!(!core.is_null());
        drop(Box::from_raw(core.cast::<Instance>()));
        self.calls.borrow_mut().destroyed += 1;
    }

    unsafe fn load_rom(&self, core: *mut c_void, path: *const c_char, title: *mut c_char) {
        assert!(!core.is_null());
        let path = CStr::from_ptr(path).to_string_lossy().into_owned();

        // Like the linked core: read the header title, stop at the first NUL,
        // and write it back NUL-terminated.
        let rom = std::fs::read(&path).unwrap_or_default();
        let header = rom
            .get(TITLE_OFFSET..TITLE_OFFSET + 16)
            .unwrap_or(&[]);
        let end = header.iter().position(|&b| b == 0).unwrap_or(header.len());

        for (i, &b) in header[..end].iter().chain(std::iter::once(&0)).enumerate() {
            *title.add(i) = b as c_char;
        }

        (*core.cast::<Instance>()).frames = 0;
        self.calls.borrow_mut().roms_loaded.push(path);
    }

    unsafe fn run_frame(&self, core: *mut c_void) {
        (*core.cast::<Instance>()).frames += 1;
        self.calls.borrow_mut().frames_run += 1;
    }

    unsafe fn frame_buffer(&self, core: *mut c_void, buf: *mut c_uchar) {
        let frames = (*core.cast::<Instance>()).frames;
        let out = std::slice::from_raw_parts_mut(buf, SCREEN_SIZE);
        out.copy_from_slice(&frame_pattern(frames));
        self.calls.borrow_mut().frames_read += 1;
    }
}

/// Build a ROM image whose header carries `title`
pub fn rom_with_title(title: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; ROM_SIZE];
    let len = title.len().min(16);
    rom[TITLE_OFFSET..TITLE_OFFSET + len].copy_from_slice(&title[..len]);
    rom
}

/// Write a ROM image to a unique temporary file
pub fn write_temp_rom(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gb_frontend_tests_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write temp rom");
    path
}

/// Remove a file written by `write_temp_rom`
pub fn remove_temp_rom(path: &Path) {
    let _ = std::fs::remove_file(path);
}

/// Configuration that keeps test output quiet and in memory
pub fn test_config() -> EmulatorConfig {
    let mut config = EmulatorConfig::default();
    config.logging.level = LogLevel::Debug;
    config
}
