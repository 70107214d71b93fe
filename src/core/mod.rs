// Core module - Boundary to the external emulation core
//
// The CPU, PPU and memory mappers live in a separate C-linkage library. This
// module owns an instance of it and exposes loading, stepping and frame
// readback as safe calls.

mod bindings;
mod error;
mod handle;
mod title;

pub use bindings::CoreBindings;
#[cfg(feature = "linked-core")]
pub use bindings::LinkedCore;
pub use error::CoreError;
pub use handle::CoreHandle;
pub use title::{RomTitle, TITLE_LEN};

/// CPU clock of the DMG in Hz
pub const CPU_CYCLES_PER_SECOND: u32 = 4_194_304;

/// CPU cycles in one video frame (154 lines × 456 cycles)
pub const CPU_CYCLES_PER_FRAME: u32 = 70_224;

/// Wall-clock duration of one emulated frame in seconds (about 16.74 ms)
///
/// The clock is a power of two, so this value is exact in an `f64`.
pub const FRAME_DURATION_SECS: f64 = CPU_CYCLES_PER_FRAME as f64 / CPU_CYCLES_PER_SECOND as f64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert!((FRAME_DURATION_SECS - 0.016742).abs() < 1e-6);
        assert_eq!(FRAME_DURATION_SECS * 4_194_304.0, 70_224.0);
    }
}
