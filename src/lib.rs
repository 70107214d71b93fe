// Game Boy Frontend Library
// Paces an external emulation core and converts its output for display

// Public modules
pub mod core;
pub mod display;
pub mod emulator;
pub mod logger;

// Re-export main types for convenience
#[cfg(feature = "linked-core")]
pub use crate::core::LinkedCore;
pub use crate::core::{
    CoreBindings, CoreError, CoreHandle, RomTitle, CPU_CYCLES_PER_FRAME, CPU_CYCLES_PER_SECOND,
    FRAME_DURATION_SECS,
};
pub use crate::display::{map_frame, Color, FrameBuffer, RgbFrame, Shade};
pub use crate::emulator::{
    Emulator, EmulatorConfig, FramePacer, FrameSource, ScreenshotError, TickOutcome,
};
pub use crate::logger::{LogEntry, LogLevel, Logger};
