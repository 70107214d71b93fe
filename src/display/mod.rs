// Display module - Handles frame conversion and presentation
//
// This module provides:
// - DMG color palette (4 shades)
// - Frame buffer (160×144 shades) and packed RGB frames
// - A winit + pixels window driven by the frame pacer (feature "frontend")

pub mod framebuffer;
pub mod palette;
#[cfg(feature = "frontend")]
pub mod window;

pub use framebuffer::{
    FrameBuffer, RgbFrame, Shade, RGB_BYTES_PER_PIXEL, RGB_ROW_BYTES, SCREEN_HEIGHT, SCREEN_SIZE,
    SCREEN_WIDTH,
};
pub use palette::{map_frame, shade_to_color, Color, DMG_PALETTE};
#[cfg(feature = "frontend")]
pub use window::{run_emulator, EmulatorWindow, WindowConfig};
