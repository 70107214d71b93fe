// DMG Color Palette - RGB conversions for the four LCD shades
//
// The DMG LCD shows four shades of green. The table below is the
// fixed color for each 2-bit shade code; it is not configurable.

use super::framebuffer::{FrameBuffer, RgbFrame, Shade, RGB_BYTES_PER_PIXEL, SCREEN_SIZE};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color as [R, G, B] bytes
    #[inline]
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Color as [R, G, B, A] bytes, fully opaque
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

/// DMG palette indexed by shade code
pub const DMG_PALETTE: [Color; 4] = [
    Color::new(155, 188, 15), // White
    Color::new(139, 172, 15), // LightGrey
    Color::new(48, 98, 48),   // DarkGrey
    Color::new(15, 56, 15),   // Black
];

/// Convert a shade to its RGB color
#[inline]
pub fn shade_to_color(shade: Shade) -> Color {
    DMG_PALETTE[shade as usize]
}

/// Convert a whole frame to packed RGB888
///
/// Pixels are emitted row-major, top to bottom, 3 bytes each, with a row
/// stride of 160 pixels.
pub fn map_frame(frame: &FrameBuffer) -> RgbFrame {
    let mut data = Vec::with_capacity(SCREEN_SIZE * RGB_BYTES_PER_PIXEL);

    for &shade in frame.as_slice() {
        data.extend_from_slice(&shade_to_color(shade).to_rgb());
    }

    RgbFrame::from_packed(data)
}
