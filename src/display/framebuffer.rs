// Frame Buffer - Stores the shade codes produced by the emulation core
//
// The Game Boy LCD has a resolution of 160×144 pixels. Each pixel is one of
// four shades (a 2-bit code) which the palette maps to an RGB color.

use super::palette::{shade_to_color, Color};

/// Game Boy screen width in pixels
pub const SCREEN_WIDTH: usize = 160;

/// Game Boy screen height in pixels
pub const SCREEN_HEIGHT: usize = 144;

/// Total number of pixels in a frame
pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Bytes per pixel in a packed RGB frame
pub const RGB_BYTES_PER_PIXEL: usize = 3;

/// Bytes per row in a packed RGB frame
pub const RGB_ROW_BYTES: usize = SCREEN_WIDTH * RGB_BYTES_PER_PIXEL;

/// 2-bit pixel intensity emitted by the display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Shade {
    #[default]
    White = 0,
    LightGrey = 1,
    DarkGrey = 2,
    Black = 3,
}

impl Shade {
    /// All shades, ordered by code
    pub const ALL: [Shade; 4] = [Shade::White, Shade::LightGrey, Shade::DarkGrey, Shade::Black];

    /// Decode a raw shade code
    ///
    /// Only the low two bits are significant, so every byte decodes.
    #[inline]
    pub fn from_code(code: u8) -> Self {
        Self::ALL[(code & 0b11) as usize]
    }

    /// The 2-bit code of this shade
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Frame buffer holding one frame of shades
///
/// Always holds exactly 160×144 pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<Shade>,
}

impl FrameBuffer {
    /// Create a new frame buffer initialized to white
    pub fn new() -> Self {
        Self {
            pixels: vec![Shade::White; SCREEN_SIZE],
        }
    }

    /// Build a frame buffer from raw shade codes as written by the core
    ///
    /// # Panics
    /// Panics if `codes` does not hold exactly 160×144 entries
    pub fn from_codes(codes: &[u8]) -> Self {
        assert_eq!(
            codes.len(),
            SCREEN_SIZE,
            "Frame buffer must be exactly 160×144 pixels"
        );

        Self {
            pixels: codes.iter().map(|&code| Shade::from_code(code)).collect(),
        }
    }

    /// Set a pixel at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, shade: Shade) {
        assert!(x < SCREEN_WIDTH, "X coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "Y coordinate {} out of bounds", y);

        self.pixels[y * SCREEN_WIDTH + x] = shade;
    }

    /// Get the shade at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Shade {
        assert!(x < SCREEN_WIDTH, "X coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "Y coordinate {} out of bounds", y);

        self.pixels[y * SCREEN_WIDTH + x]
    }

    /// Fill the whole frame with one shade
    pub fn clear(&mut self, shade: Shade) {
        self.pixels.fill(shade);
    }

    /// Get the pixels in row-major order
    pub fn as_slice(&self) -> &[Shade] {
        &self.pixels
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Packed RGB888 frame ready for presentation
///
/// 160×144 pixels, row-major, 3 bytes per pixel, no row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFrame {
    data: Vec<u8>,
}

impl RgbFrame {
    pub(crate) fn from_packed(data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), SCREEN_SIZE * RGB_BYTES_PER_PIXEL);
        Self { data }
    }

    /// Raw packed RGB bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Color at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        assert!(x < SCREEN_WIDTH, "X coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "Y coordinate {} out of bounds", y);

        let offset = y * RGB_ROW_BYTES + x * RGB_BYTES_PER_PIXEL;
        Color::new(self.data[offset], self.data[offset + 1], self.data[offset + 2])
    }

    /// Expand the frame to RGBA for surfaces that expect an alpha channel
    ///
    /// # Arguments
    /// * `output` - Output buffer (must be at least SCREEN_SIZE * 4 bytes)
    ///
    /// # Panics
    /// Panics if output buffer is too small
    pub fn to_rgba(&self, output: &mut [u8]) {
        assert!(
            output.len() >= SCREEN_SIZE * 4,
            "Output buffer too small for RGBA conversion"
        );

        for (rgb, rgba) in self
            .data
            .chunks_exact(RGB_BYTES_PER_PIXEL)
            .zip(output.chunks_exact_mut(4))
        {
            rgba[..3].copy_from_slice(rgb);
            rgba[3] = 0xFF;
        }
    }
}

impl Default for RgbFrame {
    /// A blank (all white) frame
    fn default() -> Self {
        let white = shade_to_color(Shade::White).to_rgb();
        Self::from_packed(white.repeat(SCREEN_SIZE))
    }
}
