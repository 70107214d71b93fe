// Screenshot functionality
//
// Saves an emitted RGB frame as a PNG file.

use super::config::ScreenshotConfig;
use crate::display::{RgbFrame, SCREEN_HEIGHT, SCREEN_WIDTH};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during screenshot operations
#[derive(Debug)]
pub enum ScreenshotError {
    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save a screenshot of a frame
///
/// # Arguments
///
/// * `frame` - The packed RGB frame to save
/// * `rom_path` - Optional path to the currently loaded ROM (for naming)
/// * `config` - Where to save and how to name the file
///
/// # Returns
///
/// Result containing the path to the saved screenshot or an error
pub fn save_screenshot(
    frame: &RgbFrame,
    rom_path: Option<&Path>,
    config: &ScreenshotConfig,
) -> Result<PathBuf, ScreenshotError> {
    let screenshots_dir = get_screenshot_directory(&config.screenshot_directory, rom_path);
    fs::create_dir_all(&screenshots_dir)?;

    let filename = if config.include_timestamp {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("screenshot_{}.png", timestamp)
    } else {
        "screenshot.png".to_string()
    };
    let file_path = screenshots_dir.join(filename);

    save_png(
        &file_path,
        frame.as_bytes(),
        SCREEN_WIDTH as u32,
        SCREEN_HEIGHT as u32,
    )?;

    Ok(file_path)
}

/// Get the screenshot directory for the current ROM
///
/// Creates a directory structure like: <base>/<rom_name>/
fn get_screenshot_directory(base_dir: &Path, rom_path: Option<&Path>) -> PathBuf {
    if let Some(rom_name) = rom_path.and_then(Path::file_stem) {
        return base_dir.join(rom_name);
    }

    base_dir.join("default")
}

/// Save RGB data as a PNG file
fn save_png(path: &Path, data: &[u8], width: u32, height: u32) -> Result<(), ScreenshotError> {
    let file = fs::File::create(path)?;
    let w = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_screenshot_directory() {
        let base = PathBuf::from("screenshots");

        let dir = get_screenshot_directory(&base, None);
        assert!(dir.ends_with("screenshots/default"));

        let rom_path = PathBuf::from("roms/tetris.gb");
        let dir = get_screenshot_directory(&base, Some(&rom_path));
        assert!(dir.ends_with("screenshots/tetris"));
    }

    #[test]
    fn test_save_screenshot_writes_png() {
        let base = std::env::temp_dir().join(format!("gb_frontend_shots_{}", std::process::id()));
        let config = ScreenshotConfig {
            screenshot_directory: base.clone(),
            include_timestamp: false,
        };

        let path = save_screenshot(&RgbFrame::default(), Some(Path::new("tetris.gb")), &config)
            .expect("screenshot failed");

        assert_eq!(path, base.join("tetris").join("screenshot.png"));

        let bytes = fs::read(&path).expect("read png");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let _ = fs::remove_dir_all(&base);
    }
}
