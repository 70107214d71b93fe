// Window module - Presents emulator frames
//
// A fixed-size winit window backed by a pixels surface. The event loop is the
// periodic tick source: every redraw calls `Emulator::tick` with the time since
// the window opened and blits whatever frame it emits.

use super::framebuffer::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::CoreBindings;
use crate::emulator::{Emulator, VideoConfig};
use pixels::wgpu::PresentMode;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Scale factor (1x to 8x)
    pub scale: u32,
    /// Whether to enable VSync
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a new window configuration with default values
    ///
    /// Default: 3x scale, VSync enabled
    pub fn new() -> Self {
        Self {
            scale: 3,
            vsync: true,
        }
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8);
        self
    }

    /// Set VSync enabled or disabled
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Get the window width in pixels
    pub fn window_width(&self) -> u32 {
        SCREEN_WIDTH as u32 * self.scale
    }

    /// Get the window height in pixels
    pub fn window_height(&self) -> u32 {
        SCREEN_HEIGHT as u32 * self.scale
    }

    /// Surface present mode for the VSync setting
    pub fn present_mode(&self) -> PresentMode {
        if self.vsync {
            PresentMode::AutoVsync
        } else {
            PresentMode::AutoNoVsync
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&VideoConfig> for WindowConfig {
    fn from(video: &VideoConfig) -> Self {
        WindowConfig::new()
            .with_scale(video.scale)
            .with_vsync(video.vsync)
    }
}

/// Emulator window - presents frames emitted by an emulator session
pub struct EmulatorWindow<B: CoreBindings> {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    emulator: Emulator<B>,
    started: Instant,
}

impl<B: CoreBindings> EmulatorWindow<B> {
    /// Create a new emulator window (the OS window is created when the event loop starts)
    pub fn new(config: WindowConfig, emulator: Emulator<B>) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            emulator,
            started: Instant::now(),
        }
    }

    fn title(&self) -> String {
        match self.emulator.title() {
            Some(title) if !title.is_empty() => format!("Game Boy - {}", title),
            _ => "Game Boy".to_string(),
        }
    }

    /// Tick the emulator and present a frame if one was emitted
    fn tick_and_render(&mut self) -> Result<(), pixels::Error> {
        let now = self.started.elapsed().as_secs_f64();

        let Some(frame) = self.emulator.tick(now) else {
            return Ok(());
        };

        if let Some(pixels) = &mut self.pixels {
            frame.to_rgba(pixels.frame_mut());
            pixels.render()?;
        }

        Ok(())
    }

    fn take_screenshot(&mut self) {
        match self.emulator.screenshot() {
            Ok(path) => println!("Screenshot saved to {}", path.display()),
            Err(e) => eprintln!("Screenshot failed: {}", e),
        }
    }
}

impl<B: CoreBindings> ApplicationHandler for EmulatorWindow<B> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.emulator
                    .logger_mut()
                    .error(format!("Failed to create window: {}", e));
                event_loop.exit();
                return;
            }
        };
        let window_size = window.inner_size();

        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        let pixels = match PixelsBuilder::new(
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
            surface_texture,
        )
        .present_mode(self.config.present_mode())
        .build()
        {
            Ok(pixels) => pixels,
            Err(e) => {
                self.emulator
                    .logger_mut()
                    .error(format!("Failed to create pixel buffer: {}", e));
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                println!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::F12),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.take_screenshot(),
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.tick_and_render() {
                    eprintln!("Render error: {}", err);
                    event_loop.exit();
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the emulator in a window until it is closed
///
/// # Arguments
/// * `config` - Window configuration
/// * `emulator` - Emulator with a ROM loaded
///
/// # Returns
/// Result indicating success or error
pub fn run_emulator<B: CoreBindings>(
    config: WindowConfig,
    emulator: Emulator<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    if config.vsync {
        event_loop.set_control_flow(ControlFlow::Wait);
    } else {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    let mut display = EmulatorWindow::new(config, emulator);

    println!("Starting emulator...");
    println!("  Resolution: {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);
    println!(
        "  Window size: {}x{}",
        config.window_width(),
        config.window_height()
    );
    println!("  Scale: {}x", config.scale);
    println!("  VSync: {}", config.vsync);

    event_loop.run_app(&mut display)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::new();
        assert_eq!(config.scale, 3);
        assert!(config.vsync);
    }

    #[test]
    fn test_window_dimensions() {
        let config = WindowConfig::new().with_scale(2);
        assert_eq!(config.window_width(), 320);
        assert_eq!(config.window_height(), 288);
    }

    #[test]
    fn test_scale_clamping() {
        let config = WindowConfig::new().with_scale(100);
        assert_eq!(config.scale, 8);

        let config = WindowConfig::new().with_scale(0);
        assert_eq!(config.scale, 1);
    }

    #[test]
    fn test_from_video_config() {
        let video = VideoConfig {
            scale: 4,
            vsync: false,
        };
        let config = WindowConfig::from(&video);
        assert_eq!(config.scale, 4);
        assert!(!config.vsync);
    }

    #[test]
    fn test_vsync_selects_present_mode() {
        assert_eq!(WindowConfig::new().present_mode(), PresentMode::AutoVsync);
        assert_eq!(
            WindowConfig::new().with_vsync(false).present_mode(),
            PresentMode::AutoNoVsync
        );

        let video = VideoConfig {
            scale: 3,
            vsync: false,
        };
        assert_eq!(
            WindowConfig::from(&video).present_mode(),
            PresentMode::AutoNoVsync
        );
    }
}
