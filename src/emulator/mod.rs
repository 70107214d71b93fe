// Emulator module - Session coordinator
//
// This module ties one emulation core to the frame pacer, and adds the
// session-level features around it: configuration, logging and screenshots.

mod config;
mod pacer;
mod screenshot;

pub use config::{EmulatorConfig, LoggingConfig, ScreenshotConfig, VideoConfig, CONFIG_FILE};
pub use pacer::{FramePacer, FrameSource, TickOutcome};
pub use screenshot::{save_screenshot, ScreenshotError};

use crate::core::{CoreBindings, CoreError, CoreHandle, RomTitle};
use crate::display::RgbFrame;
use crate::logger::{LogLevel, Logger};
use std::path::{Path, PathBuf};

/// Main emulator structure
///
/// Owns exactly one core instance for its whole lifetime; the instance is
/// released when the emulator is dropped.
pub struct Emulator<B: CoreBindings> {
    /// The emulation core
    core: CoreHandle<B>,

    /// Frame pacer, anchored on the first tick after a ROM load
    pacer: Option<FramePacer>,

    /// Configuration
    config: EmulatorConfig,

    /// Session log
    logger: Logger,

    /// Currently loaded ROM path
    rom_path: Option<PathBuf>,

    /// Title reported by the core for the loaded ROM
    title: Option<RomTitle>,

    /// Most recently emitted frame
    last_frame: Option<RgbFrame>,
}

impl<B: CoreBindings> Emulator<B> {
    /// Create a new emulator around a freshly allocated core
    ///
    /// # Errors
    ///
    /// Fails if the core cannot be allocated. This is not recoverable.
    pub fn new(bindings: B, config: EmulatorConfig) -> Result<Self, CoreError> {
        let mut logger = Logger::new(config.logging.level);
        if let Some(path) = &config.logging.log_file {
            if let Err(e) = logger.open_log_file(path) {
                logger.warn(format!("Cannot open log file {}: {}", path.display(), e));
            }
        }

        let core = match CoreHandle::create(bindings) {
            Ok(core) => core,
            Err(e) => {
                logger.error(format!("{}", e));
                return Err(e);
            }
        };
        logger.info("Emulation core created");

        Ok(Emulator {
            core,
            pacer: None,
            config,
            logger,
            rom_path: None,
            title: None,
            last_frame: None,
        })
    }

    /// Load a ROM file
    ///
    /// The core performs all I/O and parsing; the title it reports is returned
    /// as-is. An empty or non-ASCII title is logged as a warning since it
    /// usually means the core could not make sense of the image.
    ///
    /// The pacer is reset, so the next tick only anchors the clock.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<RomTitle, CoreError> {
        let path = path.as_ref();

        let title = match self.core.load_rom(path) {
            Ok(title) => title,
            Err(e) => {
                self.logger.error(format!("{}", e));
                return Err(e);
            }
        };

        if title.is_empty() || !title.is_ascii_printable() {
            self.logger.warn(format!(
                "Core reported title {:?} for {}; title may not be meaningful",
                title.as_str(),
                path.display()
            ));
        } else {
            self.logger
                .info(format!("Loaded ROM \"{}\" from {}", title, path.display()));
        }

        self.rom_path = Some(path.to_path_buf());
        self.title = Some(title);
        self.pacer = None;
        self.last_frame = None;

        Ok(title)
    }

    /// Process one tick of the presentation layer's clock
    ///
    /// `now` is a timestamp in seconds from any monotonic origin. Returns the
    /// frame to display when this tick ran at least one frame.
    pub fn tick(&mut self, now: f64) -> Option<&RgbFrame> {
        if self.rom_path.is_none() {
            return None;
        }

        let Some(pacer) = self.pacer.as_mut() else {
            self.pacer = Some(FramePacer::new(now));
            self.logger.debug(format!("Pacer anchored at {:.6}s", now));
            return None;
        };

        let outcome = pacer.tick(now, &mut self.core);

        if self.logger.enabled(LogLevel::Trace) {
            self.logger.trace(format!(
                "Tick at {:.6}s ran {} frame(s), {:.6}s carried",
                now,
                outcome.steps,
                pacer.accumulated_time()
            ));
        }
        if outcome.discarded() > 0 {
            self.logger.debug(format!(
                "Catch-up burst of {} frames, {} discarded",
                outcome.steps,
                outcome.discarded()
            ));
        }

        let frame = outcome.frame?;
        self.last_frame = Some(frame);
        self.last_frame.as_ref()
    }

    /// Save the last emitted frame as a PNG
    ///
    /// Before any frame has been emitted a blank frame is saved.
    pub fn screenshot(&mut self) -> Result<PathBuf, ScreenshotError> {
        let blank;
        let frame = match &self.last_frame {
            Some(frame) => frame,
            None => {
                blank = RgbFrame::default();
                &blank
            }
        };

        let result = save_screenshot(frame, self.rom_path.as_deref(), &self.config.screenshot);
        match &result {
            Ok(path) => self
                .logger
                .info(format!("Screenshot saved to {}", path.display())),
            Err(e) => self.logger.error(format!("Screenshot failed: {}", e)),
        }
        result
    }

    /// Title of the loaded ROM
    pub fn title(&self) -> Option<&RomTitle> {
        self.title.as_ref()
    }

    /// Get the currently loaded ROM path
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }

    /// Most recently emitted frame
    pub fn last_frame(&self) -> Option<&RgbFrame> {
        self.last_frame.as_ref()
    }

    /// The frame pacer, once anchored
    pub fn pacer(&self) -> Option<&FramePacer> {
        self.pacer.as_ref()
    }

    /// Get reference to configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Get reference to the session log
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Get mutable reference to the session log
    pub fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }
}

impl<B: CoreBindings> Drop for Emulator<B> {
    fn drop(&mut self) {
        self.logger.info("Releasing emulation core");
    }
}
