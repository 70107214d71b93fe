// Configuration management
//
// Handles frontend configuration and settings persistence.

use crate::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default configuration file path
pub const CONFIG_FILE: &str = "gb_frontend.toml";

/// Emulator configuration
///
/// Stores all user-configurable settings. Missing keys in the file fall back
/// to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Screenshot settings
    pub screenshot: ScreenshotConfig,
}

/// Video configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Window scale (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level recorded
    pub level: LogLevel,

    /// Optional file that receives every recorded entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Screenshot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// Screenshot directory
    pub screenshot_directory: PathBuf,

    /// Include timestamp in filename
    pub include_timestamp: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            scale: 3,
            vsync: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: LogLevel::Info,
            log_file: None,
        }
    }
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        ScreenshotConfig {
            screenshot_directory: PathBuf::from("screenshots"),
            include_timestamp: true,
        }
    }
}

impl EmulatorConfig {
    /// Load configuration from file or create default
    ///
    /// If the configuration file doesn't exist, creates a default configuration
    /// and saves it to the file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gb_frontend::emulator::EmulatorConfig;
    ///
    /// let config = EmulatorConfig::load_or_default();
    /// ```
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(CONFIG_FILE)
    }

    /// Same as `load_or_default`, for an explicit file
    ///
    /// A file that exists but cannot be read or parsed is left untouched;
    /// defaults are used for this run only.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                // Try to save the default config, but don't fail if we can't
                let _ = config.save_to(path);
                config
            }
            Err(e) => {
                eprintln!(
                    "Warning: ignoring config file '{}': {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load configuration from a file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to a file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gb_frontend_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let config = EmulatorConfig::default();
        assert_eq!(config.video.scale, 3);
        assert!(config.video.vsync);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.logging.log_file.is_none());
        assert_eq!(config.screenshot.screenshot_directory, PathBuf::from("screenshots"));
    }

    #[test]
    fn test_config_serialization() {
        let mut config = EmulatorConfig::default();
        config.logging.level = LogLevel::Debug;
        config.logging.log_file = Some(PathBuf::from("session.log"));

        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        assert!(toml_str.contains("level = \"debug\""));

        let deserialized: EmulatorConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: EmulatorConfig =
            toml::from_str("[video]\nscale = 5\n").expect("Failed to deserialize");

        assert_eq!(config.video.scale, 5);
        assert!(config.video.vsync);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = temp_path("roundtrip");
        let mut config = EmulatorConfig::default();
        config.video.scale = 2;

        config.save_to(&path).expect("save");
        let loaded = EmulatorConfig::load_from(&path).expect("load");
        assert_eq!(loaded.video.scale, 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_or_default_writes_missing_file() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let config = EmulatorConfig::load_or_default_from(&path);
        assert_eq!(config, EmulatorConfig::default());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let path = temp_path("invalid");
        fs::write(&path, "video = 12").expect("write");

        let err = EmulatorConfig::load_from(&path).expect_err("should fail");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_is_kept() {
        let path = temp_path("kept");
        let user = "[video]\nscale = 6\nvsync = \"nope\"\n";
        fs::write(&path, user).expect("write");

        let config = EmulatorConfig::load_or_default_from(&path);
        assert_eq!(config, EmulatorConfig::default());

        let after = fs::read_to_string(&path).expect("read back");
        assert_eq!(after, user);

        let _ = fs::remove_file(&path);
    }
}
