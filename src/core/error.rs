// Errors raised at the core boundary

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while talking to the emulation core
#[derive(Debug)]
pub enum CoreError {
    /// The core factory returned a null instance
    ///
    /// There is no recovery path; callers should shut down.
    AllocationFailed,

    /// The ROM path cannot be passed across the C boundary
    InvalidPath(PathBuf),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::AllocationFailed => write!(f, "emulation core allocation failed"),
            CoreError::InvalidPath(path) => {
                write!(f, "ROM path cannot be passed to the core: {}", path.display())
            }
        }
    }
}

impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CoreError::AllocationFailed.to_string(),
            "emulation core allocation failed"
        );

        let err = CoreError::InvalidPath(PathBuf::from("roms/bad.gb"));
        assert!(err.to_string().contains("roms/bad.gb"));
    }
}
