// Cartridge title returned by the core when a ROM is loaded

use std::borrow::Cow;
use std::fmt;

/// Length of the title field in the cartridge header
pub const TITLE_LEN: usize = 16;

/// Cartridge title as reported by the core
///
/// Holds the raw 16-byte buffer; the visible title ends at the first NUL.
/// The bytes are not validated, they are whatever the core wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RomTitle {
    raw: [u8; TITLE_LEN],
}

impl RomTitle {
    /// Build a title from the buffer filled in by the core
    ///
    /// Only the first 16 bytes are kept; shorter input is NUL-padded.
    pub fn from_raw(bytes: &[u8]) -> Self {
        let mut raw = [0u8; TITLE_LEN];
        let len = bytes.len().min(TITLE_LEN);
        raw[..len].copy_from_slice(&bytes[..len]);
        Self { raw }
    }

    /// The full 16-byte buffer, padding included
    pub fn raw(&self) -> &[u8; TITLE_LEN] {
        &self.raw
    }

    /// Title bytes up to the first NUL
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.raw.iter().position(|&b| b == 0).unwrap_or(TITLE_LEN);
        &self.raw[..end]
    }

    /// Title as text, with invalid UTF-8 replaced
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Whether the title is printable ASCII, as cartridge headers are
    pub fn is_ascii_printable(&self) -> bool {
        self.as_bytes()
            .iter()
            .all(|b| b.is_ascii_graphic() || *b == b' ')
    }
}

impl fmt::Display for RomTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}
