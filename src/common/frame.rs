// src/common/frame.rs

use super::error::DecodeError;
use core::str;

/// Prompt sent to the microcontroller: two `"\n\r"` tokens.
pub const WAKE_REQUEST: &[u8] = b"\n\r\n\r";

/// Byte that ends every response line.
pub const FRAME_TERMINATOR: u8 = b'\n';

/// Capacity of the line buffer. The firmware emits roughly 90 bytes per frame.
pub const MAX_FRAME_LEN: usize = 256;

/// One undecoded response line, as received.
///
/// May still carry the terminator, a trailing `\r` or padding whitespace.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RawFrame<'a>(&'a [u8]);

impl<'a> RawFrame<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        RawFrame(bytes)
    }

    /// Returns the line's text with the terminator and surrounding whitespace removed.
    ///
    /// `Ok(None)` means nothing but whitespace arrived.
    pub fn text(&self) -> Result<Option<&'a str>, DecodeError> {
        let text = str::from_utf8(self.0).map_err(|_| DecodeError::InvalidUtf8)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed))
        }
    }
}
