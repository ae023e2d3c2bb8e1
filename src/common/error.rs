// src/common/error.rs

use core::fmt::Debug;

/// Failure of a single poll cycle.
///
/// Every variant is recoverable: the poller keeps its channel open and the
/// next call to `poll()` starts a fresh cycle.
#[derive(Debug, thiserror::Error)]
pub enum PollError<E = ()>
where
    E: Debug, // Io(E) is formatted with Debug
{
    /// Underlying I/O error reported by the serial channel.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// No terminated line arrived before the deadline, or the line was empty.
    #[error("no response from device")]
    NoResponse,

    /// A line arrived but could not be decoded into a device frame.
    #[error("failed to decode frame: {0}")]
    Decode(DecodeError),
}

impl<E: Debug> PollError<E> {
    /// True for the cycle-level "device was silent" outcome.
    pub fn is_no_response(&self) -> bool {
        matches!(self, PollError::NoResponse)
    }
}

/// Reasons a received line is not a usable device frame.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("frame is not valid UTF-8")]
    InvalidUtf8,

    /// Line buffer filled up before a terminator was seen.
    #[error("frame exceeds {max} bytes without a terminator")]
    FrameTooLong { max: usize },

    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unknown measurement channel name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown measurement field: '{0}'")]
pub struct FieldParseError(pub String);

/// Settings that cannot drive a polling loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("period must be at least one second")]
    ZeroPeriod,
}

/// The serial device could not be opened; no poller was created.
#[cfg(feature = "serialport")]
#[derive(Debug, thiserror::Error)]
#[error("failed to open {path} at {baud_rate} baud")]
pub struct ConnectionError {
    pub path: String,
    pub baud_rate: u32,
    #[source]
    pub source: serialport::Error,
}
