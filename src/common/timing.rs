// src/common/timing.rs

use core::time::Duration;

// === Link defaults ===

/// Baud rate the microcontroller firmware runs its UART at.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Serial framing is 8N1: 1 start bit + 8 data bits + 1 stop bit.
pub const BITS_PER_BYTE: u32 = 10;

// === Request/Response timing ===

/// Overall deadline for a complete response line, measured from the end of the wake request.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(1);

/// Slack added on top of the nominal transmit time of the wake request.
pub const WRITE_TIMEOUT_MARGIN: Duration = Duration::from_millis(20);

/// Maximum time to wait for the transmit buffer to drain.
pub const FLUSH_TIMEOUT: Duration = Duration::from_millis(50);

/// Sleep between polls of a non-blocking read/write that returned `WouldBlock`.
pub const IO_RETRY_DELAY_US: u32 = 100;

// === Host defaults ===

/// Default sampling period used when the host configuration does not provide one.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(15);

/// Nominal time on the wire for one byte at `baud_rate`.
pub fn byte_duration(baud_rate: u32) -> Duration {
    // Guard against a zero baud rate from a bad config; treat it as the default.
    let baud = if baud_rate == 0 { DEFAULT_BAUD_RATE } else { baud_rate };
    Duration::from_nanos(1_000_000_000u64 * BITS_PER_BYTE as u64 / baud as u64)
}

/// Deadline for writing `len` bytes at `baud_rate`.
pub fn write_timeout(baud_rate: u32, len: usize) -> Duration {
    byte_duration(baud_rate) * len as u32 + WRITE_TIMEOUT_MARGIN
}
