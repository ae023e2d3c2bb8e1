// src/poller/io_helpers.rs

use super::SensorPoller;
use crate::common::{
    error::{DecodeError, PollError},
    frame::{FRAME_TERMINATOR, MAX_FRAME_LEN, WAKE_REQUEST},
    hal_traits::{PollTimer, SerialChannel},
    timing,
};
use arrayvec::ArrayVec;
use log::debug;
use nb::Result as NbResult;

/// Bytes of one response line, terminator included.
pub(super) type LineBuffer = ArrayVec<u8, MAX_FRAME_LEN>;

impl<IF> SensorPoller<IF>
where
    IF: SerialChannel + PollTimer,
{
    /// Executes a non-blocking I/O operation (`f`) repeatedly until it
    /// stops returning `WouldBlock`, or until `deadline` passes.
    ///
    /// A missed deadline is reported as `NoResponse`: the device did not
    /// drain or produce data in time.
    pub(super) fn execute_blocking_io_until<FN, T>(
        &mut self,
        deadline: IF::Instant,
        mut f: FN,
    ) -> Result<T, PollError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(PollError::NoResponse);
                    }
                    self.interface.delay_us(timing::IO_RETRY_DELAY_US);
                }
                Err(nb::Error::Other(e)) => return Err(PollError::Io(e)),
            }
        }
    }

    /// Writes the wake/request token and waits for it to leave the transmit buffer.
    pub(super) fn send_wake_request(&mut self) -> Result<(), PollError<IF::Error>> {
        let write_deadline =
            self.interface.now() + timing::write_timeout(self.baud_rate, WAKE_REQUEST.len());

        for byte in WAKE_REQUEST {
            self.execute_blocking_io_until(write_deadline, |iface| iface.write_byte(*byte))?;
        }

        let flush_deadline = self.interface.now() + timing::FLUSH_TIMEOUT;
        self.execute_blocking_io_until(flush_deadline, |iface| iface.flush())?;

        debug!("wake request sent");
        Ok(())
    }

    /// Accumulates bytes until the frame terminator, bounded by the response timeout.
    pub(super) fn read_frame_line(&mut self) -> Result<LineBuffer, PollError<IF::Error>> {
        let deadline = self.interface.now() + self.response_timeout;
        let mut line = LineBuffer::new();

        loop {
            let byte = self.execute_blocking_io_until(deadline, |iface| iface.read_byte())?;

            if line.try_push(byte).is_err() {
                return Err(PollError::Decode(DecodeError::FrameTooLong {
                    max: MAX_FRAME_LEN,
                }));
            }

            if byte == FRAME_TERMINATOR {
                return Ok(line);
            }
        }
    }
}
