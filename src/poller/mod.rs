// src/poller/mod.rs

mod io_helpers;
#[cfg(feature = "serialport")]
pub mod serial_port;

#[cfg(feature = "serialport")]
pub use serial_port::SerialPortChannel;

use crate::common::{
    error::PollError,
    frame::RawFrame,
    hal_traits::{PollTimer, SerialChannel},
    response::{DeviceFrame, SensorReading},
    timing,
    types::{DeviceStatus, FieldSelection},
};
use chrono::Utc;
use core::time::Duration;
use log::{debug, error, info, warn};

/// Polls the air-quality microcontroller for one reading per call.
///
/// Owns the serial channel for its whole life. Dropping the poller, or
/// calling [`SensorPoller::close`], closes the channel.
#[derive(Debug)]
pub struct SensorPoller<IF>
where
    IF: SerialChannel + PollTimer,
{
    interface: IF,
    enabled: FieldSelection,
    baud_rate: u32,
    response_timeout: Duration,
}

impl<IF> SensorPoller<IF>
where
    IF: SerialChannel + PollTimer,
{
    pub fn new(interface: IF, enabled: FieldSelection) -> Self {
        SensorPoller {
            interface,
            enabled,
            baud_rate: timing::DEFAULT_BAUD_RATE,
            response_timeout: timing::RESPONSE_TIMEOUT,
        }
    }

    /// Overrides the deadline for a complete response line.
    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    /// Link speed, used to size the write deadline for the wake request.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn enabled_fields(&self) -> FieldSelection {
        self.enabled
    }

    pub fn response_timeout(&self) -> Duration {
        self.response_timeout
    }

    /// Releases the serial channel.
    pub fn close(self) -> IF {
        self.interface
    }

    /// Runs one request/response/decode cycle.
    ///
    /// Every error is local to this cycle; the channel stays open and the
    /// next call starts from a clean buffer.
    pub fn poll(&mut self) -> Result<SensorReading, PollError<IF::Error>> {
        // 1. Drop anything left over from an earlier, unconsumed response
        self.interface.discard_buffers().map_err(PollError::Io)?;

        // 2. Prompt the device for a fresh frame
        self.send_wake_request()?;

        // 3. One terminated line, bounded by the response timeout
        let timeout = self.response_timeout;
        let line = self.read_frame_line().inspect_err(|e| match e {
            PollError::NoResponse => warn!("no frame within {timeout:?}"),
            other => error!("failed to read frame: {other}"),
        })?;
        let received_at = Utc::now();

        // 4. Strip terminator and whitespace
        let text = match RawFrame::new(&line).text() {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("device sent an empty line");
                return Err(PollError::NoResponse);
            }
            Err(e) => {
                error!("discarding frame: {e}");
                return Err(PollError::Decode(e));
            }
        };
        debug!("frame: {text}");

        // 5. Decode
        let frame = DeviceFrame::decode(text).map_err(|e| {
            error!("discarding frame: {e}");
            PollError::Decode(e)
        })?;

        // 6-8. Status gating, field selection, shared timestamp
        log_status("CO2/VOC", frame.co2_status());
        log_status("temperature/humidity", frame.humidity_status());

        Ok(SensorReading::from_frame(&frame, self.enabled, received_at))
    }
}

fn log_status(sensor: &str, status: DeviceStatus) {
    match status {
        DeviceStatus::Ready => {}
        DeviceStatus::WarmingUp => info!("{sensor} sensor is warming up, values invalid"),
        DeviceStatus::Fault(code) => error!("{sensor} sensor reports error {code}, values invalid"),
    }
}
