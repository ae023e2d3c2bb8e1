// src/input/mod.rs

// Host-facing side of the crate: what a monitoring application needs to
// configure, open and schedule this input.

pub mod config;
pub mod information;

pub use config::InputConfig;
pub use information::{InputInformation, INPUT_INFORMATION};

use crate::common::response::SensorReading;

/// Lifecycle a host drives: open once, then poll once per sampling period.
///
/// The host depends only on this trait, never on the poller's internals.
pub trait MeasurementInput: Sized {
    type Config;
    type OpenError: std::error::Error;
    type PollError: std::error::Error;

    /// Acquires the device. Failure leaves nothing to clean up.
    fn open(config: &Self::Config) -> Result<Self, Self::OpenError>;

    /// One acquisition cycle. Errors skip this period only.
    fn poll(&mut self) -> Result<SensorReading, Self::PollError>;
}

#[cfg(feature = "serialport")]
mod serial_input {
    use super::{InputConfig, MeasurementInput};
    use crate::common::{
        error::{ConnectionError, PollError},
        response::SensorReading,
    };
    use crate::poller::{SensorPoller, SerialPortChannel};
    use std::io;

    impl MeasurementInput for SensorPoller<SerialPortChannel> {
        type Config = InputConfig;
        type OpenError = ConnectionError;
        type PollError = PollError<io::Error>;

        fn open(config: &InputConfig) -> Result<Self, ConnectionError> {
            let poller =
                SensorPoller::open(&config.uart_location, config.baud_rate, config.measurements)?;
            Ok(poller.with_response_timeout(config.response_timeout()))
        }

        fn poll(&mut self) -> Result<SensorReading, Self::PollError> {
            SensorPoller::poll(self)
        }
    }
}
