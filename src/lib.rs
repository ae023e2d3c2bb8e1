// src/lib.rs

//! Polls a serial-attached air-quality microcontroller for CO2, VOC,
//! temperature and humidity.
//!
//! Each [`SensorPoller::poll`] discards stale input, sends the wake request,
//! reads one JSON line within the response timeout and returns a
//! [`SensorReading`] filtered to the enabled channels.
//!
//! ```no_run
//! use iaq_uart::{Field, FieldSelection, SensorPoller};
//!
//! let enabled = FieldSelection::EMPTY.with(Field::Co2).with(Field::Temperature);
//! let mut poller = SensorPoller::open("/dev/ttyUSB0", 9600, enabled)?;
//!
//! match poller.poll() {
//!     Ok(reading) => {
//!         for channel in reading.channels() {
//!             println!("{}: {} {}", channel.descriptor.measurement, channel.value, channel.descriptor.unit);
//!         }
//!     }
//!     Err(e) => eprintln!("no reading this period: {e}"),
//! }
//! # Ok::<(), iaq_uart::ConnectionError>(())
//! ```

pub mod common;
pub mod input;
pub mod poller;

// Re-export key types for convenience
pub use common::{
    DecodeError, DeviceStatus, Field, FieldSelection, Measured, PollError, SensorReading,
};
#[cfg(feature = "serialport")]
pub use common::ConnectionError;
pub use poller::SensorPoller;
