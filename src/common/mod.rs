// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod response;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From error.rs
pub use error::{ConfigError, DecodeError, FieldParseError, PollError};
#[cfg(feature = "serialport")]
pub use error::ConnectionError;

// From frame.rs
pub use frame::RawFrame;

// From hal_traits.rs
pub use hal_traits::{PollInstant, PollTimer, SerialChannel};

// From response/mod.rs
pub use response::{ChannelValue, DeviceFrame, Measured, SensorReading};

// From types.rs
pub use types::{DeviceStatus, Field, FieldSelection, MeasurementDescriptor, MEASUREMENTS};

// timing.rs is not re-exported; use common::timing::* directly
