// src/common/response/mod.rs

pub mod device_frame;
pub mod reading;

pub use device_frame::DeviceFrame;
pub use reading::{ChannelValue, Measured, SensorReading};
