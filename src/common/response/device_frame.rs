// src/common/response/device_frame.rs

use crate::common::error::DecodeError;
use crate::common::types::DeviceStatus;
use serde::Deserialize;

/// One decoded JSON record from the microcontroller.
///
/// Wire keys: `co2`, `tvoc`, `temp`, `humidity`, `hihstatus`, `iaQStatus`.
/// All are required; any extra keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceFrame {
    /// CO2 equivalent, ppm.
    pub co2: u32,
    /// Total VOC, ppb.
    #[serde(rename = "tvoc")]
    pub voc: u32,
    /// Degrees Celsius.
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Temperature/humidity sensor health.
    #[serde(rename = "hihstatus")]
    pub hih_status: i64,
    /// CO2/VOC sensor health.
    #[serde(rename = "iaQStatus")]
    pub iaq_status: i64,
}

impl DeviceFrame {
    /// Parses one trimmed response line.
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Status governing `co2` and `voc`.
    pub fn co2_status(&self) -> DeviceStatus {
        DeviceStatus::from_code(self.iaq_status)
    }

    /// Status governing `temperature` and `humidity`.
    pub fn humidity_status(&self) -> DeviceStatus {
        DeviceStatus::from_code(self.hih_status)
    }
}
