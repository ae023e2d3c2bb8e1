// src/input/config.rs

use super::information::INPUT_INFORMATION;
use crate::common::{error::ConfigError, timing, types::FieldSelection};
use core::time::Duration;
use serde::Deserialize;

/// Per-deployment settings the host hands to the input.
///
/// Every key is optional; missing keys fall back to the defaults advertised
/// in [`INPUT_INFORMATION`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Serial device path.
    pub uart_location: String,
    pub baud_rate: u32,
    /// Channels to report, e.g. `["co2", "temperature"]`.
    pub measurements: FieldSelection,
    /// Sampling period, seconds.
    pub period: u64,
    pub response_timeout_ms: u64,
}

impl InputConfig {
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period)
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }

    /// Rejects settings the polling loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            uart_location: INPUT_INFORMATION.uart_location.to_string(),
            baud_rate: INPUT_INFORMATION.uart_baud_rate,
            measurements: FieldSelection::ALL,
            period: timing::DEFAULT_PERIOD.as_secs(),
            response_timeout_ms: timing::RESPONSE_TIMEOUT.as_millis() as u64,
        }
    }
}
