// src/input/information.rs

use crate::common::{timing, types::MeasurementDescriptor, MEASUREMENTS};

/// Static description of this input, as a host lists it in its input catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputInformation {
    pub input_name_unique: &'static str,
    pub input_manufacturer: &'static str,
    pub input_name: &'static str,
    pub input_library: &'static str,
    pub measurements_name: &'static str,
    pub measurements: &'static [MeasurementDescriptor],
    /// All channels of a reading share one timestamp.
    pub measurements_use_same_timestamp: bool,

    pub url_manufacturer: &'static str,
    pub url_datasheet: &'static str,
    pub url_product_purchase: &'static [&'static str],

    /// Host options this input understands.
    pub options_enabled: &'static [&'static str],
    pub interfaces: &'static [&'static str],

    pub uart_location: &'static str,
    pub uart_baud_rate: u32,
    pub uart_address_editable: bool,
}

pub const INPUT_INFORMATION: InputInformation = InputInformation {
    input_name_unique: "Arduino_interface",
    input_manufacturer: "Arduino",
    input_name: "Arduino_interface",
    input_library: "json",
    measurements_name: "CO2/VOC/Temperature/Humidity",
    measurements: &MEASUREMENTS,
    measurements_use_same_timestamp: true,

    url_manufacturer: "https://github.com/andycb/AirQualityMonitor",
    url_datasheet: "https://andybradford.dev/2019/11/29/monitoring-my-indoor-air-quality/",
    url_product_purchase: &[
        "https://at.rs-online.com/web/p/temperatursensoren-und-feuchtigkeitssensoren/2036943/",
        "https://at.rs-online.com/web/p/luftgutesensoren/1024162/",
    ],

    options_enabled: &["uart_location", "measurements_select", "period"],
    interfaces: &["UART"],

    uart_location: "/dev/ttyUSB0",
    uart_baud_rate: timing::DEFAULT_BAUD_RATE,
    uart_address_editable: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_matches_channel_table() {
        assert_eq!(INPUT_INFORMATION.measurements.len(), 4);
        assert_eq!(INPUT_INFORMATION.measurements[0].measurement, "co2");
        assert_eq!(INPUT_INFORMATION.measurements[3].unit, "percent");
        assert_eq!(INPUT_INFORMATION.uart_baud_rate, 9600);
        assert_eq!(INPUT_INFORMATION.interfaces, &["UART"]);
    }
}
