// src/common/response/reading.rs

use super::device_frame::DeviceFrame;
use crate::common::types::{DeviceStatus, Field, FieldSelection, MeasurementDescriptor};
use chrono::{DateTime, Utc};

/// A channel value together with its validity flag.
///
/// An invalid value is always the zero sentinel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Measured<T> {
    pub value: T,
    pub valid: bool,
}

impl<T: Default> Measured<T> {
    pub fn valid(value: T) -> Self {
        Measured { value, valid: true }
    }

    pub fn invalid() -> Self {
        Measured {
            value: T::default(),
            valid: false,
        }
    }

    /// Copies `value` through when `status` is ready, otherwise yields the zero sentinel.
    fn gated(value: T, status: DeviceStatus) -> Self {
        if status.is_ready() {
            Self::valid(value)
        } else {
            Self::invalid()
        }
    }
}

/// Flattened view of one channel of a reading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChannelValue {
    pub field: Field,
    pub descriptor: &'static MeasurementDescriptor,
    pub value: f64,
    pub valid: bool,
}

/// Result of one poll cycle.
///
/// Channels outside the poller's `FieldSelection` are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// When the frame arrived. Shared by all channels.
    pub received_at: DateTime<Utc>,

    pub co2: Option<Measured<u32>>,
    pub voc: Option<Measured<u32>>,
    pub temperature: Option<Measured<f64>>,
    pub humidity: Option<Measured<f64>>,

    pub co2_status: DeviceStatus,
    pub humidity_status: DeviceStatus,
}

impl SensorReading {
    /// Applies status gating and field selection to a decoded frame.
    pub fn from_frame(
        frame: &DeviceFrame,
        enabled: FieldSelection,
        received_at: DateTime<Utc>,
    ) -> Self {
        let co2_status = frame.co2_status();
        let humidity_status = frame.humidity_status();

        let pick = |field: Field| enabled.contains(field);

        SensorReading {
            received_at,
            co2: pick(Field::Co2).then(|| Measured::gated(frame.co2, co2_status)),
            voc: pick(Field::Voc).then(|| Measured::gated(frame.voc, co2_status)),
            temperature: pick(Field::Temperature)
                .then(|| Measured::gated(frame.temperature, humidity_status)),
            humidity: pick(Field::Humidity)
                .then(|| Measured::gated(frame.humidity, humidity_status)),
            co2_status,
            humidity_status,
        }
    }

    /// Value of a single channel, or `None` if it was not enabled.
    pub fn get(&self, field: Field) -> Option<ChannelValue> {
        let (value, valid) = match field {
            Field::Co2 => self.co2.map(|m| (m.value as f64, m.valid))?,
            Field::Voc => self.voc.map(|m| (m.value as f64, m.valid))?,
            Field::Temperature => self.temperature.map(|m| (m.value, m.valid))?,
            Field::Humidity => self.humidity.map(|m| (m.value, m.valid))?,
        };
        Some(ChannelValue {
            field,
            descriptor: field.descriptor(),
            value,
            valid,
        })
    }

    /// Enabled channels in channel-index order.
    pub fn channels(&self) -> impl Iterator<Item = ChannelValue> + '_ {
        Field::ALL.into_iter().filter_map(move |f| self.get(f))
    }

    /// True when no channel was enabled.
    pub fn is_empty(&self) -> bool {
        self.channels().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(hih: i64, iaq: i64) -> DeviceFrame {
        DeviceFrame {
            co2: 450,
            voc: 120,
            temperature: 22.5,
            humidity: 41.0,
            hih_status: hih,
            iaq_status: iaq,
        }
    }

    fn at() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_all_ready_copies_raw_values() {
        let r = SensorReading::from_frame(&frame(0, 0), FieldSelection::ALL, at());
        assert_eq!(r.co2, Some(Measured::valid(450)));
        assert_eq!(r.voc, Some(Measured::valid(120)));
        assert_eq!(r.temperature, Some(Measured::valid(22.5)));
        assert_eq!(r.humidity, Some(Measured::valid(41.0)));
        assert_eq!(r.received_at, at());
    }

    #[test]
    fn test_every_subset_reports_only_enabled_fields() {
        for bits in 0u8..16 {
            let enabled: FieldSelection = Field::ALL
                .into_iter()
                .filter(|f| bits & (1 << f.index()) != 0)
                .collect();
            let r = SensorReading::from_frame(&frame(0, 0), enabled, at());

            assert_eq!(r.co2.is_some(), enabled.contains(Field::Co2));
            assert_eq!(r.voc.is_some(), enabled.contains(Field::Voc));
            assert_eq!(r.temperature.is_some(), enabled.contains(Field::Temperature));
            assert_eq!(r.humidity.is_some(), enabled.contains(Field::Humidity));
            assert_eq!(r.channels().count(), enabled.len());
            assert!(r.channels().all(|c| c.valid));
        }
    }

    #[test]
    fn test_humidity_status_zeroes_temperature_and_humidity() {
        for code in [1i64, 16, 255, -1] {
            let r = SensorReading::from_frame(&frame(code, 0), FieldSelection::ALL, at());
            assert_eq!(r.temperature, Some(Measured::invalid()));
            assert_eq!(r.humidity, Some(Measured::invalid()));
            assert_eq!(r.co2, Some(Measured::valid(450)));
            assert_eq!(r.voc, Some(Measured::valid(120)));
            assert_eq!(r.humidity_status.code(), code);
        }
    }

    #[test]
    fn test_co2_status_zeroes_co2_and_voc() {
        for code in [1i64, 16, 128, 65_536] {
            let r = SensorReading::from_frame(&frame(0, code), FieldSelection::ALL, at());
            assert_eq!(r.co2, Some(Measured { value: 0, valid: false }));
            assert_eq!(r.voc, Some(Measured { value: 0, valid: false }));
            assert_eq!(r.temperature, Some(Measured::valid(22.5)));
            assert_eq!(r.humidity, Some(Measured::valid(41.0)));
        }
    }

    #[test]
    fn test_channels_carry_descriptors() {
        let enabled = FieldSelection::EMPTY.with(Field::Co2).with(Field::Temperature);
        let r = SensorReading::from_frame(&frame(0, 16), enabled, at());
        let channels: Vec<_> = r.channels().collect();

        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].descriptor.unit, "ppm");
        assert_eq!(channels[0].value, 0.0);
        assert!(!channels[0].valid);
        assert_eq!(channels[1].descriptor.measurement, "temperature");
        assert_eq!(channels[1].value, 22.5);
        assert!(channels[1].valid);
        assert!(r.get(Field::Humidity).is_none());
    }

    #[test]
    fn test_empty_selection() {
        let r = SensorReading::from_frame(&frame(0, 0), FieldSelection::EMPTY, at());
        assert!(r.is_empty());
    }
}
