// src/common/types.rs

use super::error::FieldParseError;
use core::fmt;
use core::str::FromStr;
use serde::Deserialize;

// --- Measurement channels ---

/// One of the four measurement channels the device reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Field {
    Co2 = 0,
    Voc = 1,
    Temperature = 2,
    Humidity = 3,
}

impl Field {
    /// All channels in channel-index order.
    pub const ALL: [Field; 4] = [Field::Co2, Field::Voc, Field::Temperature, Field::Humidity];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        self.descriptor().measurement
    }

    /// Static name/unit entry for this channel.
    pub fn descriptor(self) -> &'static MeasurementDescriptor {
        &MEASUREMENTS[self.index()]
    }

    /// Tries to convert a channel index into a `Field`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "co2" => Ok(Field::Co2),
            "voc" | "tvoc" => Ok(Field::Voc),
            "temperature" | "temp" => Ok(Field::Temperature),
            "humidity" => Ok(Field::Humidity),
            _ => Err(FieldParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Enabled channel set ---

/// Set of channels the deployment wants reported.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Deserialize)]
#[serde(from = "Vec<Field>")]
pub struct FieldSelection(u8);

impl FieldSelection {
    pub const EMPTY: FieldSelection = FieldSelection(0);
    pub const ALL: FieldSelection = FieldSelection(0b1111);

    #[inline]
    const fn bit(field: Field) -> u8 {
        1 << field as u8
    }

    pub const fn contains(&self, field: Field) -> bool {
        self.0 & Self::bit(field) != 0
    }

    pub fn insert(&mut self, field: Field) {
        self.0 |= Self::bit(field);
    }

    pub fn remove(&mut self, field: Field) {
        self.0 &= !Self::bit(field);
    }

    pub const fn with(self, field: Field) -> Self {
        FieldSelection(self.0 | Self::bit(field))
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Enabled channels in channel-index order.
    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl FromIterator<Field> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut selection = FieldSelection::EMPTY;
        for field in iter {
            selection.insert(field);
        }
        selection
    }
}

impl From<Vec<Field>> for FieldSelection {
    fn from(fields: Vec<Field>) -> Self {
        fields.into_iter().collect()
    }
}

/// Parses a comma separated list such as `"co2,temperature"`.
impl FromStr for FieldSelection {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Field::from_str)
            .collect()
    }
}

impl fmt::Debug for FieldSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// --- Device status codes ---

/// Health of one of the device's sub-sensors, as reported in a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DeviceStatus {
    /// Code 0: data is valid.
    Ready,
    /// Code 16: sensor is still warming up after power-on. Normal, data is invalid.
    WarmingUp,
    /// Any other non-zero code.
    Fault(i64),
}

impl DeviceStatus {
    pub const READY_CODE: i64 = 0;
    pub const WARMING_UP_CODE: i64 = 16;

    pub const fn from_code(code: i64) -> Self {
        match code {
            Self::READY_CODE => DeviceStatus::Ready,
            Self::WARMING_UP_CODE => DeviceStatus::WarmingUp,
            other => DeviceStatus::Fault(other),
        }
    }

    pub const fn code(&self) -> i64 {
        match self {
            DeviceStatus::Ready => Self::READY_CODE,
            DeviceStatus::WarmingUp => Self::WARMING_UP_CODE,
            DeviceStatus::Fault(code) => *code,
        }
    }

    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self, DeviceStatus::Ready)
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Ready => write!(f, "ready"),
            DeviceStatus::WarmingUp => write!(f, "warming up"),
            DeviceStatus::Fault(code) => write!(f, "fault (code {code})"),
        }
    }
}

// --- Measurement descriptor table ---

/// Name and unit of one channel, as the host stores it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MeasurementDescriptor {
    pub channel: u8,
    pub measurement: &'static str,
    pub unit: &'static str,
}

/// Channel table, indexed by `Field::index()`. Never mutated; readings refer into it.
pub const MEASUREMENTS: [MeasurementDescriptor; 4] = [
    MeasurementDescriptor { channel: 0, measurement: "co2", unit: "ppm" },
    MeasurementDescriptor { channel: 1, measurement: "voc", unit: "ppb" },
    MeasurementDescriptor { channel: 2, measurement: "temperature", unit: "C" },
    MeasurementDescriptor { channel: 3, measurement: "humidity", unit: "percent" },
];
