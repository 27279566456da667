use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::units::algebra::{
    Dims, METERS_PER_KILOMETER, METERS_PER_MILE, METERS_PER_YARD, SECONDS_PER_HOUR,
};
use crate::units::error::UnitError;

/// Physical category of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Distance,
    Time,
    Speed,
    Pace,
}

impl Dimension {
    pub fn dims(self) -> Dims {
        match self {
            Dimension::Distance => Dims::LENGTH,
            Dimension::Time => Dims::TIME,
            Dimension::Speed => Dims::SPEED,
            Dimension::Pace => Dims::PACE,
        }
    }

    pub fn from_dims(dims: Dims) -> Option<Dimension> {
        [
            Dimension::Distance,
            Dimension::Time,
            Dimension::Speed,
            Dimension::Pace,
        ]
        .into_iter()
        .find(|dimension| dimension.dims() == dims)
    }

    /// Unit in which magnitudes of this dimension are stored (m, s, m/s, s/m)
    pub fn base_unit(self) -> Unit {
        match self {
            Dimension::Distance => Unit::Distance(DistanceUnit::Meter),
            Dimension::Time => Unit::Time(TimeUnit::Second),
            Dimension::Speed => Unit::Speed(SpeedUnit::MetersPerSecond),
            Dimension::Pace => Unit::Pace(DistanceUnit::Meter),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Distance => "distance",
            Dimension::Time => "time",
            Dimension::Speed => "speed",
            Dimension::Pace => "pace",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Meter,
    Kilometer,
    Yard,
    Mile,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 4] = [
        DistanceUnit::Meter,
        DistanceUnit::Kilometer,
        DistanceUnit::Yard,
        DistanceUnit::Mile,
    ];

    pub fn meters(self) -> f64 {
        match self {
            DistanceUnit::Meter => 1.0,
            DistanceUnit::Kilometer => METERS_PER_KILOMETER,
            DistanceUnit::Yard => METERS_PER_YARD,
            DistanceUnit::Mile => METERS_PER_MILE,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Meter => "m",
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Yard => "yd",
            DistanceUnit::Mile => "mi",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DistanceUnit::Meter => "meter",
            DistanceUnit::Kilometer => "kilometer",
            DistanceUnit::Yard => "yard",
            DistanceUnit::Mile => "mile",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DistanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        DistanceUnit::ALL
            .into_iter()
            .find(|unit| unit.name() == s || unit.symbol() == s)
            .ok_or(UnitError::UnknownUnit(s))
    }
}

/// Time representation: raw seconds or a clock string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Hms,
}

impl TimeUnit {
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Hms => "hms",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "second" | "seconds" | "s" => Ok(TimeUnit::Second),
            "hms" | "h:mm:ss" => Ok(TimeUnit::Hms),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    MetersPerSecond,
    Kph,
    Mph,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 3] = [SpeedUnit::MetersPerSecond, SpeedUnit::Kph, SpeedUnit::Mph];

    pub fn meters_per_second(self) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => 1.0,
            SpeedUnit::Kph => METERS_PER_KILOMETER / SECONDS_PER_HOUR,
            SpeedUnit::Mph => METERS_PER_MILE / SECONDS_PER_HOUR,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::Kph => "km/h",
            SpeedUnit::Mph => "mph",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "meterspersecond",
            SpeedUnit::Kph => "kph",
            SpeedUnit::Mph => "mph",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SpeedUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meterspersecond" | "m/s" => Ok(SpeedUnit::MetersPerSecond),
            "kph" | "km/h" => Ok(SpeedUnit::Kph),
            "mph" | "mi/h" => Ok(SpeedUnit::Mph),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

/// Display unit of a quantity. Pace units are seconds per one of the distance units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Distance(DistanceUnit),
    Time(TimeUnit),
    Speed(SpeedUnit),
    Pace(DistanceUnit),
}

impl Unit {
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Distance(_) => Dimension::Distance,
            Unit::Time(_) => Dimension::Time,
            Unit::Speed(_) => Dimension::Speed,
            Unit::Pace(_) => Dimension::Pace,
        }
    }

    /// Size of one of this unit in SI base units
    pub fn factor(self) -> f64 {
        match self {
            Unit::Distance(unit) => unit.meters(),
            Unit::Time(_) => 1.0,
            Unit::Speed(unit) => unit.meters_per_second(),
            Unit::Pace(unit) => 1.0 / unit.meters(),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Distance(unit) => unit.symbol(),
            Unit::Time(_) => "s",
            Unit::Speed(unit) => unit.symbol(),
            Unit::Pace(DistanceUnit::Meter) => "s/m",
            Unit::Pace(DistanceUnit::Kilometer) => "s/km",
            Unit::Pace(DistanceUnit::Yard) => "s/yd",
            Unit::Pace(DistanceUnit::Mile) => "s/mi",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    /// Accepts display symbols ("km", "s/mi", "km/h") and selection names ("kilometer", "kph")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();

        if let Ok(unit) = DistanceUnit::from_str(&s) {
            return Ok(Unit::Distance(unit));
        }
        if let Ok(unit) = TimeUnit::from_str(&s) {
            return Ok(Unit::Time(unit));
        }
        if let Ok(unit) = SpeedUnit::from_str(&s) {
            return Ok(Unit::Speed(unit));
        }
        if let Some(per) = s.strip_prefix("s/") {
            if let Ok(unit) = DistanceUnit::from_str(per) {
                return Ok(Unit::Pace(unit));
            }
        }

        Err(UnitError::UnknownUnit(s))
    }
}

/// A non-negative magnitude of one dimension.
///
/// `magnitude` is always held in SI base units (m, s, m/s, s/m); `unit` only decides how the
/// value is read back and rendered, so switching units never changes the magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub(crate) magnitude: f64,
    pub(crate) dimension: Dimension,
    pub(crate) unit: Unit,
}

impl Quantity {
    /// Magnitude in SI base units
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}
