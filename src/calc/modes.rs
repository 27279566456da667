use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::units::{DistanceUnit, SpeedUnit, TimeUnit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct SelectionError {
    pub kind: &'static str,
    pub value: String,
}

/// Which of the three fields is derived (read-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcMode {
    #[default]
    Velocity,
    Distance,
    Time,
}

impl CalcMode {
    pub const ALL: [CalcMode; 3] = [CalcMode::Velocity, CalcMode::Distance, CalcMode::Time];

    pub fn name(self) -> &'static str {
        match self {
            CalcMode::Velocity => "velocity",
            CalcMode::Distance => "distance",
            CalcMode::Time => "time",
        }
    }

    pub fn derived_field(self) -> Field {
        match self {
            CalcMode::Velocity => Field::Velocity,
            CalcMode::Distance => Field::Distance,
            CalcMode::Time => Field::Time,
        }
    }
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CalcMode {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        CalcMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or(SelectionError {
                kind: "calc mode",
                value: s,
            })
    }
}

/// Whether velocity is time per distance or distance per time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VelocityMode {
    #[default]
    Pace,
    Speed,
}

impl VelocityMode {
    pub fn name(self) -> &'static str {
        match self {
            VelocityMode::Pace => "pace",
            VelocityMode::Speed => "speed",
        }
    }
}

impl fmt::Display for VelocityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for VelocityMode {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pace" => Ok(VelocityMode::Pace),
            "speed" => Ok(VelocityMode::Speed),
            other => Err(SelectionError {
                kind: "velocity mode",
                value: other.to_string(),
            }),
        }
    }
}

/// One of the three calculator fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Distance,
    Time,
    Velocity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Distance => "distance",
            Field::Time => "time",
            Field::Velocity => "velocity",
        };
        write!(f, "{}", name)
    }
}

/// Units the caller wants each dimension rendered in.
/// The time selection also decides whether pace is shown as a clock or as decimal seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputUnits {
    pub distance: DistanceUnit,
    pub time: TimeUnit,
    pub speed: SpeedUnit,
    pub pace: DistanceUnit,
}

impl Default for OutputUnits {
    fn default() -> Self {
        Self {
            distance: DistanceUnit::Kilometer,
            time: TimeUnit::Hms,
            speed: SpeedUnit::Kph,
            pace: DistanceUnit::Kilometer,
        }
    }
}
