// Minimal dimensional algebra over length and time.
// Values are carried in SI base units (meters, seconds) so that chains of conversions never
// compound rounding error; units only matter when text is read or rendered.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::ops::{Div, Mul};

use crate::units::error::UnitError;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_YARD: f64 = 0.9144;
pub const METERS_PER_MILE: f64 = 1609.344;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Largest exponent accepted on a single unit token ("m^4")
pub const MAX_EXPONENT: i32 = 4;

lazy_static! {
    /// Leading number of a quantity string, followed by whatever unit expression remains.
    /// Examples: "5k", "10 km/h", "3.5 m/s", ".5 mi", "1e3 m"
    static ref NUMBER_PREFIX: Regex = Regex::new(
        r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(.*)$"
    ).unwrap();

    /// A single unit name with an optional integer exponent ("m", "s^2", "m2")
    static ref UNIT_TOKEN: Regex = Regex::new(r"^([a-z]+)(?:\^?(-?\d+))?$").unwrap();
}

/// Exponents of the two base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dims {
    pub length: i32,
    pub time: i32,
}

impl Dims {
    pub const NONE: Dims = Dims { length: 0, time: 0 };
    pub const LENGTH: Dims = Dims { length: 1, time: 0 };
    pub const TIME: Dims = Dims { length: 0, time: 1 };
    pub const SPEED: Dims = Dims { length: 1, time: -1 };
    pub const PACE: Dims = Dims { length: -1, time: 1 };

    pub fn pow(self, exp: i32) -> Dims {
        Dims {
            length: self.length.saturating_mul(exp),
            time: self.time.saturating_mul(exp),
        }
    }
}

impl Mul for Dims {
    type Output = Dims;

    fn mul(self, rhs: Dims) -> Dims {
        Dims {
            length: self.length.saturating_add(rhs.length),
            time: self.time.saturating_add(rhs.time),
        }
    }
}

impl Div for Dims {
    type Output = Dims;

    fn div(self, rhs: Dims) -> Dims {
        Dims {
            length: self.length.saturating_sub(rhs.length),
            time: self.time.saturating_sub(rhs.time),
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn term(symbol: &str, exp: u32) -> String {
            if exp == 1 {
                symbol.to_string()
            } else {
                format!("{}^{}", symbol, exp)
            }
        }

        let mut numerator = Vec::new();
        let mut denominator = Vec::new();
        for (symbol, exp) in [("m", self.length), ("s", self.time)] {
            if exp > 0 {
                numerator.push(term(symbol, exp.unsigned_abs()));
            } else if exp < 0 {
                denominator.push(term(symbol, exp.unsigned_abs()));
            }
        }

        let top = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator.join("*")
        };
        if denominator.is_empty() {
            write!(f, "{}", top)
        } else {
            write!(f, "{}/{}", top, denominator.join("*"))
        }
    }
}

/// A magnitude in SI base units together with its dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub dims: Dims,
}

impl Measure {
    pub fn new(value: f64, dims: Dims) -> Self {
        Self { value, dims }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Dims::NONE)
    }
}

impl Mul for Measure {
    type Output = Measure;

    fn mul(self, rhs: Measure) -> Measure {
        Measure::new(self.value * rhs.value, self.dims * rhs.dims)
    }
}

impl Div for Measure {
    type Output = Measure;

    fn div(self, rhs: Measure) -> Measure {
        Measure::new(self.value / rhs.value, self.dims / rhs.dims)
    }
}

/// Size of one named unit in SI base units
fn lookup_unit(name: &str) -> Option<Measure> {
    let (value, dims) = match name {
        "m" | "meter" | "meters" | "metre" | "metres" => (1.0, Dims::LENGTH),
        "km" | "k" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
            (METERS_PER_KILOMETER, Dims::LENGTH)
        }
        "yd" | "yard" | "yards" => (METERS_PER_YARD, Dims::LENGTH),
        "mi" | "mile" | "miles" => (METERS_PER_MILE, Dims::LENGTH),
        "ft" | "foot" | "feet" => (METERS_PER_FOOT, Dims::LENGTH),
        "s" | "sec" | "secs" | "second" | "seconds" => (1.0, Dims::TIME),
        "min" | "mins" | "minute" | "minutes" => (SECONDS_PER_MINUTE, Dims::TIME),
        "h" | "hr" | "hrs" | "hour" | "hours" => (SECONDS_PER_HOUR, Dims::TIME),
        "kph" | "kmh" => (METERS_PER_KILOMETER / SECONDS_PER_HOUR, Dims::SPEED),
        "mph" => (METERS_PER_MILE / SECONDS_PER_HOUR, Dims::SPEED),
        _ => return None,
    };
    Some(Measure::new(value, dims))
}

fn parse_unit_token(token: &str) -> Result<Measure, UnitError> {
    let caps = UNIT_TOKEN
        .captures(token)
        .ok_or_else(|| UnitError::UnknownUnit(token.to_string()))?;

    let unit = lookup_unit(&caps[1]).ok_or_else(|| UnitError::UnknownUnit(caps[1].to_string()))?;

    let exp = match caps.get(2) {
        Some(m) => m
            .as_str()
            .parse::<i32>()
            .map_err(|e| UnitError::ParseError(format!("Invalid exponent '{}': {}", m.as_str(), e)))?,
        None => 1,
    };
    if !(-MAX_EXPONENT..=MAX_EXPONENT).contains(&exp) {
        return Err(UnitError::ParseError(format!(
            "Exponent {} out of range in '{}'",
            exp, token
        )));
    }

    Ok(Measure::new(unit.value.powi(exp), unit.dims.pow(exp)))
}

/// Units separated by whitespace or `*` multiply
fn parse_product(part: &str) -> Result<Measure, UnitError> {
    part.split(|c: char| c == '*' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .try_fold(Measure::dimensionless(1.0), |acc, token| {
            Ok(acc * parse_unit_token(token)?)
        })
}

/// Parse a unit expression such as "km/h", "s/mi", "min / km" or "m*s^-1"
/// Returns the size of one such unit in SI base units
pub fn parse_unit_expression(expr: &str) -> Result<Measure, UnitError> {
    let expr = expr.trim().to_ascii_lowercase();
    let mut result = Measure::dimensionless(1.0);

    for (index, part) in expr.split('/').enumerate() {
        if index == 0 {
            result = result * parse_product(part)?;
        } else if part.trim().is_empty() {
            return Err(UnitError::ParseError(format!(
                "Missing unit after '/' in '{}'",
                expr
            )));
        } else {
            result = result / parse_product(part)?;
        }
    }

    Ok(result)
}

/// Parse "<number> <unit expression>" into an SI measure
pub fn parse_measure(text: &str) -> Result<Measure, UnitError> {
    let trimmed = text.trim();
    let caps = NUMBER_PREFIX
        .captures(trimmed)
        .ok_or_else(|| UnitError::ParseError(format!("No leading number in '{}'", trimmed)))?;

    let number = caps[1]
        .parse::<f64>()
        .map_err(|e| UnitError::ParseError(format!("Failed to parse value '{}': {}", &caps[1], e)))?;

    let unit = parse_unit_expression(&caps[2])?;
    Ok(Measure::new(number * unit.value, unit.dims))
}
