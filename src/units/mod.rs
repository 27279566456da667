// Dimensional quantities for the calculator: distance, time, speed and pace.
// Everything is stored in SI base units; units are parsed from text and used for display.

pub mod algebra;
pub mod converter;
pub mod error;
pub mod formatter;
pub mod types;

pub use algebra::{parse_measure, parse_unit_expression, Dims, Measure};
pub use converter::convert;
pub use error::UnitError;
pub use formatter::{format_clock, format_decimal, format_hmmss};
pub use types::{Dimension, DistanceUnit, Quantity, SpeedUnit, TimeUnit, Unit};
