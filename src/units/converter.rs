use std::fmt;

use crate::units::algebra::{parse_measure, Measure};
use crate::units::error::UnitError;
use crate::units::formatter::{format_decimal, round_to_decimals, DISPLAY_DECIMALS};
use crate::units::types::{Dimension, Quantity, Unit};

impl Quantity {
    /// Build a quantity from a value expressed in `unit`
    pub fn new(value: f64, unit: Unit) -> Result<Self, UnitError> {
        Self::checked(value * unit.factor(), unit)
    }

    fn checked(magnitude: f64, unit: Unit) -> Result<Self, UnitError> {
        if !magnitude.is_finite() {
            return Err(UnitError::NotFinite);
        }
        if magnitude < 0.0 {
            return Err(UnitError::NegativeMagnitude(magnitude));
        }
        Ok(Self {
            magnitude,
            dimension: unit.dimension(),
            unit,
        })
    }

    /// Classify an SI measure as one of the four dimensions, displayed in the base unit
    pub fn from_measure(measure: Measure) -> Result<Self, UnitError> {
        let dimension = Dimension::from_dims(measure.dims).ok_or_else(|| {
            UnitError::ParseError(format!("Unsupported dimension: {}", measure.dims))
        })?;
        Self::checked(measure.value, dimension.base_unit())
    }

    /// Parse "<number> <unit expression>" (e.g. "10 km/h", "300 s/km")
    pub fn parse(text: &str) -> Result<Self, UnitError> {
        Self::from_measure(parse_measure(text)?)
    }

    /// Parse and require a specific dimension
    pub fn parse_as(text: &str, dimension: Dimension) -> Result<Self, UnitError> {
        let quantity = Self::parse(text)?;
        if quantity.dimension != dimension {
            return Err(UnitError::mismatch(dimension, quantity.dimension));
        }
        Ok(quantity)
    }

    pub fn measure(&self) -> Measure {
        Measure::new(self.magnitude, self.dimension.dims())
    }

    /// Value expressed in the quantity's own unit
    pub fn value(&self) -> f64 {
        self.magnitude / self.unit.factor()
    }

    /// Same magnitude, displayed in another unit of the same dimension
    pub fn to(&self, unit: Unit) -> Result<Self, UnitError> {
        if unit.dimension() != self.dimension {
            return Err(UnitError::mismatch(self.dimension, unit.dimension()));
        }
        Ok(Self { unit, ..*self })
    }

    /// Value in the current unit, rounded to the display precision (0.001)
    pub fn to_prec(&self) -> f64 {
        round_to_decimals(self.value(), DISPLAY_DECIMALS)
    }

    pub fn multiply(&self, other: &Quantity) -> Result<Self, UnitError> {
        Self::from_measure(self.measure() * other.measure())
    }

    pub fn divide(&self, other: &Quantity) -> Result<Self, UnitError> {
        Self::from_measure(self.measure() / other.measure())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_decimal(self.value()), self.unit.symbol())
    }
}

/// Convert a bare value from one unit to another of the same dimension
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, UnitError> {
    Ok(Quantity::new(value, from)?.to(to)?.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::types::{DistanceUnit, SpeedUnit, TimeUnit};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_new_rejects_negative_and_nan() {
        let km = Unit::Distance(DistanceUnit::Kilometer);
        assert!(matches!(
            Quantity::new(-1.0, km),
            Err(UnitError::NegativeMagnitude(_))
        ));
        assert!(matches!(
            Quantity::new(f64::NAN, km),
            Err(UnitError::NotFinite)
        ));
        assert!(Quantity::new(0.0, km).is_ok());
    }

    #[test]
    fn test_parse_normalizes_to_base() {
        let q = Quantity::parse("5 km").unwrap();
        assert_eq!(q.dimension(), Dimension::Distance);
        assert!(approx(q.magnitude(), 5000.0));
        assert_eq!(q.unit(), Unit::Distance(DistanceUnit::Meter));

        let q = Quantity::parse("300 s/km").unwrap();
        assert_eq!(q.dimension(), Dimension::Pace);
        assert!(approx(q.magnitude(), 0.3));

        assert!(Quantity::parse("5 m^2").is_err());
        assert!(Quantity::parse("-5 km").is_err());
    }

    #[test]
    fn test_parse_as_checks_dimension() {
        assert!(Quantity::parse_as("10 km/h", Dimension::Speed).is_ok());
        assert!(matches!(
            Quantity::parse_as("10 km/h", Dimension::Pace),
            Err(UnitError::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn test_to_keeps_magnitude() {
        let q = Quantity::parse("10 km/h").unwrap();
        let mph = q.to(Unit::Speed(SpeedUnit::Mph)).unwrap();
        assert_eq!(mph.magnitude(), q.magnitude());
        assert!(approx(mph.value(), 10000.0 / 1609.344));
        assert_eq!(mph.to_prec(), 6.214);

        assert!(q.to(Unit::Time(TimeUnit::Second)).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let distance = Quantity::parse("10 km").unwrap();
        let time = Quantity::parse("3000 s").unwrap();

        let pace = time.divide(&distance).unwrap();
        assert_eq!(pace.dimension(), Dimension::Pace);
        let per_km = pace.to(Unit::Pace(DistanceUnit::Kilometer)).unwrap();
        assert!(approx(per_km.value(), 300.0));

        let speed = distance.divide(&time).unwrap();
        assert_eq!(speed.dimension(), Dimension::Speed);

        let again = speed.multiply(&time).unwrap();
        assert_eq!(again.dimension(), Dimension::Distance);
        assert!(approx(again.magnitude(), 10000.0));

        // time / time is dimensionless
        assert!(time.divide(&time).is_err());
        // division by a zero distance
        let zero = Quantity::parse("0 km").unwrap();
        assert!(matches!(time.divide(&zero), Err(UnitError::NotFinite)));
    }

    #[test]
    fn test_display() {
        let q = Quantity::parse("10 km/h").unwrap();
        assert_eq!(q.to_string(), "2.778 m/s");
        let q = q.to(Unit::Speed(SpeedUnit::Kph)).unwrap();
        assert_eq!(q.to_string(), "10 km/h");
    }

    #[test]
    fn test_convert() {
        let miles = convert(
            42.195,
            Unit::Distance(DistanceUnit::Kilometer),
            Unit::Distance(DistanceUnit::Mile),
        )
        .unwrap();
        assert!((miles - 26.219).abs() < 0.001);
    }
}
