use serde::Serialize;
use tracing::{debug, trace};

use crate::calc::formatter::UnitFormatter;
use crate::calc::modes::{CalcMode, Field, OutputUnits, VelocityMode};
use crate::parser::{parse_distance, parse_duration, parse_pace, parse_speed};
use crate::units::{Quantity, UnitError};

/// SI magnitudes behind each field: meters, seconds, and m/s or s/m for velocity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BaseValues {
    pub distance: Option<f64>,
    pub time: Option<f64>,
    pub velocity: Option<f64>,
}

/// Display strings for the three fields. An empty string means "blank": the field could not be
/// read, or the derived field is missing one of its inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivation {
    pub distance: String,
    pub time: String,
    pub velocity: String,
    pub derived: Field,
    pub base: BaseValues,
}

impl Derivation {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::Time => &self.time,
            Field::Velocity => &self.velocity,
        }
    }

    /// Display string of the derived field
    pub fn derived_value(&self) -> &str {
        self.get(self.derived)
    }

    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct Operands {
    distance: Option<Quantity>,
    time: Option<Quantity>,
    velocity: Option<Quantity>,
}

impl Operands {
    fn parse(
        velocity_mode: VelocityMode,
        raw_distance: Option<&str>,
        raw_time: Option<&str>,
        raw_velocity: Option<&str>,
    ) -> Self {
        let parse_velocity: fn(&str) -> Option<Quantity> = match velocity_mode {
            VelocityMode::Pace => parse_pace,
            VelocityMode::Speed => parse_speed,
        };

        Self {
            distance: raw_distance.and_then(parse_distance),
            time: raw_time.and_then(parse_duration),
            velocity: raw_velocity.and_then(parse_velocity),
        }
    }

    fn set(&mut self, field: Field, value: Option<Quantity>) {
        match field {
            Field::Distance => self.distance = value,
            Field::Time => self.time = value,
            Field::Velocity => self.velocity = value,
        }
    }
}

type Relation = fn(&Quantity, &Quantity) -> Result<Quantity, UnitError>;

fn apply(
    relation: Relation,
    a: Option<Quantity>,
    b: Option<Quantity>,
) -> Option<Result<Quantity, UnitError>> {
    Some(relation(&a?, &b?))
}

/// Compute the derived field from the other two, `None` while an input is missing
fn relate(calc_mode: CalcMode, velocity_mode: VelocityMode, ops: &Operands) -> Option<Quantity> {
    let Operands {
        distance,
        time,
        velocity,
    } = *ops;

    let result = match (velocity_mode, calc_mode) {
        (VelocityMode::Pace, CalcMode::Velocity) => apply(Quantity::divide, time, distance),
        (VelocityMode::Pace, CalcMode::Distance) => apply(Quantity::divide, time, velocity),
        (VelocityMode::Pace, CalcMode::Time) => apply(Quantity::multiply, velocity, distance),
        (VelocityMode::Speed, CalcMode::Velocity) => apply(Quantity::divide, distance, time),
        (VelocityMode::Speed, CalcMode::Distance) => apply(Quantity::multiply, time, velocity),
        (VelocityMode::Speed, CalcMode::Time) => apply(Quantity::divide, distance, velocity),
    };

    match result {
        Some(Ok(quantity)) => {
            trace!(%calc_mode, %velocity_mode, result = %quantity, "derived");
            Some(quantity)
        }
        Some(Err(e)) => {
            debug!(%calc_mode, %velocity_mode, error = %e, "derivation produced no usable value");
            None
        }
        None => {
            trace!(%calc_mode, %velocity_mode, "derivation waiting for input");
            None
        }
    }
}

/// Derive the missing one of distance, time and velocity and render all three.
///
/// Distance and time are always parsed; velocity is parsed as a pace or a speed according to
/// `velocity_mode`. The raw text of the derived field is ignored. Every field that could not be
/// read, and the derived field when one of its inputs is missing, comes back blank.
pub fn derive(
    calc_mode: CalcMode,
    velocity_mode: VelocityMode,
    raw_distance: Option<&str>,
    raw_time: Option<&str>,
    raw_velocity: Option<&str>,
    output_units: &OutputUnits,
) -> Derivation {
    let mut ops = Operands::parse(velocity_mode, raw_distance, raw_time, raw_velocity);

    let derived_field = calc_mode.derived_field();
    let derived = relate(calc_mode, velocity_mode, &ops);
    ops.set(derived_field, derived);

    let formatter = UnitFormatter::new(*output_units);
    let render = |q: Option<Quantity>| q.map(|q| formatter.format(&q)).unwrap_or_default();

    Derivation {
        distance: render(ops.distance),
        time: render(ops.time),
        velocity: render(ops.velocity),
        derived: derived_field,
        base: BaseValues {
            distance: ops.distance.map(|q| q.magnitude()),
            time: ops.time.map(|q| q.magnitude()),
            velocity: ops.velocity.map(|q| q.magnitude()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_field_ignores_its_own_input() {
        let d = derive(
            CalcMode::Velocity,
            VelocityMode::Pace,
            Some("10k"),
            Some("50:00"),
            Some("9:99/km"),
            &OutputUnits::default(),
        );
        assert_eq!(d.velocity, "5:00/km");
        assert_eq!(d.derived, Field::Velocity);
        assert_eq!(d.derived_value(), "5:00/km");
    }

    #[test]
    fn test_absent_inputs_blank_the_result() {
        let d = derive(
            CalcMode::Time,
            VelocityMode::Speed,
            None,
            None,
            Some("12 km/h"),
            &OutputUnits::default(),
        );
        assert!(d.is_blank(Field::Time));
        assert!(d.is_blank(Field::Distance));
        assert_eq!(d.velocity, "12 km/h");
        assert_eq!(d.base.time, None);
    }

    #[test]
    fn test_zero_distance_is_blank_not_infinite() {
        let d = derive(
            CalcMode::Velocity,
            VelocityMode::Pace,
            Some("0 km"),
            Some("10:00"),
            None,
            &OutputUnits::default(),
        );
        assert_eq!(d.distance, "0 km");
        assert!(d.is_blank(Field::Velocity));
    }
}
