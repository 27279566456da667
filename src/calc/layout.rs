use serde::Serialize;
use std::fmt;

use crate::calc::modes::{CalcMode, Field, VelocityMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "x")]
    Multiply,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Divide => write!(f, "/"),
            Operator::Multiply => write!(f, "x"),
        }
    }
}

/// A field as shown to the user; velocity appears as either pace or speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    Distance,
    Time,
    Pace,
    Speed,
}

impl Operand {
    pub fn field(self) -> Field {
        match self {
            Operand::Distance => Field::Distance,
            Operand::Time => Field::Time,
            Operand::Pace | Operand::Speed => Field::Velocity,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand::Distance => "distance",
            Operand::Time => "time",
            Operand::Pace => "pace",
            Operand::Speed => "speed",
        };
        write!(f, "{}", name)
    }
}

/// The equation `operands[0] <operator> operands[1] = operands[2]` for a mode pair.
/// `operands[2]` is always the derived, read-only field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub operands: [Operand; 3],
    pub operator: Operator,
    pub read_only: Field,
}

impl Layout {
    pub fn for_modes(calc_mode: CalcMode, velocity_mode: VelocityMode) -> Layout {
        use Operand::{Distance, Pace, Speed, Time};

        let (operands, operator) = match (velocity_mode, calc_mode) {
            (VelocityMode::Pace, CalcMode::Velocity) => ([Time, Distance, Pace], Operator::Divide),
            (VelocityMode::Pace, CalcMode::Distance) => ([Time, Pace, Distance], Operator::Divide),
            (VelocityMode::Pace, CalcMode::Time) => ([Pace, Distance, Time], Operator::Multiply),
            (VelocityMode::Speed, CalcMode::Velocity) => {
                ([Distance, Time, Speed], Operator::Divide)
            }
            (VelocityMode::Speed, CalcMode::Distance) => {
                ([Speed, Time, Distance], Operator::Multiply)
            }
            (VelocityMode::Speed, CalcMode::Time) => ([Distance, Speed, Time], Operator::Divide),
        };

        Layout {
            operands,
            operator,
            read_only: calc_mode.derived_field(),
        }
    }

    pub fn is_read_only(&self, field: Field) -> bool {
        self.read_only == field
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.operands;
        write!(f, "{} {} {} = {}", a, self.operator, b, c)
    }
}
