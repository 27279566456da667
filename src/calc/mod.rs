pub mod engine;
pub mod formatter;
pub mod layout;
pub mod modes;


pub use engine::{derive, BaseValues, Derivation};
pub use formatter::UnitFormatter;
pub use layout::{Layout, Operand, Operator};
pub use modes::{CalcMode, Field, OutputUnits, SelectionError, VelocityMode};
