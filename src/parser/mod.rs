// Free-form text into dimensioned quantities.
// Every parser returns None for input it cannot read; malformed text is an expected outcome
// while the user is still typing, never an error.

pub mod distance;
pub mod duration;
pub mod patterns;
pub mod velocity;


pub use distance::parse_distance;
pub use duration::parse_duration;
pub use velocity::{parse_pace, parse_speed};
