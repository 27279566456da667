use tracing::debug;

use crate::parser::patterns::normalize_per;
use crate::units::{Dimension, Quantity};

/// Determine a distance in meters from text such as "5k", "10 km", "26.2 miles" or "400m"
pub fn parse_distance(text: &str) -> Option<Quantity> {
    let text = normalize_per(&text.trim().to_ascii_lowercase());

    match Quantity::parse_as(&text, Dimension::Distance) {
        Ok(distance) => Some(distance),
        Err(e) => {
            debug!(input = %text, error = %e, "distance rejected");
            None
        }
    }
}
