use tracing::debug;

use crate::parser::patterns::{
    captures_to_seconds, has_time_groups, BARE_SECONDS, COLON_DURATION, LABELLED_DURATION,
};
use crate::units::{Quantity, TimeUnit, Unit};

/// "1:30:00", "1:30", "45" and, with no colons, any whole number of seconds
fn parse_colon_form(text: &str) -> Option<u64> {
    if let Some(caps) = COLON_DURATION.captures(text) {
        return captures_to_seconds(&caps);
    }
    BARE_SECONDS
        .captures(text)
        .and_then(|caps| caps[1].parse::<u64>().ok())
}

/// "2h 30m", "1 hour 5 min", "90s"
fn parse_labelled_form(text: &str) -> Option<u64> {
    let caps = LABELLED_DURATION.captures(text)?;
    if !has_time_groups(&caps) {
        return None;
    }
    captures_to_seconds(&caps)
}

/// Determine a duration from free-form text.
///
/// The colon form is tried first, then the labelled form. Returns `None` for empty or
/// unrecognized input.
pub fn parse_duration(text: &str) -> Option<Quantity> {
    let text = text.trim().to_ascii_lowercase();
    if text.is_empty() {
        return None;
    }

    let seconds = parse_colon_form(&text).or_else(|| parse_labelled_form(&text));
    match seconds {
        Some(seconds) => Quantity::new(seconds as f64, Unit::Time(TimeUnit::Second)).ok(),
        None => {
            debug!(input = %text, "duration not recognized");
            None
        }
    }
}
