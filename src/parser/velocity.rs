use regex::Captures;
use tracing::debug;

use crate::parser::patterns::{
    captures_to_seconds, has_time_groups, normalize_per, COLON_PACE, LABELLED_PACE, RATIO_SHAPE,
};
use crate::units::{Dimension, Quantity, UnitError};

fn accept(text: &str, dimension: Dimension) -> Option<Quantity> {
    match Quantity::parse_as(text, dimension) {
        Ok(quantity) => Some(quantity),
        Err(e) => {
            debug!(input = %text, error = %e, "{} rejected", dimension);
            None
        }
    }
}

/// Determine a speed in m/s from "<number> <distance>/<time>" or "<number> <distance> per <time>"
pub fn parse_speed(text: &str) -> Option<Quantity> {
    let text = normalize_per(&text.trim().to_ascii_lowercase());
    accept(&text, Dimension::Speed)
}

/// Rewrite a matched "<time>/<unit>" as "<seconds> s/<unit>"
fn rewrite_time_over_unit(caps: &Captures) -> Result<String, UnitError> {
    let seconds = captures_to_seconds(caps)
        .ok_or_else(|| UnitError::ParseError("time component out of range".to_string()))?;
    Ok(format!("{} s/{}", seconds, &caps[4]))
}

/// Clock form first ("5:00/km"), then labelled form ("5 min/km")
fn match_time_over_unit(text: &str) -> Option<Captures<'_>> {
    COLON_PACE.captures(text).or_else(|| {
        LABELLED_PACE
            .captures(text)
            .filter(|caps| has_time_groups(caps))
    })
}

/// Determine a pace in s/m.
///
/// Accepts "5:00/km", "1:05:00/mi", "5 min/km", "4 min 30 sec per km". Anything else must at
/// least look like "<number> [unit]/<unit>" ("8.5 min/mi", "300 s/km") before it is handed to
/// the unit algebra; other text is rejected outright.
pub fn parse_pace(text: &str) -> Option<Quantity> {
    let text = normalize_per(&text.trim().to_ascii_lowercase());

    if let Some(caps) = match_time_over_unit(&text) {
        return match rewrite_time_over_unit(&caps) {
            Ok(rewritten) => accept(&rewritten, Dimension::Pace),
            Err(e) => {
                debug!(input = %text, error = %e, "pace rejected");
                None
            }
        };
    }

    if !RATIO_SHAPE.is_match(&text) {
        debug!(input = %text, "pace does not look like a ratio");
        return None;
    }

    accept(&text, Dimension::Pace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DistanceUnit, SpeedUnit, Unit};

    fn per_km(q: Quantity) -> f64 {
        q.to(Unit::Pace(DistanceUnit::Kilometer)).unwrap().value()
    }

    #[test]
    fn test_speed() {
        let speed = parse_speed("10 km/h").unwrap();
        assert!((speed.magnitude() - 2.778).abs() < 0.001);

        let per = parse_speed("10 km per h").unwrap();
        assert_eq!(per.magnitude(), speed.magnitude());

        let q = parse_speed("3.5 m/s").unwrap();
        assert!((q.magnitude() - 3.5).abs() < 1e-9);

        let q = parse_speed("6 mph").unwrap();
        let back = q.to(Unit::Speed(SpeedUnit::Mph)).unwrap();
        assert!((back.value() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_rejects() {
        assert!(parse_speed("").is_none());
        assert!(parse_speed("10").is_none());
        assert!(parse_speed("10 km").is_none());
        assert!(parse_speed("5:00/km").is_none());
        assert!(parse_speed("fast").is_none());
    }

    #[test]
    fn test_pace_clock_form() {
        assert!((per_km(parse_pace("5:00/km").unwrap()) - 300.0).abs() < 1e-6);
        assert!((per_km(parse_pace("5:00 / km").unwrap()) - 300.0).abs() < 1e-6);
        let q = parse_pace("1:05:00/mi").unwrap();
        let per_mile = q.to(Unit::Pace(DistanceUnit::Mile)).unwrap().value();
        assert!((per_mile - 3900.0).abs() < 1e-6);
    }

    #[test]
    fn test_pace_labelled_form() {
        assert!((per_km(parse_pace("5 min per km").unwrap()) - 300.0).abs() < 1e-6);
        assert!((per_km(parse_pace("5 min/km").unwrap()) - 300.0).abs() < 1e-6);
        assert!((per_km(parse_pace("4 min 30 sec per km").unwrap()) - 270.0).abs() < 1e-6);
        assert!((per_km(parse_pace("300 s/km").unwrap()) - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_pace_ratio_fallback() {
        let q = parse_pace("8.5 min/mi").unwrap();
        let per_mile = q.to(Unit::Pace(DistanceUnit::Mile)).unwrap().value();
        assert!((per_mile - 510.0).abs() < 1e-6);

        // a bare number over a unit is 1/length, not a pace
        assert!(parse_pace("4.5/mi").is_none());
    }

    #[test]
    fn test_pace_rejects() {
        assert!(parse_pace("").is_none());
        assert!(parse_pace("/km").is_none());
        assert!(parse_pace("slow").is_none());
        assert!(parse_pace("5:00").is_none());
        assert!(parse_pace("5:00/h").is_none());
        assert!(parse_pace("5:00/parsec").is_none());
        assert!(parse_pace("10 km/h").is_none());
    }
}
