//! Property-based tests for the parsers and the derivation engine.
//!
//! Covers: duration round-trips through the H:MM:SS display, labelled durations, and the
//! invariance of derived magnitudes under a change of output units.

use pacecalc::calc::{derive, CalcMode, OutputUnits, VelocityMode};
use pacecalc::parser::{parse_distance, parse_duration, parse_pace, parse_speed};
use pacecalc::units::{format_hmmss, DistanceUnit, SpeedUnit, TimeUnit};
use proptest::prelude::*;

fn distance_unit() -> impl Strategy<Value = DistanceUnit> {
    prop::sample::select(DistanceUnit::ALL.to_vec())
}

fn output_units() -> impl Strategy<Value = OutputUnits> {
    (
        distance_unit(),
        prop::sample::select(vec![TimeUnit::Second, TimeUnit::Hms]),
        prop::sample::select(SpeedUnit::ALL.to_vec()),
        distance_unit(),
    )
        .prop_map(|(distance, time, speed, pace)| OutputUnits {
            distance,
            time,
            speed,
            pace,
        })
}

/// "<number> <unit tokens>" with optional exponents, joined by spaces, `*` and `/`
fn unit_expression_text() -> impl Strategy<Value = String> {
    let unit = prop::sample::select(vec![
        "m", "km", "k", "mi", "yd", "ft", "s", "min", "h", "hr", "kph", "mph", "per", "x",
    ]);
    let exponent = prop_oneof![
        Just(String::new()),
        (-9i64..10).prop_map(|e| format!("^{}", e)),
        any::<i32>().prop_map(|e| format!("^{}", e)),
        Just(format!("^{}", i32::MIN)),
        Just("^99999999999".to_string()),
    ];
    let separator = prop::sample::select(vec![" ", "*", "/", " / ", "//"]);
    let token = (unit, exponent, separator)
        .prop_map(|(unit, exponent, separator)| format!("{}{}{}", separator, unit, exponent));

    (0.0f64..1000.0, prop::collection::vec(token, 1..6)).prop_map(|(number, tokens)| {
        format!("{} {}", number, tokens.concat())
    })
}

// ── Durations ────────────────────────────────────────────────────────

proptest! {
    /// Any whole number of seconds survives H:MM:SS formatting and parsing.
    #[test]
    fn duration_hmmss_round_trip(seconds in 0u64..1_000_000) {
        let text = format_hmmss(seconds as f64);
        let parsed = parse_duration(&text);
        prop_assert!(parsed.is_some(), "{} did not parse", text);
        prop_assert_eq!(parsed.unwrap().magnitude(), seconds as f64);
    }

    /// Labelled hours, minutes and seconds add up.
    #[test]
    fn duration_labelled_sum(h in 0u64..50, m in 0u64..60, s in 0u64..60) {
        let text = format!("{}h {}m {}s", h, m, s);
        let parsed = parse_duration(&text).map(|q| q.magnitude());
        prop_assert_eq!(parsed, Some((h * 3600 + m * 60 + s) as f64));
    }

    /// Clock paces survive display and re-parsing to the nearest second per unit.
    #[test]
    fn pace_clock_round_trip(minutes in 2u64..20, seconds in 0u64..60, unit in distance_unit()) {
        let text = format!("{}:{:02}/{}", minutes, seconds, unit.symbol());
        let parsed = parse_pace(&text);
        prop_assert!(parsed.is_some(), "{} did not parse", text);
        let per_meter = parsed.unwrap().magnitude();
        let expected = (minutes * 60 + seconds) as f64 / unit.meters();
        prop_assert!((per_meter - expected).abs() < 1e-9);
    }

    /// Parsing never panics on arbitrary input.
    #[test]
    fn parsers_total(text in "\\PC{0,24}") {
        let _ = parse_duration(&text);
        let _ = parse_distance(&text);
        let _ = parse_speed(&text);
        let _ = parse_pace(&text);
    }

    /// Unit expressions with products, powers and repeated division never panic,
    /// in the parsers or in a derivation.
    #[test]
    fn unit_expressions_total(text in unit_expression_text()) {
        let _ = parse_duration(&text);
        let _ = parse_distance(&text);
        let _ = parse_speed(&text);
        let _ = parse_pace(&text);

        for calc_mode in [CalcMode::Velocity, CalcMode::Distance, CalcMode::Time] {
            for velocity_mode in [VelocityMode::Pace, VelocityMode::Speed] {
                let _ = derive(
                    calc_mode,
                    velocity_mode,
                    Some(&text),
                    Some(&text),
                    Some(&text),
                    &OutputUnits::default(),
                );
            }
        }
    }
}

// ── Unit switching ───────────────────────────────────────────────────

proptest! {
    /// Output units change the display only, never the derived magnitude.
    #[test]
    fn unit_switch_keeps_base_values(
        km in 1u64..100,
        minutes in 10u64..600,
        first in output_units(),
        second in output_units(),
    ) {
        let distance = format!("{} km", km);
        let time = format!("{} min", minutes);

        for velocity_mode in [VelocityMode::Pace, VelocityMode::Speed] {
            let a = derive(
                CalcMode::Velocity,
                velocity_mode,
                Some(&distance),
                Some(&time),
                None,
                &first,
            );
            let b = derive(
                CalcMode::Velocity,
                velocity_mode,
                Some(&distance),
                Some(&time),
                None,
                &second,
            );
            prop_assert_eq!(a.base, b.base);
            prop_assert!(a.base.velocity.is_some());
        }
    }
}
