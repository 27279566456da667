/// Decimal places kept when a magnitude is displayed in its unit
pub const DISPLAY_DECIMALS: i32 = 3;

pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Render a value rounded to the display precision without trailing zeros ("5", "2.778")
pub fn format_decimal(value: f64) -> String {
    let rounded = round_to_decimals(value, DISPLAY_DECIMALS);
    // -0.0 would print as "-0"
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

fn split_clock(seconds: f64) -> (u64, u64, u64) {
    // Round the total first so 59.6 s becomes 1:00 rather than 0:60
    let total = seconds.round().max(0.0) as u64;
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Format seconds as H:MM:SS, rounding to the nearest whole second
pub fn format_hmmss(seconds: f64) -> String {
    let (h, m, s) = split_clock(seconds);
    format!("{}:{:02}:{:02}", h, m, s)
}

/// Format seconds as M:SS, or H:MM:SS once an hour is reached
pub fn format_clock(seconds: f64) -> String {
    let (h, m, s) = split_clock(seconds);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hmmss() {
        assert_eq!(format_hmmss(0.0), "0:00:00");
        assert_eq!(format_hmmss(90.0), "0:01:30");
        assert_eq!(format_hmmss(3661.0), "1:01:01");
        assert_eq!(format_hmmss(9000.0), "2:30:00");
        assert_eq!(format_hmmss(36000.0), "10:00:00");
        assert_eq!(format_hmmss(59.6), "0:01:00");
        assert_eq!(format_hmmss(3599.5), "1:00:00");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(300.0), "5:00");
        assert_eq!(format_clock(482.8), "8:03");
        assert_eq!(format_clock(3725.0), "1:02:05");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(5.0), "5");
        assert_eq!(format_decimal(2.777_777_7), "2.778");
        assert_eq!(format_decimal(0.000_1), "0");
        assert_eq!(format_decimal(-0.000_1), "0");
        assert_eq!(format_decimal(3000.0), "3000");
    }
}
