use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// "<h> hours <m> minutes <s> seconds", every part optional, groups 1..=3
const LABELLED_TIME: &str = r"(?:(\d+)\s*(?:hours|hour|hrs|hr|h)\s*)?(?:(\d+)\s*(?:minutes|minute|mins|min|m)\s*)?(?:(\d+)\s*(?:seconds|second|secs|sec|s))?";

/// "[[h:]mm:]ss", groups 1..=3
const COLON_TIME: &str = r"(?:(?:(\d+):)?(\d{1,2}):)?(\d{1,2})";

lazy_static! {
    /// The word "per" standing in for a slash ("10 km per h")
    pub static ref PER: Regex = Regex::new(r"\s*per\s*").unwrap();

    pub static ref COLON_DURATION: Regex = Regex::new(&format!(r"^{}$", COLON_TIME)).unwrap();

    /// Whole seconds with no separators ("3600")
    pub static ref BARE_SECONDS: Regex = Regex::new(r"^(\d+)$").unwrap();

    pub static ref LABELLED_DURATION: Regex =
        Regex::new(&format!(r"^{}$", LABELLED_TIME)).unwrap();

    // Pace grammars match the whole input. A pattern that only matched a suffix would read
    // "8.5 min/mi" as "5 min/mi" and "4.5/mi" as "5/mi"; anchored, those fall through to the
    // ratio guard and the unit algebra (510 s/mi and no match).

    /// Clock time over a distance unit ("5:00/km"), unit in group 4
    pub static ref COLON_PACE: Regex =
        Regex::new(&format!(r"^{}\s*/\s*([a-z-]+)$", COLON_TIME)).unwrap();

    /// Labelled time over a distance unit ("5 min/km"), unit in group 4
    pub static ref LABELLED_PACE: Regex =
        Regex::new(&format!(r"^{}\s*/\s*([a-z-]+)$", LABELLED_TIME)).unwrap();

    /// Minimal "<number> [unit]/<unit>" shape a pace must have before the unit algebra sees it
    pub static ref RATIO_SHAPE: Regex = Regex::new(r"\d+\s*(?:[a-z]+\s*)?/\s*[a-z-]*").unwrap();
}

/// Swap the first "per" for "/"
pub fn normalize_per(text: &str) -> String {
    PER.replace(text, "/").into_owned()
}

/// Whether any of the hour/minute/second groups (1..=3) took part in the match
pub fn has_time_groups(caps: &Captures) -> bool {
    (1..=3).any(|i| caps.get(i).is_some())
}

/// ((h * 60) + m) * 60 + s, missing groups counting as zero
pub fn captures_to_seconds(caps: &Captures) -> Option<u64> {
    let group = |i: usize| match caps.get(i) {
        Some(m) => m.as_str().parse::<u64>().ok(),
        None => Some(0),
    };

    let (h, m, s) = (group(1)?, group(2)?, group(3)?);
    h.checked_mul(60)?
        .checked_add(m)?
        .checked_mul(60)?
        .checked_add(s)
}
