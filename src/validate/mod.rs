use once_cell::sync::Lazy;
use regex::Regex;

static TOTAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d{2}$").expect("valid regex"));

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(\d{2})-(\d{2})$").expect("valid regex"));

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("valid regex"));

/// Returns true if `total` is a decimal string with exactly two fractional
/// digits, e.g. "35.35". No locale handling, no thousands separators.
pub fn is_valid_total(total: &str) -> bool {
    TOTAL_PATTERN.is_match(total)
}

/// Returns true if `date` matches `YYYY-MM-DD` and the day-of-month is odd.
///
/// Total function: a non-matching string is simply not an odd day.
pub fn is_odd_day(date: &str) -> bool {
    let Some(caps) = DATE_PATTERN.captures(date) else {
        return false;
    };
    match caps[2].parse::<u32>() {
        Ok(day) => day % 2 != 0,
        Err(_) => false,
    }
}

/// Returns true if `time` matches `HH:MM` and the hour falls in [14, 16).
///
/// Minutes are ignored: "14:00" qualifies, "16:00" does not.
pub fn is_afternoon(time: &str) -> bool {
    let Some(caps) = TIME_PATTERN.captures(time) else {
        return false;
    };
    match caps[1].parse::<u32>() {
        Ok(hour) => (14..16).contains(&hour),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_total() {
        assert!(is_valid_total("35.35"));
        assert!(is_valid_total("0.00"));
        assert!(is_valid_total("1234.50"));
    }

    #[test]
    fn test_invalid_total() {
        assert!(!is_valid_total("35.3"));
        assert!(!is_valid_total("35"));
        assert!(!is_valid_total("abc"));
        assert!(!is_valid_total("35.355"));
        assert!(!is_valid_total(".35"));
        assert!(!is_valid_total("1,234.50"));
        assert!(!is_valid_total("-5.00"));
    }

    #[test]
    fn test_odd_day() {
        assert!(is_odd_day("2022-01-01"));
        assert!(is_odd_day("2022-03-31"));
        assert!(!is_odd_day("2022-01-02"));
    }

    #[test]
    fn test_odd_day_malformed_is_false() {
        assert!(!is_odd_day("2022-1-1"));
        assert!(!is_odd_day("01-01-2022"));
        assert!(!is_odd_day("not a date"));
        assert!(!is_odd_day(""));
    }

    #[test]
    fn test_afternoon_window() {
        assert!(is_afternoon("14:00"));
        assert!(is_afternoon("15:59"));
        assert!(!is_afternoon("13:59"));
        assert!(!is_afternoon("16:00"));
    }

    #[test]
    fn test_afternoon_malformed_is_false() {
        assert!(!is_afternoon("2:00"));
        assert!(!is_afternoon("14:00:00"));
        assert!(!is_afternoon("noon"));
        assert!(!is_afternoon(""));
    }
}
