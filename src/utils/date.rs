use chrono::{Datelike, NaiveDate};

use crate::consts::PRESENT;

/// Digits at every position except the dashes at 4 (and 7 for a full date).
/// Only this zero-padded layout sorts chronologically as plain text.
fn is_canonical_layout(s: &str) -> bool {
    let bytes = s.as_bytes();
    matches!(bytes.len(), 7 | 10)
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a period string (`YYYY-MM` or `YYYY-MM-DD`) into its first day
pub(crate) fn parse_period(s: &str) -> Option<NaiveDate> {
    if !is_canonical_layout(s) {
        return None;
    }
    if s.len() == 7 {
        return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok();
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Year of a period string, `None` when it cannot be resolved
pub(crate) fn period_year(s: &str) -> Option<i32> {
    parse_period(s).map(|d| d.year())
}

/// Valid start periods are dates; valid ends may also be the ongoing sentinel
pub(crate) fn is_valid_end(s: &str) -> bool {
    s.eq_ignore_ascii_case(PRESENT) || parse_period(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month() {
        assert_eq!(
            parse_period("2021-11"),
            NaiveDate::from_ymd_opt(2021, 11, 1)
        );
    }

    #[test]
    fn parses_full_date() {
        assert_eq!(
            parse_period("2019-07-15"),
            NaiveDate::from_ymd_opt(2019, 7, 15)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_period(""), None);
        assert_eq!(parse_period("2021-13"), None);
        assert_eq!(parse_period("present"), None);
        assert_eq!(parse_period("soon"), None);
        assert_eq!(parse_period("2021-02-30"), None);
    }

    #[test]
    fn rejects_unpadded_and_padded_with_spaces() {
        assert_eq!(parse_period("2025-3-01"), None);
        assert_eq!(parse_period("2025-3"), None);
        assert_eq!(parse_period(" 2026-01"), None);
        assert_eq!(parse_period("2026-01 "), None);
        assert_eq!(parse_period("2026/01"), None);
    }

    #[test]
    fn year_of_period() {
        assert_eq!(period_year("2025-02"), Some(2025));
        assert_eq!(period_year("n/a"), None);
    }

    #[test]
    fn end_accepts_sentinel() {
        assert!(is_valid_end("present"));
        assert!(is_valid_end("PRESENT"));
        assert!(is_valid_end("2020-01"));
        assert!(!is_valid_end("later"));
    }
}
