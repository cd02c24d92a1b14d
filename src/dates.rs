//! Publication-date parsing across source-specific formats.
//!
//! Every source prints dates its own way, and none of them do it
//! consistently. Each site family maps to a [`Dialect`] holding an ordered
//! list of `chrono` format patterns; the first pattern that parses wins and
//! the date is re-emitted in the canonical `DD/MM/YYYY` form.
//!
//! A string that matches no pattern is not an error: the caller logs it and
//! records the in-band "Date not found" sentinel instead.
//!
//! [`extract_date_like`] is the looser companion: a substring search for a
//! `Month D, YYYY` shape inside text that carries trailing noise (time zones,
//! locations, bylines), used where full-string parsing would never succeed.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical output form for all parsed dates.
const CANONICAL_FORMAT: &str = "%d/%m/%Y";

/// Date-string layout family used by one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Day-first with 12-hour time and a GMT suffix, in abbreviated and full
    /// month variants, e.g. `11 Aug 2024 12:12 PM GMT`. Malformed 24-hour
    /// forms that still carry a meridiem are tried last.
    DayFirstGmt,
    /// Month-name-first and numeric US forms, e.g. `August 11, 2024` or
    /// `08-11-2024`, optionally suffixed with a `/ By Author` byline.
    MonthFirst,
    /// ISO 8601 timestamp, e.g. `2024-08-11T10:00:00Z`; only the date
    /// portion before the time separator is considered.
    IsoTimestamp,
}

const DAY_FIRST_GMT_FORMATS: &[&str] = &[
    "%d %b %Y %I:%M %p GMT",
    "%d %B %Y %I:%M %p GMT",
    "%d %b %Y %H:%M %p GMT",
    "%d %B %Y %H:%M %p GMT",
];

const MONTH_FIRST_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%m-%d-%Y",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// `Month D, YYYY` shape embedded in surrounding text.
static DATE_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+ \d{1,2}, \d{4}").unwrap());

/// Parse a raw date string under the given dialect.
///
/// Tries the dialect's patterns in order and returns the canonical
/// `DD/MM/YYYY` string on the first match, `None` when nothing matches.
pub fn parse(raw: &str, dialect: Dialect) -> Option<String> {
    let raw = raw.trim();
    match dialect {
        Dialect::DayFirstGmt => try_formats(raw, DAY_FIRST_GMT_FORMATS),
        Dialect::MonthFirst => {
            // "August 11, 2024 / By Staff Writer" -> "August 11, 2024"
            let head = raw.split("/ By").next().unwrap_or(raw).trim();
            try_formats(head, MONTH_FIRST_FORMATS)
        }
        Dialect::IsoTimestamp => {
            let date_part = raw.split('T').next().unwrap_or(raw);
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .ok()
                .map(format_canonical)
        }
    }
}

/// Find a `Month D, YYYY`-shaped substring anywhere in `text`.
///
/// Used for fields that bury the date in trailing noise, e.g.
/// `"August 11, 2024 12:12 pm IST Dhaka"`. A matched substring that parses
/// as a real date is canonicalized to `DD/MM/YYYY`; a shape-only match is
/// returned verbatim. Returns `None` when no date-like substring exists.
pub fn extract_date_like(text: &str) -> Option<String> {
    let found = DATE_LIKE.find(text)?.as_str();
    try_formats(found, &["%B %d, %Y", "%b %d, %Y"]).or_else(|| Some(found.to_string()))
}

fn try_formats(raw: &str, formats: &[&str]) -> Option<String> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(format_canonical)
}

fn format_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_gmt_abbreviated_month() {
        assert_eq!(
            parse("11 Aug 2024 12:12 PM GMT", Dialect::DayFirstGmt),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_day_first_gmt_full_month() {
        assert_eq!(
            parse("11 August 2024 9:05 AM GMT", Dialect::DayFirstGmt),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_day_first_gmt_24_hour_with_meridiem() {
        assert_eq!(
            parse("3 Sep 2024 15:30 PM GMT", Dialect::DayFirstGmt),
            Some("03/09/2024".to_string())
        );
        assert_eq!(
            parse("3 September 2024 15:30 PM GMT", Dialect::DayFirstGmt),
            Some("03/09/2024".to_string())
        );
    }

    #[test]
    fn test_month_first_name_forms() {
        assert_eq!(
            parse("August 11, 2024", Dialect::MonthFirst),
            Some("11/08/2024".to_string())
        );
        assert_eq!(
            parse("Aug 11, 2024", Dialect::MonthFirst),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_month_first_strips_byline_suffix() {
        assert_eq!(
            parse("August 11, 2024 / By Staff Writer", Dialect::MonthFirst),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_month_first_numeric_forms() {
        assert_eq!(
            parse("08-11-2024", Dialect::MonthFirst),
            Some("11/08/2024".to_string())
        );
        assert_eq!(
            parse("08/11/2024", Dialect::MonthFirst),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_month_first_day_first_fallbacks() {
        assert_eq!(
            parse("11 Aug 2024", Dialect::MonthFirst),
            Some("11/08/2024".to_string())
        );
        assert_eq!(
            parse("11 August 2024", Dialect::MonthFirst),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_iso_timestamp() {
        assert_eq!(
            parse("2024-08-11T10:00:00Z", Dialect::IsoTimestamp),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_iso_bare_date() {
        assert_eq!(
            parse("2024-08-11", Dialect::IsoTimestamp),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_unrecognized_strings_yield_none() {
        for garbage in ["", "yesterday", "11th of Never", "2024/08/11T00:00:00"] {
            assert_eq!(parse(garbage, Dialect::DayFirstGmt), None);
            assert_eq!(parse(garbage, Dialect::MonthFirst), None);
            assert_eq!(parse(garbage, Dialect::IsoTimestamp), None);
        }
    }

    #[test]
    fn test_extract_date_like_with_trailing_text() {
        assert_eq!(
            extract_date_like("August 11, 2024 12:12 pm IST Dhaka"),
            Some("11/08/2024".to_string())
        );
    }

    #[test]
    fn test_extract_date_like_mid_string() {
        assert_eq!(
            extract_date_like("Updated: March 5, 2023 | Reuters"),
            Some("05/03/2023".to_string())
        );
    }

    #[test]
    fn test_extract_date_like_shape_only_match_kept() {
        // Matches the shape but is not a real month; kept verbatim.
        assert_eq!(
            extract_date_like("Updated 99, 2024 somewhere"),
            Some("Updated 99, 2024".to_string())
        );
    }

    #[test]
    fn test_extract_date_like_absent() {
        assert_eq!(extract_date_like("no date in here"), None);
        assert_eq!(extract_date_like("11/08/2024"), None);
    }
}
