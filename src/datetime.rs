//! General date grammar.
//!
//! Accepts the machine formats (RFC 3339, RFC 2822, ISO 8601 variants) and the
//! written forms people type into config files and forms (`Nov 14, 2018`,
//! `11/14/2018`, `November 2018`). Times without an offset are taken as UTC.
//! Month names may be written in full or abbreviated.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};
use regex::Regex;
use std::sync::LazyLock;

/// Year used when the text names a month and day but no year.
pub const DEFAULT_YEAR: i32 = 2001;

const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%B %d %Y %H:%M:%S GMT%z",
    "%B %d, %Y %H:%M:%S %z",
    "%d %B %Y %H:%M:%S %z",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m-%d-%Y %H:%M:%S%.f",
    "%m-%d-%Y %H:%M",
    "%B %d, %Y %H:%M:%S%.f",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d %Y %H:%M:%S%.f",
    "%B %d %Y %H:%M",
    "%d %B %Y %H:%M:%S%.f",
    "%d %B %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

// Matched against the text with `|{DEFAULT_YEAR}` appended, so `%d` cannot run
// into the year.
const YEARLESS_FORMATS: &[&str] = &[
    "%B %d, %I:%M %p|%Y",
    "%B %d, %H:%M|%Y",
    "%B %d %I:%M %p|%Y",
    "%B %d %H:%M|%Y",
    "%B %d|%Y",
];

static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+),? ([0-9]{4})$").expect("invalid month-year regex")
});

static ISO_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").expect("invalid iso month regex"));

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("invalid year regex"));

static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+ [0-9]{1,2}(,? .+)?$").expect("invalid month-day regex")
});

// A month word, or a one or two digit day followed by a separator.
static MONTH_OR_DAY_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^((jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*([ ,]|$)|[0-9]{1,2}[ /.-])")
        .expect("invalid month-or-day regex")
});

/// Parses `text` as a calendar date/time, or returns `None`.
#[must_use]
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(&normalized) {
        return Some(date.with_timezone(&Utc));
    }

    let text = strip_utc_marker(strip_weekday(strip_comment(&normalized)));
    if text.is_empty() {
        return None;
    }

    parse_with_offset(text)
        .or_else(|| parse_naive(text).map(|naive| Utc.from_utc_datetime(&naive)))
}

/// `true` when [`parse_date`] accepts `text`.
#[must_use]
pub fn is_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Whether `year` appears in `text` as a four digit number.
///
/// chrono lets `%d %Y` split a single run of digits, so table matches are only
/// kept when the year they produced was written out in full.
fn has_full_year(text: &str, year: i32) -> bool {
    text.split(|c: char| !c.is_ascii_digit())
        .any(|run| run.len() == 4 && run.parse::<i32>().is_ok_and(|y| y == year))
}

fn parse_with_offset(text: &str) -> Option<DateTime<Utc>> {
    OFFSET_DATE_TIME_FORMATS
        .iter()
        .filter_map(|format| DateTime::parse_from_str(text, format).ok())
        .find(|date| has_full_year(text, date.year()))
        .map(|date| date.with_timezone(&Utc))
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    if let Some(date_time) = DATE_TIME_FORMATS
        .iter()
        .filter_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .find(|date_time| has_full_year(text, date_time.year()))
    {
        return Some(date_time);
    }

    DATE_FORMATS
        .iter()
        .filter_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .find(|date| has_full_year(text, date.year()))
        .or_else(|| parse_month_year(text))
        .or_else(|| parse_iso_month(text))
        .or_else(|| parse_year(text))
        .map(|date| date.and_time(NaiveTime::MIN))
        .or_else(|| parse_yearless(text))
}

/// `November 2018`, `Nov 2018`
fn parse_month_year(text: &str) -> Option<NaiveDate> {
    let caps = MONTH_YEAR.captures(text)?;
    NaiveDate::parse_from_str(&format!("1 {} {}", &caps[1], &caps[2]), "%d %B %Y").ok()
}

/// `2018-11`
fn parse_iso_month(text: &str) -> Option<NaiveDate> {
    if !ISO_MONTH.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok()
}

/// `2018`
fn parse_year(text: &str) -> Option<NaiveDate> {
    if !YEAR.is_match(text) {
        return None;
    }
    NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1)
}

/// `Nov 14, 8:36 AM`, `Nov 14`
fn parse_yearless(text: &str) -> Option<NaiveDateTime> {
    if !MONTH_DAY.is_match(text) {
        return None;
    }
    let with_year = format!("{text}|{DEFAULT_YEAR}");
    YEARLESS_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(&with_year, format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(&with_year, format)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    })
}

/// Drops a trailing `(Coordinated Universal Time)` style comment.
fn strip_comment(text: &str) -> &str {
    match (text.ends_with(')'), text.rfind('(')) {
        (true, Some(open)) => text[..open].trim_end(),
        _ => text,
    }
}

/// Drops a leading weekday word when a month or day follows it.
/// The weekday is not checked against the date.
fn strip_weekday(text: &str) -> &str {
    let word_end = text.find([' ', ',']).unwrap_or(text.len());
    if text[..word_end].parse::<Weekday>().is_err() {
        return text;
    }
    let rest = text[word_end..].trim_start_matches([',', ' ']);
    if MONTH_OR_DAY_START.is_match(rest) {
        rest
    } else {
        text
    }
}

/// Drops a trailing ` UTC`, ` GMT` or `Z` (after a digit).
fn strip_utc_marker(text: &str) -> &str {
    for marker in [" UTC", " GMT"] {
        if text.len() >= marker.len()
            && text.is_char_boundary(text.len() - marker.len())
            && text[text.len() - marker.len()..].eq_ignore_ascii_case(marker)
        {
            return &text[..text.len() - marker.len()];
        }
    }
    match text.strip_suffix(['Z', 'z']) {
        Some(rest) if rest.ends_with(|c: char| c.is_ascii_digit()) => rest,
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_written_forms() {
        assert_eq!(parse_date("Wednesday, Nov 14, 2018"), Some(utc(2018, 11, 14, 0, 0, 0)));
        assert_eq!(parse_date("11/14/2018"), Some(utc(2018, 11, 14, 0, 0, 0)));
        assert_eq!(parse_date("11-14-2018 08:36"), Some(utc(2018, 11, 14, 8, 36, 0)));
        assert_eq!(parse_date("Nov 14, 2018"), Some(utc(2018, 11, 14, 0, 0, 0)));
        assert_eq!(parse_date("November 2018"), Some(utc(2018, 11, 1, 0, 0, 0)));
        assert_eq!(parse_date("november   1985"), Some(utc(1985, 11, 1, 0, 0, 0)));
    }

    #[test]
    fn test_full_month_names() {
        let expected = Some(utc(2018, 11, 14, 0, 0, 0));
        assert_eq!(parse_date("14 November 2018"), expected);
        assert_eq!(parse_date("November 14, 2018"), expected);
        assert_eq!(parse_date("Wednesday, November 14, 2018"), expected);
        assert_eq!(parse_date("November 14, 2018 08:36"), Some(utc(2018, 11, 14, 8, 36, 0)));
        assert_eq!(parse_date("Nov 2018"), Some(utc(2018, 11, 1, 0, 0, 0)));
        assert_eq!(parse_date("May 2020"), Some(utc(2020, 5, 1, 0, 0, 0)));
    }

    #[test]
    fn test_machine_forms() {
        assert_eq!(
            parse_date("Wed, 14 Nov 2018 08:36:04 +0000"),
            Some(utc(2018, 11, 14, 8, 36, 4))
        );
        assert_eq!(parse_date("2018-11-14T08:36:04+0000"), Some(utc(2018, 11, 14, 8, 36, 4)));
        assert_eq!(parse_date("2018-11-14T10:36:04+02:00"), Some(utc(2018, 11, 14, 8, 36, 4)));
        assert_eq!(parse_date("2018-11-14T08:36:04.000Z"), Some(utc(2018, 11, 14, 8, 36, 4)));
        assert_eq!(parse_date("2018-11-14 08:36:04 UTC"), Some(utc(2018, 11, 14, 8, 36, 4)));
        assert_eq!(
            parse_date("Wed Nov 14 2018 08:36:04 GMT+0000 (Coordinated Universal Time)"),
            Some(utc(2018, 11, 14, 8, 36, 4))
        );
        assert_eq!(parse_date("2018-11"), Some(utc(2018, 11, 1, 0, 0, 0)));
        assert_eq!(parse_date("2018"), Some(utc(2018, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_yearless_form_uses_default_year() {
        let date = parse_date("Nov 14, 8:36 AM").unwrap();
        assert_eq!(date.year(), DEFAULT_YEAR);
        assert_eq!((date.month(), date.day()), (11, 14));
        assert_eq!((date.hour(), date.minute()), (8, 36));

        assert_eq!(parse_date("Nov 14"), Some(utc(DEFAULT_YEAR, 11, 14, 0, 0, 0)));
        assert_eq!(parse_date("Dec 25"), Some(utc(DEFAULT_YEAR, 12, 25, 0, 0, 0)));
        assert_eq!(parse_date("December 25"), Some(utc(DEFAULT_YEAR, 12, 25, 0, 0, 0)));
    }

    #[test]
    fn test_rejects_bare_month_words() {
        for text in ["May", "Jan", "November", "may", "Nov 201", "Sunday 2018", "Friday May"] {
            assert!(!is_date(text), "{text:?} should not be a date");
        }
    }

    #[test]
    fn test_weekday_only_stripped_before_month_or_day() {
        assert_eq!(strip_weekday("Sunday 2018"), "Sunday 2018");
        assert_eq!(strip_weekday("Sun, 14 Nov 2018"), "14 Nov 2018");
        assert_eq!(strip_weekday("Wed Nov 14 2018"), "Nov 14 2018");
        assert_eq!(strip_weekday("Wednesday"), "Wednesday");
    }

    #[test]
    fn test_rejects_non_dates() {
        for text in [
            "", " ", "null", "invalid-date", "123i", ".", "yes", "John Doe", "/unique-id",
            "this is a string", "Wednesday", "1, 2, 3",
        ] {
            assert!(!is_date(text), "{text:?} should not be a date");
        }
    }

    #[test]
    fn test_display_form_round_trips() {
        let date = utc(2018, 11, 14, 8, 36, 4);
        assert_eq!(parse_date(&date.to_string()), Some(date));
        assert_eq!(parse_date(&date.to_rfc3339()), Some(date));
    }
}
