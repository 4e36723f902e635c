//! Lenient parsing of British-style date strings.
//!
//! More forgiving than a single strptime pattern: ordinal suffixes are
//! stripped ("29th May" → "29 May"), a missing year is inferred from the
//! supplied clock anchor, and a ladder of day-first formats is tried in
//! order. Unrecognised input is `None`, never an error — the caller
//! decides what a failed parse means.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::moment::{Moment, UK};

/// Date-and-time formats, tried before date-only ones. Day before month
/// throughout, per British convention.
const DATE_TIME_FORMATS: &[&str] = &[
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats; the time of day defaults to midnight. The
/// two-digit-year form must come before `%d/%m/%Y`: chrono's `%Y` accepts
/// fewer than four digits, so it would read "29/05/20" as year 20.
const DATE_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
];

/// Parse free-text British date input, leniently.
///
/// `now` anchors year inference (no system clock is read inside the
/// library; pass `Utc::now()` for interactive input). The anchor's UK
/// civil year is used, so "29 May" typed just after a UTC year boundary
/// still lands in the UK's current year.
///
/// # Examples
///
/// ```
/// use british_dates::parse_date;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
///
/// let parsed = parse_date("29th May", now).unwrap();
/// assert_eq!(parsed.year(), 2025);
/// assert_eq!(parsed.month(), 5);
/// assert_eq!(parsed.day(), 29);
///
/// assert!(parse_date("not a date", now).is_none());
/// ```
pub fn parse_date(text: &str, now: DateTime<Utc>) -> Option<Moment> {
    let mut text = strip_ordinals(text.trim());

    // Exactly one space suggests the year was left off, eg "29 May".
    // Structural, not semantic: a two-token non-date gets a year appended
    // too, and then fails the parse below.
    if text.chars().filter(|&c| c == ' ').count() == 1 {
        let year = now.with_timezone(&UK).year();
        text.push(' ');
        text.push_str(&year.to_string());
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&text, fmt) {
            return to_moment(naive);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&text, fmt) {
            return to_moment(date.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}

/// Pin a parsed wall-clock value to UK civil time. Ambiguous or skipped
/// wall-clock times at a GMT/BST transition are not recognised.
fn to_moment(naive: NaiveDateTime) -> Option<Moment> {
    UK.from_local_datetime(&naive).single().map(Moment::from_local)
}

/// Remove English ordinal suffixes from whole-word integers: "1st" → "1",
/// "23rd" → "23". Word-boundary matching, so "21st" normalises like "1st"
/// and embedded text such as "a1st" is left alone.
fn strip_ordinals(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let at_word_boundary = i == 0 || !is_word_char(chars[i - 1]);
        if chars[i].is_ascii_digit() && at_word_boundary {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            out.extend(&chars[start..i]);

            if i + 2 <= chars.len() {
                let suffix: String = chars[i..i + 2].iter().collect();
                let ends_word = i + 2 == chars.len() || !is_word_char(chars[i + 2]);
                if ends_word && matches!(suffix.as_str(), "st" | "nd" | "rd" | "th") {
                    i += 2;
                }
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
