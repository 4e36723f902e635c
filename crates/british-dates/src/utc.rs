//! Machine-readable interchange renderings of a [`Moment`].
//!
//! Everything except [`iso8601_date`] is UTC-normalized. The date-only
//! form deliberately keeps the UK calendar date: a date with no time of
//! day carries no offset information, so shifting it to UTC would move
//! midnight-in-summer dates back a day.

use crate::moment::Moment;

/// `YYYY-MM-DD`, from the UK calendar date. No timezone conversion.
pub fn iso8601_date(moment: Moment) -> String {
    moment.date().format("%Y-%m-%d").to_string()
}

/// ISO 8601 UTC date and time, eg `2006-04-01T15:30:00Z`.
///
/// Suitable for the hCalendar microformat.
pub fn iso8601_date_time(moment: Moment) -> String {
    moment.to_utc().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// RFC 822 date and time, as used by RSS feeds, eg
/// `Mon, 15 Aug 2005 15:52:01 UT`.
///
/// Uses a four-digit year: RFC 822 itself says two digits, but four is
/// what RFC 1123 requires and what feeds use in practice.
pub fn rfc822_date_time(moment: Moment) -> String {
    moment.to_utc().format("%a, %d %b %Y %H:%M:%S UT").to_string()
}

/// RFC 850 date and time, eg `Monday, 15-Aug-05 15:52:01 UTC`.
pub fn rfc850_date_time(moment: Moment) -> String {
    moment.to_utc().format("%A, %d-%b-%y %H:%M:%S UTC").to_string()
}

/// Seconds since 1970-01-01T00:00:00Z, eg `1115337662`.
pub fn unix_timestamp(moment: Moment) -> i64 {
    moment.to_utc().timestamp()
}
