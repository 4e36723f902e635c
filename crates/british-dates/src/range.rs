//! House-style phrasing of a date range as a single sentence fragment.
//!
//! The wording depends on whether the range spans more than one calendar
//! day, whether the start and end times should be shown, and whether the
//! short form (abbreviated months, no weekday) is wanted. Seven mutually
//! exclusive patterns cover the whole space:
//!
//! | Days | Times shown | Example (long form) |
//! |---|---|---|
//! | one | none | "Friday 26 May 2006" |
//! | one | start | "9am, Friday 26 May 2006" |
//! | one | start and end | "9am to 2pm, Friday 26 May 2006" |
//! | several, same month | none | "26 to 27 May 2006" |
//! | several | none | "Friday 26 May 2006 to Thursday 1 June 2006" |
//! | several | start | "9am, Friday 26 May 2006 to Saturday 27 May 2006" |
//! | several | start and end | "9am, Friday 26 May 2006 to 2pm, Saturday 27 May 2006" |

use serde::{Deserialize, Serialize};

use crate::format;
use crate::moment::Moment;

/// Display flags for [`date_range`]. The default shows dates only, in the
/// full style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeStyle {
    /// Show the start moment's time of day.
    pub show_start_time: bool,
    /// Show the end moment's time of day. Only honoured when the start
    /// time is also shown; see [`date_range`].
    pub show_end_time: bool,
    /// Abbreviated month names, no weekday names.
    pub short_form: bool,
}

/// Which times a selected pattern renders.
#[derive(Clone, Copy, PartialEq, Eq)]
enum TimesShown {
    None,
    StartOnly,
    Both,
}

/// Phrase the period from `start` to `end` in the house style.
///
/// If `end` precedes `start` the two are swapped before any pattern is
/// chosen, so a reversed range reads the same as the range in order.
///
/// An end time without a start time has no pattern of its own: the range
/// is phrased as if no time had been requested, rather than showing an
/// end time with nothing for it to run from.
///
/// # Examples
///
/// ```
/// use british_dates::{date_range, Moment, RangeStyle};
///
/// let start = Moment::from_civil(2006, 5, 26, 9, 0).unwrap();
/// let end = Moment::from_civil(2006, 5, 26, 14, 0).unwrap();
///
/// let phrase = date_range(start, end, RangeStyle {
///     show_start_time: true,
///     show_end_time: true,
///     ..RangeStyle::default()
/// });
/// assert_eq!(phrase, "9am to 2pm, Friday 26 May 2006");
/// ```
pub fn date_range(start: Moment, end: Moment, style: RangeStyle) -> String {
    let (start, end) = if end < start { (end, start) } else { (start, end) };

    let multi_day = start.date() != end.date();
    let same_month = start.month() == end.month() && start.year() == end.year();
    let times = match (style.show_start_time, style.show_end_time) {
        (true, true) => TimesShown::Both,
        (true, false) => TimesShown::StartOnly,
        (false, _) => TimesShown::None,
    };
    let short = style.short_form;

    match (multi_day, times) {
        // One day, no time: Friday 26 May 2006
        (false, TimesShown::None) => {
            if short {
                format::short_date(Some(start), true)
            } else {
                format::date_with_weekday(Some(start))
            }
        }

        // One day, with start time: 9am, Friday 26 May 2006
        (false, TimesShown::StartOnly) => time_then_date(start, short),

        // One day, with start and finish times: 9am to 2pm, Friday 26 May 2006
        (false, TimesShown::Both) => {
            let date = if short {
                format::short_date(Some(start), true)
            } else {
                format::date_with_weekday(Some(start))
            };
            format!(
                "{} to {}, {}",
                format::time(Some(start)),
                format::time(Some(end)),
                date
            )
        }

        // Different days in the same month, no times: 26 to 27 May 2006.
        // The only pattern where the start side drops its month and year.
        (true, TimesShown::None) if same_month => {
            let end_date = if short {
                format::short_date(Some(end), true)
            } else {
                format::long_date(Some(end))
            };
            format!("{} to {}", start.day(), end_date)
        }

        // Different days, no times: Friday 26 May 2006 to Thursday 1 June 2006
        (true, TimesShown::None) => {
            if short {
                format!(
                    "{} to {}",
                    format::short_date(Some(start), true),
                    format::short_date(Some(end), true)
                )
            } else {
                format!(
                    "{} to {}",
                    format::date_with_weekday(Some(start)),
                    format::date_with_weekday(Some(end))
                )
            }
        }

        // Different days, with start time: 9am, Friday 26 May 2006 to Saturday 27 May 2006
        (true, TimesShown::StartOnly) => {
            let end_date = if short {
                format::short_date(Some(end), true)
            } else {
                format::date_with_weekday(Some(end))
            };
            format!("{} to {}", time_then_date(start, short), end_date)
        }

        // Different days, with start and end times:
        // 9am, Friday 26 May 2006 to 2pm, Saturday 27 May 2006
        (true, TimesShown::Both) => {
            format!(
                "{} to {}",
                time_then_date(start, short),
                time_then_date(end, short)
            )
        }
    }
}

/// One side of a time-bearing range phrase: "9am, Friday 26 May 2006".
/// Time before date — the reverse of the standalone date-with-time
/// formatters, which put the date first.
fn time_then_date(m: Moment, short: bool) -> String {
    let date = if short {
        format::short_date(Some(m), true)
    } else {
        format::date_with_weekday(Some(m))
    };
    format!("{}, {}", format::time(Some(m)), date)
}
