//! Single-moment formatting in the British house style.
//!
//! Every function takes `Option<Moment>` and maps an absent value to an
//! empty string — callers frequently hold optional dates (unset event
//! fields, open-ended ranges) and should never have to branch before
//! formatting. All functions are pure; output depends only on the input
//! moment's UK civil-time fields.
//!
//! # Functions
//!
//! - [`long_date`] — "1 January 2004"
//! - [`short_date`] — "1 Jan 2004", or "1 Jan" without the year
//! - [`date_with_weekday`] — "Monday 1 January 2004" (the preferred style)
//! - [`time`] — "9am", "1.10pm", "12 noon", "12 midnight"
//! - [`month_year`] — "January 2004"
//! - date + time compositions of the above, joined with ", "

use crate::moment::Moment;
use crate::names;

/// Format as "1 January 2004". Use only when the preferred style
/// (including the weekday) is too long.
pub fn long_date(moment: Option<Moment>) -> String {
    let Some(m) = moment else {
        return String::new();
    };
    format!("{} {} {}", m.day(), names::month_name(m.month()), m.year())
}

/// Format as "1 Jan 2004", or "1 Jan" when `include_year` is false.
///
/// The no-year form is for short-term data about the current year only;
/// it is the caller's responsibility not to store it long-term.
pub fn short_date(moment: Option<Moment>, include_year: bool) -> String {
    let Some(m) = moment else {
        return String::new();
    };
    let day_month = format!("{} {}", m.day(), names::short_month_name(m.month()));
    if include_year {
        format!("{} {}", day_month, m.year())
    } else {
        day_month
    }
}

/// Format as "Monday 1 January 2004".
pub fn date_with_weekday(moment: Option<Moment>) -> String {
    let Some(m) = moment else {
        return String::new();
    };
    format!("{} {}", names::day_name(m.weekday()), long_date(Some(m)))
}

/// Format as "January 2004".
pub fn month_year(moment: Option<Moment>) -> String {
    let Some(m) = moment else {
        return String::new();
    };
    format!("{} {}", names::month_name(m.month()), m.year())
}

/// Format a time of day on the 12-hour clock, house style.
///
/// No leading zero on the hour; minutes appear as ".MM" only when nonzero;
/// "12 midnight" and "12 noon" replace the am/pm suffix on the exact hour.
///
/// # Examples
///
/// ```
/// use british_dates::{format, Moment};
///
/// let m = Moment::from_civil(2016, 3, 13, 13, 10).unwrap();
/// assert_eq!(format::time(Some(m)), "1.10pm");
/// assert_eq!(format::time(None), "");
/// ```
pub fn time(moment: Option<Moment>) -> String {
    let Some(m) = moment else {
        return String::new();
    };
    let (hour, minute) = (m.hour(), m.minute());

    let clock_hour = match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    };

    let mut out = clock_hour.to_string();
    if minute > 0 {
        out.push_str(&format!(".{minute:02}"));
    }
    match (hour, minute) {
        (0, 0) => out.push_str(" midnight"),
        (12, 0) => out.push_str(" noon"),
        (h, _) if h < 12 => out.push_str("am"),
        _ => out.push_str("pm"),
    }
    out
}

/// Format as "1 January 2004, 10am".
pub fn long_date_with_time(moment: Option<Moment>) -> String {
    match moment {
        Some(m) => format!("{}, {}", long_date(Some(m)), time(Some(m))),
        None => String::new(),
    }
}

/// Format as "Monday 1 January 2004, 10am".
pub fn date_with_weekday_and_time(moment: Option<Moment>) -> String {
    match moment {
        Some(m) => format!("{}, {}", date_with_weekday(Some(m)), time(Some(m))),
        None => String::new(),
    }
}

/// Format as "1 Jan 2004, 10am", or "1 Jan, 10am" when `include_year` is
/// false (short-term data about the current year only).
pub fn short_date_with_time(moment: Option<Moment>, include_year: bool) -> String {
    match moment {
        Some(m) => format!("{}, {}", short_date(Some(m), include_year), time(Some(m))),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn moment(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Moment {
        Moment::from_civil(year, month, day, hour, minute).unwrap()
    }

    // ── date tests ──────────────────────────────────────────────────────

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(Some(moment(2004, 1, 1, 0, 0))), "1 January 2004");
    }

    #[test]
    fn test_short_date_with_year() {
        assert_eq!(short_date(Some(moment(2004, 1, 1, 0, 0)), true), "1 Jan 2004");
    }

    #[test]
    fn test_short_date_without_year() {
        assert_eq!(short_date(Some(moment(2004, 1, 1, 0, 0)), false), "1 Jan");
    }

    #[test]
    fn test_date_with_weekday() {
        // 1 January 2004 was a Thursday
        assert_eq!(
            date_with_weekday(Some(moment(2004, 1, 1, 0, 0))),
            "Thursday 1 January 2004"
        );
    }

    #[test]
    fn test_month_year() {
        assert_eq!(month_year(Some(moment(2004, 1, 15, 0, 0))), "January 2004");
    }

    #[test]
    fn test_no_leading_zero_on_day() {
        assert_eq!(long_date(Some(moment(2006, 6, 1, 0, 0))), "1 June 2006");
    }

    // ── time tests ──────────────────────────────────────────────────────

    #[test]
    fn test_time_afternoon_with_minutes() {
        assert_eq!(time(Some(moment(2016, 3, 13, 13, 10))), "1.10pm");
    }

    #[test]
    fn test_time_midnight() {
        assert_eq!(time(Some(moment(2016, 3, 13, 0, 0))), "12 midnight");
    }

    #[test]
    fn test_time_noon() {
        assert_eq!(time(Some(moment(2016, 3, 13, 12, 0))), "12 noon");
    }

    #[test]
    fn test_time_morning_on_the_hour() {
        assert_eq!(time(Some(moment(2016, 3, 13, 9, 0))), "9am");
    }

    #[test]
    fn test_time_minutes_zero_padded() {
        assert_eq!(time(Some(moment(2016, 3, 13, 9, 5))), "9.05am");
    }

    #[test]
    fn test_time_just_after_midnight_is_am() {
        assert_eq!(time(Some(moment(2016, 3, 13, 0, 15))), "12.15am");
    }

    #[test]
    fn test_time_just_after_noon_is_pm() {
        assert_eq!(time(Some(moment(2016, 3, 13, 12, 30))), "12.30pm");
    }

    #[test]
    fn test_time_late_evening() {
        assert_eq!(time(Some(moment(2016, 3, 13, 23, 59))), "11.59pm");
    }

    // ── composition tests ───────────────────────────────────────────────

    #[test]
    fn test_date_with_weekday_and_time() {
        assert_eq!(
            date_with_weekday_and_time(Some(moment(2016, 3, 13, 13, 10))),
            "Sunday 13 March 2016, 1.10pm"
        );
    }

    #[test]
    fn test_long_date_with_time() {
        assert_eq!(
            long_date_with_time(Some(moment(2004, 1, 1, 10, 0))),
            "1 January 2004, 10am"
        );
    }

    #[test]
    fn test_short_date_with_time() {
        assert_eq!(
            short_date_with_time(Some(moment(2004, 1, 1, 10, 0)), true),
            "1 Jan 2004, 10am"
        );
        assert_eq!(
            short_date_with_time(Some(moment(2004, 1, 1, 10, 0)), false),
            "1 Jan, 10am"
        );
    }

    // ── absent-input tests ──────────────────────────────────────────────

    #[test]
    fn test_absent_input_formats_to_empty_string() {
        assert_eq!(long_date(None), "");
        assert_eq!(short_date(None, true), "");
        assert_eq!(short_date(None, false), "");
        assert_eq!(date_with_weekday(None), "");
        assert_eq!(month_year(None), "");
        assert_eq!(time(None), "");
        assert_eq!(long_date_with_time(None), "");
        assert_eq!(date_with_weekday_and_time(None), "");
        assert_eq!(short_date_with_time(None, true), "");
    }

    // ── property tests ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_time_always_ends_in_a_suffix(hour in 0u32..24, minute in 0u32..60) {
            // Mid-January: no GMT/BST transition to invalidate the wall clock.
            let m = moment(2016, 1, 15, hour, minute);
            let rendered = time(Some(m));
            prop_assert!(
                rendered.ends_with("am")
                    || rendered.ends_with("pm")
                    || rendered.ends_with(" midnight")
                    || rendered.ends_with(" noon")
            );
        }

        #[test]
        fn prop_formatting_is_idempotent(hour in 0u32..24, minute in 0u32..60) {
            let m = moment(2016, 1, 15, hour, minute);
            prop_assert_eq!(time(Some(m)), time(Some(m)));
            prop_assert_eq!(date_with_weekday_and_time(Some(m)), date_with_weekday_and_time(Some(m)));
        }
    }
}
