//! English month and weekday name lookup tables.
//!
//! These are fixed tables rather than locale-driven formatting: the house
//! style supports exactly one locale, and an out-of-range month number
//! degrades to an empty string rather than an error.

use chrono::Weekday;

/// Full English month name for a 1-based month number.
///
/// Returns `""` for anything outside 1–12.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Abbreviated English month name for a 1-based month number.
///
/// Returns `""` for anything outside 1–12.
pub fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

/// Full English weekday name.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_in_range() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(5), "May");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn test_month_name_out_of_range_is_empty() {
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
        assert_eq!(month_name(u32::MAX), "");
    }

    #[test]
    fn test_short_month_name_in_range() {
        assert_eq!(short_month_name(1), "Jan");
        assert_eq!(short_month_name(6), "Jun");
        assert_eq!(short_month_name(9), "Sep");
    }

    #[test]
    fn test_short_month_name_out_of_range_is_empty() {
        assert_eq!(short_month_name(0), "");
        assert_eq!(short_month_name(13), "");
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(Weekday::Mon), "Monday");
        assert_eq!(day_name(Weekday::Sun), "Sunday");
    }
}
