//! The [`Moment`] type: an instant pinned to UK civil time.
//!
//! Every formatting operation in this crate reads calendar fields (day,
//! month, hour, ...) from the Europe/London decomposition of an instant,
//! regardless of the host's timezone or locale. Important for servers
//! hosted in UTC-pinned environments where the wall clock is not UK time.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::DateError;

/// The fixed regional zone used for all civil-time decomposition,
/// including GMT/BST daylight saving rules.
pub const UK: Tz = chrono_tz::Europe::London;

/// An instant in time together with its UK civil-calendar decomposition.
///
/// Immutable once constructed. Ordering and equality compare the
/// underlying instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Moment(DateTime<Tz>);

impl Moment {
    /// Pin a UTC instant to UK civil time.
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Moment(instant.with_timezone(&UK))
    }

    /// Build a moment from UK wall-clock fields.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] or [`DateError::InvalidTime`] for
    /// out-of-range fields, and [`DateError::AmbiguousTime`] for wall-clock
    /// times that are ambiguous or skipped at a GMT/BST transition.
    pub fn from_civil(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> crate::error::Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))?;
        let naive = date
            .and_hms_opt(hour, minute, 0)
            .ok_or_else(|| DateError::InvalidTime(format!("{hour:02}:{minute:02}")))?;
        UK.from_local_datetime(&naive)
            .single()
            .map(Moment)
            .ok_or_else(|| DateError::AmbiguousTime(naive.to_string()))
    }

    /// Build a moment for midnight (start of day) on a UK calendar date.
    pub fn from_date(year: i32, month: u32, day: u32) -> crate::error::Result<Self> {
        Self::from_civil(year, month, day, 0, 0)
    }

    pub(crate) fn from_local(local: DateTime<Tz>) -> Self {
        Moment(local)
    }

    /// Calendar year in UK civil time.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month in UK civil time (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month in UK civil time (1–31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Hour of day in UK civil time (0–23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute of hour in UK civil time (0–59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Day of week in UK civil time.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The UK calendar date, with the time of day discarded.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// The same instant expressed in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}
