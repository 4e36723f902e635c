//! # british-dates
//!
//! Date and time formatting in line with a British English house style,
//! plus lenient parsing of British date strings and the usual
//! machine-readable interchange formats.
//!
//! All calendar decomposition is pinned to UK civil time (Europe/London,
//! including GMT/BST rules) regardless of the host's timezone. Every
//! operation is a pure function over immutable values: no I/O, no shared
//! state, safe to call from any thread.
//!
//! Formatters accept `Option<Moment>` and render an absent value as an
//! empty string, so optional dates can be formatted without branching.
//!
//! ## Modules
//!
//! - [`moment`] — the [`Moment`] type: an instant pinned to UK civil time
//! - [`names`] — English month and weekday name lookup tables
//! - [`format`] — single dates and times in the house style
//! - [`range`] — a start/end pair phrased as one sentence fragment
//! - [`parse`] — lenient parsing of British date strings
//! - [`utc`] — ISO 8601, RFC 822, RFC 850, UNIX timestamp renderings
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use british_dates::{date_range, Moment, RangeStyle};
//!
//! let start = Moment::from_civil(2006, 5, 26, 9, 0).unwrap();
//! let end = Moment::from_civil(2006, 5, 27, 14, 0).unwrap();
//!
//! let phrase = date_range(start, end, RangeStyle {
//!     show_start_time: true,
//!     show_end_time: true,
//!     ..RangeStyle::default()
//! });
//! assert_eq!(phrase, "9am, Friday 26 May 2006 to 2pm, Saturday 27 May 2006");
//! ```

pub mod error;
pub mod format;
pub mod moment;
pub mod names;
pub mod parse;
pub mod range;
pub mod utc;

pub use error::{DateError, Result};
pub use format::{
    date_with_weekday, date_with_weekday_and_time, long_date, long_date_with_time, month_year,
    short_date, short_date_with_time, time,
};
pub use moment::{Moment, UK};
pub use names::{day_name, month_name, short_month_name};
pub use parse::parse_date;
pub use range::{date_range, RangeStyle};
pub use utc::{iso8601_date, iso8601_date_time, rfc822_date_time, rfc850_date_time, unix_timestamp};
