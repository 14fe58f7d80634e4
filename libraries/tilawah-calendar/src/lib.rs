//! Tilawah Calendar
//!
//! Tabular Hijri calendar arithmetic: Gregorian to Hijri conversion with a
//! whole-day adjustment, month lengths, and the reverse conversion.
//!
//! The arithmetic approximation can be a day off from local moon sighting;
//! [`adjustment_for_country`] gives the customary correction for a few
//! regions.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tilawah_calendar::{adjustment_for_country, to_hijri, HijriMonth};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let hijri = to_hijri(date, adjustment_for_country("PK")).unwrap();
//!
//! assert_eq!(hijri.month, HijriMonth::Ramadan);
//! assert_eq!(hijri.to_string(), "1 Ramadan 1445");
//! ```

mod date;
mod error;
mod julian;
mod month;
mod region;

pub use date::{is_leap_year, month_length, to_gregorian, to_hijri, HijriDate};
pub use error::{CalendarError, Result};
pub use month::HijriMonth;
pub use region::{adjustment_for_country, REGIONAL_ADJUSTMENTS};
