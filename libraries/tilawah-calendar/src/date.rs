//! Gregorian to Hijri conversion

use crate::error::{CalendarError, Result};
use crate::julian::{gregorian_to_julian, hijri_to_julian, julian_to_gregorian, julian_to_hijri};
use crate::month::HijriMonth;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date of the tabular Hijri calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: HijriMonth,
    pub day: u8,
    /// Number of days in `month` (29 or 30)
    pub month_length: u8,
}

impl HijriDate {
    /// Build a date, validating the day against the month length
    pub fn new(year: i32, month: HijriMonth, day: u8) -> Result<Self> {
        let month_length = month_length(year, month);
        if day == 0 || day > month_length {
            return Err(CalendarError::InvalidDay { day, month_length });
        }
        Ok(Self {
            year,
            month,
            day,
            month_length,
        })
    }

    /// Convert a Gregorian date, shifted by `adjustment` days first
    ///
    /// The tabular calendar can differ from local moon sighting by a day or
    /// two; the adjustment absorbs that.
    pub fn from_gregorian(date: NaiveDate, adjustment: i32) -> Result<Self> {
        let shifted = shift(date, adjustment)?;
        let (year, number, day) = julian_to_hijri(gregorian_to_julian(shifted));
        let month = HijriMonth::from_number(number).ok_or(CalendarError::InvalidMonth(number))?;
        Ok(Self {
            year,
            month,
            day,
            month_length: month_length(year, month),
        })
    }

    /// Gregorian date of this Hijri date (without any adjustment)
    pub fn to_gregorian(&self) -> Result<NaiveDate> {
        julian_to_gregorian(hijri_to_julian(self.year, self.month.number(), self.day))
            .ok_or(CalendarError::OutOfRange)
    }

    /// 0-based month index (Muharram = 0)
    pub fn month_index(&self) -> u8 {
        self.month.index()
    }

    pub fn is_ramadan(&self) -> bool {
        self.month == HijriMonth::Ramadan
    }

    /// First day of this date's month
    pub fn first_of_month(&self) -> Self {
        Self { day: 1, ..*self }
    }

    /// Weekday on which this date's month begins
    pub fn first_weekday(&self) -> Result<Weekday> {
        Ok(self.first_of_month().to_gregorian()?.weekday())
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// Number of days in a Hijri month
pub fn month_length(year: i32, month: HijriMonth) -> u8 {
    let start = hijri_to_julian(year, month.number(), 1);
    let next = match HijriMonth::from_index(month.index() + 1) {
        Some(next) => hijri_to_julian(year, next.number(), 1),
        None => hijri_to_julian(year + 1, 1, 1),
    };
    (next - start) as u8
}

/// Whether a Hijri year has 355 days
pub fn is_leap_year(year: i32) -> bool {
    month_length(year, HijriMonth::DhuAlHijjah) == 30
}

/// Convert a Gregorian date with a whole-day adjustment
pub fn to_hijri(date: NaiveDate, adjustment: i32) -> Result<HijriDate> {
    HijriDate::from_gregorian(date, adjustment)
}

/// Gregorian date of a Hijri date; `month` is 1-based
pub fn to_gregorian(year: i32, month: u8, day: u8) -> Result<NaiveDate> {
    let month = HijriMonth::from_number(month).ok_or(CalendarError::InvalidMonth(month))?;
    HijriDate::new(year, month, day)?.to_gregorian()
}

fn shift(date: NaiveDate, adjustment: i32) -> Result<NaiveDate> {
    let days = Days::new(u64::from(adjustment.unsigned_abs()));
    let shifted = if adjustment >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.ok_or(CalendarError::OutOfRange)
}
