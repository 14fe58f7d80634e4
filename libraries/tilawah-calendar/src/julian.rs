//! Julian day arithmetic
//!
//! Julian days here are the astronomical kind, ending in `.5` at midnight.

use chrono::{Datelike, NaiveDate};

/// Julian day of 1 Muharram 1 AH
pub(crate) const HIJRI_EPOCH: f64 = 1948439.5;

/// Julian day of 0000-12-31 (proleptic Gregorian), the day before chrono's CE day 1
const CE_OFFSET: f64 = 1721424.5;

pub(crate) fn gregorian_to_julian(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce()) + CE_OFFSET
}

pub(crate) fn julian_to_gregorian(jd: f64) -> Option<NaiveDate> {
    let days = (jd - CE_OFFSET).round();
    if days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(days as i32)
}

/// Julian day of a Hijri date; `month` is 1-based
pub(crate) fn hijri_to_julian(year: i32, month: u8, day: u8) -> f64 {
    let year = f64::from(year);
    f64::from(day)
        + (29.5 * f64::from(month - 1)).ceil()
        + (year - 1.0) * 354.0
        + ((3.0 + 11.0 * year) / 30.0).floor()
        + HIJRI_EPOCH
        - 1.0
}

/// Hijri `(year, month 1-based, day)` of a Julian day
pub(crate) fn julian_to_hijri(jd: f64) -> (i32, u8, u8) {
    let jd = jd.floor() + 0.5;
    let year = ((30.0 * (jd - HIJRI_EPOCH) + 10646.0) / 10631.0).floor() as i32;
    let from_new_year = jd - (29.0 + hijri_to_julian(year, 1, 1));
    let month = ((from_new_year / 29.5).ceil() + 1.0).min(12.0) as u8;
    let day = (jd - hijri_to_julian(year, month, 1) + 1.0) as u8;
    (year, month, day)
}
