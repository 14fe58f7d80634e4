//! Hijri date for the terminal

use crate::config::LocationSettings;
use crate::error::Result;
use chrono::{NaiveDate, Weekday};
use tilawah_calendar::{adjustment_for_country, to_hijri, HijriDate};
use tilawah_client::GeocodeClient;
use tilawah_core::Coordinates;
use tracing::debug;

/// Where the day adjustment came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustmentSource {
    Flag,
    Config,
    Country(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriReport {
    pub gregorian: NaiveDate,
    pub hijri: HijriDate,
    pub adjustment: i32,
    pub source: AdjustmentSource,
    pub first_weekday: Weekday,
}

impl HijriReport {
    pub fn new(gregorian: NaiveDate, adjustment: i32, source: AdjustmentSource) -> Result<Self> {
        let hijri = to_hijri(gregorian, adjustment)?;
        Ok(Self {
            gregorian,
            hijri,
            adjustment,
            source,
            first_weekday: hijri.first_weekday()?,
        })
    }

    pub fn render(&self) -> Vec<String> {
        let source = match &self.source {
            AdjustmentSource::Flag => "flag".to_string(),
            AdjustmentSource::Config => "config".to_string(),
            AdjustmentSource::Country(code) => code.clone(),
        };
        let mut lines = vec![
            format!("{}", self.gregorian.format("%A %-d %B %Y")),
            format!("{} ({:+} day, {})", self.hijri, self.adjustment, source),
            format!("Month length: {} days", self.hijri.month_length),
            format!("Month begins on: {}", weekday_name(self.first_weekday)),
        ];
        if self.hijri.is_ramadan() {
            lines.push("Ramadan Mubarak".to_string());
        }
        lines
    }
}

/// Adjustment from the flag or configuration, without touching the network
pub fn configured_adjustment(
    flag: Option<i32>,
    location: &LocationSettings,
) -> Option<(i32, AdjustmentSource)> {
    if let Some(days) = flag {
        return Some((days, AdjustmentSource::Flag));
    }
    if let Some(days) = location.hijri_adjustment {
        return Some((days, AdjustmentSource::Config));
    }
    location.country.as_ref().map(|code| {
        (
            adjustment_for_country(code),
            AdjustmentSource::Country(code.trim().to_ascii_uppercase()),
        )
    })
}

/// Adjustment for this run, reverse geocoding `coords` as a last resort
pub async fn resolve_adjustment(
    flag: Option<i32>,
    location: &LocationSettings,
    geocoder: &GeocodeClient,
    coords: Coordinates,
) -> (i32, AdjustmentSource) {
    if let Some(resolved) = configured_adjustment(flag, location) {
        return resolved;
    }
    let locality = geocoder.locate(coords).await;
    debug!(country = %locality.country_code, city = %locality.city, "Adjusting for region");
    (
        adjustment_for_country(&locality.country_code),
        AdjustmentSource::Country(locality.country_code),
    )
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
