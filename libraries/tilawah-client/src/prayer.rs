//! Daily prayer times from aladhan.com.

use crate::client::Endpoint;
use crate::error::{ClientError, Result};
use crate::types::{ApiTimingsDay, ClientConfig};
use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use tilawah_core::{Coordinates, PrayerTimes};
use tracing::debug;

/// University of Islamic Sciences, Karachi
const METHOD_KARACHI: &str = "1";
/// Hanafi school for the Asr shadow length
const SCHOOL_HANAFI: &str = "1";
/// Sehri ends this many minutes before Fajr
pub const SEHRI_OFFSET_MINUTES: i64 = -2;

/// Prayer-times client.
pub struct PrayerClient {
    endpoint: Endpoint,
}

impl PrayerClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::new(&config)?,
        })
    }

    /// Prayer times at `coords` on `date`, formatted "h:mm AM/PM".
    pub async fn timings(&self, coords: Coordinates, date: NaiveDate) -> Result<PrayerTimes> {
        let path = format!("/timings/{}", date.format("%d-%m-%Y"));
        let url = self.endpoint.url(
            &path,
            &[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("method", METHOD_KARACHI.to_string()),
                ("school", SCHOOL_HANAFI.to_string()),
                ("shafaq", "abyad".to_string()),
            ],
        )?;

        let day: ApiTimingsDay = self.endpoint.get_data(url).await?;
        let t = day.timings;
        debug!(%date, fajr = %t.fajr, maghrib = %t.maghrib, "Fetched prayer timings");

        Ok(PrayerTimes {
            fajr: to_12_hour(&t.fajr)?,
            sunrise: to_12_hour(&t.sunrise)?,
            dhuhr: to_12_hour(&t.dhuhr)?,
            asr: to_12_hour(&t.asr)?,
            sehri: Some(to_12_hour(&adjust_minutes(&t.fajr, SEHRI_OFFSET_MINUTES)?)?),
            iftar: Some(to_12_hour(&t.maghrib)?),
            maghrib: to_12_hour(&t.maghrib)?,
            isha: to_12_hour(&t.isha)?,
        })
    }
}

/// Parse "HH:MM", ignoring any trailing zone annotation ("05:12 (PKT)")
fn parse_clock(time: &str) -> Result<NaiveTime> {
    let clock = time.split_whitespace().next().unwrap_or_default();
    NaiveTime::parse_from_str(clock, "%H:%M")
        .map_err(|e| ClientError::Parse(format!("bad time {:?}: {}", time, e)))
}

/// "17:05" -> "5:05 PM"; midnight and noon read as 12.
pub fn to_12_hour(time: &str) -> Result<String> {
    let t = parse_clock(time)?;
    let (pm, hour) = t.hour12();
    Ok(format!(
        "{}:{:02} {}",
        hour,
        t.minute(),
        if pm { "PM" } else { "AM" }
    ))
}

/// Shift a 24-hour "H:MM" time by `minutes`, wrapping around midnight.
pub fn adjust_minutes(time: &str, minutes: i64) -> Result<String> {
    let (shifted, _) = parse_clock(time)?.overflowing_add_signed(Duration::minutes(minutes));
    Ok(format!("{}:{:02}", shifted.hour(), shifted.minute()))
}
