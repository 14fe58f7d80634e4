//! Prayer times for the terminal

use tilawah_core::{Coordinates, Geolocation, LocationFix, PrayerTimes};

/// Position from flags or configuration; there is no device to ask
pub struct FixedLocation(pub Option<Coordinates>);

impl Geolocation for FixedLocation {
    fn current_position(&self) -> LocationFix {
        match self.0 {
            Some(coords) => LocationFix::Located(coords),
            None => LocationFix::Unsupported,
        }
    }
}

pub fn render(times: &PrayerTimes) -> Vec<String> {
    let mut rows = vec![
        ("Fajr", times.fajr.as_str()),
        ("Sunrise", times.sunrise.as_str()),
        ("Dhuhr", times.dhuhr.as_str()),
        ("Asr", times.asr.as_str()),
        ("Maghrib", times.maghrib.as_str()),
        ("Isha", times.isha.as_str()),
    ];
    if let Some(sehri) = &times.sehri {
        rows.push(("Sehri", sehri));
    }
    if let Some(iftar) = &times.iftar {
        rows.push(("Iftar", iftar));
    }
    rows.into_iter()
        .map(|(name, time)| format!("{name:<8} {time:>8}"))
        .collect()
}
