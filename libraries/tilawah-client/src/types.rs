//! Endpoint configuration and API response models.

use serde::Deserialize;
use std::time::Duration;

/// Where an API lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://api.alquran.cloud/v1")
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub const QURAN_URL: &'static str = "https://api.alquran.cloud/v1";
    pub const PRAYER_URL: &'static str = "https://api.aladhan.com/v1";
    pub const GEOCODE_URL: &'static str = "https://api.bigdatacloud.net/data";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// alquran.cloud
    pub fn quran() -> Self {
        Self::new(Self::QURAN_URL)
    }

    /// aladhan.com
    pub fn prayer() -> Self {
        Self::new(Self::PRAYER_URL)
    }

    /// bigdatacloud.net
    pub fn geocode() -> Self {
        Self::new(Self::GEOCODE_URL)
    }
}

// =============================================================================
// alquran.cloud
// =============================================================================

/// Response envelope shared by alquran.cloud and aladhan.com.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiChapter {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u16,
    pub revelation_type: String,
}

/// A chapter as rendered by one edition.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiChapterEdition {
    pub number: u16,
    pub ayahs: Vec<ApiVerse>,
    #[serde(default)]
    pub edition: Option<ApiEdition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiVerse {
    pub number: u32,
    pub text: String,
    pub number_in_surah: u16,
    #[serde(default)]
    pub juz: Option<u8>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiEdition {
    pub identifier: String,
    #[serde(default)]
    pub language: Option<String>,
    pub english_name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

// =============================================================================
// aladhan.com
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTimingsDay {
    pub timings: ApiTimings,
}

/// Raw 24-hour timings ("05:12")
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ApiTimings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

// =============================================================================
// bigdatacloud.net
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiReverseGeocode {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
}
