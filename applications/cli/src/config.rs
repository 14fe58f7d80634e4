/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tilawah_client::ClientConfig;
use tilawah_core::{find_language, Coordinates};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub location: LocationSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_quran_url")]
    pub quran_url: String,

    #[serde(default = "default_prayer_url")]
    pub prayer_url: String,

    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    /// Overrides the stored reciter preference
    #[serde(default)]
    pub reciter: Option<String>,

    /// Overrides the stored translation toggle
    #[serde(default)]
    pub translation: Option<bool>,

    /// Overrides the stored translation language
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default = "default_preload_ahead")]
    pub preload_ahead: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocationSettings {
    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    /// Skips reverse geocoding when set
    #[serde(default)]
    pub country: Option<String>,

    /// Skips the regional table when set
    #[serde(default)]
    pub hijri_adjustment: Option<i32>,
}

impl AppConfig {
    pub const DEFAULT_FILE: &'static str = "tilawah.toml";

    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `tilawah.toml` in the working
    /// directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(Self::DEFAULT_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (TILAWAH_PLAYBACK__RECITER=...)
        settings = settings.add_source(
            config::Environment::with_prefix("TILAWAH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("api.quran_url", &self.api.quran_url),
            ("api.prayer_url", &self.api.prayer_url),
            ("api.geocode_url", &self.api.geocode_url),
        ] {
            if url.trim().is_empty() {
                return Err(CliError::Config(format!("{name} must not be empty")));
            }
        }

        if self.api.timeout_secs == 0 {
            return Err(CliError::Config(
                "api.timeout_secs must be at least 1".to_string(),
            ));
        }

        if let Some(language) = &self.playback.language {
            if find_language(language).is_none() {
                return Err(CliError::Config(format!(
                    "Unsupported translation language {:?}",
                    language
                )));
            }
        }

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => {
                if !Coordinates::new(lat, lon).is_valid() {
                    return Err(CliError::Config(format!(
                        "Coordinates ({lat}, {lon}) are out of range"
                    )));
                }
            }
            (None, None) => {}
            _ => {
                return Err(CliError::Config(
                    "location.latitude and location.longitude must be set together".to_string(),
                ));
            }
        }

        if let Some(adjustment) = self.location.hijri_adjustment {
            if !(-2..=2).contains(&adjustment) {
                return Err(CliError::Config(format!(
                    "location.hijri_adjustment {adjustment} is outside -2..=2"
                )));
            }
        }

        Ok(())
    }

    /// Configured position, if any
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    pub fn quran_client(&self) -> ClientConfig {
        self.client_config(&self.api.quran_url)
    }

    pub fn prayer_client(&self) -> ClientConfig {
        self.client_config(&self.api.prayer_url)
    }

    pub fn geocode_client(&self) -> ClientConfig {
        self.client_config(&self.api.geocode_url)
    }

    fn client_config(&self, url: &str) -> ClientConfig {
        ClientConfig::new(url).with_timeout(Duration::from_secs(self.api.timeout_secs))
    }
}

// Default values
fn default_quran_url() -> String {
    ClientConfig::QURAN_URL.to_string()
}

fn default_prayer_url() -> String {
    ClientConfig::PRAYER_URL.to_string()
}

fn default_geocode_url() -> String {
    ClientConfig::GEOCODE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_preload_ahead() -> usize {
    1
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            quran_url: default_quran_url(),
            prayer_url: default_prayer_url(),
            geocode_url: default_geocode_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            reciter: None,
            translation: None,
            language: None,
            preload_ahead: default_preload_ahead(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
