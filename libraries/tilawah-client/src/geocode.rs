//! Reverse geocoding through bigdatacloud.net.

use crate::client::Endpoint;
use crate::error::{ClientError, Result};
use crate::types::{ApiReverseGeocode, ClientConfig};
use serde::{Deserialize, Serialize};
use tilawah_core::Coordinates;
use tracing::{debug, warn};

/// Country and city for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    pub city: String,
}

impl Locality {
    /// Used whenever the lookup fails
    pub fn fallback() -> Self {
        Self {
            country_code: "PK".to_string(),
            city: "Lahore".to_string(),
        }
    }
}

pub struct GeocodeClient {
    endpoint: Endpoint,
}

impl GeocodeClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::new(&config)?,
        })
    }

    /// Look up where `coords` is.
    pub async fn lookup(&self, coords: Coordinates) -> Result<Locality> {
        let url = self.endpoint.url(
            "/reverse-geocode-client",
            &[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ],
        )?;

        let raw: ApiReverseGeocode = self.endpoint.get_json(url).await?;
        let country_code = raw
            .country_code
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ClientError::Parse("response has no country code".into()))?;
        let city = [raw.city, raw.locality]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Unknown City".to_string());

        debug!(country = %country_code, city = %city, "Reverse geocoded");
        Ok(Locality { country_code, city })
    }

    /// Like [`lookup`](Self::lookup), but never fails.
    pub async fn locate(&self, coords: Coordinates) -> Locality {
        match self.lookup(coords).await {
            Ok(locality) => locality,
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed, assuming fallback location");
                Locality::fallback()
            }
        }
    }
}
