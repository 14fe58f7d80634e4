//! Shared HTTP plumbing.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, Envelope};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Validated base URL plus the HTTP client that talks to it.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    http: Client,
    base_url: String,
}

impl Endpoint {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tilawah/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` (which starts with '/') and query parameters
    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        if query.is_empty() {
            Ok(Url::parse(&raw)?)
        } else {
            Ok(Url::parse_with_params(&raw, query)?)
        }
    }

    /// GET a JSON document
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "GET");

        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// GET an enveloped document and unwrap its `data`
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let envelope: Envelope<T> = self.get_json(url).await?;
        if !(200..300).contains(&envelope.code) {
            return Err(ClientError::Api {
                status: envelope.code,
                message: envelope.status,
            });
        }
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_rejected() {
        let err = Endpoint::new(&ClientConfig::new("")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(msg) if msg.contains("empty")));
    }

    #[test]
    fn ftp_scheme_rejected() {
        let err = Endpoint::new(&ClientConfig::new("ftp://example.com")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn missing_scheme_rejected() {
        let err = Endpoint::new(&ClientConfig::new("example.com")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let endpoint = Endpoint::new(&ClientConfig::new("https://example.com/v1///")).unwrap();
        assert_eq!(endpoint.base_url(), "https://example.com/v1");
        let url = endpoint.url("/surah", &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/surah");
    }

    #[test]
    fn query_parameters_are_encoded() {
        let endpoint = Endpoint::new(&ClientConfig::new("https://example.com")).unwrap();
        let url = endpoint
            .url("/timings/01-01-2024", &[("shafaq", "abyad".into()), ("latitude", "31.5".into())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/timings/01-01-2024?shafaq=abyad&latitude=31.5"
        );
    }
}
