//! Tilawah HTTP Clients
//!
//! Clients for the public APIs Tilawah reads from.
//!
//! # Features
//!
//! - **Content**: chapter index, verses with recitation and translation
//!   audio, audio editions (alquran.cloud), as a [`ContentSource`]
//! - **Prayer times**: daily timings with sehri and iftar (aladhan.com)
//! - **Reverse geocoding**: country and city for a position (bigdatacloud.net)
//!
//! # Example
//!
//! ```ignore
//! use tilawah_client::{ClientConfig, QuranClient};
//! use tilawah_core::{ChapterNumber, ContentSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuranClient::new(ClientConfig::quran())?;
//!
//!     let chapters = client.get_chapters().await?;
//!     println!("{} chapters", chapters.len());
//!
//!     let verses = client
//!         .get_verses(ChapterNumber::new(1)?, "ar.alafasy", true, "ur")
//!         .await?;
//!     println!("{}", verses[0].text);
//!
//!     Ok(())
//! }
//! ```
//!
//! [`ContentSource`]: tilawah_core::ContentSource

mod client;
mod error;
mod geocode;
mod prayer;
mod quran;
mod types;

pub use error::{ClientError, Result};
pub use geocode::{GeocodeClient, Locality};
pub use prayer::{adjust_minutes, to_12_hour, PrayerClient, SEHRI_OFFSET_MINUTES};
pub use quran::QuranClient;
pub use types::ClientConfig;
