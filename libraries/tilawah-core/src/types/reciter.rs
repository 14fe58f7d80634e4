use serde::{Deserialize, Serialize};

/// An audio edition: which voice recording to use for playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reciter {
    /// Edition identifier, e.g. "ar.alafasy"
    pub id: String,
    pub name: String,
    /// Recitation style ("versebyverse", "translation", ...)
    pub style: Option<String>,
    /// Language code of the recording
    pub language: Option<String>,
}

impl Reciter {
    /// Default reciter for primary-language playback
    pub const DEFAULT_ID: &'static str = "ar.alafasy";
}
