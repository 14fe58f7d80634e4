/// Reader and audio settings
use super::Reciter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Audio playback settings
///
/// Changing `selected_language` while translation is enabled invalidates any
/// translation clip that is currently playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Play the translation clip after each verse
    pub with_translation: bool,

    /// Language code for translation audio
    pub selected_language: String,

    /// Language code for translation text
    pub display_language: String,
}

impl AudioSettings {
    /// Language used when nothing was stored
    pub const DEFAULT_LANGUAGE: &'static str = "ur";
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            with_translation: false,
            selected_language: Self::DEFAULT_LANGUAGE.to_string(),
            display_language: Self::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Reader preferences that survive restarts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Reciter for primary audio
    pub reciter_id: String,

    /// Translation reciter per language code
    pub translation_reciters: BTreeMap<String, String>,

    pub dark_mode: bool,
}

impl Preferences {
    /// Chosen translation reciter for a language, if any
    pub fn translation_reciter(&self, language: &str) -> Option<&str> {
        self.translation_reciters.get(language).map(String::as_str)
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            reciter_id: Reciter::DEFAULT_ID.to_string(),
            translation_reciters: BTreeMap::new(),
            dark_mode: false,
        }
    }
}
