/// Verse (ayah) types
use super::{ChapterNumber, VerseNumber};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity of a verse: global number plus its place in the chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub number: VerseNumber,
    pub chapter: ChapterNumber,
    pub number_in_chapter: u16,
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.number_in_chapter)
    }
}

/// A verse as delivered by the content source
///
/// Immutable once fetched for a given chapter/reciter/language combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: VerseNumber,
    pub chapter: ChapterNumber,
    pub number_in_chapter: u16,

    /// Source text
    pub text: String,

    /// Juz (part) the verse belongs to
    pub juz: Option<u8>,

    /// Translation text in the requested language, if any
    pub translation: Option<String>,

    /// Reciter audio URL
    pub audio: Option<String>,

    /// Translation audio URLs keyed by language code
    #[serde(default)]
    pub translation_audios: HashMap<String, String>,
}

impl Verse {
    /// Create a verse without audio or translation
    pub fn new(
        number: VerseNumber,
        chapter: ChapterNumber,
        number_in_chapter: u16,
        text: impl Into<String>,
    ) -> Self {
        Self {
            number,
            chapter,
            number_in_chapter,
            text: text.into(),
            juz: None,
            translation: None,
            audio: None,
            translation_audios: HashMap::new(),
        }
    }

    /// Attach the reciter audio URL
    #[must_use]
    pub fn with_audio(mut self, url: impl Into<String>) -> Self {
        self.audio = Some(url.into());
        self
    }

    /// Attach a translation audio URL for `language`
    #[must_use]
    pub fn with_translation_audio(
        mut self,
        language: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.translation_audios.insert(language.into(), url.into());
        self
    }

    /// Attach translation text
    #[must_use]
    pub fn with_translation(mut self, text: impl Into<String>) -> Self {
        self.translation = Some(text.into());
        self
    }

    /// Identity of this verse
    pub fn reference(&self) -> VerseRef {
        VerseRef {
            number: self.number,
            chapter: self.chapter,
            number_in_chapter: self.number_in_chapter,
        }
    }

    /// Whether reciter audio exists; verses without it can never be played
    pub fn has_audio(&self) -> bool {
        self.audio.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Reciter audio URL, ignoring empty strings
    pub fn primary_audio(&self) -> Option<&str> {
        self.audio.as_deref().filter(|url| !url.is_empty())
    }

    /// Translation audio URL for `language`
    pub fn translation_audio(&self, language: &str) -> Option<&str> {
        self.translation_audios
            .get(language)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}
