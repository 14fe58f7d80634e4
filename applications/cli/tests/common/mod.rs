//! Shared fixtures for CLI tests

use async_trait::async_trait;
use std::collections::HashSet;
use tilawah_core::{
    Chapter, ChapterNumber, ContentSource, Reciter, Result, TilawahError, Verse, VerseNumber,
};

/// Chapter 112 served from memory
///
/// Every verse has recitation audio unless listed in `silent`; every verse
/// but the third has an Urdu translation clip.
#[derive(Default)]
pub struct FixtureSource {
    pub silent: HashSet<u16>,
}

impl FixtureSource {
    pub fn with_silent_verse(n: u16) -> Self {
        Self {
            silent: HashSet::from([n]),
        }
    }
}

pub fn ikhlas() -> ChapterNumber {
    ChapterNumber::new(112).unwrap()
}

pub fn recitation_url(reciter: &str, n: u16) -> String {
    format!("https://cdn.test/{reciter}/112-{n}.mp3")
}

pub fn translation_url(n: u16) -> String {
    format!("https://cdn.test/ur.khan/112-{n}.mp3")
}

#[async_trait]
impl ContentSource for FixtureSource {
    async fn get_chapters(&self) -> Result<Vec<Chapter>> {
        Ok(vec![Chapter {
            number: ikhlas(),
            name: "الإخلاص".to_string(),
            english_name: "Al-Ikhlaas".to_string(),
            english_name_translation: "Sincerity".to_string(),
            number_of_verses: 4,
            revelation_type: None,
        }])
    }

    async fn get_verses(
        &self,
        chapter: ChapterNumber,
        reciter_id: &str,
        with_translation: bool,
        language: &str,
    ) -> Result<Vec<Verse>> {
        if chapter != ikhlas() {
            return Err(TilawahError::not_found("chapter", chapter.to_string()));
        }

        Ok((1..=4u16)
            .map(|n| {
                let mut verse =
                    Verse::new(VerseNumber::new(6221 + u32::from(n)), chapter, n, format!("verse {n}"));
                if !self.silent.contains(&n) {
                    verse = verse.with_audio(recitation_url(reciter_id, n));
                }
                if with_translation {
                    verse = verse.with_translation(format!("translation {n}"));
                    if language == "ur" && n != 3 {
                        verse = verse.with_translation_audio("ur", translation_url(n));
                    }
                }
                verse
            })
            .collect())
    }

    async fn get_reciters(&self) -> Result<Vec<Reciter>> {
        Ok(vec![Reciter {
            id: Reciter::DEFAULT_ID.to_string(),
            name: "Alafasy".to_string(),
            style: Some("versebyverse".to_string()),
            language: Some("ar".to_string()),
        }])
    }
}
