//! Chapter, verse and reciter content from alquran.cloud.

use crate::client::Endpoint;
use crate::error::{ClientError, Result};
use crate::types::{ApiChapter, ApiChapterEdition, ApiEdition, ApiVerse, ClientConfig};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tilawah_core::{
    find_language, Chapter, ChapterNumber, ContentSource, Reciter, RevelationType, Verse,
    VerseNumber,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// [`ContentSource`] backed by the alquran.cloud REST API.
///
/// The chapter index never changes, so it is fetched once and served from
/// memory afterwards.
pub struct QuranClient {
    endpoint: Endpoint,
    chapters: RwLock<Option<Vec<Chapter>>>,
    /// Audio edition per language code, ahead of the language's default
    translation_reciters: BTreeMap<String, String>,
}

impl QuranClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::new(&config)?,
            chapters: RwLock::new(None),
            translation_reciters: BTreeMap::new(),
        })
    }

    /// Use these translation audio editions instead of each language's default.
    #[must_use]
    pub fn with_translation_reciters(mut self, reciters: BTreeMap<String, String>) -> Self {
        self.translation_reciters = reciters;
        self
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    /// Chapter index, fetched on first use.
    pub async fn chapters(&self) -> Result<Vec<Chapter>> {
        if let Some(cached) = self.chapters.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let mut slot = self.chapters.write().await;
        if let Some(cached) = slot.as_ref() {
            return Ok(cached.clone());
        }

        let raw: Vec<ApiChapter> = self.endpoint.get_data(self.endpoint.url("/surah", &[])?).await?;
        let chapters = raw
            .into_iter()
            .map(convert_chapter)
            .collect::<Result<Vec<_>>>()?;

        info!(count = chapters.len(), "Fetched chapter index");
        *slot = Some(chapters.clone());
        Ok(chapters)
    }

    /// Verses of `chapter` recited by `reciter_id`.
    pub async fn verses(&self, chapter: ChapterNumber, reciter_id: &str) -> Result<Vec<Verse>> {
        let path = format!("/surah/{}/{}", chapter, reciter_id);
        let edition: ApiChapterEdition = self.endpoint.get_data(self.endpoint.url(&path, &[])?).await?;
        check_chapter(chapter, &edition)?;

        debug!(%chapter, reciter = reciter_id, verses = edition.ayahs.len(), "Fetched verses");
        edition
            .ayahs
            .into_iter()
            .map(|v| convert_verse(chapter, v))
            .collect()
    }

    /// Verses of `chapter` with translation text and, where a recording
    /// exists, translation audio for `language`.
    ///
    /// Falls back to plain verses when `language` is not supported.
    pub async fn verses_with_translation(
        &self,
        chapter: ChapterNumber,
        reciter_id: &str,
        language: &str,
    ) -> Result<Vec<Verse>> {
        let Some(lang) = find_language(language) else {
            warn!(language, "Unsupported translation language, fetching recitation only");
            return self.verses(chapter, reciter_id).await;
        };

        let audio_edition = self
            .translation_reciters
            .get(lang.code)
            .map(String::as_str)
            .or(lang.audio_edition);
        let mut editions = vec![reciter_id, lang.text_edition];
        editions.extend(audio_edition);
        let path = format!("/surah/{}/editions/{}", chapter, editions.join(","));

        let mut rendered: Vec<ApiChapterEdition> =
            self.endpoint.get_data(self.endpoint.url(&path, &[])?).await?;
        if rendered.len() != editions.len() {
            return Err(ClientError::Parse(format!(
                "expected {} editions, got {}",
                editions.len(),
                rendered.len()
            )));
        }
        for edition in &rendered {
            check_chapter(chapter, edition)?;
        }

        // Order matches the request: recitation, translation text, translation audio
        let audio = (rendered.len() > 2).then(|| rendered.remove(2));
        let text = rendered.remove(1);
        let primary = rendered.remove(0);

        let count = primary.ayahs.len();
        if text.ayahs.len() != count || audio.as_ref().is_some_and(|a| a.ayahs.len() != count) {
            return Err(ClientError::Parse(format!(
                "editions of chapter {} disagree on verse count",
                chapter
            )));
        }

        let mut translation_audio = audio.map(|a| a.ayahs.into_iter());
        let verses = primary
            .ayahs
            .into_iter()
            .zip(text.ayahs)
            .map(|(recited, translated)| {
                let mut verse = convert_verse(chapter, recited)?.with_translation(translated.text);
                if let Some(url) = translation_audio
                    .as_mut()
                    .and_then(|ayahs| ayahs.next())
                    .and_then(|a| a.audio)
                {
                    verse = verse.with_translation_audio(lang.code, url);
                }
                Ok(verse)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            %chapter,
            reciter = reciter_id,
            language = lang.code,
            verses = verses.len(),
            "Fetched verses with translation"
        );
        Ok(verses)
    }

    /// Available audio editions.
    pub async fn reciters(&self) -> Result<Vec<Reciter>> {
        let editions: Vec<ApiEdition> = self
            .endpoint
            .get_data(self.endpoint.url("/edition/format/audio", &[])?)
            .await?;

        debug!(count = editions.len(), "Fetched audio editions");
        Ok(editions.into_iter().map(convert_reciter).collect())
    }
}

#[async_trait]
impl ContentSource for QuranClient {
    async fn get_chapters(&self) -> tilawah_core::Result<Vec<Chapter>> {
        Ok(self.chapters().await?)
    }

    async fn get_verses(
        &self,
        chapter: ChapterNumber,
        reciter_id: &str,
        with_translation: bool,
        language: &str,
    ) -> tilawah_core::Result<Vec<Verse>> {
        let verses = if with_translation {
            self.verses_with_translation(chapter, reciter_id, language)
                .await?
        } else {
            self.verses(chapter, reciter_id).await?
        };
        Ok(verses)
    }

    async fn get_reciters(&self) -> tilawah_core::Result<Vec<Reciter>> {
        Ok(self.reciters().await?)
    }
}

fn check_chapter(chapter: ChapterNumber, edition: &ApiChapterEdition) -> Result<()> {
    if edition.number == chapter.get() {
        Ok(())
    } else {
        Err(ClientError::Parse(format!(
            "asked for chapter {}, got {}",
            chapter, edition.number
        )))
    }
}

fn convert_chapter(raw: ApiChapter) -> Result<Chapter> {
    let number = ChapterNumber::new(raw.number).map_err(|e| ClientError::Parse(e.to_string()))?;
    Ok(Chapter {
        number,
        name: raw.name,
        english_name: raw.english_name,
        english_name_translation: raw.english_name_translation,
        number_of_verses: raw.number_of_ayahs,
        revelation_type: RevelationType::parse(&raw.revelation_type),
    })
}

fn convert_verse(chapter: ChapterNumber, raw: ApiVerse) -> Result<Verse> {
    if raw.number == 0 || raw.number > VerseNumber::COUNT {
        return Err(ClientError::Parse(format!("verse number {} out of range", raw.number)));
    }

    let mut verse = Verse::new(
        VerseNumber::new(raw.number),
        chapter,
        raw.number_in_surah,
        raw.text,
    );
    verse.juz = raw.juz;
    if let Some(url) = raw.audio.filter(|u| !u.is_empty()) {
        verse = verse.with_audio(url);
    }
    Ok(verse)
}

fn convert_reciter(raw: ApiEdition) -> Reciter {
    Reciter {
        id: raw.identifier,
        name: raw.english_name,
        style: raw.kind,
        language: raw.language,
    }
}
