//! Position tracker
//!
//! Loads reading state once from a key-value store, serves reads from
//! memory, and writes every mutation straight through.

use crate::bookmarks::BookmarkList;
use crate::positions::ReadingPositions;
use crate::settings::{self, KEY_AUDIO_SETTINGS, KEY_BOOKMARKS, KEY_LAST_READ, KEY_PREFERENCES};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tilawah_core::{
    AudioSettings, Bookmark, ChapterNumber, KeyValueStore, LastReadPosition, PlaybackJournal,
    Preferences, Verse, VerseRef,
};
use tracing::{debug, warn};

/// Last-read positions, bookmarks and settings over a [`KeyValueStore`]
///
/// Persistence never fails from the caller's point of view: a failed write
/// is logged and the in-memory state stays authoritative for the session.
pub struct PositionTracker<S: KeyValueStore> {
    store: S,
    positions: ReadingPositions,
    bookmarks: BookmarkList,
    audio: AudioSettings,
    preferences: Preferences,
}

impl<S: KeyValueStore> PositionTracker<S> {
    /// Load persisted state, falling back to defaults for anything missing
    /// or unreadable
    pub fn load(store: S) -> Self {
        let positions: ReadingPositions = read_or_default(&store, KEY_LAST_READ);
        let mut bookmarks: BookmarkList = read_or_default(&store, KEY_BOOKMARKS);
        bookmarks.dedup();
        let audio: AudioSettings = read_or_default(&store, KEY_AUDIO_SETTINGS);
        let preferences: Preferences = read_or_default(&store, KEY_PREFERENCES);

        debug!(
            chapters = positions.len(),
            bookmarks = bookmarks.len(),
            "Loaded reading state"
        );

        Self {
            store,
            positions,
            bookmarks,
            audio,
            preferences,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ===== Positions =====

    /// Remember `verse` as the last-read verse of its chapter
    pub fn record_last_read(&mut self, verse: &VerseRef) {
        self.positions.record(verse, Utc::now());
        write_through(&mut self.store, KEY_LAST_READ, &self.positions);
    }

    pub fn last_read(&self, chapter: ChapterNumber) -> Option<LastReadPosition> {
        self.positions.get(chapter)
    }

    /// Chapter read most recently
    pub fn most_recent(&self) -> Option<(ChapterNumber, LastReadPosition)> {
        self.positions.most_recent()
    }

    // ===== Bookmarks =====

    /// Bookmarks in creation order
    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.as_slice()
    }

    pub fn is_bookmarked(&self, verse: &VerseRef) -> bool {
        self.bookmarks.contains(verse)
    }

    /// Bookmark a verse; a verse already bookmarked is left untouched
    pub fn add_bookmark(&mut self, verse: &Verse, note: Option<String>) -> bool {
        let added = self.bookmarks.add(verse, note, Utc::now());
        if added {
            write_through(&mut self.store, KEY_BOOKMARKS, &self.bookmarks);
        }
        added
    }

    /// Remove a bookmark; no-op if the verse was not bookmarked
    pub fn remove_bookmark(&mut self, verse: &VerseRef) -> bool {
        let removed = self.bookmarks.remove(verse);
        if removed {
            write_through(&mut self.store, KEY_BOOKMARKS, &self.bookmarks);
        }
        removed
    }

    /// Flip the bookmark of a verse, returning whether it is now bookmarked
    pub fn toggle_bookmark(&mut self, verse: &Verse) -> bool {
        let reference = verse.reference();
        if self.is_bookmarked(&reference) {
            self.remove_bookmark(&reference);
            false
        } else {
            self.add_bookmark(verse, None);
            true
        }
    }

    // ===== Settings =====

    pub fn audio_settings(&self) -> &AudioSettings {
        &self.audio
    }

    pub fn set_audio_settings(&mut self, audio: AudioSettings) {
        if self.audio != audio {
            self.audio = audio;
            write_through(&mut self.store, KEY_AUDIO_SETTINGS, &self.audio);
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: Preferences) {
        if self.preferences != preferences {
            self.preferences = preferences;
            write_through(&mut self.store, KEY_PREFERENCES, &self.preferences);
        }
    }

    /// Reciter used for primary audio
    pub fn set_reciter(&mut self, reciter_id: impl Into<String>) {
        let mut preferences = self.preferences.clone();
        preferences.reciter_id = reciter_id.into();
        self.set_preferences(preferences);
    }

    /// Reciter used for translation audio in `language`
    pub fn set_translation_reciter(&mut self, language: &str, reciter_id: impl Into<String>) {
        let mut preferences = self.preferences.clone();
        preferences
            .translation_reciters
            .insert(language.to_string(), reciter_id.into());
        self.set_preferences(preferences);
    }

    /// Forget the translation reciter chosen for `language`
    pub fn clear_translation_reciter(&mut self, language: &str) -> bool {
        if self.preferences.translation_reciter(language).is_none() {
            return false;
        }
        let mut preferences = self.preferences.clone();
        preferences.translation_reciters.remove(language);
        self.set_preferences(preferences);
        true
    }

    /// Flip dark mode, returning the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        let mut preferences = self.preferences.clone();
        preferences.dark_mode = !preferences.dark_mode;
        self.set_preferences(preferences);
        self.preferences.dark_mode
    }
}

impl<S: KeyValueStore> PlaybackJournal for PositionTracker<S> {
    fn record_position(&mut self, verse: &VerseRef) {
        self.record_last_read(verse);
    }

    fn resume_position(&self, chapter: ChapterNumber) -> Option<u16> {
        self.last_read(chapter).map(|p| p.number_in_chapter)
    }

    fn record_audio_settings(&mut self, settings: &AudioSettings) {
        self.set_audio_settings(settings.clone());
    }
}

fn read_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore,
{
    match settings::load(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "Discarding unreadable stored value");
            T::default()
        }
    }
}

fn write_through<T, S>(store: &mut S, key: &str, value: &T)
where
    T: Serialize,
    S: KeyValueStore,
{
    if let Err(e) = settings::save(store, key, value) {
        warn!(key, error = %e, "Failed to persist");
    }
}
