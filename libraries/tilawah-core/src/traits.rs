/// Collaborator traits for Tilawah
use crate::error::Result;
use crate::types::{AudioSettings, Chapter, ChapterNumber, Coordinates, Reciter, Verse, VerseRef};
use async_trait::async_trait;
use tracing::info;

/// Content source trait
///
/// Implementers fetch chapter metadata, verses and reciters from a remote API
/// (or a fixture in tests).
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Get the chapter index, in chapter order
    async fn get_chapters(&self) -> Result<Vec<Chapter>>;

    /// Get the verses of a chapter in order
    ///
    /// Every verse carries the reciter audio URL for `reciter_id`. When
    /// `with_translation` is set, verses also carry translation text and,
    /// where a recording exists, a translation audio URL keyed by `language`.
    async fn get_verses(
        &self,
        chapter: ChapterNumber,
        reciter_id: &str,
        with_translation: bool,
        language: &str,
    ) -> Result<Vec<Verse>>;

    /// Get the available audio editions
    async fn get_reciters(&self) -> Result<Vec<Reciter>>;
}

/// Persisted key-value store
///
/// Synchronous by contract: values are read once at startup and written on
/// every mutation.
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write (or overwrite) a value
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Outcome of a geolocation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationFix {
    /// Position reported by the device
    Located(Coordinates),
    /// The user refused access
    Denied,
    /// No geolocation facility on this platform
    Unsupported,
}

/// Geolocation trait
pub trait Geolocation {
    /// Request the current position
    fn current_position(&self) -> LocationFix;
}

/// Resolve the position to use, falling back to [`Coordinates::FALLBACK`]
pub fn resolve_coordinates(geolocation: &dyn Geolocation) -> Coordinates {
    match geolocation.current_position() {
        LocationFix::Located(coords) if coords.is_valid() => coords,
        LocationFix::Located(coords) => {
            info!(?coords, "Invalid coordinates reported, using fallback");
            Coordinates::FALLBACK
        }
        LocationFix::Denied => {
            info!("Location access denied, using fallback coordinates");
            Coordinates::FALLBACK
        }
        LocationFix::Unsupported => {
            info!("Geolocation unsupported, using fallback coordinates");
            Coordinates::FALLBACK
        }
    }
}

/// Playback journal trait
///
/// Receives the sequencer's persistence side effects: the current verse on
/// every change, and audio settings on every mutation. It is also consulted
/// when a chapter is opened to resume at the last-read verse.
pub trait PlaybackJournal {
    /// Remember `verse` as the last-read position of its chapter
    fn record_position(&mut self, verse: &VerseRef);

    /// Last-read verse index (1-based) of `chapter`
    fn resume_position(&self, chapter: ChapterNumber) -> Option<u16>;

    /// Persist the audio settings
    fn record_audio_settings(&mut self, settings: &AudioSettings);
}
