//! Tilawah Core
//!
//! Platform-agnostic domain types, collaborator traits, and error handling for Tilawah.
//!
//! This crate provides the foundational building blocks shared by the playback
//! sequencer, the position tracker, the HTTP clients and the command line front end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Chapter`, `Verse`, `Reciter`, `Bookmark`, `AudioSettings`, etc.
//! - **Collaborator Traits**: `ContentSource`, `KeyValueStore`, `Geolocation`, `PlaybackJournal`
//! - **Error Handling**: Unified `TilawahError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tilawah_core::types::{ChapterNumber, Verse, VerseNumber};
//!
//! let chapter = ChapterNumber::new(1).unwrap();
//! let verse = Verse::new(VerseNumber::new(1), chapter, 1, "بِسْمِ ٱللَّهِ")
//!     .with_audio("https://cdn.islamic.network/quran/audio/128/ar.alafasy/1.mp3")
//!     .with_translation_audio("ur", "https://cdn.islamic.network/quran/audio/64/ur.khan/1.mp3");
//!
//! assert!(verse.has_audio());
//! assert!(verse.translation_audio("ur").is_some());
//! assert!(verse.translation_audio("en").is_none());
//! assert_eq!(chapter.next().map(|c| c.get()), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TilawahError};
pub use traits::{
    resolve_coordinates, ContentSource, Geolocation, KeyValueStore, LocationFix, PlaybackJournal,
};

// Export all types
pub use types::{
    find_language, AudioSettings, Bookmark, Chapter, ChapterNumber, Coordinates, LastReadPosition,
    Preferences, PrayerTimes, Reciter, RevelationType, TranslationLanguage, Verse, VerseNumber,
    VerseRef, SUPPORTED_LANGUAGES,
};
