//! Error types for recitation sequencing

use crate::types::Channel;
use thiserror::Error;
use tilawah_core::{ChapterNumber, VerseRef};

/// Errors returned to the caller of a sequencer operation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// No chapter has been opened yet
    #[error("No chapter loaded")]
    NoChapterLoaded,

    /// The chapter has no verse with this index
    #[error("Verse {number_in_chapter} is not part of chapter {chapter}")]
    VerseOutOfRange {
        chapter: ChapterNumber,
        number_in_chapter: u16,
    },

    /// A chapter was opened with no verses
    #[error("Chapter {0} has no verses")]
    EmptyChapter(ChapterNumber),

    /// A verse list contained a verse from another chapter
    #[error("Verse {found} does not belong to chapter {expected}")]
    MixedChapter {
        expected: ChapterNumber,
        found: VerseRef,
    },
}

/// Result type for sequencer operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Faults raised while driving playback
///
/// Only [`PlaybackFault::ResourceLoad`] reaches the user. The other kinds are
/// recoverable and are logged where they happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackFault {
    /// An audio resource failed to load or play
    #[error("Failed to play {channel} audio for verse {verse}: {reason}")]
    ResourceLoad {
        channel: Channel,
        verse: VerseRef,
        reason: String,
    },

    /// Navigation past the first or last verse
    #[error("No verse beyond {verse}")]
    NavigationBoundary { verse: VerseRef },

    /// Translation audio is enabled but absent for this verse
    #[error("No {language} translation audio for verse {verse}")]
    MissingTranslation { verse: VerseRef, language: String },
}

impl PlaybackFault {
    /// Whether the fault is shown to the user
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::ResourceLoad { .. })
    }
}
