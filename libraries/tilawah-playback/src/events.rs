//! Sequencer events
//!
//! Events are queued while the sequencer handles an intent or a signal, and
//! drained by the host with [`Sequencer::drain_events`](crate::Sequencer::drain_events)
//! to keep the UI in sync.

use crate::error::PlaybackFault;
use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};
use tilawah_core::{ChapterNumber, VerseRef};

/// Outcome reported by an audio channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioSignal {
    /// The resource is ready to play
    Loaded,

    /// The resource could not be fetched or decoded
    LoadFailed(String),

    /// Playback was refused (autoplay policy, device error)
    PlayFailed(String),

    /// The clip reached its natural end
    Ended,
}

/// Events emitted by the sequencer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    /// State machine moved to a new state
    StateChanged {
        /// The new state
        state: PlaybackState,
    },

    /// Current verse changed
    VerseChanged {
        verse: VerseRef,
        previous: Option<VerseRef>,
    },

    /// A chapter was opened
    ChapterOpened {
        chapter: ChapterNumber,
        verse_count: usize,
    },

    /// Playback advanced past the last verse
    ChapterFinished { chapter: ChapterNumber },

    /// A user-facing fault
    Error { fault: PlaybackFault },
}
