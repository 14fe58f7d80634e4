//! Core types for recitation sequencing

use serde::{Deserialize, Serialize};
use std::fmt;
use tilawah_core::AudioSettings;

/// Sequencer state
///
/// At most one audio channel is audible at any time: `PlayingPrimary` and
/// `PlayingTranslation` are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing selected, or playback cancelled
    Idle,

    /// Waiting for the recitation clip of the current verse
    Loading,

    /// Recitation clip is audible
    PlayingPrimary,

    /// Translation clip is audible
    PlayingTranslation,

    /// Current verse is ready but silent
    Paused,
}

impl PlaybackState {
    /// Whether either channel is audible
    pub fn is_playing(self) -> bool {
        matches!(self, Self::PlayingPrimary | Self::PlayingTranslation)
    }

    /// Stable lowercase name, used by hosts and the CLI
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::PlayingPrimary => "playing-primary",
            Self::PlayingTranslation => "playing-translation",
            Self::Paused => "paused",
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Recitation of the verse
    Primary,
    /// Spoken translation of the verse
    Translation,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Translation => "translation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "primary" => Some(Self::Primary),
            "translation" => Some(Self::Translation),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation number of an audio request
///
/// Every selection, chapter change, or cancellation issues a fresh ticket.
/// Signals carrying an older ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(u64);

impl Ticket {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The ticket that supersedes this one
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sequencer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Number of upcoming verses to prefetch once a verse starts playing
    pub preload_ahead: usize,

    /// Initial audio settings, usually restored from storage
    pub audio: AudioSettings,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            preload_ahead: 1,
            audio: AudioSettings::default(),
        }
    }
}
