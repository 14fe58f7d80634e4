//! Tilawah - Recitation Sequencing
//!
//! Platform-agnostic playback sequencing for Tilawah.
//!
//! This crate provides:
//! - Verse-by-verse auto-advance through a chapter
//! - Optional translation clip after each verse
//! - Stale-signal rejection through per-request tickets
//! - Preloading of upcoming verses
//! - Position and settings persistence through a [`PlaybackJournal`]
//!
//! # Architecture
//!
//! `tilawah-playback` does not touch audio hardware or the network. The
//! platform supplies two [`AudioOutput`] channels and a [`Preloader`]; they
//! report back asynchronously through [`Sequencer::on_signal`].
//!
//! # Example
//!
//! ```rust
//! use tilawah_playback::{
//!     AudioOutput, AudioSignal, Channel, NoPreload, PlaybackState, Sequencer, SequencerConfig,
//!     Ticket,
//! };
//! use tilawah_core::{AudioSettings, ChapterNumber, PlaybackJournal, Verse, VerseNumber, VerseRef};
//!
//! struct Silent;
//!
//! impl AudioOutput for Silent {
//!     fn load(&mut self, _url: &str, _ticket: Ticket) {}
//!     fn play(&mut self, _ticket: Ticket) {}
//!     fn pause(&mut self) {}
//!     fn stop(&mut self) {}
//! }
//!
//! struct Forgetful;
//!
//! impl PlaybackJournal for Forgetful {
//!     fn record_position(&mut self, _verse: &VerseRef) {}
//!     fn resume_position(&self, _chapter: ChapterNumber) -> Option<u16> {
//!         None
//!     }
//!     fn record_audio_settings(&mut self, _settings: &AudioSettings) {}
//! }
//!
//! let mut seq = Sequencer::new(
//!     SequencerConfig::default(),
//!     Box::new(Silent),
//!     Box::new(Silent),
//!     Box::new(NoPreload),
//!     Forgetful,
//! );
//!
//! let chapter = ChapterNumber::new(1).unwrap();
//! let verse = Verse::new(VerseNumber::new(1), chapter, 1, "...")
//!     .with_audio("https://cdn.example/1.mp3");
//! seq.open_chapter(chapter, vec![verse]).unwrap();
//! assert_eq!(seq.state(), PlaybackState::Loading);
//!
//! seq.toggle_play();
//! let ticket = seq.ticket();
//! seq.on_signal(Channel::Primary, ticket, AudioSignal::Loaded);
//! assert_eq!(seq.state(), PlaybackState::PlayingPrimary);
//! ```

mod error;
mod events;
mod output;
mod playlist;
mod sequencer;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use error::{PlaybackError, PlaybackFault, Result};
pub use events::{AudioSignal, SequencerEvent};
pub use output::{AudioOutput, NoPreload, Preloader};
pub use playlist::ChapterPlaylist;
pub use sequencer::Sequencer;
pub use types::{Channel, PlaybackState, SequencerConfig, Ticket};

pub use tilawah_core::PlaybackJournal;
