//! Tilawah Storage
//!
//! Reading-state persistence for Tilawah.
//!
//! This crate provides the position tracker (last-read verse per chapter,
//! bookmarks, audio settings, reader preferences) and the key-value stores it
//! persists to.
//!
//! # Architecture
//!
//! - **Write-through**: every mutation is written to the store immediately
//! - **Load once**: reads are served from memory after startup
//! - **Vertical slicing**: each kind of state owns its model and serialization
//! - **Pluggable backends**: memory, JSON files, browser `localStorage`
//!
//! # Example
//!
//! ```rust
//! use tilawah_storage::{MemoryStore, PositionTracker};
//! use tilawah_core::{ChapterNumber, Verse, VerseNumber};
//!
//! let mut tracker = PositionTracker::load(MemoryStore::new());
//! let chapter = ChapterNumber::new(18).unwrap();
//! let verse = Verse::new(VerseNumber::new(2150), chapter, 10, "...");
//!
//! tracker.record_last_read(&verse.reference());
//! tracker.add_bookmark(&verse, Some("Friday".to_string()));
//!
//! assert_eq!(tracker.last_read(chapter).unwrap().number_in_chapter, 10);
//! assert!(tracker.is_bookmarked(&verse.reference()));
//! ```

mod error;
mod file;
mod memory;
mod tracker;
#[cfg(feature = "web")]
mod web;

// Vertical slices
pub mod bookmarks;
pub mod positions;
pub mod settings;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use tracker::PositionTracker;
#[cfg(feature = "web")]
pub use web::LocalStorageStore;
