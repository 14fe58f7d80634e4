//! Subcommand implementations
//!
//! Each module takes its collaborators as arguments so it can run against
//! fixtures; `main` wires in the HTTP clients and the data directory.

pub mod bookmarks;
pub mod calendar;
pub mod prayer;
pub mod recite;
pub mod reciters;

use crate::config::{AppConfig, PlaybackSettings};
use crate::error::Result;
use tilawah_core::{Chapter, KeyValueStore, LastReadPosition, Reciter};
use tilawah_storage::{FileStore, PositionTracker};

/// Tracker over the configured data directory
pub fn open_tracker(config: &AppConfig) -> Result<PositionTracker<FileStore>> {
    let store = FileStore::open(&config.storage.data_dir)?;
    Ok(PositionTracker::load(store))
}

/// Reciter from configuration, else the stored preference
pub fn reciter_id<S: KeyValueStore>(
    playback: &PlaybackSettings,
    tracker: &PositionTracker<S>,
) -> String {
    playback
        .reciter
        .clone()
        .unwrap_or_else(|| tracker.preferences().reciter_id.clone())
}

pub fn render_chapters(chapters: &[Chapter]) -> Vec<String> {
    chapters
        .iter()
        .map(|c| {
            let revealed = c
                .revelation_type
                .map(|r| format!("{r:?}"))
                .unwrap_or_default();
            format!(
                "{:>3}  {:<18} {:<28} {:>3} verses  {}",
                c.number.get(),
                c.english_name,
                c.english_name_translation,
                c.number_of_verses,
                revealed
            )
        })
        .collect()
}

pub fn render_reciters(reciters: &[Reciter]) -> Vec<String> {
    reciters
        .iter()
        .map(|r| {
            format!(
                "{:<28} {:<32} {}",
                r.id,
                r.name,
                r.style.as_deref().unwrap_or("-")
            )
        })
        .collect()
}

pub fn render_position(chapter: u16, position: Option<LastReadPosition>) -> String {
    match position {
        Some(p) => format!(
            "Chapter {chapter}: verse {} (read {})",
            p.number_in_chapter,
            p.updated_at.format("%Y-%m-%d %H:%M UTC")
        ),
        None => format!("Chapter {chapter}: not started"),
    }
}
