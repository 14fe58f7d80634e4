//! Bookmark management

use crate::error::{CliError, Result};
use std::fmt;
use std::str::FromStr;
use tilawah_core::{Bookmark, ChapterNumber, ContentSource, KeyValueStore};
use tilawah_storage::PositionTracker;

/// A verse written as `chapter:verse` ("2:255")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseAddress {
    pub chapter: ChapterNumber,
    pub verse: u16,
}

impl FromStr for VerseAddress {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (chapter, verse) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("expected chapter:verse, got {s:?}"))?;
        let chapter: u16 = chapter
            .parse()
            .map_err(|_| format!("bad chapter number {chapter:?}"))?;
        let chapter = ChapterNumber::new(chapter).map_err(|e| e.to_string())?;
        let verse: u16 = verse
            .parse()
            .map_err(|_| format!("bad verse number {verse:?}"))?;
        if verse == 0 {
            return Err("verse numbers start at 1".to_string());
        }
        Ok(Self { chapter, verse })
    }
}

impl fmt::Display for VerseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl VerseAddress {
    fn matches(&self, bookmark: &Bookmark) -> bool {
        bookmark.verse.chapter == self.chapter && bookmark.verse.number_in_chapter == self.verse
    }
}

/// Bookmark a verse, fetching it for its text. Returns false if it was
/// already bookmarked.
pub async fn add<S: KeyValueStore>(
    source: &dyn ContentSource,
    tracker: &mut PositionTracker<S>,
    reciter_id: &str,
    address: VerseAddress,
    note: Option<String>,
) -> Result<bool> {
    let verses = source
        .get_verses(address.chapter, reciter_id, false, "")
        .await?;
    let verse = verses
        .iter()
        .find(|v| v.number_in_chapter == address.verse)
        .ok_or_else(|| CliError::InvalidArgument(format!("No verse {address}")))?;

    Ok(tracker.add_bookmark(verse, note))
}

/// Remove the bookmark on `address`. Returns false if there was none.
pub fn remove<S: KeyValueStore>(tracker: &mut PositionTracker<S>, address: VerseAddress) -> bool {
    let Some(reference) = tracker
        .bookmarks()
        .iter()
        .find(|b| address.matches(b))
        .map(|b| b.verse)
    else {
        return false;
    };
    tracker.remove_bookmark(&reference)
}

/// One line per bookmark
pub fn render(bookmarks: &[Bookmark]) -> Vec<String> {
    bookmarks
        .iter()
        .map(|b| {
            let mut line = format!(
                "{:>7}  {}  {}",
                b.verse.to_string(),
                b.created_at.format("%Y-%m-%d"),
                b.text
            );
            if let Some(note) = &b.note {
                line.push_str(&format!("  [{note}]"));
            }
            line
        })
        .collect()
}
