//! Bookmarked verses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tilawah_core::{Bookmark, Verse, VerseRef};

/// Bookmarks in creation order, at most one per verse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkList {
    items: Vec<Bookmark>,
}

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookmark a verse; returns `false` if it was already bookmarked
    pub fn add(&mut self, verse: &Verse, note: Option<String>, at: DateTime<Utc>) -> bool {
        let reference = verse.reference();
        if self.contains(&reference) {
            return false;
        }
        self.items.push(Bookmark {
            verse: reference,
            text: verse.text.clone(),
            created_at: at,
            note: note.filter(|n| !n.trim().is_empty()),
        });
        true
    }

    /// Remove the bookmark of a verse; returns `false` if there was none
    pub fn remove(&mut self, verse: &VerseRef) -> bool {
        let before = self.items.len();
        self.items.retain(|b| b.verse.number != verse.number);
        self.items.len() != before
    }

    /// Bookmarks match on the global verse number
    pub fn contains(&self, verse: &VerseRef) -> bool {
        self.items.iter().any(|b| b.verse.number == verse.number)
    }

    pub fn get(&self, verse: &VerseRef) -> Option<&Bookmark> {
        self.items.iter().find(|b| b.verse.number == verse.number)
    }

    pub fn as_slice(&self) -> &[Bookmark] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop duplicates left by older data, keeping the first of each verse
    pub(crate) fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.items.retain(|b| seen.insert(b.verse.number));
    }
}
