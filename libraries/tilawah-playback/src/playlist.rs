//! Verse list of the open chapter

use crate::error::{PlaybackError, Result};
use tilawah_core::{ChapterNumber, Verse};

/// Ordered verses of one chapter plus a cursor
///
/// The cursor is an index into `verses`, never a verse number, so lookups
/// stay valid for chapters that were fetched partially.
#[derive(Debug, Clone)]
pub struct ChapterPlaylist {
    chapter: ChapterNumber,
    verses: Vec<Verse>,
    cursor: Option<usize>,
}

impl ChapterPlaylist {
    /// Build a playlist, rejecting empty or mixed verse lists
    pub fn new(chapter: ChapterNumber, mut verses: Vec<Verse>) -> Result<Self> {
        if verses.is_empty() {
            return Err(PlaybackError::EmptyChapter(chapter));
        }
        if let Some(stray) = verses.iter().find(|v| v.chapter != chapter) {
            return Err(PlaybackError::MixedChapter {
                expected: chapter,
                found: stray.reference(),
            });
        }
        verses.sort_by_key(|v| v.number_in_chapter);

        Ok(Self {
            chapter,
            verses,
            cursor: None,
        })
    }

    pub fn chapter(&self) -> ChapterNumber {
        self.chapter
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move the cursor; out-of-range indices are ignored
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index < self.verses.len() {
            self.cursor = Some(index);
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Verse> {
        self.cursor.and_then(|i| self.verses.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&Verse> {
        self.verses.get(index)
    }

    /// Index of the verse numbered `number_in_chapter`
    pub fn position_of(&self, number_in_chapter: u16) -> Option<usize> {
        self.verses
            .binary_search_by_key(&number_in_chapter, |v| v.number_in_chapter)
            .ok()
    }

    pub fn has_next(&self) -> bool {
        self.cursor.is_some_and(|i| i + 1 < self.verses.len())
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.is_some_and(|i| i > 0)
    }

    /// Up to `count` verses after the cursor
    pub fn upcoming(&self, count: usize) -> &[Verse] {
        match self.cursor {
            Some(i) => {
                let start = (i + 1).min(self.verses.len());
                let end = start.saturating_add(count).min(self.verses.len());
                &self.verses[start..end]
            }
            None => &[],
        }
    }
}
