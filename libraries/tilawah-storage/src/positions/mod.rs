//! Last-read position per chapter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tilawah_core::{ChapterNumber, LastReadPosition, VerseRef};

/// Persisted form of one chapter's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub chapter: ChapterNumber,
    #[serde(flatten)]
    pub position: LastReadPosition,
}

/// Last-read verse of every chapter visited
///
/// Serialized as a list of entries ordered by chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PositionEntry>", into = "Vec<PositionEntry>")]
pub struct ReadingPositions {
    by_chapter: BTreeMap<ChapterNumber, LastReadPosition>,
}

impl ReadingPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the position of the verse's chapter
    pub fn record(&mut self, verse: &VerseRef, at: DateTime<Utc>) {
        self.by_chapter.insert(
            verse.chapter,
            LastReadPosition {
                number_in_chapter: verse.number_in_chapter,
                updated_at: at,
            },
        );
    }

    pub fn get(&self, chapter: ChapterNumber) -> Option<LastReadPosition> {
        self.by_chapter.get(&chapter).copied()
    }

    /// Chapter read most recently, with its position
    pub fn most_recent(&self) -> Option<(ChapterNumber, LastReadPosition)> {
        self.by_chapter
            .iter()
            .max_by_key(|(_, pos)| pos.updated_at)
            .map(|(chapter, pos)| (*chapter, *pos))
    }

    pub fn len(&self) -> usize {
        self.by_chapter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_chapter.is_empty()
    }
}

impl From<Vec<PositionEntry>> for ReadingPositions {
    fn from(entries: Vec<PositionEntry>) -> Self {
        Self {
            by_chapter: entries
                .into_iter()
                .map(|e| (e.chapter, e.position))
                .collect(),
        }
    }
}

impl From<ReadingPositions> for Vec<PositionEntry> {
    fn from(positions: ReadingPositions) -> Self {
        positions
            .by_chapter
            .into_iter()
            .map(|(chapter, position)| PositionEntry { chapter, position })
            .collect()
    }
}
