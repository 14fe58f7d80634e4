/// Chapter (surah) metadata
use super::ChapterNumber;
use serde::{Deserialize, Serialize};

/// Where a chapter was revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

impl RevelationType {
    /// Parse the API spelling ("Meccan" / "Medinan")
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "meccan" => Some(Self::Meccan),
            "medinan" => Some(Self::Medinan),
            _ => None,
        }
    }
}

/// A chapter of the corpus
///
/// The verse list is fetched lazily and lives with the playback sequencer;
/// this type only carries what the chapter index needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: ChapterNumber,
    /// Arabic name
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_verses: u16,
    pub revelation_type: Option<RevelationType>,
}

impl Chapter {
    /// Whether `number_in_chapter` addresses a verse of this chapter
    pub fn contains_verse(&self, number_in_chapter: u16) -> bool {
        (1..=self.number_of_verses).contains(&number_in_chapter)
    }
}
