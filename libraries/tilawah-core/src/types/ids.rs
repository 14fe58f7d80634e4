/// ID types for Tilawah entities
use crate::error::{Result, TilawahError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chapter (surah) number, always within 1..=114
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ChapterNumber(u16);

impl ChapterNumber {
    /// Number of chapters in the corpus
    pub const COUNT: u16 = 114;

    /// Al-Fatihah
    pub const FIRST: Self = Self(1);

    /// An-Nas
    pub const LAST: Self = Self(Self::COUNT);

    /// Create a chapter number, rejecting values outside 1..=114
    pub fn new(number: u16) -> Result<Self> {
        if (1..=Self::COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(TilawahError::InvalidChapter(number))
        }
    }

    /// Get the inner number
    pub fn get(self) -> u16 {
        self.0
    }

    /// Preceding chapter, `None` for the first one
    pub fn previous(self) -> Option<Self> {
        Self::new(self.0 - 1).ok()
    }

    /// Following chapter, `None` for the last one
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// Iterate over every chapter in order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT).map(Self)
    }
}

impl TryFrom<u16> for ChapterNumber {
    type Error = TilawahError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ChapterNumber> for u16 {
    fn from(value: ChapterNumber) -> Self {
        value.0
    }
}

impl FromStr for ChapterNumber {
    type Err = TilawahError;

    fn from_str(s: &str) -> Result<Self> {
        let number = s
            .trim()
            .parse::<u16>()
            .map_err(|_| TilawahError::invalid_input(format!("not a chapter number: {s}")))?;
        Self::new(number)
    }
}

impl fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Global verse number, unique across the whole corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerseNumber(u32);

impl VerseNumber {
    /// Number of verses in the corpus
    pub const COUNT: u32 = 6236;

    /// Create a verse number
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the inner number
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VerseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
