/// Reading progress types
use super::VerseRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookmarked verse
///
/// Bookmarks are unique per verse identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub verse: VerseRef,

    /// Snapshot of the verse text for the bookmarks view
    #[serde(default)]
    pub text: String,

    pub created_at: DateTime<Utc>,

    pub note: Option<String>,
}

/// Last verse read in a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastReadPosition {
    /// Verse index within the chapter (1-based)
    pub number_in_chapter: u16,
    pub updated_at: DateTime<Utc>,
}
