/// Core domain types for Tilawah
mod bookmark;
mod chapter;
mod ids;
mod language;
mod prayer;
mod reciter;
mod settings;
mod verse;

pub use bookmark::{Bookmark, LastReadPosition};
pub use chapter::{Chapter, RevelationType};
pub use ids::{ChapterNumber, VerseNumber};
pub use language::{find_language, TranslationLanguage, SUPPORTED_LANGUAGES};
pub use prayer::{Coordinates, PrayerTimes};
pub use reciter::Reciter;
pub use settings::{AudioSettings, Preferences};
pub use verse::{Verse, VerseRef};
