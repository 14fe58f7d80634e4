//! Hijri months

use serde::{Deserialize, Serialize};
use std::fmt;

/// Month of the Hijri year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlAwwal,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQadah,
    DhuAlHijjah,
}

impl HijriMonth {
    pub const ALL: [Self; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiAlAwwal,
        Self::RabiAlThani,
        Self::JumadaAlAwwal,
        Self::JumadaAlThani,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhuAlQadah,
        Self::DhuAlHijjah,
    ];

    /// Month from its 0-based index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Month from its 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// 0-based index (Muharram = 0)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Muharram = 1)
    pub fn number(self) -> u8 {
        self.index() + 1
    }

    /// English transliteration
    pub fn name(self) -> &'static str {
        match self {
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiAlAwwal => "Rabi al-Awwal",
            Self::RabiAlThani => "Rabi al-Thani",
            Self::JumadaAlAwwal => "Jumada al-Awwal",
            Self::JumadaAlThani => "Jumada al-Thani",
            Self::Rajab => "Rajab",
            Self::Shaban => "Shaban",
            Self::Ramadan => "Ramadan",
            Self::Shawwal => "Shawwal",
            Self::DhuAlQadah => "Dhu al-Qadah",
            Self::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
