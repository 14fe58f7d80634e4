/// Supported translation languages
use serde::Serialize;

/// A translation language and the editions that serve it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranslationLanguage {
    /// ISO 639-1 code used as the key for translation audio
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    /// Text edition identifier
    pub text_edition: &'static str,
    /// Audio edition identifier, when a recording exists
    pub audio_edition: Option<&'static str>,
}

/// Languages offered in the translation selector
pub const SUPPORTED_LANGUAGES: &[TranslationLanguage] = &[
    TranslationLanguage {
        code: "ur",
        name: "Urdu",
        native_name: "اردو",
        text_edition: "ur.jalandhry",
        audio_edition: Some("ur.khan"),
    },
    TranslationLanguage {
        code: "en",
        name: "English",
        native_name: "English",
        text_edition: "en.sahih",
        audio_edition: Some("en.walk"),
    },
    TranslationLanguage {
        code: "fa",
        name: "Persian",
        native_name: "فارسی",
        text_edition: "fa.makarem",
        audio_edition: Some("fa.hedayatfarfooladvand"),
    },
    TranslationLanguage {
        code: "zh",
        name: "Chinese",
        native_name: "中文",
        text_edition: "zh.jian",
        audio_edition: Some("zh.chinese"),
    },
    TranslationLanguage {
        code: "ru",
        name: "Russian",
        native_name: "Русский",
        text_edition: "ru.kuliev",
        audio_edition: Some("ru.kuliev-audio"),
    },
    TranslationLanguage {
        code: "id",
        name: "Indonesian",
        native_name: "Bahasa Indonesia",
        text_edition: "id.indonesian",
        audio_edition: None,
    },
    TranslationLanguage {
        code: "tr",
        name: "Turkish",
        native_name: "Türkçe",
        text_edition: "tr.diyanet",
        audio_edition: None,
    },
];

/// Look up a supported language by code
pub fn find_language(code: &str) -> Option<&'static TranslationLanguage> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}
