//! Reciter preferences

use crate::config::PlaybackSettings;
use crate::error::{CliError, Result};
use tilawah_core::{find_language, KeyValueStore, Preferences, SUPPORTED_LANGUAGES};
use tilawah_storage::PositionTracker;
use tracing::info;

/// Store the reciter used for recitation audio
pub fn set_reciter<S: KeyValueStore>(
    tracker: &mut PositionTracker<S>,
    reciter_id: &str,
) -> Result<()> {
    let reciter_id = edition_id(reciter_id)?;
    info!(reciter = reciter_id, "Reciter changed");
    tracker.set_reciter(reciter_id);
    Ok(())
}

/// Store the translation reciter for a language; `None` restores the
/// language's default recording
pub fn set_translation_reciter<S: KeyValueStore>(
    tracker: &mut PositionTracker<S>,
    language: &str,
    reciter_id: Option<&str>,
) -> Result<()> {
    let lang = find_language(language)
        .ok_or_else(|| CliError::InvalidArgument(format!("Unsupported language '{language}'")))?;

    match reciter_id {
        Some(id) => {
            let id = edition_id(id)?;
            info!(language = lang.code, reciter = id, "Translation reciter changed");
            tracker.set_translation_reciter(lang.code, id);
        }
        None => {
            tracker.clear_translation_reciter(lang.code);
        }
    }
    Ok(())
}

pub fn render_preferences(preferences: &Preferences, playback: &PlaybackSettings) -> Vec<String> {
    let reciter = match &playback.reciter {
        Some(configured) => format!("Reciter: {configured} (configured)"),
        None => format!("Reciter: {}", preferences.reciter_id),
    };

    let mut lines = vec![reciter];
    for lang in SUPPORTED_LANGUAGES {
        let audio = match (preferences.translation_reciter(lang.code), lang.audio_edition) {
            (Some(chosen), _) => chosen.to_string(),
            (None, Some(default)) => format!("{default} (default)"),
            (None, None) => "text only".to_string(),
        };
        lines.push(format!("  {:<3} {:<11} {}", lang.code, lang.name, audio));
    }
    lines
}

fn edition_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() || id.contains(char::is_whitespace) || id.contains(',') {
        return Err(CliError::InvalidArgument(format!("Invalid edition identifier '{id}'")));
    }
    Ok(id)
}
