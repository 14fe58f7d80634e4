//! Chapter recitation through the sequencer

use crate::config::PlaybackSettings;
use crate::error::Result;
use crate::simulated::{Heard, LoggingPreloader, Simulation};
use tilawah_core::{AudioSettings, ChapterNumber, ContentSource, KeyValueStore, Verse, VerseRef};
use tilawah_playback::{PlaybackFault, PlaybackState, Sequencer, SequencerConfig, SequencerEvent};
use tilawah_storage::PositionTracker;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ReciteOptions {
    pub chapter: ChapterNumber,
    /// Start here instead of the last-read verse
    pub from: Option<u16>,
    /// Play translation audio in this language
    pub translation: Option<String>,
    /// Recitation only, even if translation is enabled
    pub plain: bool,
}

/// What a recitation run did
#[derive(Debug, Clone, PartialEq)]
pub struct Recitation {
    pub heard: Vec<Heard>,
    pub finished: bool,
    pub faults: Vec<PlaybackFault>,
    /// Verse the sequencer rests on afterwards
    pub resting_on: Option<VerseRef>,
    pub state: PlaybackState,
}

/// Audio settings for this run, most specific source last
pub fn resolve_audio(
    stored: &AudioSettings,
    playback: &PlaybackSettings,
    options: &ReciteOptions,
) -> AudioSettings {
    let mut audio = stored.clone();
    if let Some(enabled) = playback.translation {
        audio.with_translation = enabled;
    }
    if let Some(language) = &playback.language {
        audio.selected_language.clone_from(language);
        audio.display_language.clone_from(language);
    }
    if let Some(language) = &options.translation {
        audio.with_translation = true;
        audio.selected_language.clone_from(language);
        audio.display_language.clone_from(language);
    }
    if options.plain {
        audio.with_translation = false;
    }
    audio
}

/// Fetch a chapter and play it from start to finish
pub async fn recite<S: KeyValueStore>(
    source: &dyn ContentSource,
    tracker: PositionTracker<S>,
    playback: &PlaybackSettings,
    options: ReciteOptions,
) -> Result<Recitation> {
    let reciter = super::reciter_id(playback, &tracker);
    let audio = resolve_audio(tracker.audio_settings(), playback, &options);

    let verses = source
        .get_verses(
            options.chapter,
            &reciter,
            audio.with_translation,
            &audio.selected_language,
        )
        .await?;

    info!(
        chapter = %options.chapter,
        reciter = %reciter,
        translation = audio.with_translation,
        language = %audio.selected_language,
        "Reciting"
    );

    play_through(tracker, playback.preload_ahead, audio, options, verses)
}

fn play_through<S: KeyValueStore>(
    tracker: PositionTracker<S>,
    preload_ahead: usize,
    audio: AudioSettings,
    options: ReciteOptions,
    verses: Vec<Verse>,
) -> Result<Recitation> {
    // Settings for this run only; the stored ones stay as they were
    let config = SequencerConfig {
        preload_ahead,
        audio,
    };

    let mut simulation = Simulation::new();
    let (primary, translation) = simulation.outputs();
    let mut seq = Sequencer::new(
        config,
        Box::new(primary),
        Box::new(translation),
        Box::new(LoggingPreloader),
        tracker,
    );

    seq.open_chapter(options.chapter, verses)?;
    if let Some(from) = options.from {
        seq.select_verse(from)?;
    }
    seq.play();

    let heard = simulation.run(&mut seq);

    let mut finished = false;
    let mut faults = Vec::new();
    for event in seq.drain_events() {
        match event {
            SequencerEvent::ChapterFinished { .. } => finished = true,
            SequencerEvent::Error { fault } => faults.push(fault),
            _ => {}
        }
    }

    Ok(Recitation {
        heard,
        finished,
        faults,
        resting_on: seq.current_verse().map(Verse::reference),
        state: seq.state(),
    })
}
