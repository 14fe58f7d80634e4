//! Integration tests for the recitation sequencer
//!
//! Drives the sequencer through recording audio channels, echoing tickets
//! back the way a platform would.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tilawah_core::{AudioSettings, ChapterNumber, PlaybackJournal, Verse, VerseNumber, VerseRef};
use tilawah_playback::{
    AudioOutput, AudioSignal, Channel, PlaybackError, PlaybackFault, PlaybackState, Preloader,
    Sequencer, SequencerConfig, SequencerEvent, Ticket,
};
use tilawah_storage::{MemoryStore, PositionTracker};

// ===== Test Helpers =====

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Load(String, Ticket),
    Play(Ticket),
    Pause,
    Stop,
}

/// Audio channel that records every command
#[derive(Clone, Default)]
struct MockChannel {
    commands: Rc<RefCell<Vec<Command>>>,
}

impl MockChannel {
    fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    fn clear(&self) {
        self.commands.borrow_mut().clear();
    }

    fn loads(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Command::Load(url, _) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    fn last_load_ticket(&self) -> Ticket {
        self.commands
            .borrow()
            .iter()
            .rev()
            .find_map(|c| match c {
                Command::Load(_, t) => Some(*t),
                _ => None,
            })
            .expect("channel was never loaded")
    }

    fn last_play_ticket(&self) -> Ticket {
        self.commands
            .borrow()
            .iter()
            .rev()
            .find_map(|c| match c {
                Command::Play(t) => Some(*t),
                _ => None,
            })
            .expect("channel was never played")
    }
}

impl AudioOutput for MockChannel {
    fn load(&mut self, url: &str, ticket: Ticket) {
        self.commands
            .borrow_mut()
            .push(Command::Load(url.to_string(), ticket));
    }

    fn play(&mut self, ticket: Ticket) {
        self.commands.borrow_mut().push(Command::Play(ticket));
    }

    fn pause(&mut self) {
        self.commands.borrow_mut().push(Command::Pause);
    }

    fn stop(&mut self) {
        self.commands.borrow_mut().push(Command::Stop);
    }
}

#[derive(Clone, Default)]
struct MockPreloader {
    urls: Rc<RefCell<Vec<String>>>,
}

impl Preloader for MockPreloader {
    fn prefetch(&mut self, url: &str) {
        self.urls.borrow_mut().push(url.to_string());
    }
}

/// In-memory journal recording every side effect
#[derive(Default)]
struct MockJournal {
    positions: Vec<VerseRef>,
    resume: HashMap<ChapterNumber, u16>,
    settings: Vec<AudioSettings>,
}

impl PlaybackJournal for MockJournal {
    fn record_position(&mut self, verse: &VerseRef) {
        self.positions.push(*verse);
        self.resume.insert(verse.chapter, verse.number_in_chapter);
    }

    fn resume_position(&self, chapter: ChapterNumber) -> Option<u16> {
        self.resume.get(&chapter).copied()
    }

    fn record_audio_settings(&mut self, settings: &AudioSettings) {
        self.settings.push(settings.clone());
    }
}

struct Harness<J: PlaybackJournal> {
    seq: Sequencer<J>,
    primary: MockChannel,
    translation: MockChannel,
    preloader: MockPreloader,
}

impl Harness<MockJournal> {
    fn new() -> Self {
        Self::with_config(SequencerConfig::default(), MockJournal::default())
    }

    fn with_translation(language: &str) -> Self {
        let config = SequencerConfig {
            audio: AudioSettings {
                with_translation: true,
                selected_language: language.to_string(),
                display_language: language.to_string(),
            },
            ..SequencerConfig::default()
        };
        Self::with_config(config, MockJournal::default())
    }
}

impl<J: PlaybackJournal> Harness<J> {
    fn with_config(config: SequencerConfig, journal: J) -> Self {
        let primary = MockChannel::default();
        let translation = MockChannel::default();
        let preloader = MockPreloader::default();
        let seq = Sequencer::new(
            config,
            Box::new(primary.clone()),
            Box::new(translation.clone()),
            Box::new(preloader.clone()),
            journal,
        );
        Self {
            seq,
            primary,
            translation,
            preloader,
        }
    }

    fn primary_loaded(&mut self) -> bool {
        let ticket = self.primary.last_load_ticket();
        self.seq.on_signal(Channel::Primary, ticket, AudioSignal::Loaded)
    }

    fn primary_ended(&mut self) -> bool {
        let ticket = self.primary.last_play_ticket();
        self.seq.on_signal(Channel::Primary, ticket, AudioSignal::Ended)
    }

    fn translation_loaded(&mut self) -> bool {
        let ticket = self.translation.last_load_ticket();
        self.seq
            .on_signal(Channel::Translation, ticket, AudioSignal::Loaded)
    }

    fn translation_ended(&mut self) -> bool {
        let ticket = self.translation.last_play_ticket();
        self.seq
            .on_signal(Channel::Translation, ticket, AudioSignal::Ended)
    }

    fn current(&self) -> u16 {
        self.seq
            .current_verse()
            .map(|v| v.number_in_chapter)
            .expect("no current verse")
    }
}

fn chapter(n: u16) -> ChapterNumber {
    ChapterNumber::new(n).unwrap()
}

fn verse(ch: u16, n: u16) -> Verse {
    Verse::new(VerseNumber::new(u32::from(n)), chapter(ch), n, format!("{ch}:{n}"))
}

fn recited(ch: u16, n: u16) -> Verse {
    verse(ch, n).with_audio(format!("https://cdn.test/{ch}/{n}.mp3"))
}

fn recited_chapter(ch: u16, count: u16) -> Vec<Verse> {
    (1..=count).map(|n| recited(ch, n)).collect()
}

/// Pair every state change with the verse that was current at the time
fn playing_trace(events: &[SequencerEvent], mut verse: Option<u16>) -> Vec<(PlaybackState, u16)> {
    let mut trace = Vec::new();
    for event in events {
        match event {
            SequencerEvent::VerseChanged { verse: v, .. } => verse = Some(v.number_in_chapter),
            SequencerEvent::StateChanged { state }
                if matches!(
                    state,
                    PlaybackState::PlayingPrimary
                        | PlaybackState::PlayingTranslation
                        | PlaybackState::Paused
                ) =>
            {
                trace.push((*state, verse.expect("state change without verse")));
            }
            _ => {}
        }
    }
    trace
}

// ===== End-to-End =====

#[test]
fn chapter_plays_through_with_translation_clips() {
    let mut h = Harness::with_translation("ur");
    let verses = vec![
        recited(1, 1).with_translation_audio("ur", "https://cdn.test/ur/1.mp3"),
        recited(1, 2),
        recited(1, 3).with_translation_audio("ur", "https://cdn.test/ur/3.mp3"),
    ];
    h.seq.open_chapter(chapter(1), verses).unwrap();
    h.seq.toggle_play();

    assert!(h.primary_loaded());
    assert!(h.primary_ended());
    assert!(h.translation_loaded());
    assert!(h.translation_ended());
    assert!(h.primary_loaded());
    assert!(h.primary_ended());
    assert!(h.primary_loaded());
    assert!(h.primary_ended());
    assert!(h.translation_loaded());
    assert!(h.translation_ended());

    let events = h.seq.drain_events();
    assert_eq!(
        playing_trace(&events, None),
        vec![
            (PlaybackState::PlayingPrimary, 1),
            (PlaybackState::PlayingTranslation, 1),
            (PlaybackState::PlayingPrimary, 2),
            (PlaybackState::PlayingPrimary, 3),
            (PlaybackState::PlayingTranslation, 3),
            (PlaybackState::Paused, 3),
        ]
    );
    assert!(events.contains(&SequencerEvent::ChapterFinished {
        chapter: chapter(1)
    }));
    assert_eq!(
        h.translation.loads(),
        vec!["https://cdn.test/ur/1.mp3", "https://cdn.test/ur/3.mp3"]
    );
}

#[test]
fn chapter_plays_through_without_translation() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(2), recited_chapter(2, 3)).unwrap();
    h.seq.play();

    for _ in 0..3 {
        assert!(h.primary_loaded());
        assert_eq!(h.seq.state(), PlaybackState::PlayingPrimary);
        assert!(h.primary_ended());
    }

    assert_eq!(h.seq.state(), PlaybackState::Paused);
    assert_eq!(h.current(), 3);
    assert!(h.translation.loads().is_empty());
}

// ===== Stale Signals =====

#[test]
fn signals_for_superseded_verse_are_ignored() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 3)).unwrap();
    h.seq.play();
    let stale = h.primary.last_load_ticket();

    h.seq.select_verse(2).unwrap();
    h.seq.drain_events();

    assert!(!h.seq.on_signal(Channel::Primary, stale, AudioSignal::Loaded));
    assert!(!h.seq.on_signal(Channel::Primary, stale, AudioSignal::Ended));
    assert!(!h
        .seq
        .on_signal(Channel::Primary, stale, AudioSignal::LoadFailed("404".into())));
    assert_eq!(h.seq.state(), PlaybackState::Loading);
    assert!(h.seq.drain_events().is_empty());

    assert!(h.primary_loaded());
    assert_eq!(h.seq.state(), PlaybackState::PlayingPrimary);
    assert_eq!(h.current(), 2);
}

#[test]
fn ended_from_previous_chapter_is_ignored() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 3)).unwrap();
    h.seq.play();
    h.primary_loaded();
    let old_play = h.primary.last_play_ticket();

    h.seq.open_chapter(chapter(2), recited_chapter(2, 3)).unwrap();
    assert!(!h.seq.on_signal(Channel::Primary, old_play, AudioSignal::Ended));
    assert_eq!(h.seq.chapter(), Some(chapter(2)));
    assert_eq!(h.current(), 1);
}

#[test]
fn out_of_state_signal_is_ignored() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 2)).unwrap();
    let ticket = h.seq.ticket();

    // Ended cannot apply while loading
    assert!(!h.seq.on_signal(Channel::Primary, ticket, AudioSignal::Ended));
    assert!(!h
        .seq
        .on_signal(Channel::Translation, ticket, AudioSignal::Ended));
    assert_eq!(h.seq.state(), PlaybackState::Loading);
}

// ===== Translation =====

#[test]
fn missing_translation_advances_immediately() {
    let mut h = Harness::with_translation("ur");
    let verses = vec![
        recited(1, 1).with_translation_audio("en", "https://cdn.test/en/1.mp3"),
        recited(1, 2),
    ];
    h.seq.open_chapter(chapter(1), verses).unwrap();
    h.seq.play();
    h.primary_loaded();
    h.seq.drain_events();

    h.primary_ended();

    assert_eq!(h.seq.state(), PlaybackState::Loading);
    assert_eq!(h.current(), 2);
    assert!(h.translation.loads().is_empty());
    let entered_translation = h.seq.drain_events().iter().any(|e| {
        matches!(
            e,
            SequencerEvent::StateChanged {
                state: PlaybackState::PlayingTranslation
            }
        )
    });
    assert!(!entered_translation);
}

#[test]
fn translation_failure_falls_back_to_next() {
    let mut h = Harness::with_translation("ur");
    let verses = vec![
        recited(1, 1).with_translation_audio("ur", "https://cdn.test/ur/1.mp3"),
        recited(1, 2),
    ];
    h.seq.open_chapter(chapter(1), verses).unwrap();
    h.seq.play();
    h.primary_loaded();
    h.primary_ended();
    assert_eq!(h.seq.state(), PlaybackState::PlayingTranslation);

    let ticket = h.translation.last_load_ticket();
    assert!(h.seq.on_signal(
        Channel::Translation,
        ticket,
        AudioSignal::LoadFailed("decode error".into())
    ));

    assert_eq!(h.current(), 2);
    assert_eq!(h.seq.state(), PlaybackState::Loading);
    // Translation failures are not surfaced
    assert!(!h
        .seq
        .drain_events()
        .iter()
        .any(|e| matches!(e, SequencerEvent::Error { .. })));

    h.primary_loaded();
    assert_eq!(h.seq.state(), PlaybackState::PlayingPrimary);
}

#[test]
fn language_switch_interrupts_translation() {
    let mut h = Harness::with_translation("ur");
    let verses = vec![
        recited(1, 1)
            .with_translation_audio("ur", "https://cdn.test/ur/1.mp3")
            .with_translation_audio("en", "https://cdn.test/en/1.mp3"),
        recited(1, 2).with_translation_audio("en", "https://cdn.test/en/2.mp3"),
    ];
    h.seq.open_chapter(chapter(1), verses).unwrap();
    h.seq.play();
    h.primary_loaded();
    h.primary_ended();
    h.translation_loaded();
    assert_eq!(h.seq.state(), PlaybackState::PlayingTranslation);
    let old_clip = h.translation.last_play_ticket();
    h.translation.clear();

    h.seq.set_translation_language("en");

    assert_eq!(h.translation.commands().first(), Some(&Command::Stop));
    assert_eq!(h.current(), 2);
    assert_eq!(h.seq.settings().selected_language, "en");
    assert_eq!(h.seq.journal().settings.last().unwrap().selected_language, "en");

    // The old-language clip ending late changes nothing
    assert!(!h
        .seq
        .on_signal(Channel::Translation, old_clip, AudioSignal::Ended));

    h.primary_loaded();
    h.primary_ended();
    assert_eq!(h.seq.state(), PlaybackState::PlayingTranslation);
    assert_eq!(h.translation.loads(), vec!["https://cdn.test/en/2.mp3"]);
}

#[test]
fn disabling_translation_interrupts_translation() {
    let mut h = Harness::with_translation("ur");
    let verses = vec![
        recited(1, 1).with_translation_audio("ur", "https://cdn.test/ur/1.mp3"),
        recited(1, 2),
    ];
    h.seq.open_chapter(chapter(1), verses).unwrap();
    h.seq.play();
    h.primary_loaded();
    h.primary_ended();
    h.translation_loaded();

    h.seq.toggle_translation();

    assert!(!h.seq.settings().with_translation);
    assert_eq!(h.current(), 2);
    assert_eq!(h.seq.state(), PlaybackState::Loading);
}

#[test]
fn language_switch_during_recitation_keeps_verse() {
    let mut h = Harness::with_translation("ur");
    h.seq.open_chapter(chapter(1), recited_chapter(1, 2)).unwrap();
    h.seq.play();
    h.primary_loaded();

    h.seq.set_translation_language("en");

    assert_eq!(h.seq.state(), PlaybackState::PlayingPrimary);
    assert_eq!(h.current(), 1);
}

#[test]
fn pause_and_resume_translation() {
    let mut h = Harness::with_translation("ur");
    let verses = vec![
        recited(1, 1).with_translation_audio("ur", "https://cdn.test/ur/1.mp3"),
        recited(1, 2),
    ];
    h.seq.open_chapter(chapter(1), verses).unwrap();
    h.seq.play();
    h.primary_loaded();
    h.primary_ended();
    h.translation_loaded();

    h.seq.toggle_play();
    assert_eq!(h.seq.state(), PlaybackState::Paused);
    assert_eq!(h.translation.commands().last(), Some(&Command::Pause));

    h.translation.clear();
    h.seq.toggle_play();
    assert_eq!(h.seq.state(), PlaybackState::PlayingTranslation);
    assert!(matches!(h.translation.commands().as_slice(), [Command::Play(_)]));
    assert_eq!(h.current(), 1);
}

// ===== Navigation =====

#[test]
fn previous_at_first_verse_is_noop() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 3)).unwrap();
    h.seq.drain_events();
    h.primary.clear();

    assert!(!h.seq.has_previous());
    h.seq.previous();

    assert_eq!(h.current(), 1);
    assert!(h.seq.drain_events().is_empty());
    assert!(h.primary.commands().is_empty());
}

#[test]
fn next_at_last_verse_ends_playback() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 2)).unwrap();
    h.seq.select_verse(2).unwrap();
    h.seq.play();
    h.primary_loaded();
    assert!(!h.seq.has_next());

    h.seq.next();

    assert_eq!(h.seq.state(), PlaybackState::Paused);
    assert_eq!(h.current(), 2);
    assert!(h.primary.commands().ends_with(&[Command::Stop]));
}

#[test]
fn previous_keeps_playing() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 3)).unwrap();
    h.seq.select_verse(3).unwrap();
    h.seq.play();
    h.primary_loaded();

    h.seq.previous();
    assert_eq!(h.current(), 2);
    assert_eq!(h.seq.state(), PlaybackState::Loading);
    h.primary_loaded();
    assert_eq!(h.seq.state(), PlaybackState::PlayingPrimary);
}

#[test]
fn next_while_paused_stays_paused() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 3)).unwrap();
    h.primary_loaded();
    assert_eq!(h.seq.state(), PlaybackState::Paused);

    h.seq.next();
    h.primary_loaded();

    assert_eq!(h.current(), 2);
    assert_eq!(h.seq.state(), PlaybackState::Paused);
}

#[test]
fn select_unknown_verse_fails() {
    let mut h = Harness::new();
    assert_eq!(h.seq.select_verse(1), Err(PlaybackError::NoChapterLoaded));

    h.seq.open_chapter(chapter(1), recited_chapter(1, 3)).unwrap();
    assert!(matches!(
        h.seq.select_verse(4),
        Err(PlaybackError::VerseOutOfRange { .. })
    ));
    assert_eq!(h.current(), 1);
}

// ===== Chapter Changes =====

#[test]
fn opening_chapter_resumes_last_read_verse() {
    let mut journal = MockJournal::default();
    journal.resume.insert(chapter(2), 5);
    let mut h = Harness::with_config(SequencerConfig::default(), journal);

    h.seq.open_chapter(chapter(2), recited_chapter(2, 7)).unwrap();

    assert_eq!(h.current(), 5);
    assert!(!h.seq.is_playing());
}

#[test]
fn unknown_resume_position_starts_at_first_verse() {
    let mut journal = MockJournal::default();
    journal.resume.insert(chapter(2), 99);
    let mut h = Harness::with_config(SequencerConfig::default(), journal);

    h.seq.open_chapter(chapter(2), recited_chapter(2, 7)).unwrap();
    assert_eq!(h.current(), 1);
}

#[test]
fn chapter_change_cancels_playback() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 3)).unwrap();
    h.seq.play();
    h.primary_loaded();
    h.seq.drain_events();

    h.seq.open_chapter(chapter(3), recited_chapter(3, 2)).unwrap();

    let events = h.seq.drain_events();
    assert!(events.contains(&SequencerEvent::StateChanged {
        state: PlaybackState::Idle
    }));
    assert!(events.contains(&SequencerEvent::ChapterOpened {
        chapter: chapter(3),
        verse_count: 2
    }));

    // Playback intent does not carry into the new chapter
    h.primary_loaded();
    assert_eq!(h.seq.state(), PlaybackState::Paused);
}

#[test]
fn empty_chapter_is_rejected_without_side_effects() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 2)).unwrap();

    assert_eq!(
        h.seq.open_chapter(chapter(2), Vec::new()),
        Err(PlaybackError::EmptyChapter(chapter(2)))
    );
    assert_eq!(h.seq.chapter(), Some(chapter(1)));
}

#[test]
fn every_verse_change_is_journaled() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 4)).unwrap();
    h.seq.next();
    h.seq.select_verse(4).unwrap();
    h.seq.previous();

    let journaled: Vec<u16> = h
        .seq
        .journal()
        .positions
        .iter()
        .map(|v| v.number_in_chapter)
        .collect();
    assert_eq!(journaled, vec![1, 2, 4, 3]);
}

// ===== Missing Audio =====

#[test]
fn toggle_is_noop_without_audio() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), vec![verse(1, 1), recited(1, 2)]).unwrap();
    assert_eq!(h.seq.state(), PlaybackState::Idle);
    assert!(!h.seq.can_play());

    h.seq.toggle_play();

    assert_eq!(h.seq.state(), PlaybackState::Idle);
    assert!(h.primary.loads().is_empty());
    assert!(!h
        .primary
        .commands()
        .iter()
        .any(|c| matches!(c, Command::Play(_))));
}

#[test]
fn advancing_into_silent_verse_pauses_with_error() {
    let mut h = Harness::new();
    h.seq
        .open_chapter(chapter(1), vec![recited(1, 1), verse(1, 2), recited(1, 3)])
        .unwrap();
    h.seq.play();
    h.primary_loaded();
    h.seq.drain_events();

    h.primary_ended();

    assert_eq!(h.current(), 2);
    assert_eq!(h.seq.state(), PlaybackState::Paused);
    assert!(h
        .seq
        .drain_events()
        .iter()
        .any(|e| matches!(e, SequencerEvent::Error { .. })));
}

// ===== Load Errors =====

#[test]
fn load_error_while_paused_goes_idle() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 2)).unwrap();
    h.seq.drain_events();

    let ticket = h.primary.last_load_ticket();
    h.seq
        .on_signal(Channel::Primary, ticket, AudioSignal::LoadFailed("404".into()));

    assert_eq!(h.seq.state(), PlaybackState::Idle);
    let events = h.seq.drain_events();
    let fault = events.iter().find_map(|e| match e {
        SequencerEvent::Error { fault } => Some(fault.clone()),
        _ => None,
    });
    assert!(matches!(
        fault,
        Some(PlaybackFault::ResourceLoad {
            channel: Channel::Primary,
            ..
        })
    ));
}

#[test]
fn load_error_while_playing_pauses_and_retry_reloads() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 2)).unwrap();
    h.seq.play();

    let ticket = h.primary.last_load_ticket();
    h.seq
        .on_signal(Channel::Primary, ticket, AudioSignal::LoadFailed("timeout".into()));
    assert_eq!(h.seq.state(), PlaybackState::Paused);
    assert_eq!(h.primary.loads().len(), 1);

    h.seq.toggle_play();
    assert_eq!(h.seq.state(), PlaybackState::Loading);
    assert_eq!(h.primary.loads().len(), 2);
    assert_ne!(h.primary.last_load_ticket(), ticket);

    h.primary_loaded();
    assert_eq!(h.seq.state(), PlaybackState::PlayingPrimary);
}

#[test]
fn play_refusal_pauses() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 2)).unwrap();
    h.seq.play();
    h.primary_loaded();

    let ticket = h.primary.last_play_ticket();
    assert!(h.seq.on_signal(
        Channel::Primary,
        ticket,
        AudioSignal::PlayFailed("autoplay blocked".into())
    ));
    assert_eq!(h.seq.state(), PlaybackState::Paused);
    assert_eq!(h.current(), 1);
}

// ===== Loading Intent =====

#[test]
fn toggle_during_loading_flips_intent() {
    let mut h = Harness::new();
    h.seq.open_chapter(chapter(1), recited_chapter(1, 2)).unwrap();

    h.seq.toggle_play();
    h.seq.toggle_play();
    assert!(h.seq.is_loading());

    h.primary_loaded();
    assert_eq!(h.seq.state(), PlaybackState::Paused);

    h.seq.toggle_play();
    assert_eq!(h.seq.state(), PlaybackState::PlayingPrimary);
    // Resuming a loaded verse does not reload it
    assert_eq!(h.primary.loads().len(), 1);
}

// ===== Preloading =====

#[test]
fn playing_preloads_next_verse() {
    let mut h = Harness::with_translation("ur");
    let verses = vec![
        recited(1, 1),
        recited(1, 2).with_translation_audio("ur", "https://cdn.test/ur/2.mp3"),
        recited(1, 3),
    ];
    h.seq.open_chapter(chapter(1), verses).unwrap();
    h.primary_loaded();
    assert!(h.preloader.urls.borrow().is_empty());

    h.seq.play();

    assert_eq!(
        *h.preloader.urls.borrow(),
        vec!["https://cdn.test/1/2.mp3", "https://cdn.test/ur/2.mp3"]
    );
}

#[test]
fn preload_window_is_configurable() {
    let config = SequencerConfig {
        preload_ahead: 3,
        ..SequencerConfig::default()
    };
    let mut h = Harness::with_config(config, MockJournal::default());
    h.seq.open_chapter(chapter(1), recited_chapter(1, 3)).unwrap();
    h.seq.play();
    h.primary_loaded();

    assert_eq!(
        *h.preloader.urls.borrow(),
        vec!["https://cdn.test/1/2.mp3", "https://cdn.test/1/3.mp3"]
    );
}

// ===== Persistence =====

#[test]
fn position_survives_restart_through_tracker() {
    let tracker = PositionTracker::load(MemoryStore::new());
    let mut h = Harness::with_config(SequencerConfig::default(), tracker);
    h.seq.open_chapter(chapter(36), recited_chapter(36, 10)).unwrap();
    h.seq.select_verse(7).unwrap();

    let store = h.seq.journal().store().clone();
    let restored = PositionTracker::load(store);
    let mut h = Harness::with_config(SequencerConfig::default(), restored);
    h.seq.open_chapter(chapter(36), recited_chapter(36, 10)).unwrap();

    assert_eq!(h.current(), 7);
}
