//! Recitation sequencer
//!
//! Drives a chapter through its verses: recitation clip, then the
//! translation clip when enabled and available, then the next verse.

use crate::error::{PlaybackError, PlaybackFault, Result};
use crate::events::{AudioSignal, SequencerEvent};
use crate::output::{AudioOutput, Preloader};
use crate::playlist::ChapterPlaylist;
use crate::types::{Channel, PlaybackState, SequencerConfig, Ticket};
use tilawah_core::{AudioSettings, ChapterNumber, PlaybackJournal, Verse, VerseRef};
use tracing::{debug, info, warn};

/// Recitation sequencer
///
/// Platform-agnostic: audio channels, the preloader and the journal are
/// injected. All intents and signals run to completion on the caller's
/// thread; outcomes of asynchronous audio work come back through
/// [`Sequencer::on_signal`].
pub struct Sequencer<J: PlaybackJournal> {
    state: PlaybackState,
    playlist: Option<ChapterPlaylist>,
    settings: AudioSettings,
    preload_ahead: usize,

    /// Whether the user wants audio, carried across verse changes
    wants_playback: bool,

    /// Generation of the current audio requests
    ticket: Ticket,
    primary_ready: bool,
    translation_ready: bool,

    /// Channel that was audible when playback was paused
    paused_on: Option<Channel>,

    primary: Box<dyn AudioOutput>,
    translation: Box<dyn AudioOutput>,
    preloader: Box<dyn Preloader>,
    journal: J,

    /// Events waiting to be drained by the host
    pending_events: Vec<SequencerEvent>,
}

impl<J: PlaybackJournal> Sequencer<J> {
    /// Create an idle sequencer
    pub fn new(
        config: SequencerConfig,
        primary: Box<dyn AudioOutput>,
        translation: Box<dyn AudioOutput>,
        preloader: Box<dyn Preloader>,
        journal: J,
    ) -> Self {
        Self {
            state: PlaybackState::Idle,
            playlist: None,
            settings: config.audio,
            preload_ahead: config.preload_ahead,
            wants_playback: false,
            ticket: Ticket::default(),
            primary_ready: false,
            translation_ready: false,
            paused_on: None,
            primary,
            translation,
            preloader,
            journal,
            pending_events: Vec::new(),
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Transport controls should be disabled while this is set
    pub fn is_loading(&self) -> bool {
        self.state == PlaybackState::Loading
    }

    pub fn chapter(&self) -> Option<ChapterNumber> {
        self.playlist.as_ref().map(ChapterPlaylist::chapter)
    }

    pub fn verses(&self) -> &[Verse] {
        self.playlist.as_ref().map_or(&[], ChapterPlaylist::verses)
    }

    pub fn current_verse(&self) -> Option<&Verse> {
        self.playlist.as_ref().and_then(ChapterPlaylist::current)
    }

    pub fn has_next(&self) -> bool {
        self.playlist.as_ref().is_some_and(ChapterPlaylist::has_next)
    }

    pub fn has_previous(&self) -> bool {
        self.playlist
            .as_ref()
            .is_some_and(ChapterPlaylist::has_previous)
    }

    /// Whether toggling playback would do anything
    pub fn can_play(&self) -> bool {
        self.current_verse().is_some_and(Verse::has_audio)
    }

    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    /// Ticket that audio signals must carry to be accepted
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn journal(&self) -> &J {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut J {
        &mut self.journal
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<SequencerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Intents =====

    /// Replace the open chapter
    ///
    /// Cancels playback and resets to `Idle`, then selects the last-read
    /// verse recorded by the journal, or the first verse. The new chapter
    /// starts paused.
    pub fn open_chapter(&mut self, chapter: ChapterNumber, verses: Vec<Verse>) -> Result<()> {
        let playlist = ChapterPlaylist::new(chapter, verses)?;

        self.cancel_outputs();
        self.wants_playback = false;
        self.playlist = None;
        self.set_state(PlaybackState::Idle);

        let start = self
            .journal
            .resume_position(chapter)
            .and_then(|n| playlist.position_of(n))
            .unwrap_or(0);

        info!(%chapter, verses = playlist.len(), start, "Opened chapter");
        self.pending_events.push(SequencerEvent::ChapterOpened {
            chapter,
            verse_count: playlist.len(),
        });
        self.playlist = Some(playlist);
        self.enter_verse(start);
        Ok(())
    }

    /// Jump to a verse of the open chapter, keeping the play/pause intent
    pub fn select_verse(&mut self, number_in_chapter: u16) -> Result<()> {
        let playlist = self.playlist.as_ref().ok_or(PlaybackError::NoChapterLoaded)?;
        let index = playlist
            .position_of(number_in_chapter)
            .ok_or(PlaybackError::VerseOutOfRange {
                chapter: playlist.chapter(),
                number_in_chapter,
            })?;

        self.enter_verse(index);
        Ok(())
    }

    /// Play if paused, pause if playing
    pub fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::PlayingPrimary | PlaybackState::PlayingTranslation => self.pause(),
            PlaybackState::Loading if self.wants_playback => self.wants_playback = false,
            _ => self.play(),
        }
    }

    /// Start or resume playback of the current verse
    ///
    /// No-op when no verse is selected or the verse has no recitation audio.
    pub fn play(&mut self) {
        let Some(url) = self
            .current_verse()
            .and_then(Verse::primary_audio)
            .map(str::to_owned)
        else {
            debug!("Nothing playable selected, ignoring play");
            return;
        };

        match self.state {
            PlaybackState::PlayingPrimary | PlaybackState::PlayingTranslation => {}
            PlaybackState::Loading => {
                self.wants_playback = true;
            }
            PlaybackState::Idle | PlaybackState::Paused => {
                self.wants_playback = true;
                if self.paused_on.take() == Some(Channel::Translation) {
                    self.start_translation();
                } else if self.primary_ready {
                    self.start_primary();
                } else {
                    self.ticket = self.ticket.next();
                    self.set_state(PlaybackState::Loading);
                    self.primary.load(&url, self.ticket);
                }
            }
        }
    }

    /// Pause whichever channel is audible
    pub fn pause(&mut self) {
        self.wants_playback = false;
        let channel = match self.state {
            PlaybackState::PlayingPrimary => Channel::Primary,
            PlaybackState::PlayingTranslation => Channel::Translation,
            // Loading resolves into Paused on its own once the intent is cleared
            _ => return,
        };

        self.primary.pause();
        self.translation.pause();
        self.paused_on = Some(channel);
        self.set_state(PlaybackState::Paused);
    }

    /// Cancel playback and unload both channels, keeping the current verse
    pub fn stop(&mut self) {
        self.cancel_outputs();
        self.wants_playback = false;
        self.set_state(PlaybackState::Idle);
    }

    /// Advance to the next verse, or end the chapter at the last one
    pub fn next(&mut self) {
        let Some(playlist) = self.playlist.as_ref() else {
            return;
        };
        let Some(index) = playlist.cursor() else {
            return;
        };

        if playlist.has_next() {
            self.enter_verse(index + 1);
        } else {
            let chapter = playlist.chapter();
            if let Some(verse) = playlist.current().map(Verse::reference) {
                let fault = PlaybackFault::NavigationBoundary { verse };
                debug!(%fault, "End of chapter");
            }
            let was_active = self.wants_playback || self.state.is_playing();
            self.cancel_outputs();
            self.wants_playback = false;
            self.set_state(PlaybackState::Paused);
            if was_active {
                info!(%chapter, "Chapter finished");
                self.pending_events
                    .push(SequencerEvent::ChapterFinished { chapter });
            }
        }
    }

    /// Go back one verse; no-op at the first verse
    pub fn previous(&mut self) {
        let Some(playlist) = self.playlist.as_ref() else {
            return;
        };
        let Some(index) = playlist.cursor() else {
            return;
        };

        if index == 0 {
            if let Some(verse) = playlist.current().map(Verse::reference) {
                let fault = PlaybackFault::NavigationBoundary { verse };
                debug!(%fault, "Ignoring previous");
            }
            return;
        }
        self.enter_verse(index - 1);
    }

    /// Enable or disable translation playback
    pub fn set_translation_enabled(&mut self, enabled: bool) {
        if self.settings.with_translation == enabled {
            return;
        }
        self.settings.with_translation = enabled;
        self.journal.record_audio_settings(&self.settings);
        debug!(enabled, "Translation playback toggled");

        if !enabled {
            self.abandon_translation();
        }
    }

    pub fn toggle_translation(&mut self) {
        self.set_translation_enabled(!self.settings.with_translation);
    }

    /// Change the translation language for both audio and text
    pub fn set_translation_language(&mut self, language: &str) {
        if self.settings.selected_language == language
            && self.settings.display_language == language
        {
            return;
        }
        let audio_changed = self.settings.selected_language != language;
        self.settings.selected_language = language.to_string();
        self.settings.display_language = language.to_string();
        self.journal.record_audio_settings(&self.settings);
        debug!(language, "Translation language changed");

        if audio_changed {
            self.abandon_translation();
        }
    }

    // ===== Signals =====

    /// Feed back the outcome of an audio request
    ///
    /// Returns `false` when the signal was discarded, either because its
    /// ticket was superseded or because it does not apply to the current
    /// state.
    pub fn on_signal(&mut self, channel: Channel, ticket: Ticket, signal: AudioSignal) -> bool {
        if ticket != self.ticket {
            debug!(%channel, %ticket, current = %self.ticket, ?signal, "Discarding stale signal");
            return false;
        }

        match (channel, signal) {
            (Channel::Primary, AudioSignal::Loaded) if self.state == PlaybackState::Loading => {
                self.primary_ready = true;
                if self.wants_playback {
                    self.start_primary();
                } else {
                    self.set_state(PlaybackState::Paused);
                }
            }
            (Channel::Primary, AudioSignal::LoadFailed(reason))
                if self.state == PlaybackState::Loading =>
            {
                self.primary_failed(reason);
            }
            (Channel::Primary, AudioSignal::PlayFailed(reason))
                if self.state == PlaybackState::PlayingPrimary =>
            {
                self.primary_failed(reason);
            }
            (Channel::Primary, AudioSignal::Ended) if self.state == PlaybackState::PlayingPrimary => {
                self.primary_ended();
            }
            (Channel::Translation, AudioSignal::Loaded)
                if self.state == PlaybackState::PlayingTranslation && !self.translation_ready =>
            {
                self.translation_ready = true;
                self.translation.play(self.ticket);
            }
            (Channel::Translation, AudioSignal::Loaded)
                if self.paused_on == Some(Channel::Translation) =>
            {
                self.translation_ready = true;
            }
            (
                Channel::Translation,
                AudioSignal::LoadFailed(reason) | AudioSignal::PlayFailed(reason),
            ) if self.state == PlaybackState::PlayingTranslation => {
                warn!(%reason, "Translation audio failed, advancing");
                self.translation.stop();
                self.next();
            }
            (Channel::Translation, AudioSignal::Ended)
                if self.state == PlaybackState::PlayingTranslation =>
            {
                self.next();
            }
            (channel, signal) => {
                debug!(%channel, ?signal, state = %self.state, "Ignoring signal");
                return false;
            }
        }
        true
    }

    // ===== Internals =====

    fn enter_verse(&mut self, index: usize) {
        let Some(playlist) = self.playlist.as_mut() else {
            return;
        };
        let previous = playlist.current().map(Verse::reference);
        if !playlist.set_cursor(index) {
            return;
        }
        let Some(verse) = playlist.current() else {
            return;
        };
        let reference = verse.reference();
        let audio = verse.primary_audio().map(str::to_owned);

        self.cancel_outputs();
        self.journal.record_position(&reference);
        if previous != Some(reference) {
            debug!(verse = %reference, "Verse changed");
            self.pending_events.push(SequencerEvent::VerseChanged {
                verse: reference,
                previous,
            });
        }

        match audio {
            Some(url) => {
                self.set_state(PlaybackState::Loading);
                self.primary.load(&url, self.ticket);
            }
            None => self.missing_audio(reference),
        }
    }

    /// Stop both channels and invalidate outstanding requests
    fn cancel_outputs(&mut self) {
        self.primary.stop();
        self.translation.stop();
        self.ticket = self.ticket.next();
        self.primary_ready = false;
        self.translation_ready = false;
        self.paused_on = None;
    }

    fn start_primary(&mut self) {
        self.primary.play(self.ticket);
        self.set_state(PlaybackState::PlayingPrimary);
        self.preload_upcoming();
    }

    /// Start (or resume) the translation clip of the current verse
    fn start_translation(&mut self) {
        let Some(verse) = self.current_verse() else {
            return;
        };
        let reference = verse.reference();
        let url = verse
            .translation_audio(&self.settings.selected_language)
            .map(str::to_owned);

        match url {
            Some(url) if self.settings.with_translation => {
                self.set_state(PlaybackState::PlayingTranslation);
                if self.translation_ready {
                    self.translation.play(self.ticket);
                } else {
                    self.translation.load(&url, self.ticket);
                }
            }
            _ => {
                let fault = PlaybackFault::MissingTranslation {
                    verse: reference,
                    language: self.settings.selected_language.clone(),
                };
                debug!(%fault, "Skipping translation");
                self.next();
            }
        }
    }

    fn primary_ended(&mut self) {
        self.primary_ready = false;
        if self.settings.with_translation {
            self.translation_ready = false;
            self.start_translation();
        } else {
            self.next();
        }
    }

    fn primary_failed(&mut self, reason: String) {
        let Some(verse) = self.current_verse().map(Verse::reference) else {
            return;
        };
        warn!(%verse, %reason, "Recitation audio failed");

        let resume_paused = self.wants_playback;
        self.cancel_outputs();
        self.wants_playback = false;
        self.raise(PlaybackFault::ResourceLoad {
            channel: Channel::Primary,
            verse,
            reason,
        });
        self.set_state(if resume_paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Idle
        });
    }

    fn missing_audio(&mut self, verse: VerseRef) {
        if self.wants_playback {
            warn!(%verse, "Verse has no recitation audio");
            self.wants_playback = false;
            self.raise(PlaybackFault::ResourceLoad {
                channel: Channel::Primary,
                verse,
                reason: "no recitation audio".to_string(),
            });
            self.set_state(PlaybackState::Paused);
        } else {
            debug!(%verse, "Verse has no recitation audio");
            self.set_state(PlaybackState::Idle);
        }
    }

    /// Drop a translation clip made obsolete by a settings change
    fn abandon_translation(&mut self) {
        let interrupted = self.state == PlaybackState::PlayingTranslation
            || self.paused_on == Some(Channel::Translation);
        if !interrupted {
            return;
        }

        debug!("Translation clip superseded, advancing");
        self.translation.stop();
        self.translation_ready = false;
        self.paused_on = None;
        self.next();
    }

    fn preload_upcoming(&mut self) {
        let Some(playlist) = self.playlist.as_ref() else {
            return;
        };

        let language = &self.settings.selected_language;
        for verse in playlist.upcoming(self.preload_ahead) {
            if let Some(url) = verse.primary_audio() {
                self.preloader.prefetch(url);
            }
            if self.settings.with_translation {
                if let Some(url) = verse.translation_audio(language) {
                    self.preloader.prefetch(url);
                }
            }
        }
    }

    fn raise(&mut self, fault: PlaybackFault) {
        if fault.is_user_facing() {
            self.pending_events.push(SequencerEvent::Error { fault });
        } else {
            debug!(%fault, "Absorbed playback fault");
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            debug!(from = %self.state, to = %state, "State changed");
            self.state = state;
            self.pending_events
                .push(SequencerEvent::StateChanged { state });
        }
    }
}
