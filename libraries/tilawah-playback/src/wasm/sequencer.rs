//! WASM-compatible Sequencer wrapper

use super::output::{JsAudioOutput, JsPreloader};
use super::types::{channel_from_js, signal_from_js, ticket_from_js, ticket_to_js};
use crate::{PlaybackError, Sequencer, SequencerConfig, SequencerEvent};
use js_sys::Function;
use tilawah_core::{ChapterNumber, Verse};
use tilawah_storage::{LocalStorageStore, PositionTracker};
use wasm_bindgen::prelude::*;

type Tracker = PositionTracker<LocalStorageStore>;

/// WASM-compatible recitation sequencer
///
/// Wraps the core [`Sequencer`] with a JavaScript-friendly API. Every call
/// dispatches the resulting events to the registered callbacks before it
/// returns.
#[wasm_bindgen]
pub struct WasmSequencer {
    inner: Sequencer<Tracker>,

    // Event callbacks
    on_state_change: Option<Function>,
    on_verse_change: Option<Function>,
    on_chapter_finished: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmSequencer {
    /// Create a sequencer over two JS audio channels and a prefetch function
    #[wasm_bindgen(constructor)]
    pub fn new(primary: JsValue, translation: JsValue, prefetch: Function) -> Result<WasmSequencer, JsValue> {
        console_error_panic_hook::set_once();

        let store = LocalStorageStore::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let tracker = PositionTracker::load(store);
        let config = SequencerConfig {
            audio: tracker.audio_settings().clone(),
            ..SequencerConfig::default()
        };

        Ok(Self {
            inner: Sequencer::new(
                config,
                Box::new(JsAudioOutput::from_js(primary)?),
                Box::new(JsAudioOutput::from_js(translation)?),
                Box::new(JsPreloader(prefetch)),
                tracker,
            ),
            on_state_change: None,
            on_verse_change: None,
            on_chapter_finished: None,
            on_error: None,
        })
    }

    // ===== Intents =====

    /// Open a chapter from an array of verse objects
    #[wasm_bindgen(js_name = openChapter)]
    pub fn open_chapter(&mut self, chapter: u16, verses: JsValue) -> Result<(), JsValue> {
        let chapter = ChapterNumber::new(chapter).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let verses: Vec<Verse> = serde_wasm_bindgen::from_value(verses)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse verses: {}", e)))?;

        let result = self.inner.open_chapter(chapter, verses);
        self.dispatch_events();
        result.map_err(|e| self.handle_error(e))
    }

    #[wasm_bindgen(js_name = selectVerse)]
    pub fn select_verse(&mut self, number_in_chapter: u16) -> Result<(), JsValue> {
        let result = self.inner.select_verse(number_in_chapter);
        self.dispatch_events();
        result.map_err(|e| self.handle_error(e))
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.inner.toggle_play();
        self.dispatch_events();
    }

    pub fn play(&mut self) {
        self.inner.play();
        self.dispatch_events();
    }

    pub fn pause(&mut self) {
        self.inner.pause();
        self.dispatch_events();
    }

    pub fn stop(&mut self) {
        self.inner.stop();
        self.dispatch_events();
    }

    pub fn next(&mut self) {
        self.inner.next();
        self.dispatch_events();
    }

    pub fn previous(&mut self) {
        self.inner.previous();
        self.dispatch_events();
    }

    #[wasm_bindgen(js_name = setTranslationEnabled)]
    pub fn set_translation_enabled(&mut self, enabled: bool) {
        self.inner.set_translation_enabled(enabled);
        self.dispatch_events();
    }

    #[wasm_bindgen(js_name = toggleTranslation)]
    pub fn toggle_translation(&mut self) {
        self.inner.toggle_translation();
        self.dispatch_events();
    }

    #[wasm_bindgen(js_name = setTranslationLanguage)]
    pub fn set_translation_language(&mut self, language: &str) {
        self.inner.set_translation_language(language);
        self.dispatch_events();
    }

    /// Report an audio outcome ("loaded" | "load-failed" | "play-failed" | "ended")
    ///
    /// Returns whether the signal was applied.
    pub fn signal(
        &mut self,
        channel: &str,
        ticket: f64,
        kind: &str,
        message: Option<String>,
    ) -> Result<bool, JsValue> {
        let channel = channel_from_js(channel)?;
        let signal = signal_from_js(kind, message)?;

        let applied = self
            .inner
            .on_signal(channel, ticket_from_js(ticket), signal);
        self.dispatch_events();
        Ok(applied)
    }

    // ===== State Queries =====

    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        self.inner.state().as_str().to_string()
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    #[wasm_bindgen(js_name = canPlay)]
    pub fn can_play(&self) -> bool {
        self.inner.can_play()
    }

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.inner.has_previous()
    }

    /// Current ticket, for channels that want to tag requests themselves
    #[wasm_bindgen(js_name = currentTicket)]
    pub fn current_ticket(&self) -> JsValue {
        ticket_to_js(self.inner.ticket())
    }

    #[wasm_bindgen(js_name = getCurrentVerse)]
    pub fn get_current_verse(&self) -> JsValue {
        self.inner
            .current_verse()
            .and_then(|v| serde_wasm_bindgen::to_value(v).ok())
            .unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(js_name = getSettings)]
    pub fn get_settings(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.settings()).unwrap_or(JsValue::NULL)
    }

    // ===== Bookmarks =====

    /// Bookmark the current verse, or remove its bookmark
    ///
    /// Returns whether the verse is bookmarked afterwards.
    #[wasm_bindgen(js_name = toggleBookmark)]
    pub fn toggle_bookmark(&mut self) -> bool {
        let Some(verse) = self.inner.current_verse().cloned() else {
            return false;
        };
        self.inner.journal_mut().toggle_bookmark(&verse)
    }

    #[wasm_bindgen(js_name = isBookmarked)]
    pub fn is_bookmarked(&self) -> bool {
        self.inner
            .current_verse()
            .is_some_and(|v| self.inner.journal().is_bookmarked(&v.reference()))
    }

    #[wasm_bindgen(js_name = getBookmarks)]
    pub fn get_bookmarks(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.journal().bookmarks()).unwrap_or(JsValue::NULL)
    }

    // ===== Preferences =====

    /// Reciter for primary audio; takes effect on the next chapter fetch
    #[wasm_bindgen(js_name = setReciter)]
    pub fn set_reciter(&mut self, reciter_id: &str) {
        self.inner.journal_mut().set_reciter(reciter_id);
    }

    /// Translation reciter for a language, or the language default when `None`
    #[wasm_bindgen(js_name = setTranslationReciter)]
    pub fn set_translation_reciter(&mut self, language: &str, reciter_id: Option<String>) {
        let tracker = self.inner.journal_mut();
        match reciter_id {
            Some(id) => tracker.set_translation_reciter(language, id),
            None => {
                tracker.clear_translation_reciter(language);
            }
        }
    }

    #[wasm_bindgen(js_name = toggleDarkMode)]
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.inner.journal_mut().toggle_dark_mode()
    }

    #[wasm_bindgen(js_name = getPreferences)]
    pub fn get_preferences(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.journal().preferences()).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register state change callback, called with the state name
    #[wasm_bindgen(js_name = onStateChange)]
    pub fn on_state_change(&mut self, callback: Function) {
        self.on_state_change = Some(callback);
    }

    /// Register verse change callback, called with the verse object
    #[wasm_bindgen(js_name = onVerseChange)]
    pub fn on_verse_change(&mut self, callback: Function) {
        self.on_verse_change = Some(callback);
    }

    /// Register chapter finished callback, called with the chapter number
    #[wasm_bindgen(js_name = onChapterFinished)]
    pub fn on_chapter_finished(&mut self, callback: Function) {
        self.on_chapter_finished = Some(callback);
    }

    /// Register error callback, called with a message
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn dispatch_events(&mut self) {
        for event in self.inner.drain_events() {
            match event {
                SequencerEvent::StateChanged { state } => {
                    if let Some(ref cb) = self.on_state_change {
                        cb.call1(&JsValue::NULL, &JsValue::from_str(state.as_str()))
                            .ok();
                    }
                }
                SequencerEvent::VerseChanged { .. } => {
                    if let Some(ref cb) = self.on_verse_change {
                        cb.call1(&JsValue::NULL, &self.get_current_verse()).ok();
                    }
                }
                SequencerEvent::ChapterFinished { chapter } => {
                    if let Some(ref cb) = self.on_chapter_finished {
                        cb.call1(&JsValue::NULL, &JsValue::from(chapter.get()))
                            .ok();
                    }
                }
                SequencerEvent::Error { fault } => {
                    if let Some(ref cb) = self.on_error {
                        cb.call1(&JsValue::NULL, &JsValue::from_str(&fault.to_string()))
                            .ok();
                    }
                }
                SequencerEvent::ChapterOpened { .. } => {}
            }
        }
    }

    fn handle_error(&self, error: PlaybackError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}
