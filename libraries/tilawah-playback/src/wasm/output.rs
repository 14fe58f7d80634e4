//! Audio channels backed by JS objects

use super::types::ticket_to_js;
use crate::{AudioOutput, Preloader, Ticket};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

/// A JS object exposing `load(url, ticket)`, `play(ticket)`, `pause()` and
/// `stop()`
///
/// The object reports outcomes through `WasmSequencer.signal`.
pub(crate) struct JsAudioOutput {
    target: JsValue,
    load: Function,
    play: Function,
    pause: Function,
    stop: Function,
}

impl JsAudioOutput {
    pub(crate) fn from_js(target: JsValue) -> Result<Self, JsValue> {
        let method = |name: &str| -> Result<Function, JsValue> {
            Reflect::get(&target, &JsValue::from_str(name))?
                .dyn_into::<Function>()
                .map_err(|_| JsValue::from_str(&format!("Audio channel has no `{name}` method")))
        };

        Ok(Self {
            load: method("load")?,
            play: method("play")?,
            pause: method("pause")?,
            stop: method("stop")?,
            target,
        })
    }

    fn report(&self, command: &str, result: Result<JsValue, JsValue>) {
        if let Err(e) = result {
            console::warn_2(&JsValue::from_str(&format!("audio channel `{command}` threw")), &e);
        }
    }
}

impl AudioOutput for JsAudioOutput {
    fn load(&mut self, url: &str, ticket: Ticket) {
        let result = self
            .load
            .call2(&self.target, &JsValue::from_str(url), &ticket_to_js(ticket));
        self.report("load", result);
    }

    fn play(&mut self, ticket: Ticket) {
        let result = self.play.call1(&self.target, &ticket_to_js(ticket));
        self.report("play", result);
    }

    fn pause(&mut self) {
        let result = self.pause.call0(&self.target);
        self.report("pause", result);
    }

    fn stop(&mut self) {
        let result = self.stop.call0(&self.target);
        self.report("stop", result);
    }
}

/// Preloader delegating to a JS `prefetch(url)` function
pub(crate) struct JsPreloader(pub(crate) Function);

impl Preloader for JsPreloader {
    fn prefetch(&mut self, url: &str) {
        // Prefetch failures only cost efficiency
        self.0.call1(&JsValue::NULL, &JsValue::from_str(url)).ok();
    }
}
