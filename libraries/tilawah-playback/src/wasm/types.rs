//! Conversions between JS values and sequencer types

use crate::{AudioSignal, Channel, Ticket};
use wasm_bindgen::prelude::*;

/// Parse a channel name ("primary" | "translation")
pub fn channel_from_js(name: &str) -> Result<Channel, JsValue> {
    Channel::parse(name).ok_or_else(|| {
        JsValue::from_str("Invalid channel. Use 'primary' or 'translation'")
    })
}

/// Parse a signal kind ("loaded" | "load-failed" | "play-failed" | "ended")
pub fn signal_from_js(kind: &str, message: Option<String>) -> Result<AudioSignal, JsValue> {
    let reason = || message.clone().unwrap_or_else(|| kind.to_string());
    match kind {
        "loaded" => Ok(AudioSignal::Loaded),
        "load-failed" => Ok(AudioSignal::LoadFailed(reason())),
        "play-failed" => Ok(AudioSignal::PlayFailed(reason())),
        "ended" => Ok(AudioSignal::Ended),
        _ => Err(JsValue::from_str(
            "Invalid signal. Use 'loaded', 'load-failed', 'play-failed' or 'ended'",
        )),
    }
}

/// JS numbers are f64; tickets stay far below 2^53
pub fn ticket_from_js(value: f64) -> Ticket {
    Ticket::new(value as u64)
}

pub fn ticket_to_js(ticket: Ticket) -> JsValue {
    JsValue::from_f64(ticket.get() as f64)
}
