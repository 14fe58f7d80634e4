//! WASM bindings for tilawah-playback
//!
//! Exposes the [`Sequencer`](crate::Sequencer) to browsers. Audio channels
//! are plain JS objects; position, bookmarks and settings persist to
//! `localStorage`.

mod output;
pub mod sequencer;
pub mod types;

pub use sequencer::WasmSequencer;
