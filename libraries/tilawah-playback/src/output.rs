//! Audio output abstraction
//!
//! Platforms implement these traits to provide actual audio playback
//! (an HTML audio element, a native player, or a test recorder).
//!
//! Outputs are command-driven: the sequencer issues `load`/`play` and the
//! platform reports the outcome later through
//! [`Sequencer::on_signal`](crate::Sequencer::on_signal), echoing the ticket
//! it was given. Implementations never call back into the sequencer from
//! inside a command.

use crate::types::Ticket;

/// One audio channel
pub trait AudioOutput {
    /// Start loading `url`
    ///
    /// Replaces whatever the channel held before. Completion is reported as
    /// `Loaded` or `LoadFailed` with the same `ticket`.
    fn load(&mut self, url: &str, ticket: Ticket);

    /// Start playback of the loaded resource
    ///
    /// Failure is reported as `PlayFailed`, the natural end as `Ended`.
    fn play(&mut self, ticket: Ticket);

    /// Pause, keeping the playback position
    fn pause(&mut self);

    /// Stop and discard the loaded resource
    fn stop(&mut self);
}

/// Fire-and-forget resource warmer
pub trait Preloader {
    /// Hint that `url` will be needed soon
    ///
    /// Failures are invisible to the sequencer.
    fn prefetch(&mut self, url: &str);
}

/// Preloader that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPreload;

impl Preloader for NoPreload {
    fn prefetch(&mut self, _url: &str) {}
}
