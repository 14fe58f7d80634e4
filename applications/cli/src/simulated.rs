//! Audio output for terminals
//!
//! There is no speaker behind these channels: every clip loads at once and
//! ends as soon as it starts, so a whole chapter runs through the sequencer
//! in one go and the order of clips can be printed.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tilawah_core::{PlaybackJournal, VerseRef};
use tilawah_playback::{AudioOutput, AudioSignal, Channel, Preloader, Sequencer, Ticket};
use tracing::debug;

/// A request made to one of the simulated channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Load { url: String, ticket: Ticket },
    Play { ticket: Ticket },
    Pause,
    Stop,
}

type Queue = Rc<RefCell<VecDeque<(Channel, Request)>>>;

pub struct SimulatedOutput {
    channel: Channel,
    queue: Queue,
}

impl AudioOutput for SimulatedOutput {
    fn load(&mut self, url: &str, ticket: Ticket) {
        self.push(Request::Load {
            url: url.to_string(),
            ticket,
        });
    }

    fn play(&mut self, ticket: Ticket) {
        self.push(Request::Play { ticket });
    }

    fn pause(&mut self) {
        self.push(Request::Pause);
    }

    fn stop(&mut self) {
        self.push(Request::Stop);
    }
}

impl SimulatedOutput {
    fn push(&self, request: Request) {
        self.queue.borrow_mut().push_back((self.channel, request));
    }
}

/// Logs prefetch hints
pub struct LoggingPreloader;

impl Preloader for LoggingPreloader {
    fn prefetch(&mut self, url: &str) {
        debug!(url, "Prefetch");
    }
}

/// A clip that played to the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heard {
    pub verse: VerseRef,
    pub channel: Channel,
    pub url: String,
}

/// Answers the requests of a pair of [`SimulatedOutput`]s
#[derive(Default)]
pub struct Simulation {
    queue: Queue,
    loaded: [Option<String>; 2],
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recitation and translation channels, in that order
    pub fn outputs(&self) -> (SimulatedOutput, SimulatedOutput) {
        (
            SimulatedOutput {
                channel: Channel::Primary,
                queue: Rc::clone(&self.queue),
            },
            SimulatedOutput {
                channel: Channel::Translation,
                queue: Rc::clone(&self.queue),
            },
        )
    }

    /// Feed back outcomes until the sequencer stops asking for anything
    pub fn run<J: PlaybackJournal>(&mut self, seq: &mut Sequencer<J>) -> Vec<Heard> {
        let mut heard = Vec::new();

        loop {
            let Some((channel, request)) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            let slot = slot(channel);

            match request {
                Request::Load { url, ticket } => {
                    self.loaded[slot] = Some(url);
                    seq.on_signal(channel, ticket, AudioSignal::Loaded);
                }
                Request::Play { ticket } => {
                    let verse = seq.current_verse().map(|v| v.reference());
                    if let (true, Some(verse), Some(url)) =
                        (ticket == seq.ticket(), verse, self.loaded[slot].clone())
                    {
                        heard.push(Heard {
                            verse,
                            channel,
                            url,
                        });
                    }
                    seq.on_signal(channel, ticket, AudioSignal::Ended);
                }
                Request::Stop => {
                    self.loaded[slot] = None;
                }
                Request::Pause => {}
            }
        }

        heard
    }
}

fn slot(channel: Channel) -> usize {
    match channel {
        Channel::Primary => 0,
        Channel::Translation => 1,
    }
}
