use crate::core::Outcome;
use std::collections::VecDeque;

/// Something that happened during a tick that collaborators (audio, UI) may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// A dinosaur reached the goal and a life was taken
    LifeLost {
        /// Lives left after the hit
        remaining: u32,
    },

    /// The player reached the goal
    Won,

    /// The last life was lost
    Lost,

    /// The end-of-round countdown expired
    GameEnded(Outcome),

    /// A dinosaur decided to jump
    DinosaurJumped {
        /// Index of the dinosaur
        index: usize,
    },

    /// A pencil stroke became a body
    PolygonCommitted {
        /// Index of the new drawn polygon
        index: usize,
    },

    /// The latest drawn polygon was removed
    PolygonRemoved,
}

/// Most events kept before the oldest ones are dropped
pub const MAX_QUEUED_EVENTS: usize = 1024;

/// A queue of world events, drained by the host between ticks.
///
/// The world only pushes; hosts are expected to drain after every
/// [`update`](crate::PhysicWorld::update). An undrained queue holds at most
/// [`MAX_QUEUED_EVENTS`], discarding the oldest events first.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<WorldEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue, dropping the oldest one if the queue is full
    pub fn push(&mut self, event: WorldEvent) {
        if self.events.len() >= MAX_QUEUED_EVENTS {
            if let Some(dropped) = self.events.pop_front() {
                tracing::trace!(?dropped, "event queue full, dropping oldest event");
            }
        }
        self.events.push_back(event);
    }

    /// Gets the next event from the queue
    pub fn next_event(&mut self) -> Option<WorldEvent> {
        self.events.pop_front()
    }

    /// Removes and returns every queued event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = WorldEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns whether an event equal to `event` is queued
    pub fn contains(&self, event: &WorldEvent) -> bool {
        self.events.contains(event)
    }
}
