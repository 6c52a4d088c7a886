//! Event log the engine reports notable events to.
//!
//! Keeps the most recent events for front ends and, when verbose, forwards
//! each one to the `log` facade. Verbosity is fixed at construction.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// A logged event for display in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Tick during which the event occurred
    pub tick: u64,
    /// Human-readable description of the event
    pub description: String,
    /// Category of the event
    pub kind: EventKind,
}

/// Event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A creature was seeded at random or restored from a snapshot
    Spawn,
    /// Splitting or pairing produced a child
    Reproduction,
    /// Two creatures fought
    Combat,
    /// A creature starved or died of age
    Death,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
    /// Whether events are forwarded to the `log` facade
    verbose: bool,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20, false)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize, verbose: bool) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
            verbose,
        }
    }

    /// Whether events are forwarded to the `log` facade
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Adds a new event to the log
    pub fn log(&mut self, tick: u64, description: String, kind: EventKind) {
        if self.verbose {
            log::debug!(target: "gridlife::events", "[{tick}] {kind:?}: {description}");
        }

        if self.max_events == 0 {
            return;
        }

        self.events.push_front(LoggedEvent {
            tick,
            description,
            kind,
        });

        // Keep only the most recent events
        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Forwards a diagnostic line to the `log` facade when verbose. Not kept.
    pub fn trace(&self, tick: u64, message: impl fmt::Display) {
        if self.verbose {
            log::trace!(target: "gridlife::tick", "[{tick}] {message}");
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
