//! Image load tracking.
//!
//! Each load request gets a [`LoadTicket`] tagged with a generation number.
//! A decode completion is only accepted for the ticket of the latest request,
//! so a slow decode of a replaced source can never overwrite the new one.

use std::fmt;

use tracing::{info, warn};

use crate::moves::MoveTarget;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No source requested yet.
    #[default]
    Idle,
    /// Source requested, natural size unknown.
    Loading,
    /// Natural size known.
    Loaded,
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Loaded => write!(f, "Loaded"),
        }
    }
}

/// Handle for one in-flight load request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    source: String,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[derive(Debug, Default)]
pub struct LoadLifecycle {
    phase: LoadPhase,
    generation: u64,
    current: Option<LoadTicket>,
    /// Move requested while loading; replayed once after the next load.
    deferred: Option<MoveTarget>,
}

impl LoadLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Ticket of the load currently being waited on, if any.
    pub fn pending(&self) -> Option<&LoadTicket> {
        match self.phase {
            LoadPhase::Loading => self.current.as_ref(),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.current.as_ref().map(LoadTicket::source)
    }

    /// Enter `Loading` for `source` and return its ticket.
    pub fn begin(&mut self, source: &str) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            source: source.to_string(),
        };
        info!(source, generation = self.generation, "Image load started");
        self.phase = LoadPhase::Loading;
        self.current = Some(ticket.clone());
        ticket
    }

    /// Enter `Loaded` if `ticket` belongs to the latest request.
    ///
    /// Returns `false` and leaves the phase untouched for stale tickets.
    pub fn complete(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) {
            warn!(
                source = ticket.source(),
                generation = ticket.generation(),
                current = self.generation,
                "Ignoring stale image load"
            );
            return false;
        }
        info!(source = ticket.source(), "Image load finished");
        self.phase = LoadPhase::Loaded;
        true
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.phase == LoadPhase::Loading && self.current.as_ref() == Some(ticket)
    }

    /// Record a move to replay after the next load. A later request replaces
    /// an earlier one.
    pub fn defer(&mut self, target: MoveTarget) {
        self.deferred = Some(target);
    }

    pub fn deferred(&self) -> Option<MoveTarget> {
        self.deferred
    }

    pub fn take_deferred(&mut self) -> Option<MoveTarget> {
        self.deferred.take()
    }
}
