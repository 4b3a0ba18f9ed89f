//! State Machine Runtime
//!
//! A flat, typed state machine whose transition table lives on the state
//! type itself (see [`StateTransitions`]). Only transitions the table lists
//! can ever occur; every other `(state, event)` pair is rejected without
//! touching the current state.
//!
//! Two-phase use is supported so callers can notify observers before the
//! state mutates: [`StateMachine::peek`] resolves the target without side
//! effects, then [`StateMachine::send`] commits it.

use std::fmt::Debug;
use std::hash::Hash;

/// Default number of transitions kept in the history buffer
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Trait for state types that map events to state transitions
///
/// Implement this on a state enum with a single `match (self, event)` so the
/// complete transition table is visible in one place.
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Event type accepted by this state machine
    type Event: Clone + Copy + PartialEq + Eq + Debug;

    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: Self::Event) -> Option<Self>;
}

/// A committed transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S: StateTransitions> {
    pub from: S,
    pub event: S::Event,
    pub to: S,
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine<S: StateTransitions> {
    current_state: S,
    /// History of state transitions (for debugging)
    history: Vec<Transition<S>>,
    history_limit: usize,
}

impl<S: StateTransitions> StateMachine<S> {
    /// Create a new state machine in its initial state
    pub fn new(initial_state: S) -> Self {
        Self {
            current_state: initial_state,
            history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Cap the history buffer; the oldest entries are dropped first
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history, oldest first
    pub fn history(&self) -> &[Transition<S>] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: S::Event) -> bool {
        self.peek(event).is_some()
    }

    /// Resolve the state `event` would lead to, without committing
    pub fn peek(&self, event: S::Event) -> Option<S> {
        self.current_state.on_event(event)
    }

    /// Send an event to the state machine, potentially triggering a transition
    ///
    /// Returns the committed transition, or None if the table rejects the
    /// event in the current state.
    pub fn send(&mut self, event: S::Event) -> Option<Transition<S>> {
        let from = self.current_state;
        let to = from.on_event(event)?;

        self.current_state = to;

        let transition = Transition { from, event, to };
        if self.history_limit > 0 {
            if self.history.len() >= self.history_limit {
                let overflow = self.history.len() + 1 - self.history_limit;
                self.history.drain(..overflow);
            }
            self.history.push(transition);
        }

        tracing::trace!("fsm: {:?} --{:?}--> {:?}", from, event, to);

        Some(transition)
    }
}
