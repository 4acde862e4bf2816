//! State machine for creation stores
//!
//! Each store moves through `idle → loading → {ready, error}`:
//! - every load enters `loading`, including one issued while another is outstanding
//! - `ready` holds the last successful snapshot
//! - `error` keeps the last successful snapshot alongside the error message
//!
//! There is no terminal state; any settled store can load again.

pub use creatorkit_common::StateError;

/// Store lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoreState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

impl StoreState {
    /// Check if a load is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [StoreState] {
        match self {
            Self::Idle | Self::Ready | Self::Error => &[Self::Loading],
            Self::Loading => &[Self::Loading, Self::Ready, Self::Error],
        }
    }
}

impl std::fmt::Display for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Events that trigger store state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A load request was issued
    Load,
    /// The current load returned a snapshot
    Succeeded,
    /// The current load failed
    Failed,
}

impl std::fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Store state machine
pub struct StoreStateMachine;

impl StoreStateMachine {
    /// Attempt a state transition
    ///
    /// Returns the new state if the transition is valid, or an error otherwise.
    pub fn transition(current: StoreState, event: StoreEvent) -> Result<StoreState, StateError> {
        let next = match (current, event) {
            (_, StoreEvent::Load) => StoreState::Loading,
            (StoreState::Loading, StoreEvent::Succeeded) => StoreState::Ready,
            (StoreState::Loading, StoreEvent::Failed) => StoreState::Error,
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: StoreState, event: StoreEvent) -> bool {
        Self::transition(current, event).is_ok()
    }
}
