// Shrthnd Suppression Window
// Guards the hook against re-consuming self-injected synthetic events

use std::time::{Duration, Instant};

/// Suppression state. `Suppressing` tracks how many synthetic events are
/// still expected and a hard deadline after which suppression lifts even
/// if the count never drains (injectors that queue asynchronously may
/// deliver fewer hook callbacks than events emitted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Suppressing { remaining: usize, deadline: Instant },
}

/// Explicit state machine for the self-injection feedback-loop guard.
///
/// While an expansion's delete+insert sequence is in flight, every event
/// the hook delivers is consumed here instead of reaching the word buffer
/// or the expansion engine. The window ends when the expected event count
/// drains or the deadline elapses, whichever comes first.
#[derive(Debug)]
pub struct Suppressor {
    state: State,
}

impl Suppressor {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Arm the window for `events` expected synthetic callbacks, with
    /// `timeout` as the conservative fallback bound.
    ///
    /// Arming while already suppressing extends the window: counts add up
    /// and the later deadline wins.
    pub fn arm(&mut self, events: usize, timeout: Duration) {
        let new_deadline = Instant::now() + timeout;
        self.state = match self.state {
            State::Idle => State::Suppressing {
                remaining: events,
                deadline: new_deadline,
            },
            State::Suppressing {
                remaining,
                deadline,
            } => State::Suppressing {
                remaining: remaining + events,
                deadline: deadline.max(new_deadline),
            },
        };
    }

    /// Called once per incoming event, before any other processing.
    ///
    /// Returns `true` when the event belongs to the suppression window and
    /// must be dropped. A lapsed deadline disarms the window and lets the
    /// current event through as genuine input.
    pub fn check_and_consume(&mut self) -> bool {
        match self.state {
            State::Idle => false,
            State::Suppressing {
                remaining,
                deadline,
            } => {
                if Instant::now() >= deadline {
                    self.state = State::Idle;
                    return false;
                }
                if remaining <= 1 {
                    self.state = State::Idle;
                } else {
                    self.state = State::Suppressing {
                        remaining: remaining - 1,
                        deadline,
                    };
                }
                true
            }
        }
    }

    /// Whether a suppression window is currently armed.
    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Suppressing { .. })
    }

    /// Force the window shut (used when the event source detaches).
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }
}

impl Default for Suppressor {
    fn default() -> Self {
        Self::new()
    }
}
