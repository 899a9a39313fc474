//! Bounded-attempts state machine behind validate-and-iterate.
//!
//! The machine holds no I/O: the caller runs the producer and the
//! validator, feeds the combined [`AttemptOutcome`] into
//! [`AttemptMachine::advance`], and acts on the returned [`Transition`].
//!
//! ```
//! use conductor_domain::retry::{AttemptMachine, AttemptOutcome, AttemptState, Transition};
//!
//! let mut machine = AttemptMachine::new(3);
//! assert_eq!(machine.advance(AttemptOutcome::Rejected), Transition::ImproveAndRetry);
//! assert_eq!(machine.advance(AttemptOutcome::Accepted), Transition::Finished);
//! assert_eq!(machine.state(), AttemptState::Validated);
//! assert_eq!(machine.attempts_made(), 2);
//! ```

/// Where the loop currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Ready to run the attempt with this zero-based index
    Attempting(u32),
    /// An attempt produced an accepted response
    Validated,
    /// Every allowed attempt was used without an accepted response
    Exhausted,
}

/// What one attempt produced, after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The producer itself failed (transport, backend, timeout)
    ProducerFailed,
    /// The producer answered but the validator rejected it
    Rejected,
    /// The validator accepted the answer
    Accepted,
}

/// What the caller should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Run the next attempt with the same input
    Retry,
    /// Rewrite the input from the rejected response, then run the next attempt
    ImproveAndRetry,
    /// Stop; inspect [`AttemptMachine::state`] for the result
    Finished,
}

/// Drives one validate-and-iterate loop
#[derive(Debug, Clone)]
pub struct AttemptMachine {
    max_attempts: u32,
    consumed: u32,
    state: AttemptState,
}

impl AttemptMachine {
    /// A machine allowing `max_attempts` producer invocations.
    ///
    /// Zero attempts starts out exhausted.
    pub fn new(max_attempts: u32) -> Self {
        let state = if max_attempts == 0 {
            AttemptState::Exhausted
        } else {
            AttemptState::Attempting(0)
        };
        Self {
            max_attempts,
            consumed: 0,
            state,
        }
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Zero-based index of the attempt about to run, if any.
    pub fn current_attempt(&self) -> Option<u32> {
        match self.state {
            AttemptState::Attempting(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, AttemptState::Attempting(_))
    }

    /// Producer invocations consumed so far.
    pub fn attempts_made(&self) -> u32 {
        self.consumed
    }

    /// Record the outcome of the current attempt.
    ///
    /// Calling this once finished is a no-op returning [`Transition::Finished`].
    pub fn advance(&mut self, outcome: AttemptOutcome) -> Transition {
        let AttemptState::Attempting(n) = self.state else {
            return Transition::Finished;
        };
        let made = n + 1;
        self.consumed = made;

        if outcome == AttemptOutcome::Accepted {
            self.state = AttemptState::Validated;
            return Transition::Finished;
        }

        if made >= self.max_attempts {
            self.state = AttemptState::Exhausted;
            return Transition::Finished;
        }

        self.state = AttemptState::Attempting(made);
        match outcome {
            AttemptOutcome::Rejected => Transition::ImproveAndRetry,
            _ => Transition::Retry,
        }
    }
}
