//! Pull-driven lazy sequence generators.
//!
//! A [`Generator`] owns a suspended [`Routine`] and runs it one step per
//! [`Generator::advance`] call. Nothing is computed at construction time and
//! nothing is computed ahead of demand, so unbounded routines run in constant
//! memory.
//!
//! ```text
//!  Created ──advance──▶ Suspended ──advance──▶ Suspended
//!     │                    │
//!     │                    ├──advance (routine completes)──▶ Exhausted
//!     │                    └──advance (routine fails)──────▶ Faulted
//!     └──── transfer() on any state leaves the source ─────────▶ Detached
//! ```
//!
//! `Exhausted`, `Faulted` and `Detached` are terminal. Dropping the handle in
//! any state releases the routine and everything it captured.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, error, trace};

use crate::error::SeqError;

pub mod progression;

pub use progression::{Accumulate, Progression, bounded_progression, progression};

/// Target of every event emitted while driving a generator.
pub const LOG_TARGET: &str = module_path!();

/// Outcome of resuming a routine once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The routine produced a value and suspended itself.
    Yielded(T),
    /// The routine ran to completion; it will never yield again.
    Complete,
}

/// A generating routine: the state carried across suspension points plus the
/// code that runs between two of them.
///
/// Returning `Err` reports a fault inside the routine. The driving
/// [`Generator`] stops the sequence and hands the error to its caller.
pub trait Routine {
    type Item;

    fn resume(&mut self) -> Result<Step<Self::Item>, SeqError>;
}

/// Adapter turning a closure into a [`Routine`]. See [`Generator::from_fn`].
pub struct FromFn<F>(F);

impl<T, F> Routine for FromFn<F>
where
    F: FnMut() -> Result<Step<T>, SeqError>,
{
    type Item = T;

    fn resume(&mut self) -> Result<Step<T>, SeqError> {
        (self.0)()
    }
}

/// Liveness of a [`Generator`] handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Built but never advanced.
    Created,
    /// Paused right after yielding; the current value is readable.
    Suspended,
    /// The routine completed.
    Exhausted,
    /// The routine failed; the error was returned by `advance`.
    Faulted,
    /// The routine was moved to another handle by [`Generator::transfer`].
    Detached,
}

impl State {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Suspended => "suspended",
            Self::Exhausted => "exhausted",
            Self::Faulted => "faulted",
            Self::Detached => "detached",
        }
    }

    /// `true` once no further value can ever be produced by this handle.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Faulted | Self::Detached)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniquely owned handle over a suspended routine.
///
/// The handle is move-only: it implements neither `Clone` nor `Copy`, since
/// a suspended computation cannot be duplicated without re-running it.
/// `advance` takes `&mut self`, so at most one consumer drives it at a time.
pub struct Generator<T> {
    routine: Option<Box<dyn Routine<Item = T>>>,
    current: Option<T>,
    state: State,
}

impl<T> Generator<T> {
    /// Wrap a routine. The routine is not resumed until the first `advance`.
    pub fn new<R>(routine: R) -> Self
    where
        R: Routine<Item = T> + 'static,
    {
        Self {
            routine: Some(Box::new(routine)),
            current: None,
            state: State::Created,
        }
    }

    /// Wrap a closure that is called once per `advance`.
    ///
    /// ```
    /// use lazyseq_core::generator::{Generator, Step};
    ///
    /// let mut left = 2;
    /// let mut countdown = Generator::from_fn(move || {
    ///     if left == 0 {
    ///         return Ok(Step::Complete);
    ///     }
    ///     left -= 1;
    ///     Ok(Step::Yielded(left))
    /// });
    /// assert_eq!(countdown.by_ref().collect::<Vec<_>>(), vec![1, 0]);
    /// assert!(countdown.state().is_terminal());
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut() -> Result<Step<T>, SeqError> + 'static,
        T: 'static,
    {
        Self::new(FromFn(f))
    }

    /// Resume the routine until it yields, completes, or fails.
    ///
    /// Returns `Ok(true)` when a new value is readable and `Ok(false)` when
    /// the routine completed. Advancing a handle in a terminal state is a
    /// contract violation and returns the matching [`SeqError`].
    pub fn advance(&mut self) -> Result<bool, SeqError> {
        match self.state {
            State::Exhausted => return Err(SeqError::Exhausted),
            State::Faulted => return Err(SeqError::Faulted),
            State::Detached => return Err(SeqError::Detached),
            State::Created | State::Suspended => {}
        }

        let Some(routine) = self.routine.as_mut() else {
            self.state = State::Detached;
            return Err(SeqError::Detached);
        };

        match routine.resume() {
            Ok(Step::Yielded(value)) => {
                self.current = Some(value);
                self.state = State::Suspended;
                trace!("generator yielded");
                Ok(true)
            }
            Ok(Step::Complete) => {
                debug!("generator exhausted");
                self.finish(State::Exhausted);
                Ok(false)
            }
            Err(err) => {
                debug!(error = %err, "generator routine faulted");
                self.finish(State::Faulted);
                Err(match err {
                    fault @ SeqError::RoutineFault { .. } => fault,
                    other => SeqError::fault(other.to_string()),
                })
            }
        }
    }

    /// Borrow the most recently yielded value.
    pub fn current(&self) -> Result<&T, SeqError> {
        match self.state {
            State::Created => Err(SeqError::NotStarted),
            State::Exhausted => Err(SeqError::Exhausted),
            State::Faulted => Err(SeqError::Faulted),
            State::Detached => Err(SeqError::Detached),
            State::Suspended => self.current.as_ref().ok_or(SeqError::NotStarted),
        }
    }

    /// The most recently yielded value.
    pub fn current_value(&self) -> Result<T, SeqError>
    where
        T: Clone,
    {
        self.current().cloned()
    }

    /// Advance up to `n` times, collecting each yielded value.
    ///
    /// Stops early (returning fewer values) if the routine completes. A fault
    /// discards the partial result and is returned as the error.
    ///
    /// `n` is an upper bound, not a size hint: storage grows with what the
    /// routine actually yields.
    pub fn advance_n(&mut self, n: usize) -> Result<Vec<T>, SeqError>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        for _ in 0..n {
            if !self.advance()? {
                break;
            }
            values.push(self.current_value()?);
        }
        Ok(values)
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// `true` while further `advance` calls may still produce values.
    pub fn is_live(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Move the suspended computation into a new handle.
    ///
    /// The returned handle continues exactly where this one stopped; this
    /// handle becomes [`State::Detached`] and every later operation on it
    /// returns [`SeqError::Detached`].
    pub fn transfer(&mut self) -> Generator<T> {
        let moved = Generator {
            routine: self.routine.take(),
            current: self.current.take(),
            state: self.state,
        };
        self.state = State::Detached;
        moved
    }

    fn finish(&mut self, state: State) {
        self.current = None;
        self.routine = None;
        self.state = state;
    }
}

impl<T> Drop for Generator<T> {
    fn drop(&mut self) {
        if self.routine.is_some() {
            trace!(state = %self.state, "dropping live generator");
        }
    }
}

impl<T> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("state", &self.state)
            .field("has_value", &self.current.is_some())
            .finish_non_exhaustive()
    }
}

/// Iteration yields each value until the routine completes.
///
/// A routine fault also ends iteration (it is logged); callers that must see
/// the error drive the handle with [`Generator::advance`] instead.
impl<T: Clone> Iterator for Generator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.state.is_terminal() {
            return None;
        }
        match self.advance() {
            Ok(true) => self.current_value().ok(),
            Ok(false) => None,
            Err(err) => {
                error!(error = %err, "generator stopped during iteration");
                None
            }
        }
    }
}

impl<T: Clone> FusedIterator for Generator<T> {}
