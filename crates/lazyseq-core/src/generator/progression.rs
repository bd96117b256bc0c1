//! Arithmetic progressions: `start, start + step, start + 2*step, ...`.
//!
//! Each term is computed on demand from an accumulator, so unbounded
//! progressions cost a constant amount of memory. The step is applied with
//! checked arithmetic: running past the element type's range is a routine
//! fault, not a silent wrap.

use std::any::type_name;
use std::fmt::Debug;

use num_traits::Float;

use super::{Generator, Routine, Step};
use crate::error::SeqError;

/// Numeric element of a progression.
pub trait Accumulate: Copy + Debug + 'static {
    /// `self + step`, or `None` when the sum is not representable.
    fn accumulate(self, step: Self) -> Option<Self>;
}

macro_rules! impl_accumulate_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Accumulate for $t {
                fn accumulate(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_accumulate_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_accumulate_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Accumulate for $t {
                fn accumulate(self, step: Self) -> Option<Self> {
                    let next = self + step;
                    Float::is_finite(next).then_some(next)
                }
            }
        )*
    };
}

impl_accumulate_float!(f32, f64);

/// Routine behind [`progression`] and [`bounded_progression`].
#[derive(Debug, Clone)]
pub struct Progression<T> {
    value: T,
    step: T,
    started: bool,
    remaining: Option<u64>,
}

impl<T: Accumulate> Progression<T> {
    /// Unbounded progression starting at `start`.
    pub fn new(start: T, step: T) -> Self {
        Self {
            value: start,
            step,
            started: false,
            remaining: None,
        }
    }

    /// Stop after `count` terms.
    pub fn limit(mut self, count: u64) -> Self {
        self.remaining = Some(count);
        self
    }
}

impl<T: Accumulate> Routine for Progression<T> {
    type Item = T;

    fn resume(&mut self) -> Result<Step<T>, SeqError> {
        if self.remaining == Some(0) {
            return Ok(Step::Complete);
        }

        // The step lands on resume, after the previous term was handed out.
        if self.started {
            self.value = self.value.accumulate(self.step).ok_or_else(|| {
                SeqError::fault(format!(
                    "{:?} + {:?} overflows {}",
                    self.value,
                    self.step,
                    type_name::<T>()
                ))
            })?;
        }
        self.started = true;

        if let Some(left) = self.remaining.as_mut() {
            *left -= 1;
        }
        Ok(Step::Yielded(self.value))
    }
}

/// Lazily generate `start, start + step, start + 2*step, ...` without end.
///
/// ```
/// use lazyseq_core::generator::progression;
///
/// let mut down = progression(100, -10);
/// assert!(down.advance().unwrap());
/// assert_eq!(down.current_value().unwrap(), 100);
/// assert_eq!(down.take(3).collect::<Vec<_>>(), vec![90, 80, 70]);
/// ```
pub fn progression<T: Accumulate>(start: T, step: T) -> Generator<T> {
    Generator::new(Progression::new(start, step))
}

/// Like [`progression`] but completes after exactly `count` terms.
pub fn bounded_progression<T: Accumulate>(start: T, step: T, count: u64) -> Generator<T> {
    Generator::new(Progression::new(start, step).limit(count))
}
