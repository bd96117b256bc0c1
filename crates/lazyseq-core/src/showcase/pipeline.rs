//! Lazy filter/map pipeline over an in-memory sequence.

/// Values the tour feeds through [`even_squares`].
pub const SAMPLE: [i64; 6] = [0, 1, 2, 3, 4, 5];

/// Keep the even values and square them, one element per demand.
///
/// Squares saturate at `i64::MAX` instead of overflowing.
///
/// ```
/// use lazyseq_core::showcase::{SAMPLE, even_squares};
///
/// assert_eq!(even_squares(SAMPLE).collect::<Vec<_>>(), vec![0, 4, 16]);
/// ```
pub fn even_squares<I>(values: I) -> impl Iterator<Item = i64>
where
    I: IntoIterator<Item = i64>,
{
    values
        .into_iter()
        .filter(|n| n % 2 == 0)
        .map(|n| n.saturating_mul(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn sample_gives_0_4_16() {
        assert_eq!(even_squares(SAMPLE).collect::<Vec<_>>(), vec![0, 4, 16]);
    }

    #[test]
    fn negative_evens_square_positive() {
        assert_eq!(even_squares([-4, -3]).collect::<Vec<_>>(), vec![16]);
    }

    #[test]
    fn pulls_only_what_is_needed() {
        let pulled = Cell::new(0);
        let source = (0..).inspect(|_| pulled.set(pulled.get() + 1));
        let first_two: Vec<i64> = even_squares(source).take(2).collect();
        assert_eq!(first_two, vec![0, 4]);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn large_values_saturate() {
        assert_eq!(even_squares([i64::MAX - 1]).next(), Some(i64::MAX));
    }
}
