//! Constrained generic arithmetic.
//!
//! The `PrimInt` bound plays the role of an "integral" constraint: `gcd` can
//! only be instantiated with primitive integers, and a call with floats is
//! rejected at compile time.

use num_traits::{CheckedRem, PrimInt};

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(a, 0) == a`. Signs are not normalised: with negative inputs the
/// result follows the sign of the last non-zero remainder, as `%` does.
///
/// ```
/// use lazyseq_core::showcase::gcd;
///
/// assert_eq!(gcd(20, 25), 5);
/// assert_eq!(gcd(17u64, 5), 1);
/// ```
///
/// ```compile_fail
/// use lazyseq_core::showcase::gcd;
///
/// gcd(20.2, 25.5);
/// ```
pub fn gcd<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt + CheckedRem,
{
    while !b.is_zero() {
        // `MIN % -1` has no representable quotient; its remainder is 0.
        let r = a.checked_rem(&b).unwrap_or_else(T::zero);
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_and_twenty_five() {
        assert_eq!(gcd(20, 25), 5);
    }

    #[test]
    fn zero_second_argument_returns_first() {
        assert_eq!(gcd(42u8, 0), 42);
        assert_eq!(gcd(0i32, 0), 0);
    }

    #[test]
    fn zero_first_argument_returns_second() {
        assert_eq!(gcd(0i64, 9), 9);
    }

    #[test]
    fn works_across_integer_widths() {
        assert_eq!(gcd(48u16, 18), 6);
        assert_eq!(gcd(1_071u128, 462), 21);
        assert_eq!(gcd(13usize, 7), 1);
    }

    #[test]
    fn negative_inputs_follow_remainder_sign() {
        assert_eq!(gcd(-20i32, 25), 5);
        assert_eq!(gcd(20i32, -25), -5);
    }

    #[test]
    fn min_by_minus_one_does_not_panic() {
        assert_eq!(gcd(i32::MIN, -1), -1);
    }
}
