use log::trace;

use super::{DEFAULT_A, DEFAULT_B};

/// Computes F(n) with the accumulator form, starting from `(0, 1)`.
///
/// Same as [`calc_with`]`(n, 0, 1)`.
///
/// # Example
/// ```
/// use fibonacci_variants::fibonacci::tail_call;
/// assert_eq!(tail_call::calc(10), 55);
/// ```
pub fn calc(n: i64) -> i64 {
    calc_with(n, DEFAULT_A, DEFAULT_B)
}

/// Advances the accumulator pair `(a, b)` to `(b, a + b)` exactly `n` times and returns `a`.
///
/// This is the tail-recursive `calc(n - 1, b, a + b)` unrolled into a loop, so the stack
/// stays flat for any `n`. A non-positive `n` returns `a` unchanged.
///
/// # Example
/// ```
/// use fibonacci_variants::fibonacci::tail_call;
/// assert_eq!(tail_call::calc_with(5, 1, 1), 8);
/// assert_eq!(tail_call::calc_with(-1, 7, 9), 7);
/// ```
pub fn calc_with(mut n: i64, mut a: i64, mut b: i64) -> i64 {
    trace!("tail_accumulator: calc_with({n}, {a}, {b})");

    while n > 0 {
        (a, b) = (b, a.wrapping_add(b));
        n -= 1;
    }

    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::MAX_EXACT_INDEX;

    #[test]
    fn first_number_of_sequence_is_zero() {
        assert_eq!(calc(0), 0);
    }

    #[test]
    fn second_number_of_sequence_is_one() {
        assert_eq!(calc(1), 1);
    }

    #[test]
    fn some_more_numbers() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.into_iter().enumerate() {
            assert_eq!(calc(n as i64), want, "mismatch at n={n}");
        }
    }

    #[test]
    fn negative_input_returns_first_accumulator() {
        assert_eq!(calc(-1), 0);
        assert_eq!(calc_with(-1, 3, 4), 3);
        assert_eq!(calc_with(0, 3, 4), 3);
    }

    #[test]
    fn custom_accumulators() {
        // (1, 1) shifts the sequence by one: result is F(n + 1)
        assert_eq!(calc_with(5, 1, 1), 8);
        // (2, 1) yields the Lucas numbers
        assert_eq!(calc_with(5, 2, 1), 11);
    }

    #[test]
    fn default_entry_point_uses_standard_seed() {
        for n in 0..=30 {
            assert_eq!(calc(n), calc_with(n, 0, 1));
        }
    }

    #[test]
    fn largest_exact_index() {
        assert_eq!(calc(MAX_EXACT_INDEX), 7_540_113_804_746_346_429);
    }

    #[test]
    fn large_input_does_not_grow_the_stack() {
        // wrapped value, only checking that it completes and is repeatable
        assert_eq!(calc(5_000_000), calc(5_000_000));
    }
}
