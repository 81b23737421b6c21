use log::{debug, trace};

use super::FibonacciError;

/// Computes F(n) by direct double recursion, F(n) = F(n-1) + F(n-2).
///
/// Runs in O(2^n) time with recursion depth proportional to `n`. No upper bound is enforced,
/// so large inputs are simply slow.
///
/// # Errors
/// Returns [`FibonacciError::InvalidInput`] for a negative `n`, before any computation.
///
/// # Example
/// ```
/// use fibonacci_variants::fibonacci::recursive;
/// assert_eq!(recursive::calc(7), Ok(13));
/// assert_eq!(
///     recursive::calc(-1).unwrap_err().to_string(),
///     "The number must be positive"
/// );
/// ```
pub fn calc(n: i64) -> Result<i64, FibonacciError> {
    trace!("naive_recursive: calc({n})");

    if n < 0 {
        debug!("naive_recursive: rejecting negative input {n}");
        return Err(FibonacciError::InvalidInput { number: n });
    }

    Ok(fib(n))
}

// n is known to be non-negative
fn fib(n: i64) -> i64 {
    if n < 2 {
        return n;
    }

    fib(n - 1).wrapping_add(fib(n - 2))
}
