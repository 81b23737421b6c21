use log::trace;

/// Computes F(n) with a forward loop over the last two values.
///
/// Linear time, constant space. The input is not validated: for `n <= 0` the loop never
/// runs and the result is `0`.
///
/// # Example
/// ```
/// use fibonacci_variants::fibonacci::iterative;
/// assert_eq!(iterative::calc(10), 55);
/// assert_eq!(iterative::calc(-3), 0);
/// ```
pub fn calc(n: i64) -> i64 {
    trace!("iterative: calc({n})");

    let mut i: i64 = 0;
    let mut j: i64 = 1;

    for _ in 0..n {
        // j runs one term ahead of the result and may wrap first
        let tmp = i.wrapping_add(j);
        i = j;
        j = tmp;
    }

    i
}
