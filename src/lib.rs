//! # Fibonacci Variants
//!
//! This library provides three interchangeable ways to compute the n-th Fibonacci number
//! under the convention F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2). Each variant is a pure,
//! stateless function over `i64` and can be called from any thread without coordination.
//!
//! ## Variants
//!
//! #### `fibonacci::recursive::calc`
//! Direct double recursion. Exponential time, stack depth proportional to `n`. This is the
//! only variant that validates its input: a negative `n` yields
//! [`FibonacciError::InvalidInput`].
//!
//! #### `fibonacci::iterative::calc`
//! A forward loop keeping the last two values. Linear time, constant space. Negative input is
//! not validated and simply returns `0`.
//!
//! #### `fibonacci::tail_call::calc` / `calc_with`
//! The accumulator form: each step hands `(b, a + b)` to the next one. Written as a loop so
//! the stack never grows. `calc` starts from the standard accumulators `(0, 1)`, `calc_with`
//! takes them explicitly. Negative input returns the first accumulator unchanged.
//!
//! ### Errors
//! - `FibonacciError`: currently a single `InvalidInput` case, raised by the naive recursive
//!   variant for negative input with the message "The number must be positive".
//!
//! ### Range
//! Results are exact for `0 <= n <= MAX_EXACT_INDEX` (92). Past that, additions wrap and the
//! variants keep agreeing with each other, but the values are no longer Fibonacci numbers.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_variants::fibonacci::{iterative, recursive, tail_call};
//! use fibonacci_variants::{FibonacciError, Variant};
//!
//! assert_eq!(recursive::calc(10), Ok(55));
//! assert_eq!(iterative::calc(10), 55);
//! assert_eq!(tail_call::calc(10), 55);
//! assert_eq!(tail_call::calc_with(5, 1, 1), 8);
//!
//! assert_eq!(recursive::calc(-1), Err(FibonacciError::InvalidInput { number: -1 }));
//!
//! for variant in Variant::ALL {
//!     assert_eq!(variant.calc(20).unwrap(), 6765);
//! }
//! ```

pub mod fibonacci;

pub use fibonacci::{FibonacciError, Variant};
