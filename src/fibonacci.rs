use std::fmt;

pub mod iterative;
pub mod recursive;
pub mod tail_call;

/// First accumulator of the standard sequence, F(0).
pub const DEFAULT_A: i64 = 0;

/// Second accumulator of the standard sequence, F(1).
pub const DEFAULT_B: i64 = 1;

/// Largest index whose Fibonacci number fits in an `i64`.
///
/// F(92) = 7540113804746346429. Beyond this index every variant wraps on overflow.
pub const MAX_EXACT_INDEX: i64 = 92;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    #[error("The number must be positive")]
    InvalidInput { number: i64 },
}

/// Selects one of the three Fibonacci implementations.
///
/// Dispatching through `Variant` keeps each implementation's own input contract: only
/// [`Variant::NaiveRecursive`] ever returns an error.
///
/// # Example
/// ```
/// use fibonacci_variants::Variant;
///
/// assert_eq!(Variant::Iterative.calc(-1), Ok(0));
/// assert!(Variant::NaiveRecursive.calc(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    NaiveRecursive,
    Iterative,
    TailAccumulator,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::NaiveRecursive,
        Variant::Iterative,
        Variant::TailAccumulator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::NaiveRecursive => "naive_recursive",
            Variant::Iterative => "iterative",
            Variant::TailAccumulator => "tail_accumulator",
        }
    }

    pub fn calc(self, n: i64) -> Result<i64, FibonacciError> {
        match self {
            Variant::NaiveRecursive => recursive::calc(n),
            Variant::Iterative => Ok(iterative::calc(n)),
            Variant::TailAccumulator => Ok(tail_call::calc(n)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
