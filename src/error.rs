//! Failure kinds raised by the library itself.
//!
//! User-supplied callables and sources keep their own error types. The
//! combinators never wrap those; instead they require `E: From<...>` for the
//! kinds below so that a single error type can carry both.

use thiserror::Error as ThisError;

///
/// ArgumentError
///
/// Construction-time failures, reported before any element is touched.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ArgumentError {
    #[error("at least one callable is required")]
    NoCallables,

    #[error("a source is required")]
    MissingSource,

    #[error("a reduction seed was given without a reduction function")]
    SeedWithoutReduce,

    #[error("a fan-out chain can only be nested with a gather function")]
    UngatheredFanout,

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

///
/// Bound
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Bound {
    Low,
    High,
}

impl Bound {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

///
/// Incomparable
///
/// An element could not be ordered against one of the clamp bounds.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("element cannot be compared with the {} bound", bound.as_str())]
pub struct Incomparable {
    pub bound: Bound,
}

///
/// Overflow
///
/// A size estimate that does not fit in `usize`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("size estimate {reported} exceeds the representable range")]
pub struct Overflow {
    pub reported: u128,
}

impl Overflow {
    /// Narrow a wide element count to `usize`, failing instead of truncating.
    pub fn check(reported: u128) -> Result<usize, Self> {
        usize::try_from(reported).map_err(|_| Self { reported })
    }
}

///
/// Error
///
/// Umbrella over every library failure kind; the default error type of the
/// built-in sources.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Incomparable(#[from] Incomparable),

    #[error(transparent)]
    Overflow(#[from] Overflow),
}
