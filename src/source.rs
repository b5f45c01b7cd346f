//! The pull-based iteration protocol.
//!
//! A [`Source`] is a stateful sequence: each call to [`pull`](Source::pull)
//! produces the next value, reports exhaustion, or fails. Sources may also
//! report a best-effort estimate of how many values remain, which consumers
//! use for pre-allocation.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let mut source = items::<_, Error>(vec![1, 2, 3]);
//! assert_eq!(source.size_estimate(), Ok(3));
//! assert_eq!(source.pull(), Step::Yielded(1));
//! assert_eq!(source.drain(), Ok(vec![2, 3]));
//! ```

use crate::{compose::Map, pulls::Pulls, step::Step};

/// Largest number of slots [`Source::drain`] reserves up front.
const DRAIN_PREALLOCATE_LIMIT: usize = 4096;

/// A stateful sequence of values pulled one at a time.
pub trait Source {
    type Item;
    type Error;

    /// Produce the next value, or report exhaustion or failure.
    fn pull(&mut self) -> Step<Self::Item, Self::Error>;

    /// Best-effort count of the values that remain.
    ///
    /// The default knows nothing and reports zero. Implementations that track
    /// wide counts should narrow them with [`Overflow::check`](crate::Overflow::check)
    /// instead of truncating.
    fn size_estimate(&self) -> Result<usize, Self::Error> {
        Ok(0)
    }

    /// Transform every value through a fallible function.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<U, Self::Error>,
    {
        crate::compose::map(self, f)
    }

    /// Adapt into a std [`Iterator`] over `Result` items.
    fn pulls(self) -> Pulls<Self>
    where
        Self: Sized,
    {
        Pulls::new(self)
    }

    /// Borrow the source so that a combinator can consume part of it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Pull every remaining value into a `Vec`.
    ///
    /// The size estimate is consulted first, so a failing estimate fails the
    /// whole drain before any value is pulled.
    fn drain(mut self) -> Result<Vec<Self::Item>, Self::Error>
    where
        Self: Sized,
    {
        let estimate = self.size_estimate()?;
        let mut out = Vec::with_capacity(estimate.min(DRAIN_PREALLOCATE_LIMIT));
        loop {
            match self.pull() {
                Step::Yielded(item) => out.push(item),
                Step::Exhausted => return Ok(out),
                Step::Failed(e) => return Err(e),
            }
        }
    }

    fn boxed<'a>(self) -> Box<dyn Source<Item = Self::Item, Error = Self::Error> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<S> Source for &mut S
where
    S: Source + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    fn pull(&mut self) -> Step<Self::Item, Self::Error> {
        (**self).pull()
    }

    fn size_estimate(&self) -> Result<usize, Self::Error> {
        (**self).size_estimate()
    }
}

impl<S> Source for Box<S>
where
    S: Source + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    fn pull(&mut self) -> Step<Self::Item, Self::Error> {
        (**self).pull()
    }

    fn size_estimate(&self) -> Result<usize, Self::Error> {
        (**self).size_estimate()
    }
}

/// `None` is an empty source.
impl<S> Source for Option<S>
where
    S: Source,
{
    type Item = S::Item;
    type Error = S::Error;

    fn pull(&mut self) -> Step<Self::Item, Self::Error> {
        match self {
            Some(s) => s.pull(),
            None => Step::Exhausted,
        }
    }

    fn size_estimate(&self) -> Result<usize, Self::Error> {
        match self {
            Some(s) => s.size_estimate(),
            None => Ok(0),
        }
    }
}

impl<L, R> Source for either::Either<L, R>
where
    L: Source,
    R: Source<Item = L::Item, Error = L::Error>,
{
    type Item = L::Item;
    type Error = L::Error;

    fn pull(&mut self) -> Step<Self::Item, Self::Error> {
        match self {
            either::Either::Left(l) => l.pull(),
            either::Either::Right(r) => r.pull(),
        }
    }

    fn size_estimate(&self) -> Result<usize, Self::Error> {
        match self {
            either::Either::Left(l) => l.size_estimate(),
            either::Either::Right(r) => r.size_estimate(),
        }
    }
}
