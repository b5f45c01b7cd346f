use std::marker::PhantomData;

use crate::{error::Error, source::Source, step::Step};

/// A source driven by a closure.
pub struct FromFn<F>(F);

impl<T, E, F> Source for FromFn<F>
where
    F: FnMut() -> Step<T, E>,
{
    type Item = T;
    type Error = E;

    fn pull(&mut self) -> Step<T, E> {
        (self.0)()
    }
}

/// Create a source from a closure that produces each step.
///
/// The closure decides when the sequence ends; the size estimate is always
/// zero.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let mut n = 0;
/// let mut countdown = from_fn(move || {
///     n += 1;
///     if n <= 2 { Step::<i32, ()>::Yielded(n) } else { Step::Exhausted }
/// });
/// assert_eq!(countdown.pull().unwrap_yielded(), 1);
/// assert_eq!(countdown.pull().unwrap_yielded(), 2);
/// assert!(countdown.pull().is_exhausted());
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// Adapts a std [`Iterator`] into an infallible [`Source`].
///
/// The size estimate is the iterator's lower `size_hint` bound.
#[derive(Clone, Debug)]
pub struct FromIter<I, E = Error> {
    iter: I,
    _error: PhantomData<fn() -> E>,
}

pub fn from_iter<I, E>(iter: I) -> FromIter<I::IntoIter, E>
where
    I: IntoIterator,
{
    FromIter {
        iter: iter.into_iter(),
        _error: PhantomData,
    }
}

impl<I, E> Source for FromIter<I, E>
where
    I: Iterator,
{
    type Item = I::Item;
    type Error = E;

    fn pull(&mut self) -> Step<I::Item, E> {
        match self.iter.next() {
            Some(item) => Step::Yielded(item),
            None => Step::Exhausted,
        }
    }

    fn size_estimate(&self) -> Result<usize, E> {
        Ok(self.iter.size_hint().0)
    }
}
