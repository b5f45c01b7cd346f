use std::{fmt, marker::PhantomData};

use serde::{Deserialize, Serialize};

use crate::{error::ArgumentError, error::Error, resume::Resumable, source::Source, step::Step};

/// A resumable source over an owned list of values.
///
/// The size estimate is exact. The extracted state is the list of values not
/// yet pulled.
pub struct Items<T, E = Error> {
    inner: std::vec::IntoIter<T>,
    _error: PhantomData<fn() -> E>,
}

/// Create a source that yields each value of `values` in order.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let mut source = items::<_, Error>(vec!["a", "b"]);
/// assert_eq!(source.pull(), Step::Yielded("a"));
/// assert_eq!(source.pull(), Step::Yielded("b"));
/// assert_eq!(source.pull(), Step::Exhausted);
/// ```
pub fn items<T, E>(values: Vec<T>) -> Items<T, E> {
    Items {
        inner: values.into_iter(),
        _error: PhantomData,
    }
}

impl<T, E> Source for Items<T, E> {
    type Item = T;
    type Error = E;

    fn pull(&mut self) -> Step<T, E> {
        match self.inner.next() {
            Some(t) => Step::Yielded(t),
            None => Step::Exhausted,
        }
    }

    fn size_estimate(&self) -> Result<usize, E> {
        Ok(self.inner.len())
    }
}

impl<T: Clone, E> Clone for Items<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _error: PhantomData,
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Items<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Items").field(&self.inner.as_slice()).finish()
    }
}

///
/// ItemsState
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ItemsState<T> {
    pub remaining: Vec<T>,
}

impl<T: Clone, E> Resumable for Items<T, E> {
    type State = ItemsState<T>;

    fn extract_state(&self) -> ItemsState<T> {
        ItemsState {
            remaining: self.inner.as_slice().to_vec(),
        }
    }

    fn reconstruct(state: ItemsState<T>) -> Result<Self, ArgumentError> {
        Ok(items(state.remaining))
    }
}
