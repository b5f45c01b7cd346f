//! Iterator adapter for sources.
//!
//! [`Pulls`] drives a [`Source`] through the std [`Iterator`] interface,
//! yielding `Ok(value)` for each pulled value and `Err(error)` for a failure.
//! The adapter is fused: after exhaustion or the first failure it yields
//! `None` forever, while the underlying source stays reachable through
//! [`Pulls::into_inner`].
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let values: Result<Vec<_>, Error> = items(vec![1, 2, 3]).pulls().collect();
//! assert_eq!(values, Ok(vec![1, 2, 3]));
//! ```

use crate::{Source, Step};

pub struct Pulls<S> {
    source: S,
    state: PullsState,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PullsState {
    Active,
    Exhausted,
    Failed,
}

impl<S> Pulls<S>
where
    S: Source,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: PullsState::Active,
        }
    }

    /// Check if the source reported exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.state == PullsState::Exhausted
    }

    /// Check if iteration stopped on a failure.
    pub fn is_failed(&self) -> bool {
        self.state == PullsState::Failed
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> Iterator for Pulls<S>
where
    S: Source,
{
    type Item = Result<S::Item, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != PullsState::Active {
            return None;
        }
        match self.source.pull() {
            Step::Yielded(item) => Some(Ok(item)),
            Step::Exhausted => {
                self.state = PullsState::Exhausted;
                None
            }
            Step::Failed(e) => {
                self.state = PullsState::Failed;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            // a failing estimate only costs pre-allocation here
            PullsState::Active => (self.source.size_estimate().unwrap_or(0), None),
            PullsState::Exhausted | PullsState::Failed => (0, Some(0)),
        }
    }
}

impl<S> std::iter::FusedIterator for Pulls<S> where S: Source {}
