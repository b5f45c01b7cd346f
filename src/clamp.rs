//! Filtering or clamping a source to a range.
//!
//! A [`Clamp`] wraps a source and an optional `low` and `high` bound. With
//! `remove = true` (the default) it drops every value outside the range;
//! with `remove = false` it replaces such values by the bound they crossed.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let kept = clamp(items::<_, Error>((0..10).collect()), Some(2), Some(7));
//! assert_eq!(kept.drain(), Ok(vec![2, 3, 4, 5, 6, 7]));
//!
//! let options = ClampOptions { inclusive: false, remove: false };
//! let clamped = Clamp::with_options(items::<_, Error>((0..5).collect()), Some(1), Some(3), options);
//! assert_eq!(clamped.drain(), Ok(vec![1, 1, 2, 3, 3]));
//! ```

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    error::{ArgumentError, Bound, Incomparable},
    resume::Resumable,
    source::Source,
    step::Step,
};

///
/// ClampOptions
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClampOptions {
    /// Treat the bounds as excluded from the range when filtering.
    pub inclusive: bool,
    /// Drop out-of-range values instead of replacing them.
    pub remove: bool,
}

impl Default for ClampOptions {
    fn default() -> Self {
        Self {
            inclusive: false,
            remove: true,
        }
    }
}

/// Filter `source` to the values within `low..=high`.
///
/// A `None` bound leaves that side unconstrained.
pub fn clamp<S>(source: S, low: Option<S::Item>, high: Option<S::Item>) -> Clamp<S>
where
    S: Source,
{
    Clamp::with_options(source, low, high, ClampOptions::default())
}

fn compare<T: PartialOrd>(item: &T, bound: &T, which: Bound) -> Result<Ordering, Incomparable> {
    item.partial_cmp(bound).ok_or(Incomparable { bound: which })
}

///
/// Clamp
///

pub struct Clamp<S: Source> {
    source: S,
    low: Option<S::Item>,
    high: Option<S::Item>,
    inclusive: bool,
    remove: bool,
    exhausted: bool,
}

impl<S: Source> Clamp<S> {
    pub fn with_options(
        source: S,
        low: Option<S::Item>,
        high: Option<S::Item>,
        options: ClampOptions,
    ) -> Self {
        Self {
            source,
            low,
            high,
            inclusive: options.inclusive,
            remove: options.remove,
            exhausted: false,
        }
    }

    pub fn builder() -> ClampBuilder<S> {
        ClampBuilder::default()
    }

    pub const fn low(&self) -> Option<&S::Item> {
        self.low.as_ref()
    }

    pub const fn high(&self) -> Option<&S::Item> {
        self.high.as_ref()
    }

    pub const fn inclusive(&self) -> bool {
        self.inclusive
    }

    pub const fn remove(&self) -> bool {
        self.remove
    }

    pub const fn options(&self) -> ClampOptions {
        ClampOptions {
            inclusive: self.inclusive,
            remove: self.remove,
        }
    }

    /// Whether the source has reported exhaustion. Once set, every pull
    /// reports exhaustion without touching the source.
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub const fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    const fn is_bounded(&self) -> bool {
        self.low.is_some() || self.high.is_some()
    }
}

impl<S> Clamp<S>
where
    S: Source,
    S::Item: PartialOrd + Clone,
{
    // None means the item is dropped.
    fn admit(&self, item: S::Item) -> Result<Option<S::Item>, Incomparable> {
        if self.remove {
            return Ok(self.within(&item)?.then_some(item));
        }

        if let Some(low) = &self.low {
            if compare(&item, low, Bound::Low)? == Ordering::Less {
                return Ok(Some(low.clone()));
            }
        }
        if let Some(high) = &self.high {
            if compare(&item, high, Bound::High)? == Ordering::Greater {
                return Ok(Some(high.clone()));
            }
        }
        Ok(Some(item))
    }

    fn within(&self, item: &S::Item) -> Result<bool, Incomparable> {
        if let Some(low) = &self.low {
            let ord = compare(item, low, Bound::Low)?;
            let below = if self.inclusive {
                ord != Ordering::Greater
            } else {
                ord == Ordering::Less
            };
            if below {
                return Ok(false);
            }
        }
        if let Some(high) = &self.high {
            let ord = compare(item, high, Bound::High)?;
            let above = if self.inclusive {
                ord != Ordering::Less
            } else {
                ord == Ordering::Greater
            };
            if above {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<S> Source for Clamp<S>
where
    S: Source,
    S::Item: PartialOrd + Clone,
    S::Error: From<Incomparable>,
{
    type Item = S::Item;
    type Error = S::Error;

    fn pull(&mut self) -> Step<S::Item, S::Error> {
        if self.exhausted {
            return Step::Exhausted;
        }

        loop {
            match self.source.pull() {
                Step::Yielded(item) => match self.admit(item) {
                    Ok(Some(item)) => return Step::Yielded(item),
                    Ok(None) => {}
                    Err(e) => return Step::Failed(e.into()),
                },
                Step::Exhausted => {
                    trace!(remove = self.remove, "clamp source exhausted");
                    self.exhausted = true;
                    return Step::Exhausted;
                }
                Step::Failed(e) => return Step::Failed(e),
            }
        }
    }

    /// Exact while every value is emitted; filtering gives no useful bound.
    fn size_estimate(&self) -> Result<usize, S::Error> {
        if self.exhausted || (self.remove && self.is_bounded()) {
            Ok(0)
        } else {
            self.source.size_estimate()
        }
    }
}

impl<S> Clone for Clamp<S>
where
    S: Source + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            low: self.low.clone(),
            high: self.high.clone(),
            inclusive: self.inclusive,
            remove: self.remove,
            exhausted: self.exhausted,
        }
    }
}

impl<S> fmt::Debug for Clamp<S>
where
    S: Source + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clamp")
            .field("source", &self.source)
            .field("low", &self.low)
            .field("high", &self.high)
            .field("inclusive", &self.inclusive)
            .field("remove", &self.remove)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

///
/// ClampBuilder
///

pub struct ClampBuilder<S: Source> {
    source: Option<S>,
    low: Option<S::Item>,
    high: Option<S::Item>,
    options: ClampOptions,
}

impl<S: Source> Default for ClampBuilder<S> {
    fn default() -> Self {
        Self {
            source: None,
            low: None,
            high: None,
            options: ClampOptions::default(),
        }
    }
}

impl<S: Source> ClampBuilder<S> {
    #[must_use]
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn low(mut self, low: S::Item) -> Self {
        self.low = Some(low);
        self
    }

    #[must_use]
    pub fn high(mut self, high: S::Item) -> Self {
        self.high = Some(high);
        self
    }

    #[must_use]
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.options.inclusive = inclusive;
        self
    }

    #[must_use]
    pub fn remove(mut self, remove: bool) -> Self {
        self.options.remove = remove;
        self
    }

    #[must_use]
    pub fn options(mut self, options: ClampOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<Clamp<S>, ArgumentError> {
        let source = self.source.ok_or(ArgumentError::MissingSource)?;

        Ok(Clamp::with_options(source, self.low, self.high, self.options))
    }
}

///
/// ClampState
///
/// A clamp's position: the wrapped source's own state plus the bounds and
/// flags. `exhausted` defaults to false when absent from serialized input.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClampState<S, T> {
    pub source: S,
    pub low: Option<T>,
    pub high: Option<T>,
    pub inclusive: bool,
    pub remove: bool,
    #[serde(default)]
    pub exhausted: bool,
}

impl<S> Resumable for Clamp<S>
where
    S: Source + Resumable,
    S::Item: Clone,
{
    type State = ClampState<S::State, S::Item>;

    fn extract_state(&self) -> Self::State {
        ClampState {
            source: self.source.extract_state(),
            low: self.low.clone(),
            high: self.high.clone(),
            inclusive: self.inclusive,
            remove: self.remove,
            exhausted: self.exhausted,
        }
    }

    fn reconstruct(state: Self::State) -> Result<Self, ArgumentError> {
        let source = S::reconstruct(state.source)?;
        trace!(exhausted = state.exhausted, "reconstructed clamp");

        Ok(Self {
            source,
            low: state.low,
            high: state.high,
            inclusive: state.inclusive,
            remove: state.remove,
            exhausted: state.exhausted,
        })
    }
}
