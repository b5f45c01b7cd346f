//! Composing unary callables into one callable.
//!
//! A [`Chained`] holds an ordered, non-empty sequence of [`Link`]s and runs
//! them in one of two modes:
//!
//! - **sequential** (`all = false`): each link receives the previous link's
//!   output and the last result is returned as [`Output::One`];
//! - **fan-out** (`all = true`): every link receives its own clone of the
//!   input and the results are returned in link order as [`Output::All`].
//!
//! `reverse = true` reverses the given links once, at construction. The
//! stored sequence is therefore always in evaluation order, and that is the
//! order exposed by [`Chained::links`] and by the extracted state.
//!
//! Nested sequential chains are spliced into the outer sequence at
//! construction, keeping the inner chain's stored order. Fan-out chains are
//! never spliced, and neither is anything nested in a fan-out chain.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let double_increment = Chained::new(
//!     [
//!         Link::func(|x: i64| Ok::<_, String>(x * 2)),
//!         Link::func(|x: i64| Ok::<_, String>(x + 1)),
//!     ],
//!     ChainOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(double_increment.call(10), Ok(Output::One(21)));
//! ```

use std::{any, borrow::Cow, fmt, rc::Rc};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::callable::Callable;
use crate::{error::ArgumentError, resume::Resumable};

/// Folds the results of a nested fan-out chain back into a single value.
pub type Gather<T> = fn(Vec<T>) -> T;

///
/// ChainOptions
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainOptions {
    pub reverse: bool,
    pub all: bool,
}

///
/// Link
///
/// One element of a chain.
///

pub enum Link<T, E> {
    Func {
        name: Cow<'static, str>,
        func: Rc<dyn Callable<T, E>>,
    },
    Chain(Chained<T, E>),
    Fanout {
        chain: Chained<T, E>,
        gather: Gather<T>,
    },
}

impl<T, E> Link<T, E> {
    /// Wrap a callable, naming it after its type.
    pub fn func<F>(f: F) -> Self
    where
        F: Callable<T, E> + 'static,
    {
        Self::Func {
            name: Cow::Borrowed(any::type_name::<F>()),
            func: Rc::new(f),
        }
    }

    pub fn named<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Callable<T, E> + 'static,
    {
        Self::Func {
            name: name.into(),
            func: Rc::new(f),
        }
    }

    /// Nest a fan-out chain, collecting its results into one value.
    ///
    /// A sequential chain needs no gathering and becomes a plain
    /// [`Link::Chain`].
    pub fn fanout(chain: Chained<T, E>) -> Self
    where
        T: FromIterator<T>,
    {
        Self::fanout_with(chain, |results| results.into_iter().collect())
    }

    pub fn fanout_with(chain: Chained<T, E>, gather: Gather<T>) -> Self {
        if chain.all {
            Self::Fanout { chain, gather }
        } else {
            Self::Chain(chain)
        }
    }

    /// The callable's name, for `Func` links.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Func { name, .. } => Some(name),
            Self::Chain(_) | Self::Fanout { .. } => None,
        }
    }

    /// The nested chain, for `Chain` and `Fanout` links.
    pub const fn as_chain(&self) -> Option<&Chained<T, E>> {
        match self {
            Self::Func { .. } => None,
            Self::Chain(chain) | Self::Fanout { chain, .. } => Some(chain),
        }
    }
}

impl<T: Clone, E> Link<T, E> {
    fn invoke(&self, input: T) -> Result<T, E> {
        match self {
            Self::Func { func, .. } => func.call(input),
            Self::Chain(chain) => chain.run_sequential(input),
            Self::Fanout { chain, gather } => chain.run_each(input).map(*gather),
        }
    }
}

impl<T, E> From<Chained<T, E>> for Link<T, E> {
    fn from(chain: Chained<T, E>) -> Self {
        Self::Chain(chain)
    }
}

impl<T, E> Clone for Link<T, E> {
    fn clone(&self) -> Self {
        match self {
            Self::Func { name, func } => Self::Func {
                name: name.clone(),
                func: Rc::clone(func),
            },
            Self::Chain(chain) => Self::Chain(chain.clone()),
            Self::Fanout { chain, gather } => Self::Fanout {
                chain: chain.clone(),
                gather: *gather,
            },
        }
    }
}

impl<T, E> fmt::Debug for Link<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func { name, .. } => f.write_str(name),
            Self::Chain(chain) | Self::Fanout { chain, .. } => fmt::Debug::fmt(chain, f),
        }
    }
}

///
/// Output
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output<T> {
    /// Result of a sequential chain.
    One(T),
    /// Results of a fan-out chain, one per link.
    All(Vec<T>),
}

impl<T> Output<T> {
    #[inline]
    pub const fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    #[inline]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All(_))
    }

    #[inline]
    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(t) => Some(t),
            Self::All(_) => None,
        }
    }

    #[inline]
    pub fn into_all(self) -> Option<Vec<T>> {
        match self {
            Self::One(_) => None,
            Self::All(ts) => Some(ts),
        }
    }

    #[inline]
    pub fn unwrap_one(self) -> T {
        match self {
            Self::One(t) => t,
            Self::All(_) => panic!("called `Output::unwrap_one()` on an `All` value"),
        }
    }

    #[inline]
    pub fn unwrap_all(self) -> Vec<T> {
        match self {
            Self::One(_) => panic!("called `Output::unwrap_all()` on a `One` value"),
            Self::All(ts) => ts,
        }
    }
}

///
/// Chained
///

pub struct Chained<T, E> {
    links: Vec<Link<T, E>>,
    reverse: bool,
    all: bool,
}

impl<T, E> Chained<T, E> {
    /// Build a chain from the given links.
    ///
    /// Fails if `links` is empty, or if a fan-out chain is passed as a plain
    /// [`Link::Chain`] (use [`Link::fanout`] to nest one).
    pub fn new<I>(links: I, options: ChainOptions) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = Link<T, E>>,
    {
        let mut given: Vec<_> = links.into_iter().collect();
        if given.is_empty() {
            return Err(ArgumentError::NoCallables);
        }
        if options.reverse {
            given.reverse();
        }

        let given_len = given.len();
        let mut links = Vec::with_capacity(given_len);
        for link in given {
            match link {
                Link::Chain(inner) if inner.all => return Err(ArgumentError::UngatheredFanout),
                Link::Chain(inner) if !options.all => links.extend(inner.links),
                other => links.push(other),
            }
        }

        trace!(
            given = given_len,
            links = links.len(),
            reverse = options.reverse,
            all = options.all,
            "built callable chain"
        );

        Ok(Self {
            links,
            reverse: options.reverse,
            all: options.all,
        })
    }

    /// Stored links, in evaluation order.
    pub fn links(&self) -> &[Link<T, E>] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always `false`: a chain holds at least one link.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    pub const fn all(&self) -> bool {
        self.all
    }

    pub const fn options(&self) -> ChainOptions {
        ChainOptions {
            reverse: self.reverse,
            all: self.all,
        }
    }
}

impl<T: Clone, E> Chained<T, E> {
    /// Invoke the chain on one input.
    ///
    /// The first failing callable stops evaluation and its error is returned
    /// as-is; no later callable runs and no partial result is kept.
    pub fn call(&self, input: T) -> Result<Output<T>, E> {
        if self.all {
            self.run_each(input).map(Output::All)
        } else {
            self.run_sequential(input).map(Output::One)
        }
    }

    fn run_sequential(&self, input: T) -> Result<T, E> {
        self.links
            .iter()
            .try_fold(input, |value, link| link.invoke(value))
    }

    fn run_each(&self, input: T) -> Result<Vec<T>, E> {
        self.links
            .iter()
            .map(|link| link.invoke(input.clone()))
            .collect()
    }
}

impl<T, E> Clone for Chained<T, E> {
    fn clone(&self) -> Self {
        Self {
            links: self.links.clone(),
            reverse: self.reverse,
            all: self.all,
        }
    }
}

impl<T, E> fmt::Debug for Chained<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Chained(")?;
        for link in &self.links {
            write!(f, "{link:?}, ")?;
        }
        write!(f, "reverse={}, all={})", self.reverse, self.all)
    }
}

///
/// ChainedState
///
/// Construction-time state of a chain: the flattened links in evaluation
/// order plus both flags. Reconstruction neither reverses nor flattens again.
///

pub struct ChainedState<T, E> {
    pub links: Vec<Link<T, E>>,
    pub reverse: bool,
    pub all: bool,
}

impl<T, E> Resumable for Chained<T, E> {
    type State = ChainedState<T, E>;

    fn extract_state(&self) -> ChainedState<T, E> {
        ChainedState {
            links: self.links.clone(),
            reverse: self.reverse,
            all: self.all,
        }
    }

    fn reconstruct(state: ChainedState<T, E>) -> Result<Self, ArgumentError> {
        if state.links.is_empty() {
            return Err(ArgumentError::NoCallables);
        }
        if state
            .links
            .iter()
            .any(|link| matches!(link, Link::Chain(inner) if inner.all))
        {
            return Err(ArgumentError::UngatheredFanout);
        }
        trace!(links = state.links.len(), "reconstructed callable chain");

        Ok(Self {
            links: state.links,
            reverse: state.reverse,
            all: state.all,
        })
    }
}
