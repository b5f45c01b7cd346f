//! Grouping a source by key.
//!
//! [`GroupBy`] drains a source and files every value under the key computed
//! for it. Without a reduction each key maps to the list of its values in
//! encounter order; with one, each key maps to a single accumulated value.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let words = items::<_, Error>(vec!["apple", "avocado", "banana"]);
//! let groups = grouped_by(words, |w: &&str| Ok(w.len() % 2)).unwrap();
//! assert_eq!(groups[&1], vec!["apple", "avocado"]);
//!
//! let lengths = GroupBy::with_keep(|w: &&str| Ok(w.as_bytes()[0]), |w: &str| Ok(w.len()))
//!     .reduce(|acc, n| Ok(acc + n))
//!     .run(items::<_, Error>(vec!["apple", "avocado", "banana"]))
//!     .unwrap();
//! assert_eq!(lengths.into_reduced().unwrap()[&b'a'], 12);
//! ```

use std::{collections::HashMap, fmt, hash::Hash};

use tracing::debug;

use crate::{error::ArgumentError, source::Source};

type KeyFn<'a, T, K, E> = Box<dyn FnMut(&T) -> Result<K, E> + 'a>;
type KeepFn<'a, T, V, E> = Box<dyn FnMut(T) -> Result<V, E> + 'a>;
type ReduceFn<'a, V, E> = Box<dyn FnMut(V, V) -> Result<V, E> + 'a>;
type SeedFn<'a, V> = Box<dyn FnMut() -> V + 'a>;
type FoldFn<'a, A, V, E> = Box<dyn FnMut(A, V) -> Result<A, E> + 'a>;

/// Group every value of `source` under `key(value)`.
pub fn grouped_by<S, K, F>(source: S, mut key: F) -> Result<HashMap<K, Vec<S::Item>>, S::Error>
where
    S: Source,
    K: Hash + Eq,
    F: FnMut(&S::Item) -> Result<K, S::Error>,
{
    group_lists(source, &mut key, &mut |item| Ok(item))
}

fn group_lists<S, K, V>(
    source: S,
    key: &mut dyn FnMut(&S::Item) -> Result<K, S::Error>,
    keep: &mut dyn FnMut(S::Item) -> Result<V, S::Error>,
) -> Result<HashMap<K, Vec<V>>, S::Error>
where
    S: Source,
    K: Hash + Eq,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    let mut seen = 0_usize;

    for item in source.pulls() {
        let item = item?;
        let k = key(&item)?;
        let v = keep(item)?;
        groups.entry(k).or_default().push(v);
        seen += 1;
    }

    debug!(groups = groups.len(), values = seen, "grouped source into lists");
    Ok(groups)
}

///
/// Grouped
///

#[derive(Clone, Debug)]
pub enum Grouped<K, V> {
    Lists(HashMap<K, Vec<V>>),
    Reduced(HashMap<K, V>),
}

impl<K, V> Grouped<K, V> {
    pub const fn is_lists(&self) -> bool {
        matches!(self, Self::Lists(_))
    }

    pub const fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced(_))
    }

    pub fn into_lists(self) -> Option<HashMap<K, Vec<V>>> {
        match self {
            Self::Lists(groups) => Some(groups),
            Self::Reduced(_) => None,
        }
    }

    pub fn into_reduced(self) -> Option<HashMap<K, V>> {
        match self {
            Self::Lists(_) => None,
            Self::Reduced(groups) => Some(groups),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        match self {
            Self::Lists(groups) => groups.len(),
            Self::Reduced(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> PartialEq for Grouped<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Lists(a), Self::Lists(b)) => a == b,
            (Self::Reduced(a), Self::Reduced(b)) => a == b,
            _ => false,
        }
    }
}

///
/// GroupBy
///
/// A configured grouping, consumed by [`run`](GroupBy::run).
///

pub struct GroupBy<'a, T, K, V, E> {
    key: KeyFn<'a, T, K, E>,
    keep: KeepFn<'a, T, V, E>,
    reduce: Option<ReduceFn<'a, V, E>>,
    seed: Option<SeedFn<'a, V>>,
}

impl<'a, T: 'a, K, E: 'a> GroupBy<'a, T, K, T, E> {
    /// Group values as they are.
    pub fn new<F>(key: F) -> Self
    where
        F: FnMut(&T) -> Result<K, E> + 'a,
    {
        Self::with_keep(key, Ok)
    }
}

impl<'a, T, K, V, E> GroupBy<'a, T, K, V, E> {
    /// Group `keep(value)` instead of the value itself.
    pub fn with_keep<F, G>(key: F, keep: G) -> Self
    where
        F: FnMut(&T) -> Result<K, E> + 'a,
        G: FnMut(T) -> Result<V, E> + 'a,
    {
        Self {
            key: Box::new(key),
            keep: Box::new(keep),
            reduce: None,
            seed: None,
        }
    }

    /// Fold each group into one value with `f(accumulator, value)`.
    ///
    /// Without a seed the first value of a group becomes its accumulator
    /// and `f` is first called on the second value.
    #[must_use]
    pub fn reduce<R>(mut self, f: R) -> Self
    where
        R: FnMut(V, V) -> Result<V, E> + 'a,
    {
        self.reduce = Some(Box::new(f));
        self
    }

    /// Start every group's accumulator from a clone of `seed`.
    ///
    /// Only meaningful together with [`reduce`](GroupBy::reduce); running
    /// with a seed but no reduction fails.
    #[must_use]
    pub fn reduce_start(mut self, seed: V) -> Self
    where
        V: Clone + 'a,
    {
        self.seed = Some(Box::new(move || seed.clone()));
        self
    }

    /// Fold each group into an accumulator of another type, starting every
    /// group from a clone of `seed`.
    ///
    /// Replaces any reduction or seed configured so far.
    pub fn fold<A, R>(self, seed: A, f: R) -> GroupFold<'a, T, K, V, A, E>
    where
        A: Clone,
        R: FnMut(A, V) -> Result<A, E> + 'a,
    {
        GroupFold {
            key: self.key,
            keep: self.keep,
            fold: Box::new(f),
            seed,
        }
    }

    /// Drain `source` and build the groups.
    ///
    /// The first failure of the source or of any supplied function ends the
    /// run and is returned unchanged; nothing is pulled after it.
    pub fn run<S>(self, source: S) -> Result<Grouped<K, V>, E>
    where
        S: Source<Item = T, Error = E>,
        K: Hash + Eq,
        E: From<ArgumentError>,
    {
        let Self {
            mut key,
            mut keep,
            reduce,
            seed,
        } = self;

        match (reduce, seed) {
            (None, Some(_)) => Err(ArgumentError::SeedWithoutReduce.into()),
            (None, None) => group_lists(source, &mut key, &mut keep).map(Grouped::Lists),
            (Some(mut reduce), mut seed) => {
                let mut groups: HashMap<K, V> = HashMap::new();
                let mut seen = 0_usize;

                for item in source.pulls() {
                    let item = item?;
                    let k = key(&item)?;
                    let v = keep(item)?;
                    let acc = match (groups.remove(&k), seed.as_mut()) {
                        (Some(acc), _) => reduce(acc, v)?,
                        (None, Some(seed)) => reduce(seed(), v)?,
                        (None, None) => v,
                    };
                    groups.insert(k, acc);
                    seen += 1;
                }

                debug!(groups = groups.len(), values = seen, "reduced source by key");
                Ok(Grouped::Reduced(groups))
            }
        }
    }
}

///
/// GroupFold
///
/// A grouping whose accumulator type differs from the value type, built by
/// [`GroupBy::fold`].
///

pub struct GroupFold<'a, T, K, V, A, E> {
    key: KeyFn<'a, T, K, E>,
    keep: KeepFn<'a, T, V, E>,
    fold: FoldFn<'a, A, V, E>,
    seed: A,
}

impl<T, K, V, A, E> GroupFold<'_, T, K, V, A, E>
where
    A: Clone,
{
    /// Drain `source`, folding every value into its key's accumulator.
    pub fn run<S>(self, source: S) -> Result<HashMap<K, A>, E>
    where
        S: Source<Item = T, Error = E>,
        K: Hash + Eq,
    {
        let Self {
            mut key,
            mut keep,
            mut fold,
            seed,
        } = self;

        let mut groups: HashMap<K, A> = HashMap::new();
        let mut seen = 0_usize;

        for item in source.pulls() {
            let item = item?;
            let k = key(&item)?;
            let v = keep(item)?;
            let acc = groups.remove(&k).unwrap_or_else(|| seed.clone());
            groups.insert(k, fold(acc, v)?);
            seen += 1;
        }

        debug!(groups = groups.len(), values = seen, "folded source by key");
        Ok(groups)
    }
}

impl<T, K, V, A: fmt::Debug, E> fmt::Debug for GroupFold<'_, T, K, V, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupFold")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl<T, K, V, E> fmt::Debug for GroupBy<'_, T, K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBy")
            .field("reduce", &self.reduce.is_some())
            .field("seed", &self.seed.is_some())
            .finish_non_exhaustive()
    }
}
