//! Live-value census for leak checks.
//!
//! Values wrapped in [`Tracked`] register themselves in a thread-local table
//! keyed by the wrapped type's name and deregister on drop. [`LeakCheck`]
//! compares two censuses taken around one run of an operation and reports
//! every type whose live count grew.

use std::{
    any::type_name,
    cell::RefCell,
    cmp::Ordering,
    collections::{BTreeMap, HashMap, HashSet},
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

use thiserror::Error as ThisError;

thread_local! {
    static LIVE: RefCell<HashMap<&'static str, usize>> = RefCell::new(HashMap::new());
}

fn register(name: &'static str) {
    LIVE.with(|live| *live.borrow_mut().entry(name).or_default() += 1);
}

fn release(name: &'static str) {
    LIVE.with(|live| {
        if let Some(count) = live.borrow_mut().get_mut(name) {
            *count = count.saturating_sub(1);
        }
    });
}

///
/// Tracked
///

pub struct Tracked<T> {
    value: T,
}

impl<T> Tracked<T> {
    pub fn new(value: T) -> Self {
        register(type_name::<T>());
        Self { value }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        release(type_name::<T>());
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tracked<T> {}

impl<T: PartialOrd> PartialOrd for Tracked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Hash> Hash for Tracked<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({:?})", self.value)
    }
}

///
/// Census
///

#[derive(Clone, Debug, Default)]
pub struct Census(HashMap<&'static str, usize>);

impl Census {
    pub fn take() -> Self {
        LIVE.with(|live| Self(live.borrow().clone()))
    }

    pub fn count_for<T>(&self) -> usize {
        self.0.get(type_name::<T>()).copied().unwrap_or(0)
    }

    /// Types whose live count is higher here than in `before`.
    pub fn growth_since(&self, before: &Self) -> BTreeMap<&'static str, usize> {
        self.0
            .iter()
            .filter_map(|(name, &after)| {
                let before = before.0.get(name).copied().unwrap_or(0);
                (after > before).then(|| (*name, after - before))
            })
            .collect()
    }
}

///
/// Leaks
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("leaked objects: {0:?}")]
pub struct Leaks(pub BTreeMap<&'static str, usize>);

impl Leaks {
    pub fn count_for<T>(&self) -> usize {
        self.0.get(type_name::<T>()).copied().unwrap_or(0)
    }
}

///
/// LeakCheck
///

#[derive(Debug, Default)]
pub struct LeakCheck {
    offset: usize,
    exclude: HashSet<&'static str>,
}

impl LeakCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the operation this many times before the checked run.
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn exclude<T>(mut self) -> Self {
        self.exclude.insert(type_name::<T>());
        self
    }

    /// Run `op` once between two censuses and report growth.
    ///
    /// Whatever `op` returns is dropped before the second census.
    pub fn run<R>(&self, mut op: impl FnMut() -> R) -> Result<(), Leaks> {
        for _ in 0..self.offset {
            drop(op());
        }

        let before = Census::take();
        drop(op());
        let after = Census::take();

        let leaked: BTreeMap<_, _> = after
            .growth_since(&before)
            .into_iter()
            .filter(|(name, _)| !self.exclude.contains(name))
            .collect();

        if leaked.is_empty() {
            Ok(())
        } else {
            Err(Leaks(leaked))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_operation_passes() {
        LeakCheck::new()
            .run(|| {
                let a = Tracked::new(1_u8);
                let b = a.clone();
                *a + *b
            })
            .unwrap();
    }

    #[test]
    fn test_retained_values_are_reported() {
        let mut sink = Vec::new();
        let leaks = LeakCheck::new()
            .offset(2)
            .run(|| sink.push(Tracked::new('x')))
            .unwrap_err();

        assert_eq!(leaks.count_for::<char>(), 1);
        assert_eq!(sink.len(), 3);
        assert!(leaks.to_string().starts_with("leaked objects:"));
    }

    #[test]
    fn test_excluded_types_are_ignored() {
        let mut sink = Vec::new();
        LeakCheck::new()
            .exclude::<char>()
            .run(|| sink.push(Tracked::new('x')))
            .unwrap();
    }

    #[test]
    fn test_census_counts_live_values() {
        let before = Census::take();
        let held = vec![Tracked::new(0_u16), Tracked::new(1_u16)];
        let after = Census::take();

        assert_eq!(after.count_for::<u16>() - before.count_for::<u16>(), 2);
        drop(held);
        assert_eq!(Census::take().count_for::<u16>(), before.count_for::<u16>());
    }
}
