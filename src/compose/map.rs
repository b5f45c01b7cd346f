//! Transforming the values of a source.

use crate::{ArgumentError, Resumable, Source, Step};

/// Transforms each value pulled from the wrapped source.
///
/// The transform may fail with the source's error type; a failure is reported
/// as that pull's outcome. The size estimate is the source's, since no value
/// is ever dropped.
#[derive(Clone, Debug)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

/// Create a source that transforms every value of `source` with `f`.
///
/// # Examples
///
/// ```
/// use seqtools::prelude::*;
///
/// let mut doubled = map(items::<_, Error>(vec![1, 2]), |x| Ok(x * 2));
/// assert_eq!(doubled.pull(), Step::Yielded(2));
/// assert_eq!(doubled.pull(), Step::Yielded(4));
/// ```
pub fn map<S, F>(source: S, f: F) -> Map<S, F> {
    Map { source, f }
}

impl<S, F> Map<S, F> {
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<U, S, F> Source for Map<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> Result<U, S::Error>,
{
    type Item = U;
    type Error = S::Error;

    fn pull(&mut self) -> Step<U, S::Error> {
        self.source.pull().and_then(&mut self.f)
    }

    fn size_estimate(&self) -> Result<usize, S::Error> {
        self.source.size_estimate()
    }
}

///
/// MapState
///
/// The wrapped source's state plus the transform. Only serializable when
/// the transform is, which closures are not.
///

#[derive(Clone, Debug)]
pub struct MapState<S, F> {
    pub source: S,
    pub f: F,
}

impl<S, F> Resumable for Map<S, F>
where
    S: Resumable,
    F: Clone,
{
    type State = MapState<S::State, F>;

    fn extract_state(&self) -> Self::State {
        MapState {
            source: self.source.extract_state(),
            f: self.f.clone(),
        }
    }

    fn reconstruct(state: Self::State) -> Result<Self, ArgumentError> {
        Ok(map(S::reconstruct(state.source)?, state.f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Clamp, ClampOptions, build::items, clamp, error::Error};

    fn resume<R: Resumable>(value: &R) -> R {
        R::reconstruct(value.extract_state()).unwrap()
    }

    #[test]
    fn test_map_failure_becomes_pull_outcome() {
        let mut parsed = map(items::<_, String>(vec!["1", "x", "3"]), |s: &str| {
            s.parse::<i32>().map_err(|e| e.to_string())
        });

        assert_eq!(parsed.pull(), Step::Yielded(1));
        assert!(parsed.pull().is_failed());
        assert_eq!(parsed.pull(), Step::Yielded(3));
        assert_eq!(parsed.pull(), Step::Exhausted);
    }

    #[test]
    fn test_map_keeps_estimate() {
        let mapped = map(items::<_, ()>(vec![1, 2, 3]), |x| Ok(x + 1));
        assert_eq!(mapped.size_estimate(), Ok(3));
        assert_eq!(mapped.drain(), Ok(vec![2, 3, 4]));
    }

    #[test]
    fn test_state_resumes_mid_stream() {
        let mut doubled = map(items::<_, Error>(vec![1, 2, 3]), |x| Ok(x * 2));
        assert_eq!(doubled.pull(), Step::Yielded(2));

        let resumed = resume(&doubled);
        assert_eq!(resumed.drain(), Ok(vec![4, 6]));
        assert_eq!(doubled.drain(), Ok(vec![4, 6]));
    }

    #[test]
    fn test_clamp_over_map_resumes() {
        let scaled = map(items::<_, Error>((0..10).collect()), |x| Ok(x * 10));
        let mut c = clamp(scaled, Some(20), Some(70));
        assert_eq!(c.pull(), Step::Yielded(20));
        assert_eq!(resume(&c).drain(), Ok(vec![30, 40, 50, 60, 70]));

        let options = ClampOptions { inclusive: false, remove: false };
        let shifted = map(items::<_, Error>((0..10).collect()), |x| Ok(x + 1));
        let mut c = Clamp::with_options(shifted, None, Some(8), options);
        assert_eq!(c.pull(), Step::Yielded(1));
        assert_eq!(resume(&c).drain(), Ok(vec![2, 3, 4, 5, 6, 7, 8, 8, 8]));
    }
}
