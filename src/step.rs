/// Outcome of pulling once from a [`Source`](crate::Source).
///
/// `Step` keeps normal exhaustion and failure apart: `Exhausted` is the end of
/// the sequence, `Failed` carries the error raised while producing the next
/// value.
///
/// # Examples
///
/// ```rust
/// use seqtools::Step;
///
/// let pulled: Step<i32, String> = Step::Yielded(42);
/// assert_eq!(pulled.map_yielded(|x| x * 2), Step::Yielded(84));
///
/// let done: Step<i32, String> = Step::Exhausted;
/// assert_eq!(done.into_result(), Ok(None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T, E> {
    /// The next value of the sequence.
    Yielded(T),
    /// The sequence has no more values.
    Exhausted,
    /// Producing the next value failed.
    Failed(E),
}

impl<T, E> Step<T, E> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// ```rust
    /// use seqtools::Step;
    ///
    /// let x: Step<i32, ()> = Step::Yielded(1);
    /// assert!(x.is_yielded());
    /// assert!(!Step::<i32, ()>::Exhausted.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Step::Exhausted)
    }

    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Step::Failed(_))
    }

    /// Converts from `Step<T, E>` to `Option<T>`, discarding exhaustion and
    /// failure alike.
    #[inline]
    pub fn yielded_value(self) -> Option<T> {
        match self {
            Step::Yielded(t) => Some(t),
            Step::Exhausted | Step::Failed(_) => None,
        }
    }

    #[inline]
    pub fn failed_value(self) -> Option<E> {
        match self {
            Step::Failed(e) => Some(e),
            Step::Yielded(_) | Step::Exhausted => None,
        }
    }

    /// Maps a `Step<T, E>` to `Step<U, E>` by applying a function to the
    /// yielded value.
    #[inline]
    pub fn map_yielded<U, F>(self, f: F) -> Step<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Yielded(t) => Step::Yielded(f(t)),
            Step::Exhausted => Step::Exhausted,
            Step::Failed(e) => Step::Failed(e),
        }
    }

    #[inline]
    pub fn map_failed<E2, F>(self, f: F) -> Step<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Step::Yielded(t) => Step::Yielded(t),
            Step::Exhausted => Step::Exhausted,
            Step::Failed(e) => Step::Failed(f(e)),
        }
    }

    /// Feeds a yielded value through a fallible function; a failure becomes
    /// `Failed`.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Step<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Step::Yielded(t) => match f(t) {
                Ok(u) => Step::Yielded(u),
                Err(e) => Step::Failed(e),
            },
            Step::Exhausted => Step::Exhausted,
            Step::Failed(e) => Step::Failed(e),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Step<&T, &E> {
        match self {
            Step::Yielded(t) => Step::Yielded(t),
            Step::Exhausted => Step::Exhausted,
            Step::Failed(e) => Step::Failed(e),
        }
    }

    /// `Yielded(t)` becomes `Ok(Some(t))`, `Exhausted` becomes `Ok(None)`.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Step::Yielded(t) => Ok(Some(t)),
            Step::Exhausted => Ok(None),
            Step::Failed(e) => Err(e),
        }
    }

    #[inline]
    pub fn unwrap_yielded(self) -> T {
        match self {
            Step::Yielded(t) => t,
            Step::Exhausted => panic!("called `Step::unwrap_yielded()` on an `Exhausted` value"),
            Step::Failed(_) => panic!("called `Step::unwrap_yielded()` on a `Failed` value"),
        }
    }

    #[inline]
    pub fn unwrap_failed(self) -> E {
        match self {
            Step::Failed(e) => e,
            Step::Yielded(_) => panic!("called `Step::unwrap_failed()` on a `Yielded` value"),
            Step::Exhausted => panic!("called `Step::unwrap_failed()` on an `Exhausted` value"),
        }
    }
}

impl<T, E> From<Result<Option<T>, E>> for Step<T, E> {
    fn from(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(t)) => Step::Yielded(t),
            Ok(None) => Step::Exhausted,
            Err(e) => Step::Failed(e),
        }
    }
}

impl<T, E> From<Step<T, E>> for Result<Option<T>, E> {
    fn from(step: Step<T, E>) -> Self {
        step.into_result()
    }
}
