//! Shared test fixtures.
//!
//! [`Val`] is a small dynamically-typed value: integers and strings order
//! among themselves but not against each other, and arithmetic between the
//! wrong kinds fails, which is what the combinators' failure paths need.

pub mod census;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::{
    ArgumentError, Incomparable, Overflow, Source, Step,
    build::{Items, items},
};

pub const FAIL_NEXT: &str = "This iterator fails on next";
pub const FAIL_ESTIMATE: &str = "This iterator fails on size estimate";

///
/// TestError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TestError {
    #[error("type error: {0}")]
    Type(String),

    #[error("{0}")]
    Raised(&'static str),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Incomparable(#[from] Incomparable),

    #[error(transparent)]
    Overflow(#[from] Overflow),
}

///
/// Val
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Val {
    Int(i64),
    Str(String),
    List(Vec<Val>),
}

impl Val {
    pub fn str(s: &str) -> Self {
        Self::Str(s.to_string())
    }

    pub fn ints(values: impl IntoIterator<Item = i64>) -> Vec<Self> {
        values.into_iter().map(Self::Int).collect()
    }

    pub fn add(&self, other: &Self) -> Result<Self, TestError> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ok(Self::Int(a + b)),
            (Self::Str(a), Self::Str(b)) => Ok(Self::Str(format!("{a}{b}"))),
            _ => Err(TestError::Type("unsupported operand types for +".into())),
        }
    }

    pub fn mul(&self, n: i64) -> Result<Self, TestError> {
        self.mul_val(&Self::Int(n))
    }

    pub fn mul_val(&self, other: &Self) -> Result<Self, TestError> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ok(Self::Int(a * b)),
            (Self::Str(s), Self::Int(n)) | (Self::Int(n), Self::Str(s)) => {
                Ok(Self::Str(s.repeat(usize::try_from(*n).unwrap_or(0))))
            }
            _ => Err(TestError::Type("unsupported operand types for *".into())),
        }
    }

    /// First character of a string value, as a string value.
    pub fn head(&self) -> Result<Self, TestError> {
        match self {
            Self::Str(s) => s
                .chars()
                .next()
                .map(|c| Self::Str(c.to_string()))
                .ok_or_else(|| TestError::Type("string index out of range".into())),
            _ => Err(TestError::Type("value is not subscriptable".into())),
        }
    }

    pub fn into_int(self) -> Result<i64, TestError> {
        match self {
            Self::Int(n) => Ok(n),
            _ => Err(TestError::Type("an integer is required".into())),
        }
    }

    pub fn at(&self, index: usize) -> Result<Self, TestError> {
        match self {
            Self::List(values) => values
                .get(index)
                .cloned()
                .ok_or_else(|| TestError::Type("list index out of range".into())),
            _ => Err(TestError::Type("value is not subscriptable".into())),
        }
    }

    pub fn len(&self) -> Result<Self, TestError> {
        let len = match self {
            Self::Str(s) => s.chars().count(),
            Self::List(values) => values.len(),
            Self::Int(_) => return Err(TestError::Type("value has no len()".into())),
        };
        Ok(Self::Int(len as i64))
    }
}

impl PartialOrd for Val {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Str(a), Self::Str(b)) => a.partial_cmp(b),
            (Self::List(a), Self::List(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl FromIterator<Self> for Val {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

pub fn vals(values: impl IntoIterator<Item = i64>) -> Items<Val, TestError> {
    items(Val::ints(values))
}

///
/// FailNext
///
/// Fails on every pull.
///

pub struct FailNext;

impl Source for FailNext {
    type Item = Val;
    type Error = TestError;

    fn pull(&mut self) -> Step<Val, TestError> {
        Step::Failed(TestError::Raised(FAIL_NEXT))
    }
}

///
/// FailEstimate
///
/// Pulls from the wrapped source, but its size estimate always fails.
///

pub struct FailEstimate<S>(pub S);

impl<S> Source for FailEstimate<S>
where
    S: Source<Error = TestError>,
{
    type Item = S::Item;
    type Error = TestError;

    fn pull(&mut self) -> Step<S::Item, TestError> {
        self.0.pull()
    }

    fn size_estimate(&self) -> Result<usize, TestError> {
        Err(TestError::Raised(FAIL_ESTIMATE))
    }
}

///
/// WideEstimate
///
/// Reports a fixed, possibly unrepresentable, element count.
///

pub struct WideEstimate<S> {
    pub inner: S,
    pub reported: u128,
}

impl<S> Source for WideEstimate<S>
where
    S: Source<Error = TestError>,
{
    type Item = S::Item;
    type Error = TestError;

    fn pull(&mut self) -> Step<S::Item, TestError> {
        self.inner.pull()
    }

    fn size_estimate(&self) -> Result<usize, TestError> {
        Ok(Overflow::check(self.reported)?)
    }
}
