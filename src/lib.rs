//! # Seqtools: Composable Sequence Primitives
//!
//! Small, stateful building blocks for pull-based sequences of values.
//!
//! ## Core Traits
//!
//! - **[`Source`]**: a sequence pulled one value at a time, with a size estimate
//! - **[`Resumable`]**: a value that can hand out its state and be rebuilt from it
//! - **[`Callable`]**: a unary, fallible function object
//!
//! ## Primitives
//!
//! - [`Chained`] - compose callables, sequentially or fanned out over one input
//! - [`Clamp`] - filter a source to a range, or clamp values into it
//! - [`GroupBy`] - drain a source into per-key lists or reductions
//!
//! ## Example
//!
//! ```
//! use seqtools::prelude::*;
//!
//! // Keep 2..=7, then group what is left by parity
//! let kept = clamp(items::<_, Error>((0..10).collect()), Some(2), Some(7));
//! let groups = grouped_by(kept, |n: &i32| Ok(n % 2)).unwrap();
//! assert_eq!(groups[&0], vec![2, 4, 6]);
//! assert_eq!(groups[&1], vec![3, 5, 7]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sources:**
//! - [`items(values)`](build::items) - Yield each value of a `Vec`, resumably
//! - [`from_iter(iter)`](build::from_iter) - Wrap any std iterator
//! - [`from_fn(f)`](build::from_fn) - Call `f` for every pull
//!
//! **Consuming:**
//! - [`Source::drain`] - Pull everything into a `Vec`
//! - [`Source::pulls`] - Adapt into a std [`Iterator`]
//! - [`grouped_by(source, key)`](grouped_by) - Group values by key

pub mod build;
pub mod compose;
pub mod config;
pub mod prelude;

mod clamp;
mod error;
mod group;
mod pulls;
mod resume;
mod source;
mod step;

#[cfg(test)]
mod testing;

pub use clamp::*;
pub use compose::{Callable, ChainOptions, Chained, ChainedState, Link, Output};
pub use error::*;
pub use group::*;
pub use pulls::*;
pub use resume::*;
pub use source::*;
pub use step::*;
