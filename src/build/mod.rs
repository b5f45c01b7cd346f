//! Building sources from scratch
//!
//! This module provides functions and types for creating new sources.

mod func;
mod items;

// Re-export building blocks
pub use func::{FromFn, FromIter, from_fn, from_iter};
pub use items::{Items, ItemsState, items};
