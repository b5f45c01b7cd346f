//! Commonly used imports
//!
//! Use `use seqtools::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{ArgumentError, Error, Resumable, Source, Step};

// Most common constructors
pub use crate::build::{from_fn, from_iter, items};

// Composition
pub use crate::compose::{Callable, ChainOptions, Chained, Link, Output, map};

// Range filtering
pub use crate::{Clamp, ClampOptions, clamp};

// Grouping
pub use crate::{GroupBy, Grouped, grouped_by};
