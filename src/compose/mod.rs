//! Combining callables and transforming sources
//!
//! This module provides the callable chain and the value-mapping adapter.

mod callable;
mod chained;
mod map;

pub use callable::Callable;
pub use chained::{ChainOptions, Chained, ChainedState, Gather, Link, Output};
pub use map::{Map, MapState, map};
