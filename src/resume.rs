//! The serialization protocol.
//!
//! A [`Resumable`] value can hand out an explicit state object mid-stream and
//! be rebuilt from it later. The rebuilt value continues exactly where the
//! original was when the state was extracted; the original is left untouched.
//! States are plain data, so any serde format can carry them when their
//! parts are serializable.

use crate::error::ArgumentError;

pub trait Resumable: Sized {
    type State;

    /// Capture everything needed to continue from the current position.
    fn extract_state(&self) -> Self::State;

    /// Rebuild an equivalent value from a previously extracted state.
    fn reconstruct(state: Self::State) -> Result<Self, ArgumentError>;
}
