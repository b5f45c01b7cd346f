//! Reading combinator options from configuration text.
//!
//! [`ChainOptions`](crate::ChainOptions) and [`ClampOptions`](crate::ClampOptions)
//! are plain serde types with defaults for every field and unknown keys
//! denied, so a partial JSON object configures just the flags it names.

use serde::de::DeserializeOwned;

use crate::error::ArgumentError;

/// Parse options from a JSON object.
///
/// ```rust
/// use seqtools::{ArgumentError, ClampOptions, config::options_from_str};
///
/// let options: ClampOptions = options_from_str(r#"{"inclusive": true}"#).unwrap();
/// assert!(options.inclusive && options.remove);
///
/// let err = options_from_str::<ClampOptions>(r#"{"strict": true}"#).unwrap_err();
/// assert!(matches!(err, ArgumentError::InvalidOptions(_)));
/// ```
pub fn options_from_str<O>(text: &str) -> Result<O, ArgumentError>
where
    O: DeserializeOwned,
{
    serde_json::from_str(text).map_err(|e| ArgumentError::InvalidOptions(e.to_string()))
}

/// Parse options from an already-decoded JSON value.
pub fn options_from_value<O>(value: serde_json::Value) -> Result<O, ArgumentError>
where
    O: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| ArgumentError::InvalidOptions(e.to_string()))
}
