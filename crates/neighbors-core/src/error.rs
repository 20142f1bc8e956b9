//! Unified error type exposed by **`neighbors-core`**.
//!
//! Provider crates should convert their internal errors into one of these
//! variants before bubbling them up to the [`NeighborsClient`].  Decoding
//! failures have their own small taxonomy ([`DecodeError`] and
//! [`FieldError`]) so callers can tell "the reply was garbage" apart from
//! "one record in the reply was garbage".
//!
//! [`NeighborsClient`]: crate::client::NeighborsClient

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, NeighborsError>;

#[derive(Debug, Error)]
pub enum NeighborsError {
    /// Failure while serialising or deserialising JSON payloads sent to / received
    /// from the model provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),

    /// The provider answered, but the structured reply could not be decoded.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Whole-payload decode failure. Nothing from the payload is usable.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Valid JSON, but the top-level value is not an array.
    #[error("expected a JSON array of objects, found {found}")]
    SchemaMismatch { found: &'static str },

    /// A single record failed while decoding with [`DecodePolicy::FailFast`].
    ///
    /// [`DecodePolicy::FailFast`]: crate::decode::DecodePolicy::FailFast
    #[error("record #{index} is invalid: {source}")]
    Record {
        index: usize,
        #[source]
        source: FieldError,
    },
}

/// Problem with a single record of an otherwise well-formed payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("element is {found}, not an object")]
    NotAnObject { found: &'static str },

    #[error("required field `{field}` is missing")]
    Missing { field: &'static str },

    #[error("required field `{field}` is empty")]
    Empty { field: &'static str },

    #[error("field `{field}` should be {expected}, found {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field `{field}` value `{value}` cannot be converted to {expected}")]
    NotCoercible {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Human-readable JSON type name, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
