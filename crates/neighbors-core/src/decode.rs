//! Schema-driven decoding of structured model replies.
//!
//! The decoder turns the raw text returned by a provider into an ordered
//! list of typed records.  It works in one pass:
//!
//! 1. no payload at all → empty result (nothing was asked yet),
//! 2. parse the text as JSON → [`DecodeError::Malformed`] on failure,
//! 3. require a top-level array → [`DecodeError::SchemaMismatch`] otherwise,
//! 4. for each element, pull every field declared by the [`RecordSchema`],
//!    coerce it to the declared [`FieldKind`] and hand the typed values to
//!    [`DecodeRecord::from_fields`].
//!
//! A bad element is a [`FieldError`]. What happens next depends on the
//! [`DecodePolicy`]: the default skips the element and keeps going, so one
//! malformed entry never hides the valid ones.
//!
//! ```
//! use neighbors_core::decode::{DecodeRecord, RecordFields, ResponseDecoder};
//! use neighbors_core::error::FieldError;
//! use neighbors_core::schema_util::{FieldKind, FieldSpec, RecordSchema};
//!
//! struct City { name: String }
//!
//! impl DecodeRecord for City {
//!     fn from_fields(mut fields: RecordFields) -> Result<Self, FieldError> {
//!         Ok(City { name: fields.text("name")? })
//!     }
//! }
//!
//! const CITY: RecordSchema = RecordSchema::new(
//!     "city",
//!     &[FieldSpec::required("name", FieldKind::Text, "City name.")],
//! );
//!
//! let decoded = ResponseDecoder::new(&CITY)
//!     .decode::<City>(Some(r#"[{"name": "Reno"}, {"nope": 1}]"#))
//!     .unwrap();
//!
//! assert_eq!(decoded.records.len(), 1);
//! assert_eq!(decoded.rejected.len(), 1);
//! ```

use std::fmt::{self, Display};

use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use crate::{
    error::{json_kind, DecodeError, FieldError},
    schema_util::{FieldKind, FieldSpec, RecordSchema},
};

/// What to do with an element that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Drop the element, remember why, and continue with the next one.
    #[default]
    SkipInvalid,
    /// Abort the whole decode with [`DecodeError::Record`].
    FailFast,
}

/// A magnitude the model may express either as a count or as free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    Count(u64),
    Text(String),
}

impl Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(count) => write!(f, "{count}"),
            Quantity::Text(text) => f.write_str(text),
        }
    }
}

/// A field value after coercion to its declared [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Quantity(Quantity),
    WholeNumber(u32),
}

/// The validated fields of one element, keyed by their JSON name.
///
/// Required fields are guaranteed to be present; optional ones are present
/// only if the element carried a usable value for them.
#[derive(Debug, Default)]
pub struct RecordFields {
    values: Vec<(&'static str, FieldValue)>,
}

impl RecordFields {
    fn take(&mut self, key: &str) -> Option<FieldValue> {
        let position = self.values.iter().position(|(k, _)| *k == key)?;
        Some(self.values.swap_remove(position).1)
    }

    /// Take a text field, failing if the schema didn't provide it.
    pub fn text(&mut self, key: &'static str) -> Result<String, FieldError> {
        match self.take(key) {
            Some(FieldValue::Text(text)) => Ok(text),
            _ => Err(FieldError::Missing { field: key }),
        }
    }

    pub fn quantity(&mut self, key: &str) -> Option<Quantity> {
        match self.take(key)? {
            FieldValue::Quantity(quantity) => Some(quantity),
            _ => None,
        }
    }

    pub fn whole_number(&mut self, key: &str) -> Option<u32> {
        match self.take(key)? {
            FieldValue::WholeNumber(number) => Some(number),
            _ => None,
        }
    }
}

/// Explicit construction of a record from validated fields.
pub trait DecodeRecord: Sized {
    fn from_fields(fields: RecordFields) -> Result<Self, FieldError>;
}

/// An element that was dropped under [`DecodePolicy::SkipInvalid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// Position of the element in the reply array.
    pub index: usize,
    pub error: FieldError,
}

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<R> {
    /// Valid records, in the order the model produced them.
    pub records: Vec<R>,
    pub rejected: Vec<Rejected>,
}

impl<R> Default for Decoded<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<R> Decoded<R> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

/// Stateless decoder bound to one [`RecordSchema`].
#[derive(Debug, Clone, Copy)]
pub struct ResponseDecoder<'s> {
    schema: &'s RecordSchema,
    policy: DecodePolicy,
}

impl<'s> ResponseDecoder<'s> {
    pub fn new(schema: &'s RecordSchema) -> Self {
        Self {
            schema,
            policy: DecodePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Decode `payload` into records of type `R`.
    ///
    /// `None` means no reply exists yet and yields an empty result.
    pub fn decode<R: DecodeRecord>(&self, payload: Option<&str>) -> Result<Decoded<R>, DecodeError> {
        let Some(payload) = payload else {
            debug!(schema = self.schema.name, "no payload to decode");
            return Ok(Decoded::default());
        };

        let value: Value = serde_json::from_str(payload).map_err(DecodeError::Malformed)?;
        let elements = match value {
            Value::Array(elements) => elements,
            other => {
                return Err(DecodeError::SchemaMismatch {
                    found: json_kind(&other),
                });
            }
        };

        let mut decoded = Decoded {
            records: Vec::with_capacity(elements.len()),
            rejected: Vec::new(),
        };

        for (index, element) in elements.into_iter().enumerate() {
            match self.decode_element::<R>(element) {
                Ok(record) => decoded.records.push(record),
                Err(error) => match self.policy {
                    DecodePolicy::FailFast => {
                        return Err(DecodeError::Record {
                            index,
                            source: error,
                        });
                    }
                    DecodePolicy::SkipInvalid => {
                        warn!(schema = self.schema.name, index, %error, "skipping invalid record");
                        decoded.rejected.push(Rejected { index, error });
                    }
                },
            }
        }

        debug!(
            schema = self.schema.name,
            records = decoded.records.len(),
            rejected = decoded.rejected.len(),
            "decoded structured reply"
        );

        Ok(decoded)
    }

    fn decode_element<R: DecodeRecord>(&self, element: Value) -> Result<R, FieldError> {
        let mut object = match element {
            Value::Object(object) => object,
            other => {
                return Err(FieldError::NotAnObject {
                    found: json_kind(&other),
                });
            }
        };

        let mut fields = RecordFields {
            values: Vec::with_capacity(self.schema.fields.len()),
        };

        for spec in self.schema.fields {
            match coerce_field(spec, &mut object)? {
                Some(value) => fields.values.push((spec.key, value)),
                None if spec.required => return Err(FieldError::Missing { field: spec.key }),
                None => {}
            }
        }

        R::from_fields(fields)
    }
}

/// Pull `spec.key` out of `object` and coerce it.
///
/// `Ok(None)` means the field is absent, `null`, or blank.
fn coerce_field(
    spec: &FieldSpec,
    object: &mut Map<String, Value>,
) -> Result<Option<FieldValue>, FieldError> {
    let value = match object.remove(spec.key) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let blank = || -> Result<Option<FieldValue>, FieldError> {
        if spec.required {
            Err(FieldError::Empty { field: spec.key })
        } else {
            Ok(None)
        }
    };
    let wrong_type = |found: &Value| FieldError::WrongType {
        field: spec.key,
        expected: spec.kind.expected(),
        found: json_kind(found),
    };

    match (spec.kind, value) {
        (FieldKind::Text, Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return blank();
            }
            Ok(Some(FieldValue::Text(text.to_owned())))
        }
        (FieldKind::Quantity, Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return blank();
            }
            let quantity = match plain_count(text) {
                Some(count) => Quantity::Count(count),
                None => Quantity::Text(text.to_owned()),
            };
            Ok(Some(FieldValue::Quantity(quantity)))
        }
        (FieldKind::Quantity, Value::Number(number)) => {
            let quantity = match number.as_u64() {
                Some(count) => Quantity::Count(count),
                None => Quantity::Text(number.to_string()),
            };
            Ok(Some(FieldValue::Quantity(quantity)))
        }
        (FieldKind::WholeNumber, Value::Number(number)) => {
            whole_number(spec, number_as_f64(&number), || number.to_string()).map(Some)
        }
        (FieldKind::WholeNumber, Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return blank();
            }
            let not_coercible = || FieldError::NotCoercible {
                field: spec.key,
                expected: spec.kind.expected(),
                value: text.to_owned(),
            };
            let parsed = text.parse::<f64>().map_err(|_| not_coercible())?;
            whole_number(spec, Some(parsed), || text.to_owned()).map(Some)
        }
        (_, other) => Err(wrong_type(&other)),
    }
}

fn number_as_f64(number: &Number) -> Option<f64> {
    number
        .as_u64()
        .map(|n| n as f64)
        .or_else(|| number.as_f64())
}

/// Truncate toward zero; reject negative, non-finite and oversized values.
fn whole_number(
    spec: &FieldSpec,
    value: Option<f64>,
    literal: impl FnOnce() -> String,
) -> Result<FieldValue, FieldError> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 && v.trunc() <= f64::from(u32::MAX) => {
            Ok(FieldValue::WholeNumber(v.trunc() as u32))
        }
        _ => Err(FieldError::NotCoercible {
            field: spec.key,
            expected: spec.kind.expected(),
            value: literal(),
        }),
    }
}

/// A bare decimal literal such as `705749`. Signs, padding and separators
/// keep the text as written.
fn plain_count(text: &str) -> Option<u64> {
    let digits_only = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (text.len() > 1 && text.starts_with('0')) {
        return None;
    }
    text.parse().ok()
}
