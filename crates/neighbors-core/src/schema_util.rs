//! A single declaration of the record shape we expect from the model.
//!
//! [`RecordSchema`] is the one source of truth for a structured reply: it is
//! rendered into the JSON Schema that is shipped alongside the prompt (see
//! [`RecordSchema::response_schema`]) **and** it drives the
//! [`ResponseDecoder`](crate::decode::ResponseDecoder) that turns the reply
//! back into typed records.  Keeping both on the same table means a field
//! can't be requested under one name and decoded under another.
//!
//! The JSON is produced with [`schemars`] schema objects and is limited to
//! the subset understood by providers with a structured-output mode
//! (`type`, `items`, `properties`, `required`, `description`).
//!
//! # Example
//!
//! ```
//! use neighbors_core::schema_util::{FieldKind, FieldSpec, RecordSchema};
//!
//! const FIELDS: &[FieldSpec] = &[
//!     FieldSpec::required("city", FieldKind::Text, "Name of the city."),
//!     FieldSpec::optional("inhabitants", FieldKind::Quantity, "Head count."),
//! ];
//! const CITY: RecordSchema = RecordSchema::new("city", FIELDS);
//!
//! let schema = CITY.response_schema().unwrap();
//! assert_eq!(schema["type"], "array");
//! assert_eq!(schema["items"]["required"][0], "city");
//! ```

use schemars::schema::{
    ArrayValidation, InstanceType, Metadata, ObjectValidation, Schema, SchemaObject,
};
use serde_json::Value;

use crate::error::Result;

/// How a field's JSON value is validated and coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string. Required text must not be blank.
    Text,
    /// A magnitude that the model may give as text ("39.5 million") or as a
    /// number (`39538223`).
    Quantity,
    /// A non-negative number, truncated toward zero to a `u32`.
    WholeNumber,
}

impl FieldKind {
    fn instance_type(self) -> InstanceType {
        match self {
            FieldKind::Text | FieldKind::Quantity => InstanceType::String,
            FieldKind::WholeNumber => InstanceType::Number,
        }
    }

    /// Description of the accepted values, used in error messages.
    pub fn expected(self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Quantity => "a string or a number",
            FieldKind::WholeNumber => "a non-negative whole number",
        }
    }
}

/// One property of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn required(key: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            key,
            kind,
            required: true,
            description,
        }
    }

    pub const fn optional(key: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            key,
            kind,
            required: false,
            description,
        }
    }

    fn to_schema(self) -> Schema {
        Schema::Object(SchemaObject {
            instance_type: Some(self.kind.instance_type().into()),
            metadata: Some(Box::new(Metadata {
                description: Some(self.description.to_owned()),
                ..Default::default()
            })),
            ..Default::default()
        })
    }
}

/// The declared shape of a single record in a structured reply.
///
/// The reply itself is always an array of such records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Look up a declared field by its JSON key.
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Iterate over the fields a record must carry.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.required)
    }

    /// Schema for a single record (a JSON object).
    pub fn item_schema(&self) -> SchemaObject {
        let mut object = ObjectValidation::default();
        for field in self.fields {
            object
                .properties
                .insert(field.key.to_owned(), field.to_schema());
            if field.required {
                object.required.insert(field.key.to_owned());
            }
        }

        let mut item = SchemaObject {
            instance_type: Some(InstanceType::Object.into()),
            object: Some(Box::new(object)),
            ..Default::default()
        };

        // `properties` is a sorted map; keep the declared order for the model.
        let ordering = self
            .fields
            .iter()
            .map(|field| Value::String(field.key.to_owned()))
            .collect();
        item.extensions
            .insert("propertyOrdering".to_owned(), Value::Array(ordering));

        item
    }

    /// JSON Schema for the whole reply: an array of [`Self::item_schema`].
    ///
    /// This is what gets attached to the model request as the response schema.
    pub fn response_schema(&self) -> Result<Value> {
        let array = SchemaObject {
            instance_type: Some(InstanceType::Array.into()),
            array: Some(Box::new(ArrayValidation {
                items: Some(Schema::Object(self.item_schema()).into()),
                ..Default::default()
            })),
            ..Default::default()
        };

        Ok(serde_json::to_value(Schema::Object(array))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("state_name", FieldKind::Text, "Name of the state."),
        FieldSpec::optional("population", FieldKind::Quantity, "Population."),
        FieldSpec::required("direction", FieldKind::Text, "Direction."),
        FieldSpec::optional("miles", FieldKind::WholeNumber, "Border length."),
    ];
    const SCHEMA: RecordSchema = RecordSchema::new("test", FIELDS);

    #[test]
    fn response_schema_is_an_array_of_objects() {
        let schema = SCHEMA.response_schema().unwrap();

        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"]["type"], "object");
        assert_eq!(schema["items"]["properties"]["state_name"]["type"], "string");
        assert_eq!(schema["items"]["properties"]["population"]["type"], "string");
        assert_eq!(schema["items"]["properties"]["miles"]["type"], "number");
        assert_eq!(
            schema["items"]["properties"]["direction"]["description"],
            "Direction."
        );
    }

    #[test]
    fn only_required_fields_are_listed_as_required() {
        let schema = SCHEMA.response_schema().unwrap();
        let mut required: Vec<&str> = schema["items"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        required.sort();

        assert_eq!(required, vec!["direction", "state_name"]);
    }

    #[test]
    fn property_ordering_follows_declaration() {
        let schema = SCHEMA.response_schema().unwrap();

        assert_eq!(
            schema["items"]["propertyOrdering"],
            serde_json::json!(["state_name", "population", "direction", "miles"])
        );
    }

    #[test]
    fn field_lookup() {
        assert_eq!(SCHEMA.field("miles").unwrap().kind, FieldKind::WholeNumber);
        assert!(SCHEMA.field("area").is_none());
        assert_eq!(SCHEMA.required_fields().count(), 2);
    }
}
