//! Abstractions that tie a **prompt** to a concrete **model** and a **typed
//! record shape**.
//!
//! A developer usually needs only two traits to go from “some string
//! fragments” to “typed records”:
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the target model, the record type and the
//!    [`RecordSchema`] that is both sent to the model and used to decode its
//!    reply.
//!
//! ```rust
//! use neighbors_core::decode::{DecodeRecord, RecordFields};
//! use neighbors_core::error::FieldError;
//! use neighbors_core::generic::{GenericMessage, GenericRole};
//! use neighbors_core::model::{GeminiModel, Model};
//! use neighbors_core::schema_util::{FieldKind, FieldSpec, RecordSchema};
//! use neighbors_core::template::{IntoPrompt, PromptTemplate};
//!
//! struct Capital { name: String }
//!
//! impl DecodeRecord for Capital {
//!     fn from_fields(mut fields: RecordFields) -> Result<Self, FieldError> {
//!         Ok(Capital { name: fields.text("name")? })
//!     }
//! }
//!
//! const CAPITAL: RecordSchema = RecordSchema::new(
//!     "capital",
//!     &[FieldSpec::required("name", FieldKind::Text, "Capital city.")],
//! );
//!
//! struct CapitalsPrompt;
//!
//! impl IntoPrompt for CapitalsPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("List the New England capitals.".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for CapitalsPrompt {
//!     type Output = Capital;
//!     const MODEL: Model = Model::Gemini(GeminiModel::Gemini15Flash002);
//!     fn record_schema(&self) -> &'static RecordSchema { &CAPITAL }
//! }
//! ```
use crate::{
    decode::{DecodePolicy, DecodeRecord},
    model::Model,
    schema_util::RecordSchema,
};

/// High-level description of a prompt.
///
/// Implement this trait **in addition** to [`IntoPrompt`] to specify:
///
/// * `Output` – the record type each element of the reply decodes into.
/// * `MODEL`  – the identifier of the model that should handle the request.
/// * [`Self::record_schema`] – the declared shape of one reply element.
pub trait PromptTemplate: IntoPrompt {
    /// Record produced for every valid element of the reply.
    type Output: DecodeRecord;

    /// Logical model identifier.  The back-end will map this to its own naming
    /// scheme (`"gemini-1.5-flash-002"`, …).
    const MODEL: Model;

    /// Schema sent to the model and used to decode the reply.
    fn record_schema(&self) -> &'static RecordSchema;

    /// How invalid reply elements are handled.
    fn decode_policy(&self) -> DecodePolicy {
        DecodePolicy::default()
    }

    /// Sampling temperature, if the prompt wants to pin one.
    fn temperature(&self) -> Option<f64> {
        None
    }
}

/// Converts a value into a series of chat messages.
///
/// Provider crates typically use [`crate::generic::GenericMessage`], but a
/// back-end can require its own richer struct.  By making the `Message` type
/// an **associated type** we keep the trait flexible without resorting to
/// dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// Convenience implementation so a single [`crate::generic::GenericMessage`]
/// can be chained without wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
