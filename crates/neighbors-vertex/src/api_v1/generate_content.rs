//! Wire types for the Vertex AI `generateContent` endpoint.
//!
//! Only the subset needed for single-turn structured output is modelled;
//! unknown response fields are ignored.

use neighbors_core::generic::{GenericMessage, GenericRole};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::VertexError, impl_builder_methods};

use super::common::UsageMetadata;

pub const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Split generic chat messages into `systemInstruction` and `contents`.
    ///
    /// Consecutive system messages are merged into one instruction with one
    /// part each. At least one user or assistant message is required.
    pub fn from_messages(messages: Vec<GenericMessage>) -> Result<Self, VertexError> {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in messages {
            let Some(text) = message.content else {
                continue;
            };
            let role = match message.role {
                GenericRole::System => {
                    system_parts.push(Part::text(text));
                    continue;
                }
                GenericRole::User => ContentRole::User,
                GenericRole::Assistant => ContentRole::Model,
            };
            contents.push(Content {
                role: Some(role),
                parts: vec![Part::text(text)],
            });
        }

        if contents.is_empty() {
            return Err(VertexError::Format(
                "request needs at least one user or assistant message".into(),
            ));
        }

        let system_instruction = (!system_parts.is_empty()).then_some(Content {
            role: None,
            parts: system_parts,
        });

        Ok(Self {
            contents,
            system_instruction,
            generation_config: None,
        })
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    User,
    Model,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ContentRole>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// All text parts joined together, if there are any.
    pub fn text(&self) -> Option<String> {
        let mut texts = self.parts.iter().filter_map(|part| part.text.as_deref()).peekable();
        texts.peek()?;
        Some(texts.collect())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

impl_builder_methods!(
    GenerationConfig,
    temperature: f64,
    max_output_tokens: i64,
    response_mime_type: String,
    response_schema: Value
);

impl GenerationConfig {
    /// Constrain the reply to JSON matching `schema`.
    pub fn structured(schema: Value) -> Self {
        Self::default()
            .response_mime_type(JSON_MIME_TYPE.to_owned())
            .response_schema(schema)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<FinishReason>,
    #[serde(default)]
    pub index: i64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    FinishReasonUnspecified,
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Blocklist,
    ProhibitedContent,
    Spii,
    Other,
    #[serde(other)]
    Unknown,
}
