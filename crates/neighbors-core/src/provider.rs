use std::{future::Future, pin::Pin};

use serde_json::Value;

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    model::Model,
};

/// A **backend** turns a chat prompt into a network call to a concrete provider
/// (Vertex AI, …) and returns the assistant's reply.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
/// without pulling in `async_trait`.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    ///
    /// A simple setup can re-use [`GenericMessage`].
    type Message: Send + Sync + 'static;

    /// Execute the chat prompt and return the assistant message.
    ///
    /// When `params.response_schema` is set the provider must request
    /// structured (JSON) output conforming to it.
    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Send + Sync + 'p;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub response_schema: Option<Value>,
}

impl<M> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            response_schema: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_response_schema(mut self, response_schema: Value) -> Self {
        self.response_schema = Some(response_schema);
        self
    }
}
