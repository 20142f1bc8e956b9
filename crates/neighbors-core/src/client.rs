//! Generic, lightweight client that executes a [`PromptTemplate`] against a
//! single concrete provider and decodes the structured reply.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that:
//! * The prompt’s `Message` type converts into what the backend expects.
//! * No dynamic dispatch or object-safety hurdles appear in user code.
//!
//! Any backend crate (e.g. `neighbors-vertex`) just implements
//! [`ChatCompletionProvider`] and the same client works out of the box.
use std::sync::Arc;

use tracing::debug;

use crate::{
    decode::{Decoded, ResponseDecoder},
    error::Result,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    template::{IntoPrompt, PromptTemplate},
};

/// A client bound to a single provider.
///
/// Clone the client if you need to share it; the backend sits behind an
/// `Arc`, so clones are cheap.
#[derive(Debug)]
pub struct NeighborsClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for NeighborsClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> NeighborsClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send `prompt` with its record schema attached and decode the reply.
    ///
    /// A reply without any text content decodes to an empty result, exactly
    /// like a request that was never made.
    pub async fn prompt_execute<P>(&self, prompt: P) -> Result<Decoded<P::Output>>
    where
        P: PromptTemplate,
        <P as IntoPrompt>::Message: Into<B::Message>,
    {
        let schema = prompt.record_schema();
        let policy = prompt.decode_policy();
        let temperature = prompt.temperature();

        let mut params = ChatCompleteParameters::new(prompt.into_prompt(), P::MODEL)
            .with_response_schema(schema.response_schema()?);
        if let Some(temperature) = temperature {
            params = params.with_temperature(temperature);
        }

        debug!(schema = schema.name, model = ?params.model, "executing structured prompt");
        let response = self.backend.chat_complete(params).await?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "provider usage"
            );
        }

        let decoded = ResponseDecoder::new(schema)
            .with_policy(policy)
            .decode(response.content.content.as_deref())?;

        Ok(decoded)
    }
}
