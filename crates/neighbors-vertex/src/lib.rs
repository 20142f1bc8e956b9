//! Vertex AI (Gemini) backend for the **neighbors** workspace.
//!
//! [`VertexAdapter`] implements
//! [`ChatCompletionProvider`](neighbors_core::provider::ChatCompletionProvider)
//! on top of the `generateContent` endpoint, forwarding the record schema as
//! `generationConfig.responseSchema` so the model answers with JSON.
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{VertexAdapter, VertexAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::VertexClient;
