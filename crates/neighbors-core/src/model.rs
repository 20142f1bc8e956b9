//! Model identifiers used throughout the **neighbors** workspace.
//!
//! The enum hierarchy keeps the *public* API simple while allowing each
//! provider crate to map the variants onto its own naming scheme.  You never
//! have to type literal strings such as `"gemini-1.5-flash-002"` in
//! application code; pick an enum variant and let the adapter translate it.
//!
//! # Adding more models
//!
//! 1. Add the variant to the provider-specific enum (`GeminiModel`, …).
//! 2. Update the mapping function in the provider crate
//!    (`neighbors-vertex::model_map::map_model`, etc.).
//! 3. The compiler will tell you if you forgot to handle the new variant.
//!
//! # Example
//!
//! ```rust
//! use neighbors_core::model::{Model, GeminiModel};
//! assert_eq!(Model::from(GeminiModel::Gemini15Flash002),
//!            Model::Gemini(GeminiModel::Gemini15Flash002));
//! ```

/// Universal identifier for a hosted model.
///
/// * `Gemini` – Enumerated list of Gemini models served by Vertex AI.
/// * `Custom` – Any model name not yet covered by a dedicated enum, e.g. a
///   preview or tuned model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Gemini models.
    Gemini(GeminiModel),
    /// Provider-specific model ID, passed through verbatim.
    Custom(&'static str),
}

/// Gemini models with structured-output (`responseSchema`) support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    Gemini15Flash002,
    Gemini15Pro002,
    Gemini20Flash,
    Gemini25Flash,
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}
