//! # `neighbors` – The umbrella crate
//!
//! Ask a hosted model which US states border a given state, request the
//! answer as **structured output**, and decode it into typed records.
//!
//! | Crate                  | What it provides                                                          |
//! |------------------------|---------------------------------------------------------------------------|
//! | **`neighbors-core`**   | Record schemas, the response decoder, provider traits, client, errors     |
//! | **`neighbors-prompt`** | Helpers for building and chaining prompt fragments                        |
//! | **`neighbors-types`**  | `NeighborRecord`, schema variants, the prompt, lookup flow and rendering   |
//! | **`neighbors-vertex`** | Vertex AI (Gemini) adapter implementing the provider trait *(optional)*   |
//!
//! The `vertex` Cargo feature (on by default) re-exports the adapter crate
//! so a single dependency line is enough to access the whole stack.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use neighbors::{
//!     NeighborsClient,
//!     types::{lookup::find_neighbors, outputs::neighbor::NeighborSchema, render::render_outcome},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = neighbors::vertex::VertexAdapterBuilder::new_from_env().build()?;
//!     let client = NeighborsClient::new(backend);
//!
//!     let outcome = find_neighbors(&client, Some("Nevada"), NeighborSchema::BorderLength).await;
//!     for line in render_outcome(Some("Nevada"), &outcome) {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/neighbors/latest")]

pub use neighbors_core::*;
pub use neighbors_prompt as prompt;
pub use neighbors_types as types;

#[cfg(feature = "vertex")]
pub use neighbors_vertex as vertex;
