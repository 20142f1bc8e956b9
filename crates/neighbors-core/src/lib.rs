//! # `neighbors-core`
//!
//! Provider-agnostic building blocks for asking a hosted model for
//! **structured output** and decoding it into typed records:
//!
//! * [`schema_util`] – one [`RecordSchema`](schema_util::RecordSchema)
//!   declaration per record shape, rendered into the model's response schema.
//! * [`decode`] – the [`ResponseDecoder`](decode::ResponseDecoder) that turns
//!   the raw reply back into validated records.
//! * [`template`] / [`provider`] – the traits that connect prompts, models and
//!   backends.
//! * [`client`] – [`NeighborsClient`] gluing all of the above together.
pub mod client;
pub mod decode;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;

pub use client::NeighborsClient;
