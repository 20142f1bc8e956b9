//! # Find your neighboring states
//!
//! Reads a state name (and optionally a schema variant) from the command
//! line, asks Gemini on Vertex AI for its neighbors with a JSON response
//! schema, and prints one line per decoded record.
//!
//! ```bash
//! export GOOGLE_CLOUD_PROJECT=my-project
//! export VERTEX_ACCESS_TOKEN=$(gcloud auth print-access-token)
//! cargo run -p neighbors --example vertex_neighbors -- Nevada border-length
//! ```
//!
//! Expected output (truncated):
//!
//! ```text
//! The neighboring states of **Nevada** are:
//! Oregon, located to the north of Nevada, share a border 155 miles long.
//! California, located to the west of Nevada, share a border 611 miles long.
//! ```
//!
//! Set `RUST_LOG=debug` to see the request and decode summaries.

use neighbors::{
    NeighborsClient,
    types::{lookup::find_neighbors, outputs::neighbor::NeighborSchema, render::render_outcome},
    vertex::VertexAdapterBuilder,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let users_state = args.next();
    let schema: NeighborSchema = match args.next() {
        Some(name) => name.parse().map_err(anyhow::Error::msg)?,
        None => NeighborSchema::default(),
    };

    let backend = VertexAdapterBuilder::new_from_env().build()?;
    let client = NeighborsClient::new(backend);

    let outcome = find_neighbors(&client, users_state.as_deref(), schema).await;
    for line in render_outcome(users_state.as_deref(), &outcome) {
        println!("{line}");
    }

    Ok(())
}
