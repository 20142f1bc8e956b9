//! Neighboring-state domain types for the **neighbors** workspace.
//!
//! | Module        | What it provides                                                   |
//! |---------------|--------------------------------------------------------------------|
//! | [`outputs`]   | [`NeighborRecord`](outputs::neighbor::NeighborRecord) and its schema variants |
//! | [`prompt`]    | [`NeighborsPrompt`](prompt::NeighborsPrompt), the structured request |
//! | [`fragments`] | Reusable prompt fragments                                          |
//! | [`lookup`]    | The "state name in, records out" flow                              |
//! | [`render`]    | One-line-per-record rendering of a lookup outcome                  |
pub mod fragments;
pub mod lookup;
pub mod outputs;
pub mod prompt;
pub mod render;
