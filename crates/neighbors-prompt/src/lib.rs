//! Helpers for composing prompts: [`builder::PromptBuilder`] for markdown
//! text and [`chain::PromptChain`] for lining up message fragments.
pub mod builder;
pub mod chain;
