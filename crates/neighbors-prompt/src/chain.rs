//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](neighbors_core::template::IntoPrompt).
//!
//! ```text
//! ┌────────────────┐   IntoPrompt    ┌──────────────┐
//! │ StaticFragment │ ───────────────►│ Vec<Message> │
//! ├────────────────┤                 ├──────────────┤
//! │ GenericMessage │ ───────────────►│ Vec<Message> │
//! └────────────────┘                 └──────────────┘
//!            ▲                               │
//!            └────── PromptChain::build() ◄──┘
//! ```
//!
//! A request to the model is usually a role description followed by the
//! actual question.  `PromptChain` lines these fragments up in order
//! without mutable vectors or verbose `extend()` calls.
//!
//! ```rust
//! use neighbors_prompt::chain::PromptChain;
//! use neighbors_core::generic::{GenericMessage, GenericRole};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(GenericMessage::new("You are a geography tutor.".into(), GenericRole::System))
//!     .with(GenericMessage::new("Which states border Utah?".into(), GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use neighbors_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The `Vec` is private so the only way to obtain the result is through
/// [`Self::build`].
#[derive(Debug)]
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
