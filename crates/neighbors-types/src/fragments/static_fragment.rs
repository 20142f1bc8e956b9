//! A minimal fragment that injects a borrowed string into the prompt.
//!
//! Use this for text that is already assembled (the user's question, a fixed
//! notice …) and only needs a chat role attached.
//!
//! ```rust
//! use neighbors_types::fragments::StaticFragment;
//! use neighbors_core::generic::GenericRole;
//!
//! let question = StaticFragment::new(
//!     "Which states border Vermont?",
//!     GenericRole::User,
//! );
//! ```
//!
//! The `From<&str>` impl defaults to `GenericRole::System` since system
//! messages are the most common fixed fragments.

use neighbors_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A borrowed string bundled with a chat role.
pub struct StaticFragment<'a>((&'a str, GenericRole));

impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, GenericRole::System))
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let (text, role) = self.0;
        vec![GenericMessage::new(text.to_owned(), role)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_defaults_to_system() {
        let messages = StaticFragment::from("be terse").into_prompt();

        assert_eq!(
            messages,
            vec![GenericMessage::new("be terse".into(), GenericRole::System)]
        );
    }

    #[test]
    fn keeps_explicit_role() {
        let messages = StaticFragment::new("hi", GenericRole::User).into_prompt();
        assert_eq!(messages[0].role, GenericRole::User);
    }
}
