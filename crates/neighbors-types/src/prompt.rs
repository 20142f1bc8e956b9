//! The structured request sent to the model for one state.
//!
//! ```rust
//! use neighbors_core::template::IntoPrompt;
//! use neighbors_types::{outputs::neighbor::NeighborSchema, prompt::NeighborsPrompt};
//!
//! let messages = NeighborsPrompt::new("Utah", NeighborSchema::Population).into_prompt();
//!
//! assert_eq!(messages.len(), 2);
//! assert!(messages[1].content.as_deref().unwrap().starts_with("Given the Utah"));
//! ```

use neighbors_core::{
    generic::{GenericMessage, GenericRole},
    model::{GeminiModel, Model},
    schema_util::RecordSchema,
    template::{IntoPrompt, PromptTemplate},
};
use neighbors_prompt::{builder::PromptBuilder, chain::PromptChain};

use crate::{
    fragments::StaticFragment,
    outputs::neighbor::{NeighborRecord, NeighborSchema},
};

/// Ask for every US state bordering `state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborsPrompt {
    state: String,
    schema: NeighborSchema,
}

impl NeighborsPrompt {
    pub fn new(state: impl Into<String>, schema: NeighborSchema) -> Self {
        Self {
            state: state.into(),
            schema,
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn schema(&self) -> NeighborSchema {
        self.schema
    }

    /// The question as a single sentence.
    pub fn question(&self) -> String {
        let state = &self.state;
        let provide = match self.schema.attribute_clause(state) {
            Some(attribute) => format!(
                "Provide the name of the state, {attribute}, and the direction of that state from {state}."
            ),
            None => format!(
                "Provide the name of the state and the direction of that state from {state}."
            ),
        };

        format!("Given the {state}, find all US states that border {state}. {provide}")
    }

    fn system_role(&self) -> String {
        PromptBuilder::new()
            .add_section_h1("Role")
            .add_line("You are a United States geography assistant.")
            .add_blank_line()
            .add_bullet("Only list states that share a land border with the requested state.")
            .add_bullet("Give directions as compass points such as north, southeast or west.")
            .add_bullet("Reply with the JSON array described by the response schema and nothing else.")
            .add_blank_line()
            .add_key_value("Requested state", &self.state)
            .finalize()
    }
}

impl IntoPrompt for NeighborsPrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let system = self.system_role();
        let question = self.question();

        PromptChain::new()
            .with(StaticFragment::new(&system, GenericRole::System))
            .with(StaticFragment::new(&question, GenericRole::User))
            .build()
    }
}

impl PromptTemplate for NeighborsPrompt {
    type Output = NeighborRecord;
    const MODEL: Model = Model::Gemini(GeminiModel::Gemini15Flash002);

    fn record_schema(&self) -> &'static RecordSchema {
        self.schema.record_schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_question_matches_the_classic_wording() {
        let prompt = NeighborsPrompt::new("Ohio", NeighborSchema::Population);

        assert_eq!(
            prompt.question(),
            "Given the Ohio, find all US states that border Ohio. Provide the name of the \
             state, population of this state, and the direction of that state from Ohio."
        );
    }

    #[test]
    fn direction_question_asks_for_two_attributes() {
        let prompt = NeighborsPrompt::new("Maine", NeighborSchema::Direction);

        assert!(prompt.question().ends_with(
            "Provide the name of the state and the direction of that state from Maine."
        ));
    }

    #[test]
    fn border_question_mentions_miles() {
        let question = NeighborsPrompt::new("Utah", NeighborSchema::BorderLength).question();
        assert!(question.contains("length in miles of the border this state shares with Utah"));
    }

    #[test]
    fn messages_are_system_then_user() {
        let messages = NeighborsPrompt::new("Iowa", NeighborSchema::Direction).into_prompt();

        let roles: Vec<GenericRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![GenericRole::System, GenericRole::User]);
        assert!(
            messages[0]
                .content
                .as_deref()
                .unwrap()
                .contains("**Requested state**: Iowa")
        );
    }

    #[test]
    fn record_schema_follows_the_variant() {
        let prompt = NeighborsPrompt::new("Iowa", NeighborSchema::BorderLength);
        assert_eq!(prompt.record_schema().name, "neighbor_border_length");
    }
}
