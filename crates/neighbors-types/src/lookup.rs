//! The whole "state name in, records out" flow.
//!
//! An absent or blank state means the user hasn't typed anything yet: no
//! request is sent and the outcome is simply empty.

use neighbors_core::{
    client::NeighborsClient,
    decode::{Decoded, ResponseDecoder},
    error::Result,
    generic::GenericMessage,
    provider::ChatCompletionProvider,
};
use tracing::debug;

use crate::{
    outputs::neighbor::{NeighborRecord, NeighborSchema},
    prompt::NeighborsPrompt,
};

/// Ask the model behind `client` for the neighbors of `users_state`.
pub async fn find_neighbors<B>(
    client: &NeighborsClient<B>,
    users_state: Option<&str>,
    schema: NeighborSchema,
) -> Result<Decoded<NeighborRecord>>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    let Some(state) = users_state.map(str::trim).filter(|s| !s.is_empty()) else {
        debug!("no state entered, skipping the model call");
        return Ok(ResponseDecoder::new(schema.record_schema()).decode(None)?);
    };

    debug!(state, %schema, "looking up neighboring states");
    client
        .prompt_execute(NeighborsPrompt::new(state, schema))
        .await
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        pin::Pin,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use neighbors_core::{
        error::{DecodeError, NeighborsError},
        generic::{GenericChatCompletionResponse, GenericRole},
        provider::ChatCompleteParameters,
    };

    use super::*;

    struct ScriptedModel {
        reply: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl ChatCompletionProvider for ScriptedModel {
        type Message = GenericMessage;

        fn chat_complete<'p, M>(
            &self,
            _params: ChatCompleteParameters<M>,
        ) -> Pin<
            Box<
                dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>>
                    + Send
                    + 'p,
            >,
        >
        where
            M: Into<Self::Message> + Send + Sync + 'p,
        {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = self.reply;

            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    content: GenericMessage::new(reply.to_owned(), GenericRole::Assistant),
                    usage: None,
                })
            })
        }
    }

    fn client(reply: &'static str) -> (NeighborsClient<ScriptedModel>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let model = ScriptedModel {
            reply,
            calls: Arc::clone(&calls),
        };
        (NeighborsClient::new(model), calls)
    }

    #[tokio::test]
    async fn absent_or_blank_state_makes_no_call() {
        let (client, calls) = client("[]");

        for state in [None, Some(""), Some("   ")] {
            let outcome = find_neighbors(&client, state, NeighborSchema::Population)
                .await
                .unwrap();
            assert!(outcome.is_empty());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn keeps_valid_records_from_a_partially_valid_reply() {
        let (client, calls) =
            client(r#"[{"state_name":"Texas","direction":"south"}, {"direction":"north"}]"#);

        let outcome = find_neighbors(&client, Some("Oklahoma"), NeighborSchema::Direction)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name(), "Texas");
        assert_eq!(outcome.rejected.len(), 1);
    }

    #[tokio::test]
    async fn wrong_shape_is_reported() {
        let (client, _) = client(r#"{"a": 1}"#);

        let err = find_neighbors(&client, Some("Kansas"), NeighborSchema::Direction)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            NeighborsError::Decode(DecodeError::SchemaMismatch { .. })
        ));
    }
}
