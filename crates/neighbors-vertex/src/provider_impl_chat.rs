use std::{future::Future, pin::Pin, sync::Arc};

use neighbors_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use serde_json::Value;
use tracing::debug;

use crate::{
    VertexAdapter,
    api_v1::{FinishReason, GenerateContentRequest, GenerateContentResponse, GenerationConfig},
    error::VertexError,
    model_map::map_model,
};

impl ChatCompletionProvider for VertexAdapter {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(&params.model);
            let messages = params.messages.into_iter().map(Into::into).collect();

            let config = generation_config(params.response_schema, params.temperature);
            let request = GenerateContentRequest::from_messages(messages)?
                .with_generation_config(config);

            let response = client.generate_content(&model, &request).await?;
            debug!(
                model = %model,
                model_version = response.model_version.as_deref().unwrap_or_default(),
                "generateContent finished"
            );

            Ok(into_generic_response(response)?)
        })
    }
}

/// JSON mode when a schema is given, with the sampling temperature on top.
fn generation_config(response_schema: Option<Value>, temperature: Option<f64>) -> GenerationConfig {
    let mut config = match response_schema {
        Some(schema) => GenerationConfig::structured(schema),
        None => GenerationConfig::default(),
    };
    if let Some(temperature) = temperature {
        config = config.temperature(temperature);
    }
    config
}

/// Take the first candidate's text as the assistant reply.
fn into_generic_response(
    mut response: GenerateContentResponse,
) -> std::result::Result<GenericChatCompletionResponse<GenericMessage>, VertexError> {
    let usage = response.usage_metadata.map(|usage| GenericUsageReport {
        prompt_tokens: usage.prompt_token_count,
        completion_tokens: usage.candidates_token_count,
        total_tokens: usage.total_token_count,
    });

    if response.candidates.is_empty() {
        return Err(VertexError::Format("response has no candidates".into()));
    }
    let candidate = response.candidates.swap_remove(0);

    match candidate.finish_reason {
        None | Some(FinishReason::Stop) | Some(FinishReason::FinishReasonUnspecified) => {
            Ok(GenericChatCompletionResponse {
                content: GenericMessage {
                    content: candidate.content.and_then(|content| content.text()),
                    role: GenericRole::Assistant,
                    name: None,
                },
                usage,
            })
        }
        Some(other) => Err(VertexError::Format(format!(
            "unhandled finish reason on API: {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use neighbors_core::model::{GeminiModel, Model};
    use serde_json::json;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    use super::*;
    use crate::VertexAdapterBuilder;

    fn parse(body: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn first_candidate_becomes_the_reply() {
        let response = parse(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "[]"}]}, "finishReason": "STOP"},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}, "finishReason": "STOP"}
            ],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 2, "totalTokenCount": 12}
        }));

        let reply = into_generic_response(response).unwrap();

        assert_eq!(reply.content.content.as_deref(), Some("[]"));
        assert_eq!(reply.content.role, GenericRole::Assistant);
        assert_eq!(
            reply.usage,
            Some(GenericUsageReport {
                prompt_tokens: 10,
                completion_tokens: 2,
                total_tokens: 12,
            })
        );
    }

    #[test]
    fn no_candidates_is_a_format_error() {
        let err = into_generic_response(parse(json!({"candidates": []}))).unwrap_err();
        assert!(matches!(err, VertexError::Format(_)));
    }

    #[test]
    fn blocked_reply_is_a_format_error() {
        let err = into_generic_response(parse(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .unwrap_err();

        assert!(err.to_string().contains("Safety"));
    }

    #[test]
    fn candidate_without_content_has_no_text() {
        let reply = into_generic_response(parse(json!({
            "candidates": [{"finishReason": "STOP"}]
        })))
        .unwrap();

        assert_eq!(reply.content.content, None);
    }

    #[test]
    fn schema_and_temperature_share_one_generation_config() {
        let schema = json!({"type": "array", "items": {"type": "object"}});

        let config = generation_config(Some(schema.clone()), Some(0.2));

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "temperature": 0.2,
                "responseMimeType": "application/json",
                "responseSchema": schema,
            })
        );
    }

    #[test]
    fn plain_generation_config_stays_empty() {
        let config = generation_config(None, None);
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({}));
    }

    /// Accept one HTTP/1.1 request, answer it with `reply` and hand back the
    /// raw request text.
    async fn serve_once(reply: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);

                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some((head, body)) = text.split_once("\r\n\r\n") {
                    let length = head
                        .lines()
                        .find_map(|line| {
                            line.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|value| value.trim().to_owned())
                        })
                        .and_then(|value| value.parse::<usize>().ok())
                        .unwrap_or(0);
                    if body.len() >= length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{reply}",
                reply.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8(raw).unwrap()
        });

        (format!("http://{addr}/v1"), handle)
    }

    #[tokio::test]
    async fn chat_complete_posts_structured_request() {
        let (endpoint, server) = serve_once(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"[]"}]},"finishReason":"STOP"}]}"#,
        )
        .await;
        let adapter = VertexAdapterBuilder::new()
            .with_endpoint(endpoint)
            .with_access_token("secret")
            .build()
            .unwrap();
        let schema = json!({"type": "array"});
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::new("Which states border Utah?".into(), GenericRole::User)],
            Model::Gemini(GeminiModel::Gemini15Flash002),
        )
        .with_response_schema(schema.clone())
        .with_temperature(0.0);

        let reply = adapter.chat_complete(params).await.unwrap();
        assert_eq!(reply.content.content.as_deref(), Some("[]"));

        let request = server.await.unwrap();
        let (head, body) = request.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with(
            "POST /v1/publishers/google/models/gemini-1.5-flash-002:generateContent HTTP/1.1"
        ));
        assert!(head.to_ascii_lowercase().contains("authorization: bearer secret"));

        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Which states border Utah?");
        assert_eq!(
            body["generationConfig"],
            json!({
                "temperature": 0.0,
                "responseMimeType": "application/json",
                "responseSchema": schema,
            })
        );
    }
}
