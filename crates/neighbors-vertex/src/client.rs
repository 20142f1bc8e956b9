use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::debug;

use crate::{
    api_v1::{GenerateContentRequest, GenerateContentResponse},
    error::VertexError,
};

/// Minimal HTTP client for Vertex AI’s *generateContent* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `VertexClient` is cheap.
#[derive(Clone)]
pub struct VertexClient {
    access_token: String,
    http: HttpClient,
    base: String,
}

impl VertexClient {
    /// Regional endpoint for `project` in `location`, e.g.
    /// `https://us-central1-aiplatform.googleapis.com/v1/projects/p/locations/us-central1`.
    pub fn regional_base_url(project: &str, location: &str) -> String {
        format!("https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}")
    }

    /// Convenience constructor building a default `reqwest` client with a
    /// 30 s timeout.
    pub fn new(access_token: impl Into<String>, base_url: impl Into<String>) -> Result<Self, VertexError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self::with_http(access_token, http, base_url))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        access_token: impl Into<String>,
        http: HttpClient,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        Self {
            access_token: access_token.into(),
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Endpoint that serves `model`.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/publishers/google/models/{model}:generateContent", self.base)
    }

    /// Perform a **non-streaming** `generateContent` call.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, VertexError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.access_token))?,
        );

        let url = self.generate_content_url(model);
        debug!(%url, "sending generateContent request");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(VertexError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_model_urls() {
        let client = VertexClient::with_http(
            "token",
            HttpClient::new(),
            VertexClient::regional_base_url("geo-demo", "us-central1"),
        );

        assert_eq!(
            client.generate_content_url("gemini-1.5-flash-002"),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/geo-demo/locations/us-central1/publishers/google/models/gemini-1.5-flash-002:generateContent"
        );
    }

    #[test]
    fn trailing_slash_is_dropped_from_custom_endpoints() {
        let client = VertexClient::with_http("token", HttpClient::new(), "http://localhost:8080/v1/");
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }
}
