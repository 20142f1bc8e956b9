use std::{env, sync::Arc};

use neighbors_core::error::{NeighborsError, Result};

use crate::client::VertexClient;

pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";
pub const LOCATION_ENV: &str = "GOOGLE_CLOUD_LOCATION";
pub const ACCESS_TOKEN_ENV: &str = "VERTEX_ACCESS_TOKEN";
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Thin wrapper that wires the HTTP client [`VertexClient`] into a value that
/// implements [`neighbors_core::provider::ChatCompletionProvider`].
///
/// All user-facing functionality sits on the generic
/// [`neighbors_core::NeighborsClient`] once the adapter is plugged in.
pub struct VertexAdapter {
    pub(crate) client: Arc<VertexClient>,
}

impl VertexAdapter {
    pub fn client(&self) -> &VertexClient {
        &self.client
    }
}

/// Builder for [`VertexAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use neighbors_vertex::VertexAdapterBuilder;
///
/// // Needs GOOGLE_CLOUD_PROJECT and VERTEX_ACCESS_TOKEN
/// // (e.g. from `gcloud auth print-access-token`).
/// let backend = VertexAdapterBuilder::new_from_env().build()?;
/// # Ok::<(), neighbors_core::error::NeighborsError>(())
/// ```
#[derive(Default, Clone)]
pub struct VertexAdapterBuilder {
    pub(crate) project_id: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) access_token: Option<String>,
    pub(crate) endpoint: Option<String>,
}

impl VertexAdapterBuilder {
    /// Create an *empty* builder. Remember to supply project and token manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `GOOGLE_CLOUD_PROJECT`, `GOOGLE_CLOUD_LOCATION` and
    /// `VERTEX_ACCESS_TOKEN` from the environment.
    ///
    /// Never fails. Missing values only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            project_id: env::var(PROJECT_ENV).ok(),
            location: env::var(LOCATION_ENV).ok(),
            access_token: env::var(ACCESS_TOKEN_ENV).ok(),
            endpoint: None,
        }
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Use `endpoint` (everything before `/publishers/...`) instead of the
    /// regional Vertex AI URL. Project and location are then ignored.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// The base URL requests will be sent to.
    ///
    /// # Errors
    ///
    /// * [`NeighborsError::Invalid`] – if neither an endpoint nor a project is set.
    pub fn base_url(&self) -> Result<String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }

        let project = self.project_id.as_deref().ok_or_else(|| missing(PROJECT_ENV))?;
        let location = self.location.as_deref().unwrap_or(DEFAULT_LOCATION);
        Ok(VertexClient::regional_base_url(project, location))
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`NeighborsError::Invalid`] – if the access token or project is missing.
    pub fn build(self) -> Result<VertexAdapter> {
        let base_url = self.base_url()?;
        let access_token = self.access_token.ok_or_else(|| missing(ACCESS_TOKEN_ENV))?;

        let client = VertexClient::new(access_token, base_url)?;

        Ok(VertexAdapter {
            client: Arc::new(client),
        })
    }
}

fn missing(variable: &str) -> NeighborsError {
    NeighborsError::Invalid(format!("missing env variable: `{variable}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_is_reported() {
        let err = VertexAdapterBuilder::new()
            .with_access_token("token")
            .build()
            .err()
            .unwrap();

        assert!(err.to_string().contains(PROJECT_ENV));
    }

    #[test]
    fn missing_token_is_reported() {
        let err = VertexAdapterBuilder::new()
            .with_project_id("geo-demo")
            .build()
            .err()
            .unwrap();

        assert!(err.to_string().contains(ACCESS_TOKEN_ENV));
    }

    #[test]
    fn location_defaults_to_us_central1() {
        let base = VertexAdapterBuilder::new()
            .with_project_id("geo-demo")
            .base_url()
            .unwrap();

        assert_eq!(
            base,
            "https://us-central1-aiplatform.googleapis.com/v1/projects/geo-demo/locations/us-central1"
        );
    }

    #[test]
    fn endpoint_override_wins() {
        let adapter = VertexAdapterBuilder::new()
            .with_endpoint("http://127.0.0.1:9999/v1")
            .with_access_token("token")
            .build()
            .unwrap();

        assert_eq!(adapter.client().base_url(), "http://127.0.0.1:9999/v1");
    }
}
