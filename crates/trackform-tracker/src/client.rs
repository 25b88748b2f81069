//! Tracker REST API client
//!
//! Direct implementation of the project endpoints of the Tracker v5 API.
//! Authenticates with the `X-TrackerToken` header.

use crate::error::{Result, TrackerError};
use crate::model::{ApiErrorBody, CreateProjectRequest, Project, UpdateProjectRequest};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use trackform_config::ProviderSettings;

const TOKEN_HEADER: &str = "X-TrackerToken";

/// Remote project operations the project resource depends on
#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project>;

    async fn get_project(&self, id: i64) -> Result<Project>;

    async fn update_project(&self, id: i64, request: &UpdateProjectRequest) -> Result<Project>;

    async fn delete_project(&self, id: i64) -> Result<()>;
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub api_token: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl TrackerConfig {
    pub fn new(api_token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_url: api_url.into(),
            timeout: Duration::from_secs(trackform_config::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_settings(settings: ProviderSettings) -> Self {
        Self {
            api_token: settings.api_token,
            api_url: settings.api_url,
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    /// Resolve configuration from the environment and the user config file
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_settings(trackform_config::load_settings()?))
    }
}

/// Tracker API client
#[derive(Debug, Clone)]
pub struct TrackerClient {
    client: reqwest::Client,
    api_token: String,
    api_url: String,
}

impl TrackerClient {
    /// Create a new API client
    pub fn new(config: TrackerConfig) -> Result<Self> {
        if config.api_token.trim().is_empty() {
            return Err(TrackerError::InvalidConfig("api token is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            api_token: config.api_token,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn project_url(&self, id: i64) -> String {
        format!("{}/projects/{}", self.api_url, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.header(TOKEN_HEADER, &self.api_token).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_else(|_| ApiErrorBody {
            error: text.clone(),
            ..Default::default()
        });
        Err(TrackerError::Api {
            status: status.as_u16(),
            code: body.code.clone(),
            message: body.message(),
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ProjectApi for TrackerClient {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project> {
        let url = format!("{}/projects", self.api_url);
        tracing::debug!("POST {}", url);
        self.send_json(self.client.post(&url).json(request)).await
    }

    async fn get_project(&self, id: i64) -> Result<Project> {
        let url = self.project_url(id);
        tracing::debug!("GET {}", url);
        self.send_json(self.client.get(&url)).await
    }

    async fn update_project(&self, id: i64, request: &UpdateProjectRequest) -> Result<Project> {
        let url = self.project_url(id);
        tracing::debug!("PUT {}", url);
        self.send_json(self.client.put(&url).json(request)).await
    }

    async fn delete_project(&self, id: i64) -> Result<()> {
        let url = self.project_url(id);
        tracing::debug!("DELETE {}", url);
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }
}
