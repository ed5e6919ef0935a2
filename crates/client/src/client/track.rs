//! Track API v9 client.

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use toggl_core::{track, Credentials};

use super::{ApiClient, ClientBuilder, RawResponse, Transport};
use crate::config::Config;
use crate::context::Context;
use crate::error::{ClientError, Result, TrackError};

/// HTTP client for the Track API v9.
#[derive(Debug, Clone)]
pub struct TrackClient {
    transport: Transport,
}

impl ApiClient for TrackClient {
    const DEFAULT_BASE_URL: &'static str = track::DEFAULT_BASE_URL;

    fn from_transport(transport: Transport) -> Self {
        Self { transport }
    }
}

impl TrackClient {
    /// Create a client authenticating with an API token.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::builder(Credentials::api_token(api_token)).build()
    }

    pub fn builder(credentials: Credentials) -> ClientBuilder<Self> {
        ClientBuilder::new(credentials)
    }

    /// Create from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder(config.credentials())
            .base_url(config.track_url.clone())
            .http_client(config.http_client()?)
            .build()
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    pub(crate) async fn http_get<T: DeserializeOwned>(
        &self,
        ctx: Option<&Context>,
        path: &str,
    ) -> Result<T> {
        let request = self.transport.request(Method::GET, path, None);
        let response = self.transport.execute(ctx, request).await?;
        handle_response(response)
    }

    pub(crate) async fn http_post<B: Serialize, T: DeserializeOwned>(
        &self,
        ctx: Option<&Context>,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.transport.request(Method::POST, path, None).json(body);
        let response = self.transport.execute(ctx, request).await?;
        handle_response(response)
    }

    pub(crate) async fn http_put<B: Serialize, T: DeserializeOwned>(
        &self,
        ctx: Option<&Context>,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.transport.request(Method::PUT, path, None).json(body);
        let response = self.transport.execute(ctx, request).await?;
        handle_response(response)
    }

    pub(crate) async fn http_delete(&self, ctx: Option<&Context>, path: &str) -> Result<()> {
        let request = self.transport.request(Method::DELETE, path, None);
        let response = self.transport.execute(ctx, request).await?;
        handle_delete_response(response)
    }
}

/// Handle responses carrying a JSON body.
fn handle_response<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    if response.status.is_success() {
        serde_json::from_slice(&response.body).map_err(ClientError::from)
    } else {
        Err(error_from(response))
    }
}

/// Handle delete responses (no body expected).
fn handle_delete_response(response: RawResponse) -> Result<()> {
    if response.status.is_success() {
        Ok(())
    } else {
        Err(error_from(response))
    }
}

fn error_from(response: RawResponse) -> ClientError {
    let error = TrackError {
        status: response.status.as_u16(),
        message: String::from_utf8_lossy(&response.body).into_owned(),
        headers: response.headers,
    };
    tracing::warn!(
        status = error.status,
        message = %error.message.trim(),
        "Track API returned an error"
    );
    ClientError::Track(error)
}
