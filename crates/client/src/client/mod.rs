//! HTTP clients for the Toggl APIs.
//!
//! Both clients share one pipeline: build the URL, attach basic auth and the
//! default headers, then send and read the body under a [`Context`]. Status
//! handling is API specific and lives next to each client.

pub mod reports;
pub mod tags;
pub mod track;

use std::marker::PhantomData;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use toggl_core::Credentials;
use url::Url;

use crate::context::Context;
use crate::error::{ClientError, Result};

/// A client that can be built from a configured [`Transport`].
pub trait ApiClient: Sized {
    /// Base URL used when none is configured.
    const DEFAULT_BASE_URL: &'static str;

    fn from_transport(transport: Transport) -> Self;
}

/// Shared request machinery: immutable once built.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    headers: HeaderMap,
}

/// Status, headers and body of a completed round trip.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Transport {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Build a URL for an endpoint, replacing the base URL's path.
    pub(crate) fn url(&self, path: &str, query: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(query);
        url
    }

    /// Start an authenticated request carrying the default headers.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
    ) -> RequestBuilder {
        let (username, password) = self.credentials.basic_auth();
        self.http
            .request(method, self.url(path, query))
            .basic_auth(username, Some(password))
            .headers(self.headers.clone())
    }

    /// Send a request and read the whole response body under `ctx`.
    pub(crate) async fn execute(
        &self,
        ctx: Option<&Context>,
        request: RequestBuilder,
    ) -> Result<RawResponse> {
        let ctx = ctx.ok_or(ClientError::ContextRequired)?;
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!(%method, %path, "Sending request");

        let response = ctx
            .run(async {
                let response = self.http.execute(request).await?;
                let status = response.status();
                let headers = response.headers().clone();
                let body = response.bytes().await?.to_vec();
                Ok::<_, ClientError>(RawResponse {
                    status,
                    headers,
                    body,
                })
            })
            .await?;

        tracing::debug!(
            %method,
            %path,
            status = response.status.as_u16(),
            "Received response"
        );
        Ok(response)
    }
}

/// Builder shared by [`ReportsClient`](reports::ReportsClient) and
/// [`TrackClient`](track::TrackClient).
pub struct ClientBuilder<C> {
    credentials: Credentials,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
    headers: Vec<(String, String)>,
    client: PhantomData<C>,
}

impl<C: ApiClient> ClientBuilder<C> {
    pub(crate) fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: None,
            http_client: None,
            headers: Vec::new(),
            client: PhantomData,
        }
    }

    /// Override the API base URL (e.g. to point at a test server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a preconfigured HTTP client instead of `reqwest::Client::new()`.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<C> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(C::DEFAULT_BASE_URL))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
            headers.insert(header_name, header_value);
        }

        Ok(C::from_transport(Transport {
            http: self.http_client.unwrap_or_default(),
            base_url,
            credentials: self.credentials,
            headers,
        }))
    }
}
