//! Reports API v2 operations.
//!
//! Report responses are not modelled by this crate: callers pick the output
//! type and the body is decoded straight into it.

use reqwest::Method;
use serde::de::DeserializeOwned;
use toggl_core::reports::{
    self, DetailedRequestParameters, QueryParams, ReportRequest, ReportsError,
    SummaryRequestParameters, WeeklyRequestParameters,
};
use toggl_core::Credentials;

use super::{ApiClient, ClientBuilder, RawResponse, Transport};
use crate::config::Config;
use crate::context::Context;
use crate::error::{ClientError, Result};

/// HTTP client for the Reports API v2.
#[derive(Debug, Clone)]
pub struct ReportsClient {
    transport: Transport,
}

impl ApiClient for ReportsClient {
    const DEFAULT_BASE_URL: &'static str = reports::DEFAULT_BASE_URL;

    fn from_transport(transport: Transport) -> Self {
        Self { transport }
    }
}

impl ReportsClient {
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
            .base_url(config.reports_url.clone())
            .http_client(config.http_client()?)
            .build()
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Fetch the detailed report.
    pub async fn get_detailed<T: DeserializeOwned>(
        &self,
        ctx: Option<&Context>,
        params: &DetailedRequestParameters,
    ) -> Result<T> {
        self.get_report(ctx, params).await
    }

    /// Fetch the summary report.
    pub async fn get_summary<T: DeserializeOwned>(
        &self,
        ctx: Option<&Context>,
        params: &SummaryRequestParameters,
    ) -> Result<T> {
        self.get_report(ctx, params).await
    }

    /// Fetch the weekly report.
    pub async fn get_weekly<T: DeserializeOwned>(
        &self,
        ctx: Option<&Context>,
        params: &WeeklyRequestParameters,
    ) -> Result<T> {
        self.get_report(ctx, params).await
    }

    /// Fetch any report, sending `params` as the query string.
    pub async fn get_report<R, T>(&self, ctx: Option<&Context>, params: &R) -> Result<T>
    where
        R: ReportRequest,
        T: DeserializeOwned,
    {
        let query = params.url_encode();
        let request = self
            .transport
            .request(Method::GET, params.path(), Some(query.as_str()));
        let response = self.transport.execute(ctx, request).await?;
        handle_response(response)
    }
}

/// Decode a success body into `T`, anything else into a [`ReportsError`].
fn handle_response<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    if response.status.is_success() {
        return serde_json::from_slice(&response.body).map_err(ClientError::from);
    }

    let error = ReportsError::from_response(response.status.as_u16(), &response.body)?;
    tracing::warn!(
        status = response.status.as_u16(),
        message = %error.message,
        "Reports API returned an error"
    );
    Err(ClientError::Reports(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Totals {
        total_count: u32,
    }

    fn raw(status: StatusCode, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_success_decodes_into_output() {
        let totals: Totals =
            handle_response(raw(StatusCode::OK, r#"{"total_count": 3}"#)).unwrap();
        assert_eq!(totals, Totals { total_count: 3 });
    }

    #[test]
    fn test_success_with_invalid_json() {
        let result: Result<Totals> = handle_response(raw(StatusCode::OK, "not json"));
        assert!(matches!(result, Err(ClientError::Json(_))));
    }

    #[test]
    fn test_error_body_decoded() {
        let body = r#"{"error":{"message":"api token missing","tip":"see profile","code":401}}"#;
        let result: Result<Totals> = handle_response(raw(StatusCode::UNAUTHORIZED, body));
        match result {
            Err(ClientError::Reports(error)) => {
                assert_eq!(error.code, 401);
                assert_eq!(error.message, "api token missing");
                assert_eq!(error.tip, "see profile");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_redirect_is_not_success() {
        let body = r#"{"error":{"message":"moved","tip":"","code":301}}"#;
        let result: Result<Totals> = handle_response(raw(StatusCode::MOVED_PERMANENTLY, body));
        assert_eq!(result.unwrap_err().status(), Some(301));
    }
}
