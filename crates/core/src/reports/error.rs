use serde::Deserialize;
use thiserror::Error;

/// Error returned by the Reports API on an unsuccessful request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP Status: {code}\n{message}\n\n{tip}\n")]
pub struct ReportsError {
    pub message: String,
    /// Hint on how to fix the request.
    pub tip: String,
    /// HTTP status code of the response.
    pub code: u16,
}

/// Wire shape: `{"error": {"message": .., "tip": .., "code": ..}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    tip: String,
    code: Option<u16>,
}

impl ReportsError {
    /// The API answers rate limiting with an HTML page instead of JSON.
    pub fn too_many_requests() -> Self {
        Self {
            message: "Too Many Requests".to_string(),
            tip: "Add delay between requests".to_string(),
            code: 429,
        }
    }

    /// Decode the error body of a non-2xx response.
    ///
    /// A missing `code` falls back to the HTTP status.
    pub fn from_response(status: u16, body: &[u8]) -> Result<Self, serde_json::Error> {
        if status == 429 {
            return Ok(Self::too_many_requests());
        }

        let envelope: ErrorEnvelope = serde_json::from_slice(body)?;
        Ok(Self {
            message: envelope.error.message,
            tip: envelope.error.tip,
            code: envelope.error.code.unwrap_or(status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_unauthorized() {
        let body = br#"{"error":{"message":"api token missing","tip":"You can find your API Token in your profile at https://www.toggl.com","code":401}}"#;
        let error = ReportsError::from_response(401, body).unwrap();
        assert_eq!(
            error,
            ReportsError {
                message: "api token missing".to_string(),
                tip: "You can find your API Token in your profile at https://www.toggl.com"
                    .to_string(),
                code: 401,
            }
        );
    }

    #[test]
    fn test_missing_code_uses_status() {
        let body = br#"{"error":{"message":"bad"}}"#;
        let error = ReportsError::from_response(400, body).unwrap();
        assert_eq!(error.code, 400);
        assert_eq!(error.tip, "");
    }

    #[test]
    fn test_too_many_requests_ignores_html_body() {
        let body = b"<html><body>Too Many Requests</body></html>";
        assert_eq!(
            ReportsError::from_response(429, body).unwrap(),
            ReportsError::too_many_requests()
        );
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        assert!(ReportsError::from_response(500, b"<html></html>").is_err());
    }

    #[test]
    fn test_display() {
        let error = ReportsError {
            message: "api token missing".to_string(),
            tip: "check your profile".to_string(),
            code: 401,
        };
        assert_eq!(
            error.to_string(),
            "HTTP Status: 401\napi token missing\n\ncheck your profile\n"
        );
    }
}
