use std::fmt;

/// Basic-auth password sent alongside an API token.
pub const API_TOKEN_PASSWORD: &str = "api_token";

/// Credentials used for HTTP basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Personal API token, sent as `<token>:api_token`.
    ApiToken(String),
    /// Account email and password, sent as `<email>:<password>`.
    EmailPassword { email: String, password: String },
}

impl Credentials {
    pub fn api_token(token: impl Into<String>) -> Self {
        Self::ApiToken(token.into())
    }

    pub fn email_password(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::EmailPassword {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the `(username, password)` pair for basic auth.
    pub fn basic_auth(&self) -> (&str, &str) {
        match self {
            Self::ApiToken(token) => (token, API_TOKEN_PASSWORD),
            Self::EmailPassword { email, password } => (email, password),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiToken(_) => f.write_str("ApiToken(***)"),
            Self::EmailPassword { email, .. } => f
                .debug_struct("EmailPassword")
                .field("email", email)
                .field("password", &"***")
                .finish(),
        }
    }
}
