use serde::{Deserialize, Serialize};

/// Issued after login; the token rides every subsequent request as
/// `Authorization: Bearer <access_token>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: TokenType,
}

/// The contract admits exactly one scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    #[default]
    #[serde(rename = "Bearer")]
    Bearer,
}

pub const BEARER: &str = "Bearer";

impl AuthResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TokenType::Bearer,
        }
    }

    /// Value for the `Authorization` header of authenticated requests.
    pub fn authorization_value(&self) -> String {
        format!("{} {}", BEARER, self.access_token)
    }
}

impl TokenType {
    pub const VALUES: &'static [&'static str] = &[BEARER];

    pub fn parse(value: &str) -> Option<Self> {
        (value == BEARER).then_some(TokenType::Bearer)
    }

    pub const fn as_str(&self) -> &'static str {
        BEARER
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts the raw token from an `Authorization` header value, the inverse
/// of [`AuthResponse::authorization_value`].
pub fn parse_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}
