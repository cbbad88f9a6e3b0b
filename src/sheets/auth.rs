//! Service-account credentials and OAuth bearer tokens.
//!
//! A service account signs a short-lived RS256 JWT with its private key and
//! trades it at the token endpoint for an access token scoped to
//! `spreadsheets.readonly`. Tokens are reused per client email until shortly
//! before they expire.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fmt,
    path::Path,
    sync::Mutex,
    time::{Duration, Instant},
};

use crate::core::try_read_to_string;
use crate::sheets::types::TokenResponse;
use crate::{LeagueError, Result, SERVICE_ACCOUNT_ENV_VAR};

/// Read-only Sheets scope requested for service-account tokens.
pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// Google's OAuth2 token endpoint.
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

fn default_token_uri() -> String {
    GOOGLE_TOKEN_URL.to_string()
}

/// The fields of a Google service-account key file that token exchange needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LeagueError::InvalidServiceAccount {
            message: e.to_string(),
        })
    }

    /// Load the key from `GOOGLE_SERVICE_ACCOUNT_KEY` (inline JSON) or, failing
    /// that, from `fallback_path`.
    pub fn load(env_json: Option<&str>, fallback_path: &Path) -> Result<Self> {
        if let Some(json) = env_json.filter(|s| !s.trim().is_empty()) {
            return Self::from_json(json);
        }

        match try_read_to_string(fallback_path) {
            Some(json) => Self::from_json(&json),
            None => Err(LeagueError::ServiceAccountNotConfigured {
                env_var: SERVICE_ACCOUNT_ENV_VAR.to_string(),
            }),
        }
    }
}

/// JWT claims for the bearer grant
#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Build the signed assertion posted to the token endpoint.
pub fn sign_assertion(key: &ServiceAccountKey, issued_at: i64) -> Result<String> {
    let claims = Claims {
        iss: &key.client_email,
        scope: SHEETS_READONLY_SCOPE,
        aud: &key.token_uri,
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(encode(&header, &claims, &encoding_key)?)
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Exchanges service-account assertions for access tokens and caches them.
pub struct TokenProvider {
    client: Client,
    tokens: Mutex<HashMap<String, CachedToken>>,
}

impl TokenProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            tokens: Mutex::new(HashMap::new()),
        }
    }

    fn cached(&self, client_email: &str) -> Option<String> {
        let tokens = self.tokens.lock().unwrap_or_else(|e| e.into_inner());
        tokens
            .get(client_email)
            .filter(|t| t.expires_at > Instant::now() + EXPIRY_MARGIN)
            .map(|t| t.access_token.clone())
    }

    /// Return a valid access token for `key`, exchanging a new assertion if needed.
    #[tracing::instrument(skip(self, key), fields(client_email = %key.client_email))]
    pub async fn access_token(&self, key: &ServiceAccountKey) -> Result<String> {
        if let Some(token) = self.cached(&key.client_email) {
            tracing::debug!("reusing cached access token");
            return Ok(token);
        }

        let assertion = sign_assertion(key, chrono::Utc::now().timestamp())?;

        let response = self
            .client
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "token exchange rejected");
            return Err(LeagueError::TokenExchange {
                message: format!("{}: {}", status, body),
            });
        }

        let token: TokenResponse = response.json().await?;
        tracing::debug!(expires_in = token.expires_in, "obtained access token");

        self.tokens.lock().unwrap_or_else(|e| e.into_inner()).insert(
            key.client_email.clone(),
            CachedToken {
                access_token: token.access_token.clone(),
                expires_at: Instant::now() + Duration::from_secs(token.expires_in),
            },
        );

        Ok(token.access_token)
    }
}
