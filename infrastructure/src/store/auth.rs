//! Firestore access tokens
//!
//! The store asks its [`TokenProvider`] for a token before every request,
//! so a refreshing provider keeps a long-running server authenticated.

use super::error::StoreError;
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;

/// Cached tokens this close to expiry are refreshed before use
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Source of bearer tokens for Firestore requests
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Token for the next request, or `None` to send it unauthenticated
    async fn token(&self) -> Result<Option<String>, StoreError>;
}

/// A fixed token (or none, for emulators)
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.0.clone())
    }
}

/// The fields used from a Google service-account key file
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    ASSERTION_LIFETIME_SECS
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// OAuth access tokens minted from a service-account key.
///
/// Signs an RS256 assertion and exchanges it at the key's token endpoint.
/// The access token is cached until shortly before it expires.
pub struct ServiceAccountTokenProvider {
    client: reqwest::Client,
    client_email: String,
    token_uri: String,
    signing_key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    pub fn new(key: ServiceAccountKey) -> Result<Self, StoreError> {
        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
        Ok(Self {
            client: reqwest::Client::new(),
            client_email: key.client_email,
            token_uri: key.token_uri,
            signing_key,
            cached: Mutex::new(None),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let provider = Self::new(ServiceAccountKey::from_file(path)?)?;
        info!(account = %provider.client_email, "Loaded Firestore service account");
        Ok(provider)
    }

    fn assertion(&self) -> Result<String, StoreError> {
        let iat = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            iss: &self.client_email,
            scope: DATASTORE_SCOPE,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.signing_key,
        )?)
    }

    async fn exchange(&self) -> Result<CachedToken, StoreError> {
        let assertion = self.assertion()?;
        let response = self
            .client
            .post(&self.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Auth(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response.json().await?;
        debug!(expires_in = token.expires_in, "Refreshed Firestore access token");
        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn token(&self) -> Result<Option<String>, StoreError> {
        // Held across the exchange so concurrent lookups share one refresh.
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref()
            && token.expires_at > Instant::now() + REFRESH_MARGIN
        {
            return Ok(Some(token.access_token.clone()));
        }

        let fresh = self.exchange().await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(Some(access_token))
    }
}
