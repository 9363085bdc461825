//! Firestore REST verse store

use super::auth::{ServiceAccountTokenProvider, StaticToken, TokenProvider};
use super::error::StoreError;
use super::firestore_value::decode_fields;
use crate::config::FileStoreConfig;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use scripture_application::VerseStore;
use scripture_domain::{SourceTag, Verse, VerseId};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A Firestore document as returned by the REST API
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Verse store reading documents from two Firestore collections
///
/// Identifiers with the Quran prefix are looked up in the Quran
/// collection; every other identifier goes to the Gita collection.
/// The token provider is consulted on every request.
pub struct FirestoreVerseStore {
    client: reqwest::Client,
    documents_url: Url,
    gita_collection: String,
    quran_collection: String,
    tokens: Arc<dyn TokenProvider>,
}

impl FirestoreVerseStore {
    pub fn new(
        base_url: &str,
        project_id: &str,
        database: &str,
        gita_collection: impl Into<String>,
        quran_collection: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, StoreError> {
        let mut documents_url =
            Url::parse(base_url).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
        documents_url
            .path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl(base_url.to_string()))?
            .pop_if_empty()
            .extend(["v1", "projects", project_id, "databases", database, "documents"]);

        Ok(Self {
            client: reqwest::Client::new(),
            documents_url,
            gita_collection: gita_collection.into(),
            quran_collection: quran_collection.into(),
            tokens,
        })
    }

    /// Build from the `[store]` section.
    ///
    /// Credentials come from `credentials_path`, then
    /// `GOOGLE_APPLICATION_CREDENTIALS`, then a static token in `token_env`.
    pub fn from_config(config: &FileStoreConfig) -> Result<Self, StoreError> {
        let project_id = config
            .project_id
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or(StoreError::MissingProjectId)?;

        let store = Self::new(
            &config.base_url,
            project_id,
            &config.database,
            config.gita_collection.as_str(),
            config.quran_collection.as_str(),
            token_provider(config)?,
        )?;
        info!(project = project_id, database = %config.database, "FirestoreVerseStore initialized");
        Ok(store)
    }

    /// Collection an identifier is stored in
    pub fn collection_for(&self, id: &VerseId) -> &str {
        if id.source() == Some(SourceTag::Quran) {
            &self.quran_collection
        } else {
            &self.gita_collection
        }
    }

    fn document_url(&self, collection: &str, id: &VerseId) -> Url {
        let mut url = self.documents_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend([collection, id.as_str()]);
        }
        url
    }

    async fn fetch(&self, collection: &str, id: &VerseId) -> Result<Option<Verse>, StoreError> {
        let mut request = self.client.get(self.document_url(collection, id));
        if let Some(token) = self.tokens.token().await? {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let document: Document = response.json().await?;
        let verse = serde_json::from_value(Value::Object(decode_fields(&document.fields)))?;
        Ok(Some(verse))
    }
}

fn credentials_path(config: &FileStoreConfig) -> Option<PathBuf> {
    config.credentials_path.clone().or_else(|| {
        std::env::var_os("GOOGLE_APPLICATION_CREDENTIALS")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    })
}

fn token_provider(config: &FileStoreConfig) -> Result<Arc<dyn TokenProvider>, StoreError> {
    if let Some(path) = credentials_path(config) {
        return Ok(Arc::new(ServiceAccountTokenProvider::from_file(&path)?));
    }

    let token = std::env::var(&config.token_env)
        .ok()
        .filter(|t| !t.trim().is_empty());
    if token.is_none() {
        warn!(
            env = %config.token_env,
            "No Firestore credentials set, sending unauthenticated requests"
        );
    }
    Ok(Arc::new(StaticToken::new(token)))
}

#[async_trait]
impl VerseStore for FirestoreVerseStore {
    async fn get_verse(&self, id: &VerseId) -> Option<Verse> {
        let collection = self.collection_for(id);
        if id.as_str().trim().is_empty() {
            warn!(collection, "Empty verse identifier");
            return None;
        }

        match self.fetch(collection, id).await {
            Ok(Some(verse)) => {
                debug!(id = %id, collection, "Verse found");
                Some(verse)
            }
            Ok(None) => {
                warn!(id = %id, collection, "Verse not found");
                None
            }
            Err(e) => {
                error!(id = %id, collection, error = %e, "Verse lookup failed");
                None
            }
        }
    }
}
