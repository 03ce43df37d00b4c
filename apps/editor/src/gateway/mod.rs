//! Remote Record Gateway — the single point of entry for all record-store
//! calls in the editor.
//!
//! The store is an opaque remote document collection reachable by id and by
//! simple filter expressions; this layer never mutates it. Each operation
//! maps 1:1 to one outbound request: no retry, no cache, no in-flight
//! deduplication. Callers that need timeouts or cancellation wrap the call.
//!
//! Lifecycle is explicit: construct → `authenticate` → use. The session
//! token lives on the client handle, not in process-global state.

pub mod filter;
pub mod transport;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::errors::GatewayError;
use crate::models::{Campaign, LayoutRecord, MediaFile};
use filter::ids_filter;
use transport::{HttpTransport, RawResponse, Transport};

/// Collection names on the remote store.
pub const CAMPAIGNS: &str = "campaigns";
pub const LAYOUTS: &str = "layouts";
pub const FILES_LIBRARY: &str = "files_library";

/// Single-request page size for full-collection fetches. The signage data
/// set is small; there is deliberately no pagination loop.
const LIST_PER_PAGE: u32 = 500;

/// Result of a successful authentication: the session token plus the raw
/// user record the store returned.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub record: Value,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct ListResult<T> {
    #[serde(default)]
    items: Vec<T>,
}

/// Client handle for the remote record store.
#[derive(Clone)]
pub struct StoreClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    token: Option<String>,
}

impl StoreClient {
    /// Creates an unauthenticated client for the given store base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new(base_url)),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Creates a client over a custom transport. Used by tests.
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Authentication
    // ────────────────────────────────────────────────────────────────────────

    /// Authenticates against the store and stores the session token for all
    /// subsequent calls on this handle.
    pub async fn authenticate(
        &mut self,
        identity: &str,
        password: &str,
    ) -> Result<AuthSession, GatewayError> {
        let body = json!({ "identity": identity, "password": password });
        let response = self
            .transport
            .post_json("/api/collections/users/auth-with-password", &body)
            .await?;

        if !(200..300).contains(&response.status) {
            return Err(GatewayError::Auth(error_message(&response)));
        }

        let session: AuthSession = serde_json::from_value(response.body)?;
        self.token = Some(session.token.clone());
        info!("authenticated against record store at {}", self.base_url);
        Ok(session)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Reads
    // ────────────────────────────────────────────────────────────────────────

    /// All campaigns, newest first, with the `layouts` relation expanded.
    pub async fn get_campaigns(&self) -> Result<Vec<Campaign>, GatewayError> {
        self.get_full_list(
            CAMPAIGNS,
            &[
                ("sort", "-created".to_string()),
                ("expand", "layouts".to_string()),
            ],
        )
        .await
    }

    /// One campaign by id, with the `layouts` relation expanded.
    pub async fn get_campaign(&self, id: &str) -> Result<Campaign, GatewayError> {
        self.get_one(CAMPAIGNS, id, &[("expand", "layouts".to_string())])
            .await
    }

    /// All layouts, newest first.
    pub async fn get_layouts(&self) -> Result<Vec<LayoutRecord>, GatewayError> {
        self.get_full_list(LAYOUTS, &[("sort", "-created".to_string())])
            .await
    }

    /// One layout by id.
    pub async fn get_layout(&self, id: &str) -> Result<LayoutRecord, GatewayError> {
        self.get_one(LAYOUTS, id, &[]).await
    }

    /// Layouts matching any of the given ids. Missing ids are silently
    /// absent; an empty input resolves without touching the store.
    pub async fn get_layouts_by_ids<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<LayoutRecord>, GatewayError> {
        self.get_many_by_ids(LAYOUTS, ids).await
    }

    /// One media-library file record by id.
    pub async fn get_file(&self, id: &str) -> Result<MediaFile, GatewayError> {
        self.get_one(FILES_LIBRARY, id, &[]).await
    }

    /// Media-library records matching any of the given ids.
    pub async fn get_files_by_ids<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<MediaFile>, GatewayError> {
        self.get_many_by_ids(FILES_LIBRARY, ids).await
    }

    // ────────────────────────────────────────────────────────────────────────
    // URL derivation (pure, no network)
    // ────────────────────────────────────────────────────────────────────────

    /// Download URL for a stored file. Pure string derivation.
    pub fn file_url(&self, collection: &str, record_id: &str, filename: &str) -> String {
        format!(
            "{}/api/files/{}/{}/{}",
            self.base_url, collection, record_id, filename
        )
    }

    /// Download URL for a media-library record's file, or `None` when the
    /// record carries no file.
    pub fn media_url(&self, file: &MediaFile) -> Option<String> {
        if file.file.is_empty() {
            return None;
        }
        let collection = if file.collection_name.is_empty() {
            FILES_LIBRARY
        } else {
            file.collection_name.as_str()
        };
        Some(self.file_url(collection, &file.id, &file.file))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Internals
    // ────────────────────────────────────────────────────────────────────────

    async fn get_full_list<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, GatewayError> {
        let path = format!("/api/collections/{collection}/records");
        let mut query = query.to_vec();
        query.push(("perPage", LIST_PER_PAGE.to_string()));

        debug!(collection, "fetching full list");
        let response = self
            .transport
            .get_json(&path, &query, self.token.as_deref())
            .await?;
        let body = self.check_status(collection, response)?;
        let list: ListResult<T> = serde_json::from_value(body)?;
        Ok(list.items)
    }

    async fn get_many_by_ids<T: DeserializeOwned, S: AsRef<str>>(
        &self,
        collection: &str,
        ids: &[S],
    ) -> Result<Vec<T>, GatewayError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get_full_list(collection, &[("filter", ids_filter(ids))])
            .await
    }

    async fn get_one<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let path = format!("/api/collections/{collection}/records/{id}");

        debug!(collection, id, "fetching record");
        let response = self
            .transport
            .get_json(&path, query, self.token.as_deref())
            .await?;

        if response.status == 404 {
            return Err(GatewayError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        let body = self.check_status(collection, response)?;
        Ok(serde_json::from_value(body)?)
    }

    /// Maps non-2xx statuses to gateway errors (404-on-single-record is
    /// handled by `get_one` before this runs).
    fn check_status(&self, collection: &str, response: RawResponse) -> Result<Value, GatewayError> {
        match response.status {
            200..=299 => Ok(response.body),
            401 | 403 => Err(GatewayError::Auth(error_message(&response))),
            status => Err(GatewayError::Api {
                status,
                message: error_message(&response),
            }),
        }
        .map_err(|e| {
            debug!(collection, error = %e, "store request failed");
            e
        })
    }
}

fn error_message(response: &RawResponse) -> String {
    response.body["message"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| response.body.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
