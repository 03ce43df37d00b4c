//! HTTP transport behind the record-store client.
//!
//! `StoreClient` holds an `Arc<dyn Transport>` so tests can substitute a
//! counting mock; production code always uses `HttpTransport` over a shared
//! `reqwest::Client`. The transport carries no policy: one call maps to one
//! request, and status-code interpretation belongs to the client.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::GatewayError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A raw store response: HTTP status plus the decoded JSON body. Non-JSON
/// bodies are wrapped as a JSON string so error messages survive.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// Minimal request surface the gateway needs from the store.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<RawResponse, GatewayError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, GatewayError>;
}

/// The production transport: reqwest over the store's base endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn into_raw(response: reqwest::Response) -> Result<RawResponse, GatewayError> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    };
    Ok(RawResponse { status, body })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<RawResponse, GatewayError> {
        let mut request = self.client.get(self.url(path)).query(query);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }
        into_raw(request.send().await?).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, GatewayError> {
        into_raw(self.client.post(self.url(path)).json(body).send().await?).await
    }
}
