use thiserror::Error;

/// Gateway-level error type. All three classes propagate to the caller
/// unmodified; no retry, recovery, or suppression happens below the UI.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("store returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
