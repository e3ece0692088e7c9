use thiserror::Error;

/// Failures of the HTTP layer, of the release data it returns and of the
/// result file.
///
/// The token provider and the paginated fetcher never surface these to
/// their callers: they log them and hand back an empty result. Only
/// [`Error::MissingField`] and the storage errors of
/// [`AlbumItemsManager`](crate::management::AlbumItemsManager) escape to
/// the orchestrator and end the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to refresh token.")]
    TokenRefresh,

    #[error("Release item {index} has no string field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}
