//! Error types for the content delivery client.

/// Error from a content delivery request.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
  /// Transport failed (DNS, connect, TLS, body read).
  #[error("content request failed: {0}")]
  Network(#[from] reqwest::Error),

  /// Server answered with a non-success status.
  #[error("content API error: {status}")]
  Status {
    /// HTTP status code.
    status: u16,
  },

  /// Body was not valid JSON or did not have the expected shape.
  #[error("malformed content response: {0}")]
  Parse(#[from] serde_json::Error),

  /// Base URL from configuration could not be parsed.
  #[error("invalid content API url: {0}")]
  InvalidUrl(#[from] url::ParseError),

  /// Cache TTL from configuration does not fit a duration.
  #[error("cache_ttl_secs out of range: {0}")]
  InvalidTtl(u64),
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
