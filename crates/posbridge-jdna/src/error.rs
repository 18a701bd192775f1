use thiserror::Error;

/// Errors returned by the JDNA locations client.
///
/// Per-record validation failures are not errors; they are logged and the
/// record is dropped (see [`crate::validate`]).
#[derive(Debug, Error)]
pub enum JdnaError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// response status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body was not a JSON array of records.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
