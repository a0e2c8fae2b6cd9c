use thiserror::Error;

/// Errors that can occur when talking to the remote to-do service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Failed to construct the HTTP client at startup.
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },

    /// Transport failure: connect error, timeout, connection reset.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("Service returned {status} for '{url}'")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Update/delete addressed an item the backend never assigned an id to.
    #[error("To-do '{title}' has no backend id")]
    MissingId { title: String },
}
