use thiserror::Error;

/// Failure while turning a raw payload into an `EventRecord`.
///
/// Scoped to a single event: the dispatcher reports it and moves on.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Malformed event payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Alfresco request failed: {0}")]
    Client(String),
}
