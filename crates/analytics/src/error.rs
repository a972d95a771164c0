use thiserror::Error;

/// Errors that can occur when recording or dispatching analytics events.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The event could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Events need a name.
    #[error("Event name must not be empty")]
    EmptyEventName,

    /// The analytics backend refused the event.
    #[error("Sink error: {0}")]
    Sink(String),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
