// Error taxonomy for a widget load cycle.
//
// Only ranking loading and the aggregator precondition can fail a cycle.
// Per-user activity fetches never surface these errors past the fetcher;
// they are logged and turned into an empty page of activities.

use thiserror::Error;

/// Errors that can end a load cycle (or be logged and swallowed by the fetcher).
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Transport failure: connection refused, DNS, TLS, truncated body, I/O.
    #[error("Network error: {0}")]
    Network(String),

    /// The resource answered with a non-success status (or the file is missing).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required field is missing or the document could not be parsed.
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// Aggregation was invoked without a loaded ranking.
    #[error("Precondition failed: {0}")]
    Precondition(String),
}

impl From<reqwest::Error> for WidgetError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WidgetError::MalformedData(err.to_string())
        } else {
            WidgetError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::MalformedData(err.to_string())
    }
}
