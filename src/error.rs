use thiserror::Error;

/// Errors raised while fetching the roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("roster request failed (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    /// The response body was not a JSON array of student records.
    #[error("could not decode roster: {0}")]
    Decode(String),
}

impl From<RosterError> for String {
    fn from(err: RosterError) -> Self {
        err.to_string()
    }
}

impl From<reqwest::Error> for RosterError {
    fn from(err: reqwest::Error) -> Self {
        RosterError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Decode(err.to_string())
    }
}
