//! Error types shared across the client.
//!
//! Every failure ends up as a short message string in [`crate::model::PoemState`];
//! nothing here is retried automatically.

use thiserror::Error;

/// Failures talking to the hosted poem database.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("Network request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server returned {code}: {body}")]
    Status { code: u16, body: String },

    /// The response body did not match the expected rows.
    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),

    /// An insert asked for the created row back and got nothing.
    #[error("Server returned no rows")]
    EmptyResponse,
}

/// Build-time configuration problems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Client-local key/value storage problems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,

    #[error("Local storage access failed: {0}")]
    Access(String),
}

/// Cursor movement on a list with nothing in it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseError {
    #[error("Cannot move through an empty list")]
    Empty,
}

/// Reasons a poem submission is rejected.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Poem text cannot be empty")]
    EmptyText,

    #[error("Failed to add poem")]
    Api(#[from] ApiError),
}

/// Logs `err` against the operation it came from and returns the message to
/// show the user.
pub fn describe(err: &dyn std::error::Error, context: &str) -> String {
    log::error!("Error in {context}: {err}");
    err.to_string()
}
