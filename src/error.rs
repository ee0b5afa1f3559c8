//! Error kinds surfaced by the feed core

use thiserror::Error;

/// Errors produced while querying the content source or building views from it
#[derive(Error, Debug)]
pub enum FeedError {
    /// The content source could not be reached, or its response could not be read
    #[error("Content source unavailable: {0}")]
    SourceUnavailable(String),

    /// `advance` was called on a feed with no continuation cursor
    #[error("No more pages to fetch")]
    NoMorePages,

    /// A document is missing a required field or carries an unreadable value
    #[error("Malformed content in document {id}: {field}")]
    MalformedContent { id: String, field: String },

    #[error("Document not found: {0}")]
    NotFound(String),
}

impl FeedError {
    pub(crate) fn malformed(id: &str, field: impl Into<String>) -> Self {
        FeedError::MalformedContent {
            id: id.to_string(),
            field: field.into(),
        }
    }

    /// Whether the source itself could not be reached or read
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FeedError::SourceUnavailable(_))
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::SourceUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::SourceUnavailable(err.to_string())
    }
}

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;
