//! CLI commands

pub mod list;
pub mod paths;
pub mod show;

use crate::error::FeedError;

/// Turn a feed error into what the user sees
///
/// Source failures and malformed source data become a "temporarily
/// unavailable" message; no retry is attempted. The detail is logged.
pub(crate) fn user_error(err: FeedError) -> anyhow::Error {
    match err {
        FeedError::SourceUnavailable(_) | FeedError::MalformedContent { .. } => {
            tracing::warn!("{}", err);
            anyhow::anyhow!("Content temporarily unavailable, try again later")
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_unavailable_states() {
        let unavailable = user_error(FeedError::SourceUnavailable("timeout".into()));
        assert!(unavailable.to_string().contains("temporarily unavailable"));

        let malformed = user_error(FeedError::MalformedContent {
            id: "zeta".into(),
            field: "data.title".into(),
        });
        assert!(malformed.to_string().contains("temporarily unavailable"));
    }

    #[test]
    fn test_user_error_keeps_not_found() {
        let err = user_error(FeedError::NotFound("nope".into()));
        assert_eq!(err.to_string(), "Document not found: nope");
    }
}
