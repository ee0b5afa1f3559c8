//! Previous/next post links

use chrono::{DateTime, Utc};

use crate::content::{ArticleRef, NeighborLinks};
use crate::error::Result;
use crate::source::{ContentRef, ContentSource, Direction};

/// Finds the articles published right before and after a timestamp
///
/// The listing shows newest first, so "previous" is the closest later
/// article and "next" is the closest earlier one.
pub struct NeighborResolver<'a, S: ContentSource + ?Sized> {
    source: &'a S,
    reference: ContentRef,
}

impl<'a, S: ContentSource + ?Sized> NeighborResolver<'a, S> {
    pub fn new(source: &'a S, reference: ContentRef) -> Self {
        Self { source, reference }
    }

    /// Closest article published strictly after `timestamp`
    pub async fn resolve_previous(&self, timestamp: DateTime<Utc>) -> Result<Option<ArticleRef>> {
        self.closest(timestamp, Direction::After).await
    }

    /// Closest article published strictly before `timestamp`
    pub async fn resolve_next(&self, timestamp: DateTime<Utc>) -> Result<Option<ArticleRef>> {
        self.closest(timestamp, Direction::Before).await
    }

    /// Both links for the article published at `timestamp`
    pub async fn resolve(&self, timestamp: DateTime<Utc>) -> Result<NeighborLinks> {
        Ok(NeighborLinks {
            previous: self.resolve_previous(timestamp).await?,
            next: self.resolve_next(timestamp).await?,
        })
    }

    async fn closest(
        &self,
        timestamp: DateTime<Utc>,
        direction: Direction,
    ) -> Result<Option<ArticleRef>> {
        let results = self
            .source
            .query_adjacent(&self.reference, timestamp, direction, 1)
            .await?;
        tracing::debug!(
            "Neighbor {:?} {}: {:?}",
            direction,
            timestamp,
            results.first().map(|a| &a.slug)
        );
        Ok(results.first().map(|a| a.link()))
    }
}
