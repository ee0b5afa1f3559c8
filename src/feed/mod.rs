//! Feed module - paginated article listing and chronological neighbors
//!
//! A `Feed` is a plain value: the caller holds it between interactions and
//! threads it through `Paginator::advance`, which returns a new feed instead
//! of mutating the old one. Calls against one feed must be issued one at a
//! time; there is no internal locking.

mod neighbors;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::content::ArticleSummary;
use crate::error::{FeedError, Result};
use crate::source::{ContentRef, ContentSource, FeedPage};

pub use neighbors::NeighborResolver;

/// Ordered article summaries plus the cursor of the next page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Entries in source order (newest first), unique by slug
    pub entries: Vec<ArticleSummary>,
    pub next_cursor: Option<String>,
}

impl Feed {
    /// Seed a feed with its first page
    pub fn from_page(page: FeedPage) -> Self {
        Feed::default().merge(page)
    }

    /// Whether another page can be fetched
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.slug.as_str()).collect()
    }

    /// Append a fetched page
    ///
    /// Existing entries keep their position. Page entries whose slug is already
    /// present are dropped; the page cursor replaces ours.
    pub fn merge(&self, page: FeedPage) -> Feed {
        let mut seen: HashSet<String> = self.entries.iter().map(|e| e.slug.clone()).collect();
        let mut entries = self.entries.clone();

        for entry in page.entries {
            if seen.insert(entry.slug.clone()) {
                entries.push(entry);
            } else {
                tracing::debug!("Skipping duplicate feed entry: {}", entry.slug);
            }
        }

        Feed {
            entries,
            next_cursor: page.next_cursor,
        }
    }
}

/// Fetches listing pages from a content source
pub struct Paginator<'a, S: ContentSource + ?Sized> {
    source: &'a S,
    reference: ContentRef,
    page_size: usize,
}

impl<'a, S: ContentSource + ?Sized> Paginator<'a, S> {
    pub fn new(source: &'a S, reference: ContentRef, page_size: usize) -> Self {
        Self {
            source,
            reference,
            page_size,
        }
    }

    /// Accept an already fetched first page as the initial state
    pub fn initialize(&self, page: FeedPage) -> Feed {
        Feed::from_page(page)
    }

    /// Fetch the first page and seed a feed with it
    pub async fn first_page(&self) -> Result<Feed> {
        let page = self
            .source
            .query_feed_page(&self.reference, None, self.page_size)
            .await?;
        Ok(self.initialize(page))
    }

    /// Fetch the page after `current` and return the merged feed
    ///
    /// Returns `NoMorePages` without touching the source when `current` has no
    /// cursor. Source failures are returned as-is; `current` is never modified.
    pub async fn advance(&self, current: &Feed) -> Result<Feed> {
        let Some(cursor) = current.next_cursor.as_deref() else {
            return Err(FeedError::NoMorePages);
        };

        tracing::debug!("Advancing feed from cursor {}", cursor);
        let page = self
            .source
            .query_feed_page(&self.reference, Some(cursor), self.page_size)
            .await?;
        Ok(current.merge(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ArticleDetail, ArticleSummary};
    use crate::source::Direction;
    use crate::test_utils::sample_source;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn summary(slug: &str) -> ArticleSummary {
        ArticleSummary {
            slug: slug.to_string(),
            first_publication_date: Utc.with_ymd_and_hms(2021, 3, 15, 0, 0, 0).unwrap(),
            title: slug.to_uppercase(),
            subtitle: String::new(),
            author: "Danilo Vieira".to_string(),
        }
    }

    fn page(slugs: &[&str], cursor: Option<&str>) -> FeedPage {
        FeedPage {
            entries: slugs.iter().map(|s| summary(s)).collect(),
            next_cursor: cursor.map(str::to_string),
        }
    }

    /// Wraps a source, counting page queries and failing on demand
    struct CountingSource<S> {
        inner: S,
        page_calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl<S> CountingSource<S> {
        fn new(inner: S) -> Self {
            Self {
                inner,
                page_calls: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
            }
        }

        fn calls(&self) -> usize {
            self.page_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl<S: ContentSource> ContentSource for CountingSource<S> {
        async fn query_feed_page(
            &self,
            reference: &ContentRef,
            cursor: Option<&str>,
            page_size: usize,
        ) -> Result<FeedPage> {
            self.page_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(FeedError::SourceUnavailable("connection reset".into()));
            }
            self.inner
                .query_feed_page(reference, cursor, page_size)
                .await
        }

        async fn query_by_identifier(
            &self,
            reference: &ContentRef,
            id: &str,
        ) -> Result<ArticleDetail> {
            self.inner.query_by_identifier(reference, id).await
        }

        async fn query_adjacent(
            &self,
            reference: &ContentRef,
            timestamp: DateTime<Utc>,
            direction: Direction,
            limit: usize,
        ) -> Result<Vec<ArticleSummary>> {
            self.inner
                .query_adjacent(reference, timestamp, direction, limit)
                .await
        }

        async fn list_identifiers(&self, reference: &ContentRef) -> Result<Vec<String>> {
            self.inner.list_identifiers(reference).await
        }
    }

    #[test]
    fn test_merge_appends_in_order() {
        let feed = Feed::from_page(page(&["a", "b"], Some("c1")));
        let merged = feed.merge(page(&["c"], None));
        assert_eq!(merged.slugs(), vec!["a", "b", "c"]);
        assert_eq!(merged.next_cursor, None);
        assert!(!merged.has_more());
        // The input feed is untouched
        assert_eq!(feed.slugs(), vec!["a", "b"]);
        assert!(feed.has_more());
    }

    #[test]
    fn test_merge_of_known_entries_only_moves_cursor() {
        let feed = Feed::from_page(page(&["a", "b", "c"], Some("page=2")));
        let merged = feed.merge(page(&["b", "a"], Some("page=3")));
        assert_eq!(merged.entries, feed.entries);
        assert_eq!(merged.next_cursor.as_deref(), Some("page=3"));
    }

    #[test]
    fn test_merge_preserves_relative_order() {
        let feeds: [&[&str]; 3] = [&[], &["a"], &["a", "b", "c"]];
        let pages: [&[&str]; 4] = [&[], &["x"], &["z", "y", "x"], &["c", "d", "a", "e"]];

        for existing in feeds {
            for fetched in pages {
                let feed = Feed::from_page(page(existing, Some("next")));
                let merged = feed.merge(page(fetched, None));

                let mut expected: Vec<&str> = existing.to_vec();
                for slug in fetched {
                    if !expected.contains(slug) {
                        expected.push(*slug);
                    }
                }
                assert_eq!(merged.slugs(), expected);
            }
        }
    }

    #[test]
    fn test_from_page_drops_duplicates() {
        let feed = Feed::from_page(page(&["a", "b", "a"], None));
        assert_eq!(feed.slugs(), vec!["a", "b"]);
        assert_eq!(feed.len(), 2);
    }

    #[tokio::test]
    async fn test_advance_through_all_pages() {
        let source = sample_source();
        let paginator = Paginator::new(&source, ContentRef::Master, 3);

        let feed = paginator.first_page().await.unwrap();
        assert_eq!(feed.slugs(), vec!["delta", "gamma", "beta"]);
        assert!(feed.has_more());

        let feed = paginator.advance(&feed).await.unwrap();
        assert_eq!(feed.slugs(), vec!["delta", "gamma", "beta", "alpha"]);
        assert!(!feed.has_more());

        assert!(matches!(
            paginator.advance(&feed).await,
            Err(FeedError::NoMorePages)
        ));
    }

    #[tokio::test]
    async fn test_advance_without_cursor_skips_source() {
        let source = CountingSource::new(sample_source());
        let paginator = Paginator::new(&source, ContentRef::Master, 10);

        let feed = paginator.first_page().await.unwrap();
        assert_eq!(source.calls(), 1);
        assert!(!feed.has_more());

        let result = paginator.advance(&feed).await;
        assert!(matches!(result, Err(FeedError::NoMorePages)));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_advance_makes_one_call() {
        let source = CountingSource::new(sample_source());
        let paginator = Paginator::new(&source, ContentRef::Master, 1);

        let mut feed = paginator.first_page().await.unwrap();
        while feed.has_more() {
            feed = paginator.advance(&feed).await.unwrap();
        }
        assert_eq!(feed.len(), 4);
        assert_eq!(source.calls(), 4);
    }

    #[tokio::test]
    async fn test_failed_advance_leaves_feed_untouched() {
        let source = CountingSource::new(sample_source());
        let paginator = Paginator::new(&source, ContentRef::Master, 2);

        let feed = paginator.first_page().await.unwrap();
        let snapshot = feed.clone();

        source.fail.store(true, Ordering::SeqCst);
        let err = paginator.advance(&feed).await.unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(feed, snapshot);
        assert_eq!(source.calls(), 2);

        // Retrying is up to the caller
        source.fail.store(false, Ordering::SeqCst);
        let feed = paginator.advance(&feed).await.unwrap();
        assert_eq!(feed.len(), 4);
    }

    #[tokio::test]
    async fn test_initialize_trusts_given_page() {
        let source = sample_source();
        let paginator = Paginator::new(&source, ContentRef::Master, 2);
        let feed = paginator.initialize(page(&["a"], Some("page=2")));
        assert_eq!(feed.slugs(), vec!["a"]);

        // The cursor of a seeded page is followed like any other
        let feed = paginator.advance(&feed).await.unwrap();
        assert_eq!(feed.slugs(), vec!["a", "beta", "alpha"]);
    }
}
