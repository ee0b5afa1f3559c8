//! In-memory document store loaded from a CMS JSON export

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use super::{ContentRef, ContentSource, Direction, FeedPage};
use crate::content::{ArticleDetail, ArticleSummary, RawDocument};
use crate::error::{FeedError, Result};

const CURSOR_PREFIX: &str = "page=";

/// Document store holding raw CMS documents
///
/// Documents are validated when a query returns them, so one malformed
/// document only fails the queries that touch it.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Vec<RawDocument>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: impl IntoIterator<Item = RawDocument>) -> Self {
        let mut source = Self::new();
        for doc in documents {
            source.insert(doc);
        }
        source
    }

    /// Load a JSON array of documents
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            FeedError::SourceUnavailable(format!("Failed to read {:?}: {}", path.as_ref(), e))
        })?;
        let documents: Vec<RawDocument> = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} documents from {:?}",
            documents.len(),
            path.as_ref()
        );
        Ok(Self::from_documents(documents))
    }

    /// Add a document, replacing any document with the same uid
    pub fn insert(&mut self, doc: RawDocument) {
        let existing = doc
            .uid
            .as_ref()
            .and_then(|uid| self.documents.iter().position(|d| d.uid.as_ref() == Some(uid)));
        match existing {
            Some(i) => self.documents[i] = doc,
            None => self.documents.push(doc),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents visible through `reference`, newest first
    ///
    /// Drafts only appear in previews and sort ahead of everything else.
    fn ordered(&self, reference: &ContentRef) -> Result<Vec<&RawDocument>> {
        let mut docs = self
            .documents
            .iter()
            .filter(|d| d.is_published() || reference.is_preview())
            .map(|d| -> Result<_> { Ok((d.publication_date()?, d)) })
            .collect::<Result<Vec<_>>>()?;

        docs.sort_by(|(a_date, a), (b_date, b)| match (a_date, b_date) {
            (None, None) => a.id().cmp(b.id()),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => y.cmp(x).then_with(|| a.id().cmp(b.id())),
        });

        Ok(docs.into_iter().map(|(_, d)| d).collect())
    }
}

fn parse_cursor(cursor: &str) -> Result<usize> {
    cursor
        .strip_prefix(CURSOR_PREFIX)
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .ok_or_else(|| FeedError::SourceUnavailable(format!("Invalid cursor: {}", cursor)))
}

#[async_trait]
impl ContentSource for InMemorySource {
    async fn query_feed_page(
        &self,
        reference: &ContentRef,
        cursor: Option<&str>,
        page_size: usize,
    ) -> Result<FeedPage> {
        if page_size == 0 {
            return Err(FeedError::SourceUnavailable(
                "Page size must be at least 1".to_string(),
            ));
        }

        let page = cursor.map(parse_cursor).transpose()?.unwrap_or(1);
        let docs = self.ordered(reference)?;

        let out_of_range =
            || FeedError::SourceUnavailable(format!("Cursor out of range: page {}", page));
        let start = (page - 1).checked_mul(page_size).ok_or_else(out_of_range)?;
        if page > 1 && start >= docs.len() {
            return Err(out_of_range());
        }
        let end = start.saturating_add(page_size).min(docs.len());

        let entries = docs[start..end]
            .iter()
            .map(|d| d.to_summary())
            .collect::<Result<Vec<_>>>()?;
        let next_cursor = (end < docs.len()).then(|| format!("{}{}", CURSOR_PREFIX, page + 1));

        tracing::debug!(
            "Feed page {} ({}): {} entries, next {:?}",
            page,
            reference,
            entries.len(),
            next_cursor
        );

        Ok(FeedPage {
            entries,
            next_cursor,
        })
    }

    async fn query_by_identifier(
        &self,
        reference: &ContentRef,
        id: &str,
    ) -> Result<ArticleDetail> {
        self.documents
            .iter()
            .filter(|d| d.is_published() || reference.is_preview())
            .find(|d| d.uid.as_deref() == Some(id))
            .ok_or_else(|| FeedError::NotFound(id.to_string()))?
            .to_detail()
    }

    async fn query_adjacent(
        &self,
        _reference: &ContentRef,
        timestamp: DateTime<Utc>,
        direction: Direction,
        limit: usize,
    ) -> Result<Vec<ArticleSummary>> {
        // Drafts have no real date to compare, so they never take part
        let mut candidates = Vec::new();
        for doc in &self.documents {
            let Some(date) = doc.publication_date()? else {
                continue;
            };
            let matches = match direction {
                Direction::Before => date < timestamp,
                Direction::After => date > timestamp,
            };
            if matches {
                candidates.push((date, doc));
            }
        }

        candidates.sort_by(|(a_date, a), (b_date, b)| {
            let by_date = match direction {
                Direction::Before => b_date.cmp(a_date),
                Direction::After => a_date.cmp(b_date),
            };
            by_date.then_with(|| a.id().cmp(b.id()))
        });

        candidates
            .into_iter()
            .take(limit)
            .map(|(_, d)| d.to_link_summary())
            .collect()
    }

    async fn list_identifiers(&self, reference: &ContentRef) -> Result<Vec<String>> {
        Ok(self
            .ordered(reference)?
            .into_iter()
            .filter_map(|d| d.uid.clone())
            .collect())
    }
}
