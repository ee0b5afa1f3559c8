//! Content source - the query contract against the CMS document store
//!
//! The feed core never talks to the backend directly; every operation takes a
//! `ContentSource` so a real client or an in-memory store can be plugged in.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::{ArticleDetail, ArticleSummary};
use crate::error::Result;

pub use memory::InMemorySource;

/// One page of listing results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub entries: Vec<ArticleSummary>,
    /// Opaque cursor for the following page, `None` on the last page
    pub next_cursor: Option<String>,
}

/// Which side of a timestamp an adjacency query looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Strictly earlier, newest first
    Before,
    /// Strictly later, oldest first
    After,
}

/// Reference the queries are issued against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentRef {
    /// Published content only
    #[default]
    Master,
    /// Draft-inclusive preview, identified by the preview token
    Preview(String),
}

impl ContentRef {
    /// Build from the preview reference of a page-build context
    pub fn from_preview(preview: Option<String>) -> Self {
        match preview {
            Some(token) => ContentRef::Preview(token),
            None => ContentRef::Master,
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, ContentRef::Preview(_))
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentRef::Master => write!(f, "master"),
            ContentRef::Preview(token) => write!(f, "preview:{}", token),
        }
    }
}

/// Query contract of the document store
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one listing page, newest first. `cursor` is `None` for the first page.
    async fn query_feed_page(
        &self,
        reference: &ContentRef,
        cursor: Option<&str>,
        page_size: usize,
    ) -> Result<FeedPage>;

    /// Fetch a full post by its identifier
    async fn query_by_identifier(&self, reference: &ContentRef, id: &str)
        -> Result<ArticleDetail>;

    /// Fetch up to `limit` articles strictly before or after `timestamp`,
    /// closest first
    async fn query_adjacent(
        &self,
        reference: &ContentRef,
        timestamp: DateTime<Utc>,
        direction: Direction,
        limit: usize,
    ) -> Result<Vec<ArticleSummary>>;

    /// Identifiers of every post, for static path generation
    async fn list_identifiers(&self, reference: &ContentRef) -> Result<Vec<String>>;
}
