//! Raw CMS documents and their validation into the article model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArticleDetail, ArticleSummary, Banner, RichTextBlock, Section};
use crate::error::{FeedError, Result};

/// A document as delivered by the CMS, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub data: RawData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawData {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub banner: Option<RawBanner>,
    pub content: Vec<RawSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBanner {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSection {
    pub heading: Option<String>,
    pub body: Vec<RawBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBlock {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<String>,
}

impl RawDocument {
    /// Identifier used in error reports, even when `uid` is missing
    pub fn id(&self) -> &str {
        self.uid.as_deref().unwrap_or("<unknown>")
    }

    /// Whether the document has been published (drafts carry no date)
    pub fn is_published(&self) -> bool {
        self.first_publication_date.is_some()
    }

    /// Parsed publication date, `None` for drafts
    pub fn publication_date(&self) -> Result<Option<DateTime<Utc>>> {
        match &self.first_publication_date {
            None => Ok(None),
            Some(raw) => parse_date(raw)
                .map(Some)
                .ok_or_else(|| FeedError::malformed(self.id(), "first_publication_date")),
        }
    }

    /// Validate the listing fields
    pub fn to_summary(&self) -> Result<ArticleSummary> {
        let slug = self.require_uid()?;
        let title = required(&self.data.title, slug, "data.title")?;
        let author = required(&self.data.author, slug, "data.author")?;

        Ok(ArticleSummary {
            slug: slug.to_string(),
            first_publication_date: self.date_or_now()?,
            title,
            subtitle: self.data.subtitle.clone().unwrap_or_default(),
            author,
        })
    }

    /// Validate only what a neighbor link needs
    ///
    /// Adjacency queries fetch uid and title; the remaining display fields
    /// are taken as-is and default to empty.
    pub fn to_link_summary(&self) -> Result<ArticleSummary> {
        let slug = self.require_uid()?;
        let title = required(&self.data.title, slug, "data.title")?;

        Ok(ArticleSummary {
            slug: slug.to_string(),
            first_publication_date: self.date_or_now()?,
            title,
            subtitle: self.data.subtitle.clone().unwrap_or_default(),
            author: self.data.author.clone().unwrap_or_default(),
        })
    }

    /// Validate the full post, sections included
    pub fn to_detail(&self) -> Result<ArticleDetail> {
        let summary = self.to_summary()?;

        let banner = match &self.data.banner {
            Some(RawBanner { url: Some(url) }) if !url.trim().is_empty() => Some(Banner {
                url: url.clone(),
            }),
            _ => None,
        };

        let content = self
            .data
            .content
            .iter()
            .enumerate()
            .map(|(i, section)| -> Result<Section> {
                let heading = required(
                    &section.heading,
                    &summary.slug,
                    &format!("data.content[{}].heading", i),
                )?;
                let body = section
                    .body
                    .iter()
                    .map(|block| RichTextBlock {
                        kind: block.kind.clone().unwrap_or_else(|| "paragraph".to_string()),
                        text: block.text.clone().unwrap_or_default(),
                    })
                    .collect();
                Ok(Section { heading, body })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ArticleDetail {
            slug: summary.slug,
            first_publication_date: summary.first_publication_date,
            title: summary.title,
            subtitle: summary.subtitle,
            author: summary.author,
            banner,
            content,
        })
    }

    fn require_uid(&self) -> Result<&str> {
        match self.uid.as_deref() {
            Some(uid) if !uid.trim().is_empty() => Ok(uid),
            _ => Err(FeedError::malformed(self.id(), "uid")),
        }
    }

    fn date_or_now(&self) -> Result<DateTime<Utc>> {
        Ok(self.publication_date()?.unwrap_or_else(|| {
            tracing::debug!(
                "Document {} has no publication date, using current time",
                self.id()
            );
            Utc::now()
        }))
    }
}

fn required(value: &Option<String>, id: &str, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(FeedError::malformed(id, field)),
    }
}

/// Parse a CMS timestamp (RFC 3339, or the `+0000` offset form)
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"]
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
