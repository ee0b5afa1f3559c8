//! Article models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article as shown in the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Unique identifier, immutable once published
    pub slug: String,

    /// First publication date
    pub first_publication_date: DateTime<Utc>,

    pub title: String,
    pub subtitle: String,
    pub author: String,
}

impl ArticleSummary {
    /// Link target for this article
    pub fn link(&self) -> ArticleRef {
        ArticleRef {
            slug: self.slug.clone(),
            title: self.title.clone(),
        }
    }
}

/// Banner image of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub url: String,
}

/// A rich-text block inside a section body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    /// Block type as reported by the CMS (paragraph, heading2, list-item, ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl RichTextBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: "paragraph".to_string(),
            text: text.into(),
        }
    }
}

/// A titled section of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading, never empty
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}

impl Section {
    /// Plain-text rendering of the body (block texts joined by a space)
    pub fn body_text(&self) -> String {
        self.body
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A full post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub slug: String,
    pub first_publication_date: DateTime<Utc>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner: Option<Banner>,

    /// Sections in source order
    pub content: Vec<Section>,
}

impl ArticleDetail {
    /// Listing view of this post
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            slug: self.slug.clone(),
            first_publication_date: self.first_publication_date,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            author: self.author.clone(),
        }
    }

    pub fn link(&self) -> ArticleRef {
        ArticleRef {
            slug: self.slug.clone(),
            title: self.title.clone(),
        }
    }
}

/// Link to another article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub slug: String,
    pub title: String,
}

/// Chronologically adjacent articles of a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborLinks {
    /// Article published just after this one (shown above it in the listing)
    pub previous: Option<ArticleRef>,
    /// Article published just before this one
    pub next: Option<ArticleRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn detail() -> ArticleDetail {
        ArticleDetail {
            slug: "como-utilizar-hooks".to_string(),
            first_publication_date: Utc.with_ymd_and_hms(2021, 3, 15, 12, 0, 0).unwrap(),
            title: "Como utilizar Hooks".to_string(),
            subtitle: "Pensando em sincronização em vez de ciclos de vida.".to_string(),
            author: "Joseph Oliveira".to_string(),
            banner: None,
            content: vec![Section {
                heading: "Intro".to_string(),
                body: vec![
                    RichTextBlock::paragraph("Hello world"),
                    RichTextBlock::paragraph("second block"),
                ],
            }],
        }
    }

    #[test]
    fn test_body_text_joins_blocks() {
        assert_eq!(detail().content[0].body_text(), "Hello world second block");
    }

    #[test]
    fn test_summary_and_link() {
        let detail = detail();
        let summary = detail.summary();
        assert_eq!(summary.slug, detail.slug);
        assert_eq!(summary.author, "Joseph Oliveira");
        assert_eq!(summary.link(), detail.link());
    }

    #[test]
    fn test_block_serializes_kind_as_type() {
        let json = serde_json::to_string(&RichTextBlock::paragraph("hi")).unwrap();
        assert_eq!(json, r#"{"type":"paragraph","text":"hi"}"#);
    }
}
