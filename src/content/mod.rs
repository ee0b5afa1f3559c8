//! Content module - article models, CMS document validation and reading time

mod article;
pub mod document;
pub mod reading_time;

pub use article::{
    ArticleDetail, ArticleRef, ArticleSummary, Banner, NeighborLinks, RichTextBlock, Section,
};
pub use document::RawDocument;
