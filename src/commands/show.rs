//! Show a single post

use anyhow::Result;
use serde::Serialize;

use crate::config::{CommentsConfig, SiteConfig};
use crate::content::reading_time;
use crate::content::{ArticleDetail, NeighborLinks};
use crate::feed::NeighborResolver;
use crate::helpers::{date_iso, format_date};
use crate::source::{ContentRef, ContentSource};
use crate::Blog;

/// Everything a post page is rendered from
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub post: ArticleDetail,
    /// Estimated reading time in minutes
    pub reading_time: u32,
    /// Publication date in the configured display format
    pub date: String,
    pub date_iso: String,
    pub neighbors: NeighborLinks,
    pub preview: bool,
    pub revalidate: u64,
    pub comments: Option<CommentsConfig>,
}

/// Fetch a post and the data around it
pub async fn build_post_view<S: ContentSource + ?Sized>(
    config: &SiteConfig,
    source: &S,
    reference: ContentRef,
    slug: &str,
) -> crate::error::Result<PostView> {
    let post = source.query_by_identifier(&reference, slug).await?;
    let preview = reference.is_preview();

    let resolver = NeighborResolver::new(source, reference);
    let neighbors = resolver.resolve(post.first_publication_date).await?;

    let reading_time = reading_time::estimate_with_rate(&post.content, config.reading_speed);

    Ok(PostView {
        reading_time,
        date: format_date(&post.first_publication_date, &config.date_format),
        date_iso: date_iso(&post.first_publication_date),
        neighbors,
        preview,
        revalidate: config.revalidate,
        comments: config.comments.enable.then(|| config.comments.clone()),
        post,
    })
}

/// Print a post
pub async fn run(blog: &Blog, slug: &str, preview: Option<String>, json: bool) -> Result<()> {
    let source = blog.open_source()?;
    let reference = ContentRef::from_preview(preview);
    tracing::info!("Loading post {} ({})", slug, reference);

    let view = build_post_view(&blog.config, &source, reference, slug)
        .await
        .map_err(super::user_error)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let post = &view.post;
    println!("{} | {}", post.title, blog.config.title);
    if let Some(banner) = &post.banner {
        println!("[{}]", banner.url);
    }
    println!(
        "{} · {} · {} min",
        view.date, post.author, view.reading_time
    );
    println!();

    for section in &post.content {
        println!("## {}", section.heading);
        for block in &section.body {
            println!("{}", block.text);
        }
        println!();
    }

    if let Some(prev) = &view.neighbors.previous {
        println!("Previous post: {} ({})", prev.title, super::paths::post_path(&prev.slug));
    }
    if let Some(next) = &view.neighbors.next {
        println!("Next post: {} ({})", next.title, super::paths::post_path(&next.slug));
    }
    if let Some(comments) = &view.comments {
        println!("Comments: {} ({})", comments.repo, comments.issue_term);
    }
    if view.preview {
        println!("Preview mode - exit preview to see published content");
    }

    Ok(())
}
