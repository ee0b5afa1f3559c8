//! List the article feed

use anyhow::Result;

use crate::feed::{Feed, Paginator};
use crate::helpers::format_date;
use crate::source::{ContentRef, ContentSource};
use crate::Blog;

/// Fetch the first page of the feed, then advance up to `pages - 1` more times
///
/// Stops early once the feed has no cursor left.
pub async fn build_feed<S: ContentSource + ?Sized>(
    source: &S,
    reference: ContentRef,
    per_page: usize,
    pages: usize,
) -> crate::error::Result<Feed> {
    let paginator = Paginator::new(source, reference, per_page);
    let mut feed = paginator.first_page().await?;

    for _ in 1..pages {
        if !feed.has_more() {
            break;
        }
        feed = paginator.advance(&feed).await?;
    }

    Ok(feed)
}

/// Print the feed
pub async fn run(blog: &Blog, pages: usize, preview: Option<String>, json: bool) -> Result<()> {
    let source = blog.open_source()?;
    let reference = ContentRef::from_preview(preview);

    let feed = build_feed(&source, reference, blog.config.per_page, pages.max(1))
        .await
        .map_err(super::user_error)?;
    tracing::info!("Loaded {} posts", feed.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }

    println!("Posts ({}):", feed.len());
    for post in &feed.entries {
        println!(
            "  {} - {} [{}]",
            format_date(&post.first_publication_date, &blog.config.date_format),
            post.title,
            post.slug
        );
        if !post.subtitle.is_empty() {
            println!("      {}", post.subtitle);
        }
        println!("      {}", post.author);
    }

    if feed.has_more() {
        println!("More posts available (use --pages {})", pages.max(1) + 1);
    }

    Ok(())
}
