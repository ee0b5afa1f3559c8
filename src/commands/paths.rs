//! List the static paths of every post

use anyhow::Result;

use crate::source::{ContentRef, ContentSource};
use crate::Blog;

/// Page path of a post
pub fn post_path(slug: &str) -> String {
    format!("/post/{}", slug)
}

pub async fn run(blog: &Blog) -> Result<()> {
    let source = blog.open_source()?;
    let ids = source
        .list_identifiers(&ContentRef::Master)
        .await
        .map_err(super::user_error)?;

    for id in ids {
        println!("{}", post_path(&id));
    }

    Ok(())
}
