//! spacetraveling: content feed core for a headless-CMS blog
//!
//! This crate holds the logic behind the blog's listing and post pages:
//! merging paginated feed fetches, resolving chronological neighbor links
//! and estimating reading time. The CMS is reached only through the
//! `ContentSource` trait.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod helpers;
pub mod source;

#[cfg(test)]
mod test_utils;

pub use error::{FeedError, Result};

use std::path::{Path, PathBuf};

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// CMS export the content source is loaded from
    pub content_path: PathBuf,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> anyhow::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_path = base_dir.join(&config.content_file);

        Ok(Self {
            config,
            base_dir,
            content_path,
        })
    }

    /// Open the content source
    pub fn open_source(&self) -> anyhow::Result<source::InMemorySource> {
        source::InMemorySource::load(&self.content_path).map_err(commands::user_error)
    }
}
