//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::reading_time::DEFAULT_WORDS_PER_MINUTE;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // Content
    /// CMS export the content source is loaded from, relative to the base dir
    pub content_file: String,

    // Listing
    pub per_page: usize,

    // Post page
    /// Words per minute used for the reading time
    pub reading_speed: u32,
    pub date_format: String,
    /// Seconds a generated page stays fresh before it is rebuilt
    pub revalidate: u64,
    #[serde(default)]
    pub comments: CommentsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "spacetraveling".to_string(),
            language: "pt-BR".to_string(),

            content_file: "content.json".to_string(),

            per_page: 20,

            reading_speed: DEFAULT_WORDS_PER_MINUTE,
            date_format: "DD MMM YYYY".to_string(),
            revalidate: 24 * 60 * 60,
            comments: CommentsConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        if config.per_page == 0 {
            anyhow::bail!("per_page must be at least 1");
        }
        Ok(config)
    }
}

/// Comment widget settings, handed to the page as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub enable: bool,
    /// Repository holding the comment threads
    pub repo: String,
    pub issue_term: String,
    pub theme: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            enable: false,
            repo: String::new(),
            issue_term: "pathname".to_string(),
            theme: "github-dark".to_string(),
        }
    }
}
