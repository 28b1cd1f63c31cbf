//! postshelf: a searchable personal blog front-end
//!
//! Loads a manifest of posts, normalizes it into a recency-sorted list,
//! filters it by free text and tags, and loads single markdown posts with
//! their front-matter.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod search;
pub mod source;
pub mod templates;
pub mod theme;

use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};

use content::{LoadError, Post, PostDocument};
use search::PostFilter;
use source::SiteSource;
use theme::FilePreferenceStore;

/// Directory under the site root holding local preferences
const PREFERENCES_DIR: &str = ".postshelf";

/// A blog site and the source its content is read from
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Where the manifest and pages are fetched from
    pub source: SiteSource,
}

impl Blog {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Result<Self> {
        let source = SiteSource::from_config(&config, &base_dir)?;
        Ok(Self {
            config,
            base_dir,
            source,
        })
    }

    /// Load the canonical post list
    pub async fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        content::load_posts(&self.source, Local::now().date_naive()).await
    }

    /// Load the post list and hand it to a fresh filter
    pub async fn post_filter(&self) -> Result<PostFilter, LoadError> {
        Ok(PostFilter::new(self.load_posts().await?))
    }

    /// Load a single post document
    pub async fn load_post(&self, file: &str) -> Result<PostDocument, LoadError> {
        content::load_document(&self.source, file).await
    }

    /// Store for the theme preference
    pub fn preferences(&self) -> FilePreferenceStore {
        FilePreferenceStore::new(self.base_dir.join(PREFERENCES_DIR))
    }
}
