//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // Content
    /// Remote origin serving the manifest and pages; empty reads the local directory
    pub url: String,
    pub manifest: String,
    pub pages_dir: String,
    /// Page that displays a single post, linked as `<post_page>?file=<file>`
    pub post_page: String,
    /// Seconds before a remote request is abandoned
    pub request_timeout: u64,

    // Display
    pub date_format: String,
    /// Theme used until a preference is stored
    pub theme: String,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Comments
    #[serde(default)]
    pub comments: CommentsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            language: "en".to_string(),

            url: String::new(),
            manifest: "posts.json".to_string(),
            pages_dir: "pages".to_string(),
            post_page: "post.html".to_string(),
            request_timeout: 30,

            date_format: "MMMM D, YYYY".to_string(),
            theme: "light".to_string(),
            highlight: HighlightConfig::default(),

            comments: CommentsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Giscus comment widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub enable: bool,
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    /// How discussions are matched to pages; `specific` keys them on the post file
    pub mapping: String,
    pub strict: bool,
    pub reactions_enabled: bool,
    pub emit_metadata: bool,
    pub input_position: String,
    pub theme: String,
    pub lang: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            enable: false,
            repo: String::new(),
            repo_id: String::new(),
            category: "General".to_string(),
            category_id: String::new(),
            mapping: "specific".to_string(),
            strict: false,
            reactions_enabled: true,
            emit_metadata: false,
            input_position: "bottom".to_string(),
            theme: "preferred_color_scheme".to_string(),
            lang: "en".to_string(),
        }
    }
}
