//! Content loader - loads the post list and single posts from a source

use chrono::NaiveDate;

use super::normalize::{normalize_posts, DATE_FORMAT};
use super::{Post, PostDocument};
use crate::source::{ContentSource, FetchError};

/// Why a list or post could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("manifest is {found}, expected an array of posts")]
    MalformedManifest { found: &'static str },

    #[error(transparent)]
    Retrieval(#[from] FetchError),

    #[error("post {0} not found")]
    DocumentNotFound(String),

    #[error("no post file given")]
    MissingFile,
}

impl LoadError {
    /// Message for readers, naming the symptom rather than the cause
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::MalformedManifest { .. } | LoadError::Retrieval(_) => {
                "Something went wrong while loading the posts."
            }
            LoadError::DocumentNotFound(_) | LoadError::MissingFile => {
                "The requested post could not be found."
            }
        }
    }
}

/// Load and normalize the post manifest
///
/// A missing manifest falls back to a single sample post. Any other
/// failure is returned and no posts are produced.
pub async fn load_posts<S: ContentSource>(source: &S, today: NaiveDate) -> Result<Vec<Post>, LoadError> {
    let manifest = match source.manifest().await {
        Ok(manifest) => manifest,
        Err(FetchError::NotFound(resource)) => {
            tracing::warn!("{} not found, using sample posts", resource);
            return Ok(sample_posts(today));
        }
        Err(e) => {
            tracing::error!("Failed to load posts: {}", e);
            return Err(e.into());
        }
    };

    let posts = normalize_posts(manifest, today)?;
    tracing::info!("Loaded {} posts", posts.len());
    Ok(posts)
}

/// Load one post document and split its header from the body
pub async fn load_document<S: ContentSource>(source: &S, file: &str) -> Result<PostDocument, LoadError> {
    if file.trim().is_empty() {
        return Err(LoadError::MissingFile);
    }

    let raw = match source.document(file).await {
        Ok(raw) => raw,
        Err(FetchError::NotFound(_)) => return Err(LoadError::DocumentNotFound(file.to_string())),
        Err(e) => {
            tracing::error!("Failed to load post {}: {}", file, e);
            return Err(e.into());
        }
    };

    let document = PostDocument::new(file, &raw);
    tracing::debug!(
        "Loaded {} ({} header keys, {} bytes of body)",
        file,
        document.front_matter.len(),
        document.body.len()
    );
    Ok(document)
}

/// Posts shown when the site has no manifest yet
pub fn sample_posts(today: NaiveDate) -> Vec<Post> {
    vec![Post {
        file: "sample.md".to_string(),
        title: "Welcome to the blog!".to_string(),
        date: today.format(DATE_FORMAT).to_string(),
        tags: vec!["blog".to_string(), "getting-started".to_string()],
        category: "General".to_string(),
        description: "The very first post on this blog.".to_string(),
        excerpt: "Glad to finally start writing here. Expect notes on all sorts of topics..."
            .to_string(),
    }]
}
