//! Content sources - where the manifest and post documents come from

mod dir;
mod http;

pub use dir::DirSource;
pub use http::HttpSource;

use anyhow::Result;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

use crate::config::SiteConfig;

/// Retrieval failure, with "not found" kept apart from everything else
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to fetch {resource}: {reason}")]
    Failed { resource: String, reason: String },
}

impl FetchError {
    pub fn failed(resource: impl Into<String>, reason: impl ToString) -> Self {
        FetchError::Failed {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

/// Manifest and document retrieval
pub trait ContentSource {
    /// Fetch the post manifest as untyped JSON
    fn manifest(&self) -> impl Future<Output = Result<Value, FetchError>>;

    /// Fetch the raw text of one post document
    fn document(&self, file: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// The source a site is configured to read from
pub enum SiteSource {
    Dir(DirSource),
    Http(HttpSource),
}

impl SiteSource {
    /// Remote origin when `url` is set, otherwise the local site directory
    pub fn from_config(config: &SiteConfig, base_dir: &std::path::Path) -> Result<Self> {
        if config.url.trim().is_empty() {
            tracing::debug!("Reading content from {:?}", base_dir);
            Ok(SiteSource::Dir(DirSource::new(
                base_dir,
                &config.manifest,
                &config.pages_dir,
            )))
        } else {
            tracing::debug!("Reading content from {}", config.url);
            let source = HttpSource::new(
                &config.url,
                &config.manifest,
                &config.pages_dir,
                Duration::from_secs(config.request_timeout),
            )?;
            Ok(SiteSource::Http(source))
        }
    }
}

impl ContentSource for SiteSource {
    async fn manifest(&self) -> Result<Value, FetchError> {
        match self {
            SiteSource::Dir(source) => source.manifest().await,
            SiteSource::Http(source) => source.manifest().await,
        }
    }

    async fn document(&self, file: &str) -> Result<String, FetchError> {
        match self {
            SiteSource::Dir(source) => source.document(file).await,
            SiteSource::Http(source) => source.document(file).await,
        }
    }
}
