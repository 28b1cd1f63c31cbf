//! Local site directory source

use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::{ContentSource, FetchError};

const BOM: char = '\u{feff}';

/// Reads `posts.json` and `pages/<file>` from a site directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
    manifest: String,
    pages_dir: String,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(root: P, manifest: &str, pages_dir: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            manifest: manifest.to_string(),
            pages_dir: pages_dir.to_string(),
        }
    }

    /// Read a file as text the way an HTTP client decodes a body: invalid
    /// UTF-8 is replaced and a leading byte order mark is dropped
    async fn read(&self, resource: &str, path: &Path) -> Result<String, FetchError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                Ok(content.strip_prefix(BOM).unwrap_or(&content).to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(FetchError::NotFound(resource.to_string()))
            }
            Err(e) => Err(FetchError::failed(resource, e)),
        }
    }
}

impl ContentSource for DirSource {
    async fn manifest(&self) -> Result<Value, FetchError> {
        let path = self.root.join(&self.manifest);
        tracing::debug!("Reading manifest {:?}", path);
        let content = self.read(&self.manifest, &path).await?;
        serde_json::from_str(&content).map_err(|e| FetchError::failed(&self.manifest, e))
    }

    async fn document(&self, file: &str) -> Result<String, FetchError> {
        // Documents must stay inside the pages directory
        let relative = Path::new(file);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            tracing::warn!("Rejecting document outside the pages directory: {}", file);
            return Err(FetchError::NotFound(file.to_string()));
        }

        let path = self.root.join(&self.pages_dir).join(relative);
        tracing::debug!("Reading document {:?}", path);
        self.read(file, &path).await
    }
}
