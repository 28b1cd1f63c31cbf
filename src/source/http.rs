//! Remote HTTP source

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use super::{ContentSource, FetchError};

/// Fetches the manifest and documents from a web origin
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    manifest: String,
    pages_dir: String,
}

impl HttpSource {
    pub fn new(base_url: &str, manifest: &str, pages_dir: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            manifest: manifest.trim_matches('/').to_string(),
            pages_dir: pages_dir.trim_matches('/').to_string(),
        })
    }

    /// Use a preconfigured client
    pub fn with_client(client: Client, base_url: &str, manifest: &str, pages_dir: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            manifest: manifest.trim_matches('/').to_string(),
            pages_dir: pages_dir.trim_matches('/').to_string(),
        }
    }

    fn manifest_url(&self) -> String {
        format!("{}/{}", self.base_url, self.manifest)
    }

    fn document_url(&self, file: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.pages_dir,
            file.trim_start_matches('/')
        )
    }

    async fn get(&self, resource: &str, url: &str) -> Result<Response, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::failed(resource, e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound(resource.to_string())),
            status if !status.is_success() => {
                Err(FetchError::failed(resource, format!("HTTP {}", status)))
            }
            _ => Ok(response),
        }
    }
}

impl ContentSource for HttpSource {
    async fn manifest(&self) -> Result<Value, FetchError> {
        let response = self.get(&self.manifest, &self.manifest_url()).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::failed(&self.manifest, e))
    }

    async fn document(&self, file: &str) -> Result<String, FetchError> {
        let response = self.get(file, &self.document_url(file)).await?;
        response
            .text()
            .await
            .map_err(|e| FetchError::failed(file, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode as AxumStatus, routing::get, Router};

    /// Serve a tiny site on an ephemeral port and return its base URL
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn source(base_url: &str) -> HttpSource {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpSource::with_client(client, base_url, "posts.json", "pages")
    }

    #[test]
    fn test_urls() {
        let source = source("https://blog.example.com/");
        assert_eq!(source.manifest_url(), "https://blog.example.com/posts.json");
        assert_eq!(
            source.document_url("notes/a.md"),
            "https://blog.example.com/pages/notes/a.md"
        );
    }

    #[tokio::test]
    async fn test_fetches_manifest_and_document() {
        let app = Router::new()
            .route("/posts.json", get(|| async { r#"[{"title": "Remote"}]"# }))
            .route("/pages/hello.md", get(|| async { "---\ntitle: Hi\n---\nBody" }));
        let source = source(&serve(app).await);

        let manifest = source.manifest().await.unwrap();
        assert_eq!(manifest[0]["title"], "Remote");
        assert_eq!(
            source.document("hello.md").await.unwrap(),
            "---\ntitle: Hi\n---\nBody"
        );
    }

    #[tokio::test]
    async fn test_404_is_not_found() {
        let source = source(&serve(Router::new()).await);
        assert!(source.manifest().await.unwrap_err().is_not_found());
        assert!(source.document("nope.md").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_500_is_a_failure() {
        let app = Router::new().route(
            "/posts.json",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let source = source(&serve(app).await);

        let err = source.manifest().await.unwrap_err();
        assert!(matches!(err, FetchError::Failed { ref reason, .. } if reason.contains("500")));
    }
}
