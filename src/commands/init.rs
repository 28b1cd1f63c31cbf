//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# postshelf configuration

# Site
title: My Blog
description: ''
language: en

# Content
# Leave url empty to read posts.json and pages/ from this directory
url: ''
manifest: posts.json
pages_dir: pages
post_page: post.html
request_timeout: 30

# Display
date_format: MMMM D, YYYY
theme: light
highlight:
  theme: base16-ocean.dark
  line_number: false

# Comments (giscus)
comments:
  enable: false
  repo: ''
  repo_id: ''
  category: General
  category_id: ''
  # data-term (the post file) is only read with mapping specific or number
  mapping: specific
  strict: false
  reactions_enabled: true
  emit_metadata: false
  input_position: bottom
  theme: preferred_color_scheme
  lang: en
"#;

const SAMPLE_POST: &str = r#"---
title: Hello World
date: {{ date }}
category: General
tags: ["blog", "getting-started"]
description: The first post on this blog
---
Welcome! This post lives in `pages/hello-world.md` and is listed in `posts.json`.

```rust
fn main() {
    println!("Hello, world!");
}
```
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("pages"))?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let manifest = serde_json::json!([{
        "file": "hello-world.md",
        "title": "Hello World",
        "date": today,
        "tags": ["blog", "getting-started"],
        "category": "General",
        "description": "The first post on this blog",
        "excerpt": "Welcome! This post lives in pages/hello-world.md and is listed in posts.json."
    }]);

    write_new(&target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;
    write_new(
        &target_dir.join("posts.json"),
        &serde_json::to_string_pretty(&manifest)?,
    )?;
    write_new(
        &target_dir.join("pages/hello-world.md"),
        &SAMPLE_POST.replace("{{ date }}", &today),
    )?;

    Ok(())
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::info!("Created {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blog;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_initialized_site_loads() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.comments.mapping, "specific");
        let posts = blog.load_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].file, "hello-world.md");

        let doc = blog.load_post(&posts[0].file).await.unwrap();
        assert_eq!(doc.title(), "Hello World");
        assert_eq!(doc.tags(), ["blog", "getting-started"]);
        assert!(doc.body.starts_with("Welcome!"));
    }

    #[test]
    fn test_existing_files_are_kept() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("posts.json"), "[]").unwrap();

        init_site(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("posts.json")).unwrap(), "[]");
        assert!(dir.path().join("_config.yml").exists());
    }
}
