//! Show a single post

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::helpers::format_date;
use crate::templates;
use crate::Blog;

/// Print one post, either as plain metadata and markdown or as HTML
pub async fn run(blog: &Blog, file: &str, html: bool) -> Result<()> {
    let document = blog
        .load_post(file)
        .await
        .map_err(|e| super::report(e, html))?;

    if html {
        let renderer = MarkdownRenderer::from_config(&blog.config.highlight);
        let body = renderer.render(&document.body)?;
        println!("{}", templates::post_page(&document, &body, &blog.config));
        tracing::info!("Rendered {}", document.file);
        return Ok(());
    }

    println!("{}", document.title());
    if let Some(date) = document.date() {
        println!("Date: {}", format_date(&date, &blog.config.date_format));
    }
    if !document.category().is_empty() {
        println!("Category: {}", document.category());
    }
    if !document.tags().is_empty() {
        println!("Tags: {}", document.tags().join(", "));
    }
    println!();
    println!("{}", document.body);

    Ok(())
}
