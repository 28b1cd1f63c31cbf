//! HTML fragments for the post list and post pages
//!
//! Pure functions from posts to markup. Every piece of post metadata goes
//! through [`html_escape`]; only the rendered body is inserted as-is.

use crate::config::{CommentsConfig, SiteConfig};
use crate::content::{Post, PostDocument};
use crate::helpers::{format_date, html_escape, post_url, time_tag};
use crate::search::PostFilter;

const GISCUS_CLIENT: &str = "https://giscus.app/client.js";

/// Card linking to one post in the list
pub fn post_card(post: &Post, config: &SiteConfig) -> String {
    // Dates the manifest cannot express as a calendar date are shown verbatim
    let date = match post.published_on() {
        Some(date) => format_date(&date, &config.date_format),
        None => post.date.clone(),
    };

    let category = if post.category.is_empty() {
        String::new()
    } else {
        format!("<span>{}</span>", html_escape(&post.category))
    };

    format!(
        r#"<a href="{href}" class="post-card">
    <h2 class="post-title">{title}</h2>
    <div class="post-meta"><span>{date}</span>{category}</div>
    <p class="post-excerpt">{excerpt}</p>
    {tags}
</a>"#,
        href = html_escape(&post_url(config, &post.file)),
        title = html_escape(&post.title),
        date = html_escape(&date),
        category = category,
        excerpt = html_escape(&post.excerpt),
        tags = tag_list(&post.tags),
    )
}

/// The visible posts, or a notice when nothing matches
pub fn post_list<'a>(posts: impl IntoIterator<Item = &'a Post>, config: &SiteConfig) -> String {
    let cards: Vec<String> = posts
        .into_iter()
        .map(|post| post_card(post, config))
        .collect();

    if cards.is_empty() {
        return r#"<div class="no-posts">
    <p>No posts match your search.</p>
    <p>Try a different query or tag.</p>
</div>"#
            .to_string();
    }

    cards.join("\n")
}

/// Clickable tag filter, with selected tags marked active
pub fn tag_filter(filter: &PostFilter) -> String {
    filter
        .available_tags()
        .iter()
        .map(|tag| {
            let class = if filter.is_selected(tag) {
                "tag active"
            } else {
                "tag"
            };
            format!(
                r#"<span class="{}" data-tag="{}">{}</span>"#,
                class,
                html_escape(tag),
                html_escape(tag)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Full post: header with metadata, then the rendered body
pub fn post_page(document: &PostDocument, body_html: &str, config: &SiteConfig) -> String {
    let mut meta = String::new();
    if let Some(date) = document.date() {
        meta.push_str(&format!("<span>{}</span>", time_tag(&date, &config.date_format)));
    }
    if !document.category().is_empty() {
        meta.push_str(&format!("<span>{}</span>", html_escape(document.category())));
    }

    let mut page = format!(
        r#"<header class="post-header">
    <h1 class="post-title-large">{title}</h1>
    <div class="post-meta-large">{meta}</div>
    {tags}
</header>
<div class="post-body">
{body}
</div>"#,
        title = html_escape(document.title()),
        meta = meta,
        tags = tag_list(document.tags()),
        body = body_html,
    );

    if config.comments.enable {
        page.push('\n');
        page.push_str(&comments_embed(&config.comments, &document.file));
    }

    page
}

/// Static error notice replacing the list or post
pub fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="error-message">
    <p>⚠️ {}</p>
    <p><a href="index.html">Back to the main page</a></p>
</div>"#,
        html_escape(message)
    )
}

/// Giscus comment widget for one post
pub fn comments_embed(comments: &CommentsConfig, file: &str) -> String {
    let flag = |on: bool| if on { "1" } else { "0" };
    let attributes = [
        ("data-repo", comments.repo.as_str()),
        ("data-repo-id", comments.repo_id.as_str()),
        ("data-category", comments.category.as_str()),
        ("data-category-id", comments.category_id.as_str()),
        ("data-mapping", comments.mapping.as_str()),
        ("data-term", file),
        ("data-strict", flag(comments.strict)),
        ("data-reactions-enabled", flag(comments.reactions_enabled)),
        ("data-emit-metadata", flag(comments.emit_metadata)),
        ("data-input-position", comments.input_position.as_str()),
        ("data-theme", comments.theme.as_str()),
        ("data-lang", comments.lang.as_str()),
    ];

    let attributes: String = attributes
        .iter()
        .map(|(name, value)| format!(r#" {}="{}""#, name, html_escape(value)))
        .collect();

    format!(
        r#"<div id="giscus-container"><script src="{}"{} crossorigin="anonymous" async></script></div>"#,
        GISCUS_CLIENT, attributes
    )
}

fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let spans: String = tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
        .collect();
    format!(r#"<div class="post-tags">{}</div>"#, spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        let mut post = Post::new("notes/a b.md", "<script>alert(1)</script>", "2024-01-15");
        post.tags = vec!["rust & web".to_string()];
        post.category = "<i>Notes</i>".to_string();
        post.excerpt = "Fish & chips".to_string();
        post
    }

    #[test]
    fn test_post_card_escapes_metadata() {
        let html = post_card(&post(), &SiteConfig::default());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"<span class="tag">rust &amp; web</span>"#));
        assert!(html.contains("&lt;i&gt;Notes&lt;/i&gt;"));
        assert!(html.contains("Fish &amp; chips"));
        assert!(html.contains(r#"href="post.html?file=notes%2Fa%20b.md""#));
        assert!(html.contains("January 15, 2024"));
    }

    #[test]
    fn test_post_card_with_percent_in_date_format() {
        let mut config = SiteConfig::default();
        config.date_format = "D MMMM YYYY (100%)".to_string();
        let html = post_card(&post(), &config);
        assert!(html.contains("<span>15 January 2024 (100%)</span>"));
    }

    #[test]
    fn test_post_card_keeps_unreadable_date() {
        let post = Post::new("a.md", "A", "someday");
        let html = post_card(&post, &SiteConfig::default());
        assert!(html.contains("<span>someday</span>"));
        assert!(!html.contains("post-tags"));
    }

    #[test]
    fn test_empty_list_message() {
        let html = post_list(std::iter::empty(), &SiteConfig::default());
        assert!(html.contains("no-posts"));
    }

    #[test]
    fn test_post_list_keeps_order() {
        let posts = vec![Post::new("b.md", "Second", "2024-01-02"), Post::new("a.md", "First", "2024-01-01")];
        let html = post_list(&posts, &SiteConfig::default());
        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_tag_filter_marks_selected() {
        let mut a = Post::new("a.md", "A", "2024-01-01");
        a.tags = vec!["go".to_string(), "rust".to_string()];
        let mut filter = PostFilter::new(vec![a]);
        filter.toggle_tag("rust");

        let html = tag_filter(&filter);
        assert!(html.contains(r#"<span class="tag" data-tag="go">go</span>"#));
        assert!(html.contains(r#"<span class="tag active" data-tag="rust">rust</span>"#));
    }

    #[test]
    fn test_post_page() {
        let doc = PostDocument::new(
            "hello.md",
            "---\ntitle: \"Tom & Jerry\"\ndate: 2024-01-15\ncategory: Notes\ntags: [a]\n---\nBody",
        );
        let html = post_page(&doc, "<p>Body</p>", &SiteConfig::default());
        assert!(html.contains(r#"<h1 class="post-title-large">Tom &amp; Jerry</h1>"#));
        assert!(html.contains(r#"<time datetime="2024-01-15">January 15, 2024</time>"#));
        assert!(html.contains("<span>Notes</span>"));
        assert!(html.contains(r#"<span class="tag">a</span>"#));
        assert!(html.contains("<p>Body</p>"));
        assert!(!html.contains("giscus"));
    }

    #[test]
    fn test_post_page_with_comments() {
        let mut config = SiteConfig::default();
        config.comments.enable = true;
        config.comments.repo = "someone/blog".to_string();

        let doc = PostDocument::new("hello.md", "Body");
        let html = post_page(&doc, "<p>Body</p>", &config);
        assert!(html.contains(r#"data-repo="someone/blog""#));
        assert!(html.contains(r#"data-term="hello.md""#));
        assert!(html.contains(r#"data-mapping="specific""#));
        assert!(html.contains(r#"data-reactions-enabled="1""#));
        assert!(html.contains(r#"data-strict="0""#));
    }

    #[test]
    fn test_error_panel_escapes() {
        let html = error_panel("<b>oops</b>");
        assert!(html.contains("&lt;b&gt;oops&lt;/b&gt;"));
    }
}
