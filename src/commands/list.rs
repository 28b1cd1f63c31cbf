//! List and filter posts

use anyhow::Result;

use crate::helpers::{format_date, truncate};
use crate::search::PostFilter;
use crate::templates;
use crate::Blog;

/// Excerpt length in the terminal listing
const EXCERPT_WIDTH: usize = 72;

/// List the posts matching a query and tag selection
pub async fn run(blog: &Blog, query: Option<&str>, tags: &[String], html: bool) -> Result<()> {
    let mut filter = blog.post_filter().await.map_err(|e| super::report(e, html))?;

    apply(&mut filter, query, tags);

    if html {
        println!(r#"<div id="tag-filter">{}</div>"#, templates::tag_filter(&filter));
        println!(
            r#"<div id="posts-list">{}</div>"#,
            templates::post_list(filter.visible_posts(), &blog.config)
        );
        return Ok(());
    }

    println!(
        "Posts ({} of {}):",
        filter.visible_len(),
        filter.all_posts().len()
    );
    for post in filter.visible_posts() {
        let date = post
            .published_on()
            .map(|d| format_date(&d, "YYYY-MM-DD"))
            .unwrap_or_else(|| post.date.clone());
        println!("  {} - {} [{}]", date, post.title, post.file);
        if !post.excerpt.is_empty() {
            println!("      {}", truncate(&post.excerpt, EXCERPT_WIDTH, None));
        }
        if !post.tags.is_empty() {
            println!("      #{}", post.tags.join(" #"));
        }
    }

    if filter.visible_len() == 0 {
        println!("  No posts match your search. Try a different query or tag.");
    }

    Ok(())
}

/// Apply command-line filters; a tag given twice cancels itself out
pub fn apply(filter: &mut PostFilter, query: Option<&str>, tags: &[String]) {
    if let Some(query) = query {
        filter.set_query(query);
    }
    for tag in tags {
        filter.toggle_tag(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

    fn posts() -> Vec<Post> {
        let mut a = Post::new("a.md", "Advanced", "2024-06-01");
        a.tags = vec!["tech".to_string()];
        let mut b = Post::new("b.md", "Intro", "2024-01-01");
        b.tags = vec!["blog".to_string()];
        vec![a, b]
    }

    #[test]
    fn test_apply_query_and_tags() {
        let mut filter = PostFilter::new(posts());
        apply(&mut filter, Some("intro"), &[]);
        assert_eq!(filter.visible_len(), 1);

        let mut filter = PostFilter::new(posts());
        apply(&mut filter, None, &["tech".to_string()]);
        assert_eq!(filter.visible_posts().next().unwrap().title, "Advanced");
    }

    #[test]
    fn test_repeated_tag_toggles_off() {
        let mut filter = PostFilter::new(posts());
        apply(&mut filter, None, &["tech".to_string(), "tech".to_string()]);
        assert_eq!(filter.visible_len(), 2);
    }
}
