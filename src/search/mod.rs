//! Post search and tag filtering
//!
//! [`PostFilter`] owns the canonical post list together with the current
//! query and tag selection, and keeps the visible subset up to date after
//! every change.

use std::collections::{BTreeSet, HashMap};

use crate::content::Post;

/// Free-text and tag filter over the canonical post list
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    posts: Vec<Post>,
    /// Lower-cased, trimmed query; empty matches everything
    query: String,
    selected_tags: BTreeSet<String>,
    /// Indices into `posts`, in list order
    visible: Vec<usize>,
}

impl PostFilter {
    /// Start with no query, no selected tags, and every post visible
    pub fn new(posts: Vec<Post>) -> Self {
        let mut filter = Self {
            posts,
            ..Default::default()
        };
        filter.recompute();
        filter
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.trim().to_lowercase();
        self.recompute();
    }

    /// Select the tag if it is not selected, deselect it otherwise
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
        self.recompute();
    }

    /// Replace the post list, clearing the query and tag selection
    pub fn update_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.query.clear();
        self.selected_tags.clear();
        self.recompute();
    }

    /// Rebuild the visible subset from the current query and tags
    pub fn recompute(&mut self) {
        self.visible = self
            .posts
            .iter()
            .enumerate()
            .filter(|(_, post)| self.matches_query(post) && self.matches_tags(post))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            query = %self.query,
            tags = self.selected_tags.len(),
            "{} of {} posts visible",
            self.visible.len(),
            self.posts.len()
        );
    }

    /// Query is a case-insensitive substring of the title, excerpt,
    /// description, or one of the tags
    fn matches_query(&self, post: &Post) -> bool {
        if self.query.is_empty() {
            return true;
        }

        [&post.title, &post.excerpt, &post.description]
            .into_iter()
            .chain(post.tags.iter())
            .any(|field| field.to_lowercase().contains(&self.query))
    }

    /// Post carries at least one of the selected tags
    fn matches_tags(&self, post: &Post) -> bool {
        self.selected_tags.is_empty() || self.selected_tags.iter().any(|tag| post.has_tag(tag))
    }

    pub fn visible_posts(&self) -> impl Iterator<Item = &Post> + '_ {
        self.visible.iter().map(|&i| &self.posts[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    /// Every distinct tag across all posts, sorted, regardless of the filter
    pub fn available_tags(&self) -> Vec<String> {
        self.posts
            .iter()
            .flat_map(|post| post.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of posts per tag, most used first
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for post in &self.posts {
            // A tag repeated within one post counts once
            let unique: BTreeSet<&str> = post.tags.iter().map(String::as_str).collect();
            for tag in unique {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}
