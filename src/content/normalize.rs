//! Manifest normalization
//!
//! Turns the loosely-typed entries of `posts.json` into [`Post`] records
//! with every field present, newest first.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::cmp::Reverse;

use super::post::DEFAULT_TITLE;
use super::{LoadError, Post};

pub const DEFAULT_FILE: &str = "";
pub const DEFAULT_CATEGORY: &str = "";
pub const DEFAULT_DESCRIPTION: &str = "";
pub const DEFAULT_EXCERPT: &str = "";

/// Manifest date format, also used for the "today" default
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalize a retrieved manifest into the canonical post list
///
/// The manifest must be a JSON array; anything else is rejected rather than
/// coerced.
pub fn normalize_posts(manifest: Value, today: NaiveDate) -> Result<Vec<Post>, LoadError> {
    let Value::Array(entries) = manifest else {
        return Err(LoadError::MalformedManifest {
            found: json_kind(&manifest),
        });
    };

    let mut posts: Vec<Post> = entries
        .iter()
        .map(|entry| normalize_entry(entry, today))
        .collect();

    sort_by_recency(&mut posts);

    Ok(posts)
}

/// Build one post, filling every missing field with its default
///
/// A string field counts as present only when it is a non-empty JSON string;
/// `null`, other types and `""` all take the default.
pub fn normalize_entry(entry: &Value, today: NaiveDate) -> Post {
    let empty = Map::new();
    let fields = match entry.as_object() {
        Some(fields) => fields,
        None => {
            tracing::warn!("Manifest entry is {}, using defaults", json_kind(entry));
            &empty
        }
    };

    let text = |key: &str, default: &str| -> String {
        match fields.get(key) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => default.to_string(),
        }
    };

    Post {
        file: text("file", DEFAULT_FILE),
        title: text("title", DEFAULT_TITLE),
        date: text("date", &today.format(DATE_FORMAT).to_string()),
        tags: fields.get("tags").map(tag_list).unwrap_or_default(),
        category: text("category", DEFAULT_CATEGORY),
        description: text("description", DEFAULT_DESCRIPTION),
        excerpt: text("excerpt", DEFAULT_EXCERPT),
    }
}

/// Keep an array of tags as given; anything that is not an array means no tags
fn tag_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Sort newest first
///
/// Posts whose date cannot be read go after all dated posts. The sort is
/// stable, so equal dates keep manifest order.
pub fn sort_by_recency(posts: &mut [Post]) {
    posts.sort_by_cached_key(|post| {
        let date = post.published_on();
        (date.is_none(), Reverse(date))
    });
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let posts = normalize_posts(json!([{}]), today()).unwrap();
        assert_eq!(
            posts,
            vec![Post {
                file: String::new(),
                title: "Untitled".to_string(),
                date: "2024-12-25".to_string(),
                tags: Vec::new(),
                category: String::new(),
                description: String::new(),
                excerpt: String::new(),
            }]
        );
    }

    #[test]
    fn test_present_fields_are_kept() {
        let manifest = json!([{
            "file": "intro.md",
            "title": "Intro",
            "date": "2024-01-01",
            "tags": ["blog", "rust"],
            "category": "General",
            "description": "First post",
            "excerpt": "Hello there"
        }]);
        let post = &normalize_posts(manifest, today()).unwrap()[0];
        assert_eq!(post.file, "intro.md");
        assert_eq!(post.title, "Intro");
        assert_eq!(post.date, "2024-01-01");
        assert_eq!(post.tags, ["blog", "rust"]);
        assert_eq!(post.category, "General");
        assert_eq!(post.description, "First post");
        assert_eq!(post.excerpt, "Hello there");
    }

    #[test]
    fn test_wrong_types_and_empty_strings_take_defaults() {
        let manifest = json!([{
            "title": "",
            "date": null,
            "tags": "rust",
            "category": 7,
            "excerpt": false
        }]);
        let post = &normalize_posts(manifest, today()).unwrap()[0];
        assert_eq!(post.title, DEFAULT_TITLE);
        assert_eq!(post.date, "2024-12-25");
        assert!(post.tags.is_empty());
        assert_eq!(post.category, "");
        assert_eq!(post.excerpt, "");
    }

    #[test]
    fn test_tags_array_kept_verbatim() {
        let manifest = json!([{ "tags": ["a", 1, null, "a"] }]);
        let post = &normalize_posts(manifest, today()).unwrap()[0];
        assert_eq!(post.tags, ["a", "1", "null", "a"]);
    }

    #[test]
    fn test_non_object_entry_is_all_defaults() {
        let posts = normalize_posts(json!([42]), today()).unwrap();
        assert_eq!(posts[0].title, DEFAULT_TITLE);
        assert_eq!(posts[0].file, "");
    }

    #[test]
    fn test_non_array_manifest_is_rejected() {
        let err = normalize_posts(json!({ "posts": [] }), today()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedManifest { found: "an object" }
        ));
    }

    #[test]
    fn test_sorted_newest_first() {
        let manifest = json!([
            { "title": "Old", "date": "2023-03-01" },
            { "title": "New", "date": "2024-06-01" },
            { "title": "Mid", "date": "2024-01-01" }
        ]);
        let posts = normalize_posts(manifest, today()).unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["New", "Mid", "Old"]);

        let dates: Vec<NaiveDate> = posts.iter().filter_map(Post::published_on).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_equal_dates_keep_manifest_order() {
        let manifest = json!([
            { "title": "First", "date": "2024-01-01" },
            { "title": "Second", "date": "2024-01-01" },
            { "title": "Third", "date": "2024-01-01" }
        ]);
        let posts = normalize_posts(manifest, today()).unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let manifest = json!([
            { "title": "Broken", "date": "someday" },
            { "title": "Dated", "date": "2020-01-01" },
            { "title": "Also broken", "date": "soon" }
        ]);
        let posts = normalize_posts(manifest, today()).unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Dated", "Broken", "Also broken"]);
        assert_eq!(posts[1].date, "someday");
    }

    #[test]
    fn test_missing_date_sorts_as_today() {
        let manifest = json!([
            { "title": "Past", "date": "2024-01-01" },
            { "title": "Undated" }
        ]);
        let posts = normalize_posts(manifest, today()).unwrap();
        assert_eq!(posts[0].title, "Undated");
    }
}
