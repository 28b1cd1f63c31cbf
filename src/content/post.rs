//! Post and post document models

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::FrontMatter;

/// Title shown for posts that do not carry one
pub const DEFAULT_TITLE: &str = "Untitled";

/// A blog post as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Document identifier, relative to the pages directory
    pub file: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the manifest
    pub date: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Post category
    pub category: String,

    /// Short summary
    pub description: String,

    /// Post excerpt
    pub excerpt: String,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(file: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            title: title.into(),
            date: date.into(),
            tags: Vec::new(),
            category: String::new(),
            description: String::new(),
            excerpt: String::new(),
        }
    }

    /// Publication date, if the manifest value is a recognizable date
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_date_string(&self.date)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A single post loaded from its markdown document
#[derive(Debug, Clone, Serialize)]
pub struct PostDocument {
    /// Document identifier the post was loaded from
    pub file: String,

    /// Parsed header
    pub front_matter: FrontMatter,

    /// Markdown body after the header
    pub body: String,
}

impl PostDocument {
    pub fn new(file: impl Into<String>, raw: &str) -> Self {
        let (front_matter, body) = FrontMatter::parse(raw);
        Self {
            file: file.into(),
            body: body.to_string(),
            front_matter,
        }
    }

    pub fn title(&self) -> &str {
        match self.front_matter.text("title") {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_TITLE,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.front_matter.parse_date()
    }

    pub fn category(&self) -> &str {
        self.front_matter.text("category").unwrap_or_default()
    }

    pub fn tags(&self) -> &[String] {
        self.front_matter.tags()
    }
}

/// Parse a date string in various formats
pub(crate) fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 keeps the calendar date as written, not shifted to local time
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
