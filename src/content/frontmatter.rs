//! Front-matter parsing

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::post::parse_date_string;

/// Header delimiter line
const DELIMITER: &str = "---";

/// The only key whose value may be a list
const TAGS_KEY: &str = "tags";

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontMatterValue {
    Text(String),
    List(Vec<String>),
}

impl FrontMatterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FrontMatterValue::Text(s) => Some(s),
            FrontMatterValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FrontMatterValue::List(items) => Some(items),
            FrontMatterValue::Text(_) => None,
        }
    }
}

/// Front-matter header of a post document, in the order the keys appear
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    entries: IndexMap<String, FrontMatterValue>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Never fails: a document without a complete `---` block is all body,
    /// and header lines that cannot be read are skipped. A leading byte
    /// order mark is ignored.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let Some(rest) = strip_delimiter_line(content) else {
            return (FrontMatter::default(), content);
        };

        let mut header_lines = Vec::new();
        let mut remaining = rest;
        loop {
            if remaining.is_empty() {
                // No closing ---, treat as no front-matter
                return (FrontMatter::default(), content);
            }
            if let Some(body) = strip_delimiter_line(remaining) {
                let fm = Self::from_lines(header_lines);
                return (fm, body);
            }
            let (line, next) = split_line(remaining);
            header_lines.push(line);
            remaining = next;
        }
    }

    fn from_lines(lines: Vec<&str>) -> Self {
        let mut fm = FrontMatter::default();

        for line in lines {
            let Some((key, value)) = line.split_once(':') else {
                if !line.trim().is_empty() {
                    tracing::debug!("Ignoring front-matter line without a key: {:?}", line);
                }
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                tracing::debug!("Ignoring front-matter line with an empty key: {:?}", line);
                continue;
            }

            let value = strip_quotes(value.trim());
            let value = if key == TAGS_KEY && is_bracketed(value) {
                FrontMatterValue::List(parse_tag_list(value))
            } else {
                FrontMatterValue::Text(value.to_string())
            };

            fm.entries.insert(key.to_string(), value);
        }

        fm
    }

    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.entries.get(key)
    }

    /// Text value of a key; list values are not text
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FrontMatterValue::as_text)
    }

    /// Tags, when the header declares them as a list
    pub fn tags(&self) -> &[String] {
        self.get(TAGS_KEY)
            .and_then(FrontMatterValue::as_list)
            .unwrap_or(&[])
    }

    /// Parse the `date` value into a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.text("date").and_then(parse_date_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontMatterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order in which bracketed tag values are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagListStrategy {
    /// `["a", "b"]` as a JSON array of scalars
    Structured,
    /// `[a, 'b', "c"]` split on commas
    CommaSeparated,
}

impl TagListStrategy {
    const PRECEDENCE: [TagListStrategy; 2] =
        [TagListStrategy::Structured, TagListStrategy::CommaSeparated];

    fn apply(self, value: &str) -> Option<Vec<String>> {
        match self {
            TagListStrategy::Structured => parse_structured_tags(value),
            TagListStrategy::CommaSeparated => Some(parse_comma_tags(value)),
        }
    }
}

fn parse_tag_list(value: &str) -> Vec<String> {
    TagListStrategy::PRECEDENCE
        .iter()
        .find_map(|strategy| {
            let tags = strategy.apply(value);
            if tags.is_none() {
                tracing::debug!("Tag list {:?} rejected by {:?} parsing", value, strategy);
            }
            tags
        })
        .unwrap_or_default()
}

fn parse_structured_tags(value: &str) -> Option<Vec<String>> {
    let items: Vec<serde_json::Value> = serde_json::from_str(value).ok()?;
    items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

fn parse_comma_tags(value: &str) -> Vec<String> {
    let inner = &value[1..value.len() - 1];
    inner
        .split(',')
        .map(|item| {
            let item = item.trim();
            let item = item.strip_prefix(['"', '\'']).unwrap_or(item);
            let item = item.strip_suffix(['"', '\'']).unwrap_or(item);
            item.to_string()
        })
        .collect()
}

fn is_bracketed(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('[') && value.ends_with(']')
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Split off the first line, returning it without its line ending
fn split_line(content: &str) -> (&str, &str) {
    match content.find('\n') {
        Some(pos) => {
            let line = &content[..pos];
            (line.strip_suffix('\r').unwrap_or(line), &content[pos + 1..])
        }
        None => (content, ""),
    }
}

/// If the first line is exactly `---`, return what follows it
fn strip_delimiter_line(content: &str) -> Option<&str> {
    let (line, rest) = split_line(content);
    (line == DELIMITER).then_some(rest)
}
