//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters left alone by JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use as a query parameter
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Link to the page displaying a single post
///
/// # Examples
/// ```ignore
/// post_url(&config, "notes/a b.md") // -> "post.html?file=notes%2Fa%20b.md"
/// ```
pub fn post_url(config: &SiteConfig, file: &str) -> String {
    format!("{}?file={}", config.post_page, encode_component(file))
}
