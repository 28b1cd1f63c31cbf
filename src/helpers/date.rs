//! Date helper functions

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

/// Used when a configured format does not translate to a valid chrono format
const FALLBACK_FORMAT: &str = "%Y-%m-%d";

/// Letters that start a Moment.js date token
const TOKEN_LETTERS: [char; 4] = ['Y', 'M', 'D', 'd'];

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// format_date(&date, "MMMM D, YYYY") // -> "January 15, 2024"
/// format_date(&date, "[Posted] D MMM") // -> "Posted 15 Jan"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    let items: Vec<Item> = StrftimeItems::new(&chrono_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        tracing::warn!("Invalid date format {:?}, using {}", format, FALLBACK_FORMAT);
        return date.format(FALLBACK_FORMAT).to_string();
    }
    date.format_with_items(items.into_iter()).to_string()
}

/// Generate a <time> HTML element
pub fn time_tag(date: &NaiveDate, format: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date.format("%Y-%m-%d"),
        format_date(date, format)
    )
}

/// Convert Moment.js format to chrono format
///
/// Tokens are runs of one repeated letter. A run touching a letter that is
/// not a token letter is part of a word and is copied as is, as is any text
/// inside `[...]`. Literal `%` is escaped.
fn moment_to_chrono_format(format: &str) -> String {
    let chars: Vec<char> = format.chars().collect();
    let mut result = String::with_capacity(format.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '[' {
            if let Some(len) = chars[i + 1..].iter().position(|&next| next == ']') {
                for &literal in &chars[i + 1..i + 1 + len] {
                    push_literal(&mut result, literal);
                }
                i += len + 2;
                continue;
            }
        }

        if !TOKEN_LETTERS.contains(&c) {
            push_literal(&mut result, c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&next| next == c).count();
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + run);
        let token = if is_word_letter(before) || is_word_letter(after) {
            None
        } else {
            chrono_token(c, run)
        };

        match token {
            Some(spec) => result.push_str(spec),
            None => chars[i..i + run]
                .iter()
                .for_each(|&literal| push_literal(&mut result, literal)),
        }
        i += run;
    }

    result
}

fn chrono_token(letter: char, run: usize) -> Option<&'static str> {
    let spec = match (letter, run) {
        ('Y', 4) | ('Y', 1) => "%Y",
        ('Y', 2) => "%y",
        ('M', 4) => "%B",
        ('M', 3) => "%b",
        ('M', 2) => "%m",
        ('M', 1) => "%-m",
        ('D', 4) => "%j",
        ('D', 3) => "%-j",
        ('D', 2) => "%d",
        ('D', 1) => "%-d",
        ('d', 4) => "%A",
        ('d', 3) | ('d', 2) => "%a",
        ('d', 1) => "%w",
        _ => return None,
    };
    Some(spec)
}

fn is_word_letter(c: Option<&char>) -> bool {
    c.is_some_and(|c| c.is_ascii_alphabetic() && !TOKEN_LETTERS.contains(c))
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&date(), "YYYY/MM/DD"), "2024/01/05");
        assert_eq!(format_date(&date(), "MMMM D, YYYY"), "January 5, 2024");
        assert_eq!(format_date(&date(), "ddd, MMM DD"), "Fri, Jan 05");
    }

    #[test]
    fn test_format_date_with_percent() {
        assert_eq!(
            format_date(&date(), "D MMMM YYYY (100%)"),
            "5 January 2024 (100%)"
        );
        assert_eq!(format_date(&date(), "%"), "%");
        assert_eq!(format_date(&date(), "%Y"), "%Y");
    }

    #[test]
    fn test_format_date_single_letter_tokens() {
        assert_eq!(format_date(&date(), "YYYY년 M월 D일"), "2024년 1월 5일");
        assert_eq!(format_date(&date(), "D.M.YY"), "5.1.24");
    }

    #[test]
    fn test_format_date_keeps_words() {
        assert_eq!(format_date(&date(), "Date: D"), "Date: 5");
        assert_eq!(format_date(&date(), "[Day] DDD [of] YYYY"), "Day 5 of 2024");
        assert_eq!(format_date(&date(), "[unclosed YYYY"), "[unclosed 2024");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag(&date(), "MMMM D, YYYY"),
            r#"<time datetime="2024-01-05">January 5, 2024</time>"#
        );
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("MMMM D, YYYY"), "%B %-d, %Y");
        assert_eq!(moment_to_chrono_format("100%"), "100%%");
        assert_eq!(moment_to_chrono_format("YYYYY"), "YYYYY");
    }
}
