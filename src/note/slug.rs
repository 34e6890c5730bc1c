//! Slugs: lowercase ASCII words joined by single hyphens.
//!
//! Non-ASCII text is transliterated with [`deunicode`] first, so `"Crème brûlée"`
//! becomes `"creme-brulee"` and `"北京"` becomes `"bei-jing"`. Anything that
//! still isn't a letter or digit acts as a word separator. `&` and `@` are
//! spelled out as words.
//!
//! The output always matches `^[a-z0-9]+(-[a-z0-9]+)*$` or is empty, and
//! slugifying a slug returns it unchanged.

use deunicode::deunicode;

/// Normalizes arbitrary text into a filesystem and URL safe token.
pub fn make_slug(input: &str) -> String {
    let ascii = deunicode(input);

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for ch in ascii.chars() {
        let word = match ch {
            '&' => Some("and"),
            '@' => Some("at"),
            _ => None,
        };

        if let Some(word) = word {
            if !slug.is_empty() {
                slug.push('-');
            }
            slug.push_str(word);
            pending_dash = true;
            continue;
        }

        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &[&str] = &[
        "",
        " ",
        "---",
        "My test note ",
        "Review Slides",
        "  multiple   spaces  ",
        "Hello, World!",
        "already-slugified",
        "CamelCase",
        "x402 Payment Protocol",
        "Crème brûlée",
        "Ærøskøbing",
        "北京",
        "Tom & Jerry",
        "mail@example.com",
        "&&&",
        "a--b__c..d",
        "-leading and trailing-",
        "tabs\tand\nnewlines",
        "emoji 🎉 party",
        "100% done",
        "ß",
    ];

    fn is_slug_shaped(s: &str) -> bool {
        s.is_empty()
            || (!s.starts_with('-')
                && !s.ends_with('-')
                && !s.contains("--")
                && s
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
    }

    #[test]
    fn test_basic_titles() {
        assert_eq!(make_slug("My test note "), "my-test-note");
        assert_eq!(make_slug("Review Slides"), "review-slides");
        assert_eq!(make_slug("Hello, World!"), "hello-world");
        assert_eq!(make_slug("  multiple   spaces  "), "multiple-spaces");
        assert_eq!(make_slug("CamelCase"), "camelcase");
        assert_eq!(make_slug("x402 Payment Protocol"), "x402-payment-protocol");
    }

    #[test]
    fn test_transliteration() {
        assert_eq!(make_slug("Crème brûlée"), "creme-brulee");
        assert_eq!(make_slug("Ærøskøbing"), "aeroskobing");
    }

    #[test]
    fn test_symbols_spelled_out() {
        assert_eq!(make_slug("Tom & Jerry"), "tom-and-jerry");
        assert_eq!(make_slug("mail@example.com"), "mail-at-example-com");
        assert_eq!(make_slug("&&&"), "and-and-and");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(make_slug(""), "");
        assert_eq!(make_slug("   "), "");
        assert_eq!(make_slug("---"), "");
        assert_eq!(make_slug("!?!"), "");
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(make_slug("a--b__c..d"), "a-b-c-d");
        assert_eq!(make_slug("-leading and trailing-"), "leading-and-trailing");
        assert_eq!(make_slug("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_output_shape_over_corpus() {
        for input in CORPUS {
            let slug = make_slug(input);
            assert!(is_slug_shaped(&slug), "{input:?} produced {slug:?}");
        }
    }

    #[test]
    fn test_idempotent_over_corpus() {
        for input in CORPUS {
            let once = make_slug(input);
            assert_eq!(make_slug(&once), once, "not idempotent for {input:?}");
        }
    }
}
