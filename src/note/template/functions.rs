//! The functions every template can call.
//!
//! - `dateFormat(layout, date)`: formats a date, see [`crate::date::layout`].
//!   `date` is normally the record's `Date` (serialized as RFC 3339) but any of
//!   the accepted input formats works.
//! - `makeSlug(text)`: see [`crate::slug::make_slug`].
//!
//! Nothing else is injected. Templates get no file, process or environment
//! access from here.

use crate::date::{format_date, parse_date};
use crate::slug::make_slug;
use minijinja::{Environment, Error, ErrorKind};

pub const DATE_FORMAT: &str = "dateFormat";
pub const MAKE_SLUG: &str = "makeSlug";

/// Registers `dateFormat` and `makeSlug` on a template environment.
pub fn register(env: &mut Environment<'_>) {
    env.add_function(DATE_FORMAT, date_format);
    env.add_function(MAKE_SLUG, slug);
}

fn date_format(layout: String, date: String) -> Result<String, Error> {
    let dt = parse_date(&date).map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;
    format_date(&layout, &dt).map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
}

fn slug(text: String) -> String {
    make_slug(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn render(source: &str, ctx: minijinja::Value) -> Result<String, Error> {
        let mut env = Environment::new();
        register(&mut env);
        env.render_str(source, ctx)
    }

    #[test]
    fn test_make_slug_function() {
        let out = render("{{ makeSlug(Title) }}", context! { Title => "My test note " }).unwrap();
        assert_eq!(out, "my-test-note");
    }

    #[test]
    fn test_date_format_function() {
        let out = render(
            r#"{{ dateFormat("20060102", Date) }}"#,
            context! { Date => "1985-10-26T00:00:00+02:00" },
        )
        .unwrap();
        assert_eq!(out, "19851026");
    }

    #[test]
    fn test_date_format_accepts_plain_dates() {
        let out = render(r#"{{ dateFormat("%Y", "1985-10-26") }}"#, context! {}).unwrap();
        assert_eq!(out, "1985");
    }

    #[test]
    fn test_date_format_bad_date_fails() {
        let err = render(r#"{{ dateFormat("2006", "someday") }}"#, context! {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_unknown_function_fails() {
        assert!(render("{{ readFile('/etc/passwd') }}", context! {}).is_err());
    }
}
