// crates/feed-parser/src/coerce.rs
//! Nil-preserving field coercion shared by both dialects
//!
//! Every helper maps `None` to `None` and turns anything it cannot convert
//! into `None` as well. Optional feed fields are frequently broken in the
//! wild and must not fail the whole parse.

use url::Url;

/// Trims the value; empty after trimming becomes `None`
pub fn text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses an absolute URL (any scheme, with an authority or a path)
pub fn url(value: Option<&str>) -> Option<Url> {
    let raw = text(value)?;
    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            log::trace!("Ignoring invalid URL {:?}: {}", raw, e);
            None
        }
    }
}

/// Parses a base-10 integer with an optional sign
pub fn integer(value: Option<&str>) -> Option<i64> {
    let raw = text(value)?;
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => {
            log::trace!("Ignoring invalid integer {:?}: {}", raw, e);
            None
        }
    }
}

/// Case-insensitive `true`/`false`; anything other than `true` is `false`
pub fn boolean(value: Option<&str>) -> Option<bool> {
    text(value).map(|raw| raw.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trims_and_folds_empty() {
        assert_eq!(text(Some("  hi \n")), Some("hi".to_string()));
        assert_eq!(text(Some(" \t\n ")), None);
        assert_eq!(text(Some("")), None);
        assert_eq!(text(None), None);
    }

    #[test]
    fn test_url_requires_scheme() {
        assert_eq!(
            url(Some(" https://example.com/feed ")).map(|u| u.to_string()),
            Some("https://example.com/feed".to_string())
        );
        assert!(url(Some("mailto:editor@example.com")).is_some());
        assert!(url(Some("urn:isbn:0451450523")).is_some());
        assert!(url(Some("example.com/feed")).is_none());
        assert!(url(Some("http://")).is_none());
        assert!(url(Some("   ")).is_none());
        assert!(url(None).is_none());
    }

    #[test]
    fn test_integer_accepts_sign() {
        assert_eq!(integer(Some("60")), Some(60));
        assert_eq!(integer(Some(" +15 ")), Some(15));
        assert_eq!(integer(Some("-3")), Some(-3));
        assert_eq!(integer(Some("1.5")), None);
        assert_eq!(integer(Some("ten")), None);
        assert_eq!(integer(Some("")), None);
        assert_eq!(integer(None), None);
    }

    #[test]
    fn test_boolean_case_insensitive() {
        assert_eq!(boolean(Some("TRUE")), Some(true));
        assert_eq!(boolean(Some("true")), Some(true));
        assert_eq!(boolean(Some("FALSE")), Some(false));
        assert_eq!(boolean(Some("yes")), Some(false));
        assert_eq!(boolean(Some(" ")), None);
        assert_eq!(boolean(None), None);
    }
}
