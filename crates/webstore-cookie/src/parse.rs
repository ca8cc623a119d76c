//! Cookie header parsing
//!
//! The header is treated as `"; " + header` and split on `"; " + key + "="`.
//! A key only matches at a field boundary, so `a` never matches inside `ab=2`.
//! A key that appears more than once in the header is reported as missing.
//! Values are returned raw; encoding is the caller's business.

/// Extract the raw value of `key` from a cookie header such as `"a=1; b=2"`.
pub fn extract(header: &str, key: &str) -> Option<String> {
    let haystack = format!("; {header}");
    let delimiter = format!("; {key}=");

    let mut parts = haystack.split(delimiter.as_str());
    parts.next()?;
    let tail = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    tail.split(';').next().map(str::to_string)
}

/// Format an attribute-less field. Browsers keep such a cookie for the session.
pub fn format_field(key: &str, value: &str) -> String {
    format!("{key}={value}")
}

/// Format a field that expires `key` immediately.
pub fn expire_field(key: &str) -> String {
    format!("{key}=; max-age=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_field() {
        assert_eq!(extract("theme=dark", "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_extract_middle_field() {
        let header = "a=1; theme=dark; b=2";
        assert_eq!(extract(header, "theme").as_deref(), Some("dark"));
        assert_eq!(extract(header, "b").as_deref(), Some("2"));
    }

    #[test]
    fn test_extract_respects_field_boundary() {
        let header = "a=1; ab=2";
        assert_eq!(extract(header, "a").as_deref(), Some("1"));
        assert_eq!(extract(header, "ab").as_deref(), Some("2"));
        assert_eq!(extract(header, "b"), None);

        // A key that only appears as a suffix of another key
        assert_eq!(extract("xa=1", "a"), None);
    }

    #[test]
    fn test_extract_missing_and_empty_header() {
        assert_eq!(extract("", "theme"), None);
        assert_eq!(extract("a=1", "theme"), None);
    }

    #[test]
    fn test_extract_duplicate_key_is_a_miss() {
        assert_eq!(extract("theme=dark; theme=light", "theme"), None);
    }

    #[test]
    fn test_extract_empty_value() {
        assert_eq!(extract("theme=; a=1", "theme").as_deref(), Some(""));
    }

    #[test]
    fn test_extract_keeps_equals_in_value() {
        assert_eq!(extract("token=abc==", "token").as_deref(), Some("abc=="));
    }

    #[test]
    fn test_extract_truncates_unencoded_semicolon() {
        // Known limitation of raw values: a `;` ends the value
        assert_eq!(extract("note=a;b", "note").as_deref(), Some("a"));
    }

    #[test]
    fn test_format_fields() {
        assert_eq!(format_field("theme", "dark"), "theme=dark");
        assert_eq!(expire_field("theme"), "theme=; max-age=0");
    }
}
