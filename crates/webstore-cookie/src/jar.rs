//! Cookie jars
//!
//! `CookieJar` is the seam over `document.cookie`: reading yields the whole
//! header, writing takes one field with optional attributes.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::CookieError;
use crate::Result;

pub trait CookieJar {
    /// The current cookie header, `name=value` fields joined by `"; "`.
    fn cookie(&self) -> Result<String>;

    /// Write a single field, e.g. `"theme=dark"` or `"theme=; max-age=0"`.
    fn set_cookie(&self, field: &str) -> Result<()>;
}

/// In-process jar that behaves like `document.cookie` for one document.
///
/// Fields keep insertion order. Writing a name that already exists replaces
/// it in place. A `max-age` of zero or less deletes the field; every other
/// attribute is accepted and ignored.
#[derive(Clone, Default)]
pub struct MemoryCookieJar {
    fields: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar from an existing header such as `"a=1; ab=2"`.
    pub fn from_header(header: &str) -> Result<Self> {
        let jar = Self::new();
        for field in header.split(';').map(str::trim).filter(|f| !f.is_empty()) {
            jar.set_cookie(field)?;
        }
        Ok(jar)
    }

    pub fn len(&self) -> usize {
        self.fields.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.lock().is_empty()
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookie(&self) -> Result<String> {
        let fields = self.fields.lock();
        let header = fields
            .iter()
            .map(|(name, value)| {
                if name.is_empty() {
                    value.clone()
                } else {
                    format!("{name}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join("; ");
        Ok(header)
    }

    fn set_cookie(&self, field: &str) -> Result<()> {
        let mut segments = field.split(';');
        let pair = segments.next().unwrap_or_default().trim();

        // A pair without `=` is stored as a nameless value, like browsers do
        let (name, value) = match pair.split_once('=') {
            Some((name, value)) => (name.trim(), value.trim()),
            None if pair.is_empty() => return Err(CookieError::Malformed(field.to_string())),
            None => ("", pair),
        };

        let expired = segments.any(|attribute| {
            let Some((attr, value)) = attribute.trim().split_once('=') else {
                return false;
            };
            attr.trim().eq_ignore_ascii_case("max-age")
                && value.trim().parse::<i64>().is_ok_and(|age| age <= 0)
        });

        let mut fields = self.fields.lock();
        let existing = fields.iter().position(|(n, _)| n == name);

        match (existing, expired) {
            (Some(index), true) => {
                fields.remove(index);
            }
            (None, true) => {}
            (Some(index), false) => fields[index].1 = value.to_string(),
            (None, false) => fields.push((name.to_string(), value.to_string())),
        }

        tracing::trace!(name, expired, "Cookie field written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_jar() {
        let jar = MemoryCookieJar::new();
        assert_eq!(jar.cookie().unwrap(), "");
        assert!(jar.is_empty());
    }

    #[test]
    fn test_fields_join_in_insertion_order() {
        let jar = MemoryCookieJar::new();
        jar.set_cookie("a=1").unwrap();
        jar.set_cookie("ab=2").unwrap();
        assert_eq!(jar.cookie().unwrap(), "a=1; ab=2");
    }

    #[test]
    fn test_overwrite_replaces_in_place() {
        let jar = MemoryCookieJar::from_header("a=1; b=2").unwrap();
        jar.set_cookie("a=3").unwrap();
        assert_eq!(jar.cookie().unwrap(), "a=3; b=2");
        assert_eq!(jar.len(), 2);
    }

    #[test]
    fn test_attributes_are_not_part_of_the_header() {
        let jar = MemoryCookieJar::new();
        jar.set_cookie("a=1; path=/; SameSite=Lax").unwrap();
        assert_eq!(jar.cookie().unwrap(), "a=1");
    }

    #[test]
    fn test_max_age_zero_deletes() {
        let jar = MemoryCookieJar::from_header("a=1; b=2").unwrap();
        jar.set_cookie("a=; max-age=0").unwrap();
        assert_eq!(jar.cookie().unwrap(), "b=2");

        // Expiring a missing field leaves the jar alone
        jar.set_cookie("zzz=; Max-Age=-1").unwrap();
        assert_eq!(jar.cookie().unwrap(), "b=2");
    }

    #[test]
    fn test_nameless_value() {
        let jar = MemoryCookieJar::new();
        jar.set_cookie("orphan").unwrap();
        assert_eq!(jar.cookie().unwrap(), "orphan");
    }

    #[test]
    fn test_empty_field_is_malformed() {
        let jar = MemoryCookieJar::new();
        assert!(matches!(jar.set_cookie(""), Err(CookieError::Malformed(_))));
        assert!(matches!(jar.set_cookie("; path=/"), Err(CookieError::Malformed(_))));
    }

    #[test]
    fn test_clones_share_state() {
        let jar = MemoryCookieJar::new();
        let view = jar.clone();
        jar.set_cookie("theme=dark").unwrap();
        assert_eq!(view.cookie().unwrap(), "theme=dark");
    }
}
