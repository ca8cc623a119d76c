//! WebStore Cookie Fallback
//!
//! Everything the fallback store needs to treat `document.cookie` as a
//! key/value store:
//! - boundary-based extraction of a single field from the cookie header
//! - attribute-less `key=value` field formatting (session lifetime)
//! - optional percent encoding of keys and values
//! - the `CookieJar` seam plus an in-memory jar with browser semantics

mod encoding;
mod error;
mod jar;
mod parse;

pub use encoding::CookieEncoding;
pub use error::CookieError;
pub use jar::{CookieJar, MemoryCookieJar};
pub use parse::{expire_field, extract, format_field};

pub type Result<T> = std::result::Result<T, CookieError>;
