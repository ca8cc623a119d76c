//! Cookie key/value encoding

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::Result;

/// How keys and values are written into the cookie header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieEncoding {
    /// Written verbatim. Values containing `;` are truncated on read.
    #[default]
    Raw,
    /// Percent-encoded on write and decoded on read.
    Percent,
}

impl CookieEncoding {
    pub fn encode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            CookieEncoding::Raw => Cow::Borrowed(input),
            CookieEncoding::Percent => urlencoding::encode(input),
        }
    }

    pub fn decode(&self, input: &str) -> Result<String> {
        match self {
            CookieEncoding::Raw => Ok(input.to_string()),
            CookieEncoding::Percent => Ok(urlencoding::decode(input)?.into_owned()),
        }
    }
}
