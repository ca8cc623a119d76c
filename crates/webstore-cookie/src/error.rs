//! Cookie error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CookieError {
    #[error("Malformed cookie field: {0:?}")]
    Malformed(String),

    #[error("Cookie value is not valid percent-encoded UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Cookie access failed: {0}")]
    Environment(String),
}
