//! Origin normalization

use url::Url;

use crate::error::StorageError;
use crate::Result;

/// Normalize an origin or page URL to `scheme://host[:port]`.
///
/// Opaque origins (`data:`, `file:` on most hosts, `about:blank`) have no
/// stable serialization and are rejected.
pub fn normalize_origin(input: &str) -> Result<String> {
    let url = Url::parse(input).map_err(|e| StorageError::InvalidOrigin(format!("{input}: {e}")))?;
    let origin = url.origin();

    if !origin.is_tuple() {
        return Err(StorageError::InvalidOrigin(input.to_string()));
    }

    Ok(origin.ascii_serialization())
}
