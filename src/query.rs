//! Query string parsing.

use std::collections::BTreeMap;
use url::{Url, form_urlencoded};

/// Decodes a `?a=1&b=2` search string into a map.
///
/// The leading `?` is optional. Keys and values are form decoded (`+` is a
/// space, `%xx` escapes are resolved). A repeated key keeps its last value.
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(search.as_bytes())
        .into_owned()
        .collect()
}

/// Query parameters of an absolute URL.
///
/// # Errors
/// Returns the `url::ParseError` when `url` is not an absolute URL.
pub fn url_params(url: &str) -> Result<BTreeMap<String, String>, url::ParseError> {
    let url = Url::parse(url)?;
    Ok(url.query_pairs().into_owned().collect())
}
