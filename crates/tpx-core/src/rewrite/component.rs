//! Query-string component append and encoding.

use url::form_urlencoded;

/// Appends a raw `key=value` component to `url`, using `?` when the URL has
/// no query string yet and `&` otherwise.
pub fn add_url_component(url: &str, component: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, sep, component)
}

/// URL-encodes a query component (`@` becomes `%40`, etc.).
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
