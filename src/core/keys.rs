//! Raw key to pure key resolution.
//!
//! A raw key is the literal first argument of a translation call. It may
//! carry a namespace prefix separated by `:` (e.g. `"dashboard:title"`).
//! The pure key is that literal with the prefix stripped, and it is only
//! meaningful relative to one target namespace.

pub const NAMESPACE_SEPARATOR: char = ':';

/// Split a raw key on its first `:` into `(prefix, rest)`.
///
/// Returns `None` for keys without a separator.
pub fn split_namespace(raw_key: &str) -> Option<(&str, &str)> {
    raw_key.split_once(NAMESPACE_SEPARATOR)
}

/// Resolve the pure key of `raw_key` within `namespace`.
///
/// - Without a separator, the raw key is the pure key only when
///   `is_default` is set for this namespace.
/// - With a separator, the prefix must equal `namespace`; the remainder
///   after the first `:` is the pure key.
pub fn pure_key<'a>(raw_key: &'a str, namespace: &str, is_default: bool) -> Option<&'a str> {
    match split_namespace(raw_key) {
        None if is_default => Some(raw_key),
        None => None,
        Some((prefix, rest)) if prefix == namespace => Some(rest),
        Some(_) => None,
    }
}
