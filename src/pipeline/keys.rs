//! Cache key derivation.

/// Derive the cache key for `(pattern, bound params)`.
///
/// Deterministic and injective: identical bindings always produce the
/// same key, distinct bindings always produce distinct keys. Fields are
/// joined with the ASCII unit/record separators, which cannot appear in
/// a parsed URL path segment, so no value can forge another binding.
pub fn cache_key(pattern: &str, params: &[(String, String)]) -> String {
    let mut key = String::with_capacity(
        pattern.len() + params.iter().map(|(n, v)| n.len() + v.len() + 2).sum::<usize>(),
    );
    key.push_str(pattern);
    for (name, value) in params {
        key.push('\u{1f}');
        key.push_str(name);
        key.push('\u{1e}');
        key.push_str(value);
    }
    key
}
