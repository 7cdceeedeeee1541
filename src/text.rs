//! Key/value string parsing.
//!
//! Splits an input such as `a=1&b=2&c=3=4` into a map, one entry per
//! separator-delimited segment. Each segment is split on the **first**
//! key/value delimiter only, so `c=3=4` parses to `("c", "3=4")`. Segments
//! that do not parse are skipped; when the same key appears twice the last
//! occurrence wins.

use std::collections::HashMap;

/// Parses `input` into a key/value map using a caller-supplied entry parser.
///
/// The input is split on `separator`; `parse` turns each segment into a
/// `(key, value)` pair, and segments it rejects are silently skipped.
///
/// # Examples
///
/// ```rust
/// use seqkit::text::parse_kv_with;
///
/// let parsed = parse_kv_with("a=1;b=2;c=3=4;broken", ";", |entry| {
///     entry
///         .split_once('=')
///         .map(|(k, v)| (k.to_owned(), v.to_owned()))
///         .ok_or("missing delimiter")
/// });
/// assert_eq!(parsed["c"], "3=4");
/// assert!(!parsed.contains_key("broken"));
/// ```
#[must_use]
pub fn parse_kv_with<F, E>(input: &str, separator: &str, mut parse: F) -> HashMap<String, String>
where
    F: FnMut(&str) -> Result<(String, String), E>,
{
    let mut map = HashMap::new();
    for entry in input.split(separator) {
        if let Ok((key, value)) = parse(entry) {
            map.insert(key, value);
        }
    }
    map
}

/// Parses a `;`-separated list of `key:value` entries.
///
/// Each entry is split on the first `:`; entries without one are skipped.
///
/// # Examples
///
/// ```rust
/// use seqkit::text::parse_kv;
///
/// let parsed = parse_kv("a:1;b:2;c:3=4;d:5");
/// assert_eq!(parsed["c"], "3=4");
/// assert_eq!(parsed["d"], "5");
/// ```
#[must_use]
pub fn parse_kv(input: &str) -> HashMap<String, String> {
    split_entries(input, ";", ':')
}

/// Parses a query-string style `&`-separated list of `key=value` entries.
///
/// Each entry is split on the first `=`; entries without one are skipped.
///
/// # Examples
///
/// ```rust
/// use seqkit::text::parse_query;
///
/// let parsed = parse_query("a=1&b=2&c=3=4");
/// assert_eq!(parsed["a"], "1");
/// assert_eq!(parsed["c"], "3=4");
/// ```
#[must_use]
pub fn parse_query(input: &str) -> HashMap<String, String> {
    split_entries(input, "&", '=')
}

fn split_entries(input: &str, separator: &str, delimiter: char) -> HashMap<String, String> {
    parse_kv_with(input, separator, |entry| {
        entry
            .split_once(delimiter)
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .ok_or(())
    })
}
