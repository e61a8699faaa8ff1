//! Parameter file parsing
//!
//! Param files are newline-separated `KEY=VALUE` entries. Lines without `=`
//! are skipped; the key is everything before the first `=`.

/// Parse param file content into ordered `(key, value)` pairs
///
/// Duplicates are kept in order so that layering them into a
/// `ParameterSet` lets the last assignment win.
pub fn parse_param_lines(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
