//! Environment variable parsing helpers shared by service configuration

use std::str::FromStr;

/// Parse an environment variable, falling back to `default` when the
/// variable is missing or does not parse.
///
/// # Example
/// ```ignore
/// let port: u16 = parse_env_with_default("HTTP_PORT", 8080);
/// ```
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read a comma-separated list. Blank entries are dropped; a missing
/// variable yields `default`.
pub fn parse_env_list(key: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(key) {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}
