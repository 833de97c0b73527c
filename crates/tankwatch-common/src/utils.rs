//! Validation helpers

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid regex pattern"));

/// Whether `name` is safe to interpolate into SQL as a table identifier.
///
/// The telemetry table name is operator-configured and cannot be bound as a
/// query parameter, so it must be restricted to plain identifier characters.
pub fn is_safe_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}
