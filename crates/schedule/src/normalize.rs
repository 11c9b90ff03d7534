//! Canonical 5-field normalization of user-supplied schedule strings.

use tracing::debug;

/// Normalize an optional schedule string to canonical 5-field cron.
///
/// Accepts two shapes: 5 fields (`min hour dom month dow`) or 6 fields with a
/// leading seconds field, which is discarded. Leading/trailing whitespace is
/// trimmed and internal runs collapse to single spaces. Anything else —
/// absent, empty, whitespace-only, or a field count outside {5, 6} — yields
/// `None`; no error is raised and field *content* is not checked.
///
/// Normalizing an already-canonical expression returns it unchanged.
pub fn normalize_schedule(expr: Option<&str>) -> Option<String> {
    let tokens: Vec<&str> = expr?.split_whitespace().collect();
    match tokens.len() {
        5 => Some(tokens.join(" ")),
        6 => {
            debug!(seconds = %tokens[0], "dropping seconds field from 6-field cron");
            Some(tokens[1..].join(" "))
        }
        _ => None,
    }
}
