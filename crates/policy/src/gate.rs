//! Call-time mutation gate over the process environment.

use std::env;

/// Primary opt-in variable.
pub const ENABLE_MUTATIONS_VAR: &str = "PFOERTNER_ENABLE_MUTATIONS";

/// Unprefixed compatibility key, honored alongside the primary one.
pub const ENABLE_MUTATIONS_COMPAT_VAR: &str = "ENABLE_MUTATIONS";

/// Stable error code for rejected mutation requests.
pub const MUTATIONS_DISABLED_CODE: &str = "mutations_disabled";

/// Human-readable companion to [`MUTATIONS_DISABLED_CODE`].
pub const MUTATIONS_DISABLED_MESSAGE: &str = "Mutations are locked by default. \
    Set PFOERTNER_ENABLE_MUTATIONS=1 (or ENABLE_MUTATIONS=1) to allow \
    create/update/delete operations.";

/// Whether mutations are enabled for this process.
///
/// True iff at least one of the two gate variables is set to exactly `"1"`.
/// Any other value ("true", "0", empty, unset) leaves mutations locked. The
/// environment is re-read on every call; this never fails.
pub fn mutations_enabled() -> bool {
    env_is_one(ENABLE_MUTATIONS_VAR) || env_is_one(ENABLE_MUTATIONS_COMPAT_VAR)
}

fn env_is_one(key: &str) -> bool {
    env::var(key).map(|v| v == "1").unwrap_or(false)
}
