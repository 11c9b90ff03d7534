use std::env;

use serde::{Deserialize, Serialize};

use crate::gate::{ENABLE_MUTATIONS_COMPAT_VAR, ENABLE_MUTATIONS_VAR};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub mutations: MutationConfig,
}

impl PolicyConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            mutations: MutationConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Policy config loaded:");
        tracing::info!(
            "  mutations:   {}",
            if self.mutations.mutations_enabled() { "enabled" } else { "locked" }
        );
    }

    /// Return a view safe for API responses.
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "mutations": { "enabled": self.mutations.mutations_enabled() },
        })
    }
}

// ── Mutation gate ─────────────────────────────────────────────

/// Snapshot of the two mutation-gate variables, taken at config load.
///
/// This is the injected-config form of [`crate::gate::mutations_enabled`]:
/// same decision, but a pure function of an explicit value instead of the
/// process environment, so callers can construct it directly in tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationConfig {
    pub enable: Option<String>,
    pub enable_compat: Option<String>,
}

impl MutationConfig {
    fn from_env() -> Self {
        Self {
            enable: env_opt(ENABLE_MUTATIONS_VAR),
            enable_compat: env_opt(ENABLE_MUTATIONS_COMPAT_VAR),
        }
    }

    /// True iff either captured value is exactly `"1"`.
    pub fn mutations_enabled(&self) -> bool {
        self.enable.as_deref() == Some("1") || self.enable_compat.as_deref() == Some("1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_locks_mutations() {
        let cfg = MutationConfig::default();
        assert!(!cfg.mutations_enabled());
    }

    #[test]
    fn primary_value_of_one_enables() {
        let cfg = MutationConfig {
            enable: Some("1".to_string()),
            enable_compat: None,
        };
        assert!(cfg.mutations_enabled());
    }

    #[test]
    fn compat_value_of_one_enables() {
        let cfg = MutationConfig {
            enable: None,
            enable_compat: Some("1".to_string()),
        };
        assert!(cfg.mutations_enabled());
    }

    #[test]
    fn non_one_values_stay_locked() {
        for v in ["true", "0", "yes", " 1", "11"] {
            let cfg = MutationConfig {
                enable: Some(v.to_string()),
                enable_compat: Some(v.to_string()),
            };
            assert!(!cfg.mutations_enabled(), "value {v:?} should not enable");
        }
    }

    #[test]
    fn redacted_summary_reports_state() {
        let cfg = PolicyConfig {
            mutations: MutationConfig {
                enable: Some("1".to_string()),
                enable_compat: None,
            },
        };
        assert_eq!(cfg.redacted_summary()["mutations"]["enabled"], true);
    }
}
