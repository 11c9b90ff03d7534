//! Mutation policy gate for the pfoertner glue layer.
//!
//! Create/update/delete operations are locked by default and must be opted
//! into via the environment. The [`gate`] module is the call-time check; the
//! [`config`] module lifts the same decision into an explicit configuration
//! object for apps that load config once at startup.

pub mod config;
pub mod gate;

pub use config::{load_dotenv, MutationConfig, PolicyConfig};
pub use gate::{
    mutations_enabled, ENABLE_MUTATIONS_COMPAT_VAR, ENABLE_MUTATIONS_VAR,
    MUTATIONS_DISABLED_CODE, MUTATIONS_DISABLED_MESSAGE,
};
