use serde::{Deserialize, Serialize};

use crate::model::task::Priority;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Priority used by `add` when none is given on the command line
    #[serde(default = "default_priority")]
    pub priority: Priority,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            priority: Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// List display order. Storage order is always insertion order; this only
    /// reverses what `list` prints.
    #[serde(default = "default_true")]
    pub newest_first: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { newest_first: true }
    }
}

/// Default: see src/cli/handlers/init.rs template
fn default_priority() -> Priority {
    Priority::Medium
}

/// Default: see src/cli/handlers/init.rs template
fn default_true() -> bool {
    true
}
