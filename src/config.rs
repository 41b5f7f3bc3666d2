//! Runtime configuration.

use std::path::PathBuf;

use crate::game::loadout::Loadout;

/// Process-level settings.
#[derive(Debug, Clone)]
pub struct KowConfig {
    /// Arena store location.
    pub arena_file: PathBuf,
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Seed for generated draft names. If None, the host picks one.
    pub builder_seed: Option<u64>,
    /// Entering-game configuration applied on join.
    pub loadout: Loadout,
}

impl Default for KowConfig {
    fn default() -> Self {
        Self {
            arena_file: PathBuf::from("arenas.json"),
            log_filter: "info".to_string(),
            builder_seed: None,
            loadout: Loadout::default(),
        }
    }
}

impl KowConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            arena_file: lookup("KOW_ARENA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.arena_file),
            log_filter: lookup("KOW_LOG").unwrap_or(defaults.log_filter),
            builder_seed: lookup("KOW_BUILDER_SEED").and_then(|v| v.trim().parse().ok()),
            loadout: defaults.loadout,
        }
    }
}
