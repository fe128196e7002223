//! Cache configuration with TTL settings.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Response cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Time-to-live in seconds (default: 10 minutes)
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,

    /// Maximum number of cached lookups per kind
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_cache_ttl() -> u64 {
    10 * 60 // 10 minutes
}

const fn default_max_entries() -> u64 {
    256
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: default_cache_ttl(),
            max_entries: default_max_entries(),
        }
    }
}
