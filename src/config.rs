//! Taskrelay global configuration module
//!
//! Provides centralized configuration for retry defaults and limits.

use once_cell::sync::Lazy;
use std::sync::RwLock;

/// Taskrelay global configuration
///
/// Contains system-wide defaults applied when building tasks without
/// explicit retry settings.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Default number of retry attempts for new tasks (default: 0, retries disabled)
    pub default_number_of_retries: u32,

    /// Default retry interval in milliseconds for new tasks (default: 0)
    pub default_retry_interval_ms: u64,

    /// Maximum allowed number of retry attempts per task (default: 50)
    pub max_number_of_retries: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            default_number_of_retries: 0,
            default_retry_interval_ms: 0,
            max_number_of_retries: 50,
        }
    }
}

impl RelayConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set default number of retries
    #[must_use]
    pub fn with_default_number_of_retries(mut self, retries: u32) -> Self {
        self.default_number_of_retries = retries;
        self
    }

    /// Set default retry interval in milliseconds
    #[must_use]
    pub fn with_default_retry_interval_ms(mut self, interval_ms: u64) -> Self {
        self.default_retry_interval_ms = interval_ms;
        self
    }

    /// Set maximum number of retries
    #[must_use]
    pub fn with_max_number_of_retries(mut self, max: u32) -> Self {
        self.max_number_of_retries = max;
        self
    }

    /// Validate a retry count against the configured maximum
    pub fn validate_number_of_retries(&self, retries: u32) -> Result<(), String> {
        if retries > self.max_number_of_retries {
            Err(format!(
                "number of retries must not exceed {}, got {}",
                self.max_number_of_retries, retries
            ))
        } else {
            Ok(())
        }
    }
}

/// Thread-safe global configuration storage
static GLOBAL_CONFIG: Lazy<RwLock<RelayConfig>> =
    Lazy::new(|| RwLock::new(RelayConfig::default()));

/// Get the current global configuration
pub fn get_config() -> RelayConfig {
    GLOBAL_CONFIG
        .read()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to read global config: {}", e);
            std::process::exit(1);
        })
        .clone()
}

/// Set the global configuration
pub fn set_config(config: RelayConfig) {
    let mut global = GLOBAL_CONFIG.write().unwrap_or_else(|e| {
        tracing::error!("Failed to write global config: {}", e);
        std::process::exit(1);
    });
    *global = config;
    tracing::info!("Global taskrelay configuration updated");
}

/// Update the global configuration with a modifier function
///
/// This is useful for making partial changes to the configuration.
pub fn update_config<F>(modifier: F)
where
    F: FnOnce(&mut RelayConfig),
{
    let mut global = GLOBAL_CONFIG.write().unwrap_or_else(|e| {
        tracing::error!("Failed to write global config: {}", e);
        std::process::exit(1);
    });

    modifier(&mut global);

    tracing::info!("Global taskrelay configuration updated");
}

/// Get the default number of retries
pub fn get_default_number_of_retries() -> u32 {
    get_config().default_number_of_retries
}

/// Get the default retry interval in milliseconds
pub fn get_default_retry_interval_ms() -> u64 {
    get_config().default_retry_interval_ms
}

/// Get the maximum number of retries
pub fn get_max_number_of_retries() -> u32 {
    get_config().max_number_of_retries
}
