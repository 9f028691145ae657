//! Library configuration
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables: `SLOTCRAFT_NAMESPACE`, `SLOTCRAFT_MAX_PAGES`
//! 2. Config file (TOML), passed by the embedding plugin
//! 3. Defaults
//!
//! # Example Config File
//!
//! ```toml
//! namespace = "myplugin"
//!
//! [gui]
//! page_retention = { bounded = 64 }   # or "unbounded"
//! ```

use crate::error::ConfigError;
use crate::id::is_valid_namespace;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment override for [`SlotcraftConfig::namespace`]
pub const ENV_NAMESPACE: &str = "SLOTCRAFT_NAMESPACE";
/// Environment override for the page retention bound (0 = unbounded)
pub const ENV_MAX_PAGES: &str = "SLOTCRAFT_MAX_PAGES";

/// How many pages the page registry keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageRetention {
    /// Keep every page until disposed
    Unbounded,
    /// Keep at most this many, evicting the least recently opened
    Bounded(usize),
}

impl Default for PageRetention {
    fn default() -> Self {
        Self::Bounded(256)
    }
}

/// GUI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Page retention policy
    pub page_retention: PageRetention,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotcraftConfig {
    /// Namespace for recipe keys and identity tags
    pub namespace: String,
    /// GUI settings
    pub gui: GuiConfig,
}

impl Default for SlotcraftConfig {
    fn default() -> Self {
        Self {
            namespace: crate::id::LIBRARY_NAMESPACE.to_string(),
            gui: GuiConfig::default(),
        }
    }
}

impl SlotcraftConfig {
    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file, then apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        log::info!("Loaded slotcraft config from {}", path.display());
        config.apply_env()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Apply `SLOTCRAFT_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    ///
    /// Nothing changes unless every override is valid.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut updated = self.clone();

        if let Some(namespace) = lookup(ENV_NAMESPACE) {
            log::info!("Namespace from env: {}", namespace);
            updated.namespace = namespace;
        }

        if let Some(value) = lookup(ENV_MAX_PAGES) {
            let max: usize = value.trim().parse().map_err(|_| ConfigError::InvalidOverride {
                key: ENV_MAX_PAGES.to_string(),
                value: value.clone(),
            })?;
            updated.gui.page_retention = match max {
                0 => PageRetention::Unbounded,
                n => PageRetention::Bounded(n),
            };
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check the namespace is acceptable to the host and the page bound
    /// keeps at least one page
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_namespace(&self.namespace) {
            return Err(ConfigError::InvalidNamespace(self.namespace.clone()));
        }
        if self.gui.page_retention == PageRetention::Bounded(0) {
            return Err(ConfigError::ZeroRetention);
        }
        Ok(())
    }
}
