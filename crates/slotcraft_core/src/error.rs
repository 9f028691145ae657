//! Error types for the core library

use crate::id::NamespacedKey;
use thiserror::Error;

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors reported by host capabilities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A recipe with this key is already in the recipe book
    #[error("Recipe already registered: {0}")]
    DuplicateRecipe(NamespacedKey),

    /// A namespaced key contains characters the host does not accept
    #[error("Invalid namespaced key '{0}'")]
    InvalidKey(String),

    /// Material name unknown to the host
    #[error("Unknown material '{0}'")]
    UnknownMaterial(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML could not be written
    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// Namespace is empty or has characters outside `[a-z0-9._-]`
    #[error("Invalid namespace '{0}'")]
    InvalidNamespace(String),

    /// A bounded page retention must keep at least one page
    #[error("Page retention bound must be at least 1, use \"unbounded\" to keep every page")]
    ZeroRetention,

    /// An environment override could not be parsed
    #[error("Invalid value for {key}: '{value}'")]
    InvalidOverride { key: String, value: String },
}
