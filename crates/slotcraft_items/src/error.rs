//! Error types for the item registry

use slotcraft_core::{HostError, ItemId};
use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while registering custom items
///
/// The messages carry the numeric codes server owners know from the
/// console ("Error 007" and so on); [`RegistryError::code`] returns them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Another definition with this identity is registered
    #[error("Error 007: A custom item with id {0} already exists")]
    DuplicateIdentity(ItemId),

    /// Head item registered without a skin owner
    #[error("Error 011: No owner was set for head item {0}")]
    MissingOwner(ItemId),

    /// Recipe could not be built or the host rejected it
    #[error("Error 002: Could not create custom item '{name}': {reason}")]
    RecipeCreation { name: String, reason: String },

    /// Host rejected a key or namespace outside recipe creation
    #[error("Error 029: Could not register custom item: {0}")]
    Host(#[from] HostError),

    /// Catch-all
    #[error("Error 999: An unknown error occurred")]
    Unknown,
}

impl RegistryError {
    /// Numeric error code
    pub fn code(&self) -> u16 {
        match self {
            Self::DuplicateIdentity(_) => 7,
            Self::MissingOwner(_) => 11,
            Self::RecipeCreation { .. } => 2,
            Self::Host(_) => 29,
            Self::Unknown => 999,
        }
    }

    pub(crate) fn recipe(name: &str, reason: impl ToString) -> Self {
        Self::RecipeCreation {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_in_messages() {
        let id = ItemId::new();
        let errors = [
            RegistryError::DuplicateIdentity(id),
            RegistryError::MissingOwner(id),
            RegistryError::recipe("Ruby", "unknown material 'RUBY_ORE'"),
            RegistryError::Host(HostError::InvalidKey("Bad Key".into())),
            RegistryError::Unknown,
        ];

        for error in errors {
            let prefix = format!("Error {:03}:", error.code());
            assert!(error.to_string().starts_with(&prefix), "{}", error);
        }
    }
}
