//! Identity tags
//!
//! A custom item is recognized by one string field in the stack's
//! persistent data: `<namespace>:custom_item_id` = the definition id.

use slotcraft_core::{HostError, ItemId, ItemStack, NamespacedKey, LIBRARY_NAMESPACE};

/// Key name of the identity field
pub const TAG_KEY: &str = "custom_item_id";

/// Reads and writes the identity field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityTag {
    key: NamespacedKey,
}

impl IdentityTag {
    /// Tag in a plugin namespace
    pub fn new(namespace: &str) -> Result<Self, HostError> {
        Ok(Self {
            key: NamespacedKey::new(namespace, TAG_KEY)?,
        })
    }

    /// Tag in the library namespace
    pub fn library() -> Self {
        Self {
            key: NamespacedKey::from_static(LIBRARY_NAMESPACE, TAG_KEY),
        }
    }

    /// The field key
    pub fn key(&self) -> &NamespacedKey {
        &self.key
    }

    /// Write `id` into the stack; stacks without metadata come back unchanged
    pub fn apply(&self, mut stack: ItemStack, id: ItemId) -> ItemStack {
        if let Some(meta) = stack.meta_mut() {
            meta.data.set_string(self.key.clone(), id.to_string());
        }
        stack
    }

    /// Read the id back; None for missing stacks, missing metadata, a
    /// missing field or a value that is not an id
    pub fn extract(&self, stack: Option<&ItemStack>) -> Option<ItemId> {
        let value = stack?.meta()?.data.get_string(&self.key)?;
        value.parse().ok()
    }
}

impl Default for IdentityTag {
    fn default() -> Self {
        Self::library()
    }
}
