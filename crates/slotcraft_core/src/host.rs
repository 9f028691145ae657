//! Host capability traits
//!
//! The host server implements these; the library only ever calls through
//! them. All calls are synchronous and expected on the interaction thread.

use crate::error::Result;
use crate::id::{ContainerId, NamespacedKey, ParticipantId};
use crate::item::{ItemStack, Material};
use crate::recipe::ShapedRecipe;
use std::sync::Arc;

/// Resolves material names
pub trait Materials: Send + Sync {
    /// Look up a material by its host name (case-insensitive)
    fn material(&self, name: &str) -> Option<Material>;
}

/// The host's crafting recipe book
pub trait RecipeBook: Send + Sync {
    /// Register a recipe; fails if the key is taken
    fn add_recipe(&self, recipe: ShapedRecipe) -> Result<()>;

    /// Check whether a recipe is registered
    fn has_recipe(&self, key: &NamespacedKey) -> bool;

    /// Remove a recipe; returns false if it was not registered
    fn remove_recipe(&self, key: &NamespacedKey) -> bool;
}

/// Everything the item registry needs from the host
pub trait Crafting: Materials + RecipeBook {}

impl<T: Materials + RecipeBook + ?Sized> Crafting for T {}

/// An on-screen container created by the host
pub trait LiveContainer: Send + Sync {
    /// Container identity
    fn id(&self) -> ContainerId;

    /// Number of slots
    fn size(&self) -> usize;

    /// Window title
    fn title(&self) -> String;

    /// Slot contents
    fn item(&self, slot: usize) -> Option<ItemStack>;

    /// Replace slot contents
    fn set_item(&self, slot: usize, item: Option<ItemStack>);

    /// Empty every slot
    fn clear(&self) {
        for slot in 0..self.size() {
            self.set_item(slot, None);
        }
    }

    /// Snapshot of every slot
    fn contents(&self) -> Vec<Option<ItemStack>> {
        (0..self.size()).map(|slot| self.item(slot)).collect()
    }
}

/// Shared handle to a live container
pub type SharedContainer = Arc<dyn LiveContainer>;

/// Creates and shows containers
pub trait ContainerHost: Send + Sync {
    /// Create a container with `size` slots
    fn create_container(&self, size: usize, title: &str) -> SharedContainer;

    /// Show a container to a participant
    fn open_container(&self, viewer: ParticipantId, container: &SharedContainer);
}
