//! # slotcraft_core - Slotcraft Core
//!
//! Shared primitives for the Slotcraft item and GUI libraries:
//! - **Item model**: materials, item stacks and their metadata container
//! - **Stack builder**: display-ready stacks with hidden tooltip details
//! - **Host capabilities**: the narrow traits the game server implements
//! - **Configuration**: TOML configuration with environment overrides
//!
//! ## Host boundary
//! The library never talks to a server directly. Everything it needs from
//! the host (materials, the recipe book, live containers) goes through the
//! traits in [`host`]. [`memory::MemoryServer`] implements all of them in
//! memory and backs the test suites.

pub mod config;
pub mod error;
pub mod host;
pub mod id;
pub mod item;
pub mod memory;
pub mod recipe;
pub mod stack;

pub use config::*;
pub use error::*;
pub use host::*;
pub use id::*;
pub use item::*;
pub use memory::*;
pub use recipe::*;
pub use stack::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{PageRetention, SlotcraftConfig};
    pub use crate::error::{ConfigError, HostError, Result};
    pub use crate::host::{ContainerHost, Crafting, LiveContainer, Materials, RecipeBook, SharedContainer};
    pub use crate::id::{ContainerId, ItemId, NamespacedKey, ParticipantId, LIBRARY_NAMESPACE};
    pub use crate::item::{DataValue, ItemFlag, ItemMeta, ItemStack, Material, PersistentData};
    pub use crate::memory::{MemoryContainer, MemoryServer};
    pub use crate::recipe::ShapedRecipe;
    pub use crate::stack::{Appearance, StackBuilder};
}
