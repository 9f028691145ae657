//! Slotcraft Items - Custom Item Identity and Registry
//!
//! This crate lets plugins define custom items that can be recognized
//! again later, and keeps their crafting recipes in sync with the host.
//!
//! # Features
//!
//! - Immutable item definitions built with a builder
//! - Player-head variants skinned to an owner
//! - Identity tags stored in the item's persistent data
//! - Recipe register / reload / unregister lifecycle
//! - Usability and crafting-ingredient policy checks
//!
//! # Example
//!
//! ```ignore
//! use slotcraft_items::prelude::*;
//!
//! let ruby = CustomItem::builder("gem")
//!     .name("Ruby")
//!     .material("EMERALD")
//!     .recipe(["AIR", "REDSTONE", "AIR", "REDSTONE", "DIAMOND", "REDSTONE", "AIR", "REDSTONE", "AIR"])
//!     .build();
//!
//! let mut registry = ItemRegistry::new(host, "myplugin")?;
//! let id = registry.register(ruby)?;
//! let stack = registry.item_stack(id).unwrap();
//! assert_eq!(registry.get_by_stack(&stack).map(|i| i.id()), Some(id));
//! ```

pub mod crafting;
pub mod definition;
pub mod error;
pub mod policy;
pub mod registry;
pub mod tag;

pub mod prelude {
    pub use crate::crafting::{is_empty_cell, recipe_key, sanitize_key, shaped_recipe};
    pub use crate::definition::{Base, CustomItem, CustomItemBuilder, EMPTY_CELL, RECIPE_CELLS};
    pub use crate::error::{RegistryError, Result};
    pub use crate::policy::{cancel_interaction, filter_craft};
    pub use crate::registry::ItemRegistry;
    pub use crate::tag::IdentityTag;
}

pub use prelude::*;
