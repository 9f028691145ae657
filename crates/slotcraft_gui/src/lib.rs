//! Slotcraft GUI - Declarative Inventory Screens
//!
//! Screens are [`Page`]s: a fixed grid of slots, a filler material and a
//! list of clickable [`InventoryItem`]s that the page's content re-derives
//! on every reload.
//!
//! # Features
//!
//! - Pages of 1 to 6 rows with per-slot items and click actions
//! - GUI marker on every placed stack
//! - Page registry with bounded retention of pages nobody is viewing
//! - Click, pickup and move routing with movability rules
//! - Toggle and yes/no prefabs
//!
//! # Example
//!
//! ```ignore
//! use slotcraft_gui::prelude::*;
//!
//! let toggle = TogglePrefab::new(4, false).on_enable(|click| click.close());
//! let page = Page::new(1, "Settings", Material::GRAY_STAINED_GLASS_PANE)?
//!     .with_content(move |page: &mut Page| page.add_prefab(&toggle));
//!
//! let mut pages = PageRegistry::default();
//! let id = pages.insert(page);
//! let container = pages.open(id, &host, viewer);
//!
//! // In the host's click listener
//! InventoryRouter::new().on_click(&mut pages, &mut event);
//!
//! // In the host's close listener
//! pages.close(container);
//! ```

pub mod click;
pub mod events;
pub mod extra;
pub mod inventory_item;
pub mod marker;
pub mod page;
pub mod prefabs;
pub mod registry;
pub mod router;

pub mod prelude {
    pub use crate::click::InventoryClick;
    pub use crate::events::{Cancellable, ClickEvent, ClickKind, InventoryEvent, MoveEvent, PickupEvent};
    pub use crate::extra::ExtraData;
    pub use crate::inventory_item::{Action, InventoryItem};
    pub use crate::marker::{apply_marker, is_inventory_item, marker_key};
    pub use crate::page::{Page, PageContent, PageError, MAX_ROWS, SLOTS_PER_ROW};
    pub use crate::prefabs::{Prefab, TogglePrefab, YesNoPrefab};
    pub use crate::registry::{PageId, PageRegistry};
    pub use crate::router::InventoryRouter;
    pub use slotcraft_core::{Material, PageRetention};
}

pub use prelude::*;
