//! Reusable item groups
//!
//! A prefab hands a page a set of items. Add prefabs from the page's
//! content so they are re-added on every reload.

use crate::click::InventoryClick;
use crate::inventory_item::{Action, InventoryItem};
use slotcraft_core::{named, ItemStack, Material};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A reusable group of items
pub trait Prefab {
    /// Items to declare on the page
    fn items(&self) -> Vec<InventoryItem>;
}

/// One slot switching between an "on" and an "off" item
///
/// Clicking the shown item runs the matching callback once, flips the
/// shared state and reloads the page, which then shows the other item.
/// Clones share their state.
#[derive(Clone)]
pub struct TogglePrefab {
    slot: usize,
    on_item: ItemStack,
    off_item: ItemStack,
    on_disable: Option<Action>,
    on_enable: Option<Action>,
    state: Arc<AtomicBool>,
}

impl TogglePrefab {
    /// Toggle at `slot`, starting in state `on`
    pub fn new(slot: usize, on: bool) -> Self {
        Self {
            slot,
            on_item: named(Material::GREEN_WOOL, "§aON"),
            off_item: named(Material::RED_WOOL, "§cOFF"),
            on_disable: None,
            on_enable: None,
            state: Arc::new(AtomicBool::new(on)),
        }
    }

    /// Stack shown while on
    pub fn with_on_item(mut self, stack: ItemStack) -> Self {
        self.on_item = stack;
        self
    }

    /// Stack shown while off
    pub fn with_off_item(mut self, stack: ItemStack) -> Self {
        self.off_item = stack;
        self
    }

    /// Run when the "on" item is clicked, before switching off
    pub fn on_disable<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut InventoryClick<'_>) + Send + Sync + 'static,
    {
        self.on_disable = Some(Arc::new(action));
        self
    }

    /// Run when the "off" item is clicked, before switching on
    pub fn on_enable<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut InventoryClick<'_>) + Send + Sync + 'static,
    {
        self.on_enable = Some(Arc::new(action));
        self
    }

    /// Current state
    pub fn is_on(&self) -> bool {
        self.state.load(Ordering::SeqCst)
    }

    /// Set the state without running callbacks; shown on the next reload
    pub fn set_on(&self, on: bool) {
        self.state.store(on, Ordering::SeqCst);
    }

    /// Slot of the toggle
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Item for one state; its action switches to the other
    fn item_for(&self, on: bool) -> InventoryItem {
        let stack = if on { &self.on_item } else { &self.off_item };
        let toggle = self.clone();

        InventoryItem::new(self.slot, stack.clone()).with_action(move |click| {
            let callback = if on { &toggle.on_disable } else { &toggle.on_enable };
            if let Some(callback) = callback {
                callback(&mut *click);
            }

            toggle.set_on(!on);
            let page = click.page_mut();
            page.remove_item(toggle.slot);
            page.add_item(toggle.item_for(!on));
            page.reload();
        })
    }
}

impl Prefab for TogglePrefab {
    fn items(&self) -> Vec<InventoryItem> {
        vec![self.item_for(self.is_on())]
    }
}

impl fmt::Debug for TogglePrefab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglePrefab")
            .field("slot", &self.slot)
            .field("on", &self.is_on())
            .finish()
    }
}

/// A "yes" and a "no" button, each with its own action
#[derive(Clone)]
pub struct YesNoPrefab {
    yes_slot: usize,
    no_slot: usize,
    yes_item: ItemStack,
    no_item: ItemStack,
    on_yes: Option<Action>,
    on_no: Option<Action>,
}

impl YesNoPrefab {
    /// Buttons at two slots
    pub fn new(yes_slot: usize, no_slot: usize) -> Self {
        Self {
            yes_slot,
            no_slot,
            yes_item: named(Material::GREEN_WOOL, "§aYES"),
            no_item: named(Material::RED_WOOL, "§cNO"),
            on_yes: None,
            on_no: None,
        }
    }

    /// Stack of the "yes" button
    pub fn with_yes_item(mut self, stack: ItemStack) -> Self {
        self.yes_item = stack;
        self
    }

    /// Stack of the "no" button
    pub fn with_no_item(mut self, stack: ItemStack) -> Self {
        self.no_item = stack;
        self
    }

    /// Action of the "yes" button
    pub fn on_yes<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut InventoryClick<'_>) + Send + Sync + 'static,
    {
        self.on_yes = Some(Arc::new(action));
        self
    }

    /// Action of the "no" button
    pub fn on_no<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut InventoryClick<'_>) + Send + Sync + 'static,
    {
        self.on_no = Some(Arc::new(action));
        self
    }

    fn button(slot: usize, stack: &ItemStack, action: &Option<Action>) -> InventoryItem {
        let item = InventoryItem::new(slot, stack.clone());
        match action {
            Some(action) => item.with_shared_action(action.clone()),
            None => item,
        }
    }
}

impl Prefab for YesNoPrefab {
    fn items(&self) -> Vec<InventoryItem> {
        vec![
            Self::button(self.yes_slot, &self.yes_item, &self.on_yes),
            Self::button(self.no_slot, &self.no_item, &self.on_no),
        ]
    }
}

impl fmt::Debug for YesNoPrefab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YesNoPrefab")
            .field("yes_slot", &self.yes_slot)
            .field("no_slot", &self.no_slot)
            .finish()
    }
}
