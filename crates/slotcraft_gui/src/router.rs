//! Event routing
//!
//! Resolves the container of a host event to its page and lets the page
//! decide. Events on containers that no page owns are left untouched.

use crate::events::{ClickEvent, InventoryEvent, MoveEvent, PickupEvent};
use crate::page::Page;
use crate::registry::PageRegistry;
use slotcraft_core::{ContainerId, ItemStack};

/// Stateless router from host events to pages
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryRouter;

impl InventoryRouter {
    /// Create a router
    pub fn new() -> Self {
        Self
    }

    /// Route a click to the page of its container
    pub fn on_click(&self, pages: &mut PageRegistry, event: &mut ClickEvent) {
        if let Some(page) = pages.page_for_mut(event.container) {
            page.click(event);
        }
    }

    /// Route a pickup out of a container
    pub fn on_pickup(&self, pages: &PageRegistry, event: &mut PickupEvent) {
        if blocks_movement(pages, event.container, &event.item) {
            event.cancelled = true;
        }
    }

    /// Route a move between containers; either side may be a page
    pub fn on_move(&self, pages: &PageRegistry, event: &mut MoveEvent) {
        if blocks_movement(pages, event.source, &event.item) || blocks_movement(pages, event.destination, &event.item) {
            event.cancelled = true;
        }
    }

    /// Route any event
    pub fn dispatch(&self, pages: &mut PageRegistry, event: &mut InventoryEvent) {
        match event {
            InventoryEvent::Click(e) => self.on_click(pages, e),
            InventoryEvent::Pickup(e) => self.on_pickup(pages, e),
            InventoryEvent::Move(e) => self.on_move(pages, e),
        }
    }
}

/// Whether the page of `container` forbids moving `item`
fn blocks_movement(pages: &PageRegistry, container: ContainerId, item: &ItemStack) -> bool {
    pages.page_for(container).is_some_and(|page| !may_move(page, item))
}

/// Declared items decide for themselves; anything else follows the page
fn may_move(page: &Page, item: &ItemStack) -> bool {
    match page.inventory_item(item) {
        Some(declared) => declared.is_movable(),
        None => page.is_movable(),
    }
}
