//! Click context handed to item actions

use crate::events::{ClickEvent, ClickKind};
use crate::page::Page;
use slotcraft_core::ParticipantId;

/// What an item action sees: the owning page and the click
///
/// The page can be changed freely; call [`Page::reload`] to show the
/// changes.
pub struct InventoryClick<'a> {
    page: &'a mut Page,
    event: &'a mut ClickEvent,
}

impl<'a> InventoryClick<'a> {
    pub(crate) fn new(page: &'a mut Page, event: &'a mut ClickEvent) -> Self {
        Self { page, event }
    }

    /// The page the clicked item belongs to
    pub fn page(&self) -> &Page {
        self.page
    }

    /// The page, mutable
    pub fn page_mut(&mut self) -> &mut Page {
        self.page
    }

    /// Clicked slot
    pub fn slot(&self) -> usize {
        self.event.slot
    }

    /// Clicking participant
    pub fn participant(&self) -> Option<ParticipantId> {
        self.event.who
    }

    /// Click kind
    pub fn kind(&self) -> ClickKind {
        self.event.kind
    }

    /// The underlying event
    pub fn event(&self) -> &ClickEvent {
        self.event
    }

    /// Ask the host to close the viewer's screen
    pub fn close(&mut self) {
        self.event.close_requested = true;
    }
}
