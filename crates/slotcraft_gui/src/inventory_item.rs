//! Items placed on pages

use crate::click::InventoryClick;
use crate::extra::ExtraData;
use crate::marker::apply_marker;
use slotcraft_core::{described, named, ItemStack, Material};
use std::fmt;
use std::sync::Arc;

/// Click action of an item
pub type Action = Arc<dyn Fn(&mut InventoryClick<'_>) + Send + Sync>;

/// An item at a fixed slot of a page
///
/// The stack always carries the GUI marker. Items are immovable and do
/// nothing when clicked unless configured otherwise.
#[derive(Clone)]
pub struct InventoryItem {
    slot: usize,
    stack: ItemStack,
    action: Option<Action>,
    movable: bool,
    extra: ExtraData,
}

impl InventoryItem {
    /// Item showing a pre-built stack
    pub fn new(slot: usize, stack: ItemStack) -> Self {
        Self {
            slot,
            stack: apply_marker(stack),
            action: None,
            movable: false,
            extra: ExtraData::new(),
        }
    }

    /// Item built from a material, a name and description lines
    pub fn from_appearance<I, S>(slot: usize, material: Material, name: impl Into<String>, lore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(slot, described(material, name, lore))
    }

    /// Blank white pane, used to pad layouts
    pub fn placeholder(slot: usize) -> Self {
        Self::new(slot, named(Material::WHITE_STAINED_GLASS_PANE, " "))
    }

    /// Red pane that closes the viewer's screen
    pub fn close_button(slot: usize) -> Self {
        Self::new(slot, named(Material::RED_STAINED_GLASS_PANE, "§cClose")).with_action(|click| click.close())
    }

    /// Set the click action
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut InventoryClick<'_>) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set a shared click action
    pub fn with_shared_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Allow or forbid moving the item out of its slot
    pub fn movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    /// Attach a value
    pub fn with_extra<T: std::any::Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// Run the click action once; items without one do nothing
    pub fn execute(&self, click: &mut InventoryClick<'_>) {
        if let Some(action) = &self.action {
            action(click);
        }
    }

    /// Slot on the page
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Displayed stack
    pub fn item(&self) -> &ItemStack {
        &self.stack
    }

    /// Material of the displayed stack
    pub fn material(&self) -> &Material {
        self.stack.material()
    }

    /// Display name
    pub fn name(&self) -> Option<&str> {
        self.stack.display_name()
    }

    /// Description lines
    pub fn lore(&self) -> &[String] {
        self.stack.lore()
    }

    /// Whether players may move the item
    pub fn is_movable(&self) -> bool {
        self.movable
    }

    /// Whether a click action is set
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Attached values
    pub fn extra(&self) -> &ExtraData {
        &self.extra
    }

    /// Attached values, mutable
    pub fn extra_mut(&mut self) -> &mut ExtraData {
        &mut self.extra
    }
}

impl fmt::Debug for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryItem")
            .field("slot", &self.slot)
            .field("stack", &self.stack)
            .field("movable", &self.movable)
            .field("action", &self.action.is_some())
            .finish()
    }
}
