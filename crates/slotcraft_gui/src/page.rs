//! Pages
//!
//! A page is one inventory screen: a grid of `rows * 9` slots, a filler
//! material for every slot nothing else claims, and a declarative list of
//! [`InventoryItem`]s keyed by slot.
//!
//! The list is rebuilt from scratch on every [`Page::reload`]: the live
//! container is cleared and filled, the list is emptied, the page's
//! [`PageContent`] re-adds its items, and the items are placed. Content
//! must therefore derive everything from state it owns (or shares), never
//! from what was in the list before.

use crate::click::InventoryClick;
use crate::events::ClickEvent;
use crate::extra::ExtraData;
use crate::inventory_item::InventoryItem;
use crate::marker::apply_marker;
use crate::prefabs::Prefab;
use slotcraft_core::{stack, ContainerHost, ContainerId, ItemStack, Material, ParticipantId, SharedContainer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Slots in one row
pub const SLOTS_PER_ROW: usize = 9;

/// Largest page height
pub const MAX_ROWS: usize = 6;

/// Page errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Page rows must be between 1 and {max}, got {0}", max = MAX_ROWS)]
    InvalidRows(usize),

    #[error("Slot {slot} is outside a page of {size} slots")]
    SlotOutOfRange { slot: usize, size: usize },
}

/// Re-adds a page's items on every reload
pub trait PageContent: Send {
    fn populate(&mut self, page: &mut Page);
}

impl<F> PageContent for F
where
    F: FnMut(&mut Page) + Send,
{
    fn populate(&mut self, page: &mut Page) {
        self(page)
    }
}

/// One inventory screen
pub struct Page {
    rows: usize,
    title: String,
    fill: Material,
    /// Whether stacks without a declared item may be moved
    movable: bool,
    items: BTreeMap<usize, InventoryItem>,
    content: Option<Box<dyn PageContent>>,
    /// Live container, once opened
    container: Option<SharedContainer>,
    extra: ExtraData,
}

impl Page {
    /// Create an unopened page
    pub fn new(rows: usize, title: impl Into<String>, fill: Material) -> Result<Self, PageError> {
        if !(1..=MAX_ROWS).contains(&rows) {
            return Err(PageError::InvalidRows(rows));
        }
        Ok(Self {
            rows,
            title: title.into(),
            fill,
            movable: false,
            items: BTreeMap::new(),
            content: None,
            container: None,
            extra: ExtraData::new(),
        })
    }

    /// Set the content that populates the page
    pub fn with_content(mut self, content: impl PageContent + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    /// Set whether undeclared stacks may be moved
    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    /// Attach a value
    pub fn with_extra<T: std::any::Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.extra.insert(key, value);
        self
    }

    // ========== Lifecycle ==========

    /// Create a fresh live container, reload into it and show it to `viewer`
    ///
    /// Opening again rebinds the page to the new container.
    pub fn open<H: ContainerHost + ?Sized>(&mut self, host: &H, viewer: ParticipantId) -> ContainerId {
        let container = host.create_container(self.size(), &self.title);
        let id = container.id();
        self.container = Some(container.clone());
        self.reload();
        host.open_container(viewer, &container);
        log::debug!("Opened page '{}' for {} in container {}", self.title, viewer, id);
        id
    }

    /// Rebuild the live container from the content; no-op until opened
    pub fn reload(&mut self) {
        let Some(container) = self.container.clone() else {
            return;
        };

        container.clear();
        let fill = apply_marker(stack(Some(self.fill.clone())));
        for slot in 0..self.size() {
            container.set_item(slot, Some(fill.clone()));
        }

        self.items.clear();
        if let Some(mut content) = self.content.take() {
            content.populate(self);
            self.content = Some(content);
        }

        for item in self.items.values() {
            container.set_item(item.slot(), Some(item.item().clone()));
        }
    }

    // ========== Items ==========

    /// Declare an item, replacing any item at its slot
    ///
    /// Items outside the page are logged and dropped.
    pub fn add_item(&mut self, item: InventoryItem) {
        if let Err(e) = self.try_add_item(item) {
            log::warn!("Ignoring item on page '{}': {}", self.title, e);
        }
    }

    /// Declare an item, failing if its slot is outside the page
    pub fn try_add_item(&mut self, item: InventoryItem) -> Result<(), PageError> {
        let size = self.size();
        if item.slot() >= size {
            return Err(PageError::SlotOutOfRange { slot: item.slot(), size });
        }
        self.items.insert(item.slot(), item);
        Ok(())
    }

    /// Declare several items
    pub fn add_items(&mut self, items: impl IntoIterator<Item = InventoryItem>) {
        for item in items {
            self.add_item(item);
        }
    }

    /// Declare the items of a prefab
    pub fn add_prefab<P: Prefab + ?Sized>(&mut self, prefab: &P) {
        self.add_items(prefab.items());
    }

    /// Remove the item at a slot
    pub fn remove_item(&mut self, slot: usize) -> Option<InventoryItem> {
        self.items.remove(&slot)
    }

    /// Remove the items at several slots
    pub fn remove_items(&mut self, slots: impl IntoIterator<Item = usize>) {
        for slot in slots {
            self.items.remove(&slot);
        }
    }

    /// Item declared at a slot
    pub fn item(&self, slot: usize) -> Option<&InventoryItem> {
        self.items.get(&slot)
    }

    /// Declared items in slot order
    pub fn items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values()
    }

    // ========== Events ==========

    /// Handle a click on the page's container
    ///
    /// A left click by a participant on a declared item runs its action.
    /// Clicks on declared immovable items and on filler are cancelled.
    /// Slots past the page size are the viewer's own inventory and are
    /// left alone.
    pub fn click(&mut self, event: &mut ClickEvent) {
        if event.slot >= self.size() {
            return;
        }

        if let Some(item) = self.items.get(&event.slot).cloned() {
            if event.kind.is_left_click() && event.who.is_some() {
                item.execute(&mut InventoryClick::new(self, event));
            }
            if !item.is_movable() {
                event.cancelled = true;
            }
            return;
        }

        if event.current_item.as_ref().is_some_and(|stack| self.is_fill(stack)) {
            event.cancelled = true;
        }
    }

    /// Resolve a stack to the item it shows
    ///
    /// Filler stacks resolve to an immovable stand-in so that movement
    /// checks treat them like any other immovable item.
    pub fn inventory_item(&self, stack: &ItemStack) -> Option<Cow<'_, InventoryItem>> {
        if let Some(item) = self.items.values().find(|item| item.item() == stack) {
            return Some(Cow::Borrowed(item));
        }
        // The stand-in has no slot of its own
        self.is_fill(stack)
            .then(|| Cow::Owned(InventoryItem::new(0, stack.clone())))
    }

    fn is_fill(&self, stack: &ItemStack) -> bool {
        !stack.is_empty() && stack.material() == &self.fill
    }

    // ========== Accessors ==========

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of slots
    pub fn size(&self) -> usize {
        self.rows * SLOTS_PER_ROW
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Filler material
    pub fn fill(&self) -> &Material {
        &self.fill
    }

    /// Whether undeclared stacks may be moved
    pub fn is_movable(&self) -> bool {
        self.movable
    }

    /// Live container, once opened
    pub fn container(&self) -> Option<&SharedContainer> {
        self.container.as_ref()
    }

    /// Id of the live container, once opened
    pub fn container_id(&self) -> Option<ContainerId> {
        self.container.as_ref().map(|c| c.id())
    }

    /// Whether the page has been opened
    pub fn is_open(&self) -> bool {
        self.container.is_some()
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

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("title", &self.title)
            .field("rows", &self.rows)
            .field("fill", &self.fill)
            .field("movable", &self.movable)
            .field("items", &self.items.len())
            .field("container", &self.container_id())
            .finish()
    }
}
