//! Host interaction events
//!
//! The host adapter translates its own click, pickup and move
//! notifications into these and reads the outcome back after routing.

use slotcraft_core::{ContainerId, ItemStack, ParticipantId};

/// How a slot was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickKind {
    Left,
    ShiftLeft,
    Right,
    ShiftRight,
    Middle,
    Drop,
    NumberKey,
    Other,
}

impl ClickKind {
    /// Plain or shift left click
    pub fn is_left_click(self) -> bool {
        matches!(self, Self::Left | Self::ShiftLeft)
    }
}

/// Events the host may veto
pub trait Cancellable {
    /// Whether the host should undo the interaction
    fn is_cancelled(&self) -> bool;

    /// Veto or allow the interaction
    fn set_cancelled(&mut self, cancelled: bool);
}

/// A click inside an open container view
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    /// Container that was clicked
    pub container: ContainerId,
    /// Raw slot of the view; slots past the container size belong to the
    /// viewer's own inventory
    pub slot: usize,
    /// Stack in the slot at click time
    pub current_item: Option<ItemStack>,
    /// Click kind
    pub kind: ClickKind,
    /// Clicking participant, if any
    pub who: Option<ParticipantId>,
    /// Outcome: undo the interaction
    pub cancelled: bool,
    /// Outcome: close the viewer's screen
    pub close_requested: bool,
}

impl ClickEvent {
    /// A click by `who` on `slot`
    pub fn new(container: ContainerId, slot: usize, kind: ClickKind, who: Option<ParticipantId>) -> Self {
        Self {
            container,
            slot,
            current_item: None,
            kind,
            who,
            cancelled: false,
            close_requested: false,
        }
    }

    /// Set the stack under the cursor
    pub fn with_current_item(mut self, item: Option<ItemStack>) -> Self {
        self.current_item = item;
        self
    }
}

impl Cancellable for ClickEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// A stack picked up out of a container
#[derive(Debug, Clone, PartialEq)]
pub struct PickupEvent {
    /// Container the stack leaves
    pub container: ContainerId,
    /// The stack
    pub item: ItemStack,
    /// Outcome: undo the pickup
    pub cancelled: bool,
}

impl PickupEvent {
    /// A pickup of `item` from `container`
    pub fn new(container: ContainerId, item: ItemStack) -> Self {
        Self {
            container,
            item,
            cancelled: false,
        }
    }
}

impl Cancellable for PickupEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// A stack moved from one container to another (hoppers, shift-clicks)
#[derive(Debug, Clone, PartialEq)]
pub struct MoveEvent {
    /// Container the stack leaves
    pub source: ContainerId,
    /// Container the stack enters
    pub destination: ContainerId,
    /// The stack
    pub item: ItemStack,
    /// Outcome: undo the move
    pub cancelled: bool,
}

impl MoveEvent {
    /// A move of `item` from `source` to `destination`
    pub fn new(source: ContainerId, destination: ContainerId, item: ItemStack) -> Self {
        Self {
            source,
            destination,
            item,
            cancelled: false,
        }
    }
}

impl Cancellable for MoveEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// Any routed event
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    Click(ClickEvent),
    Pickup(PickupEvent),
    Move(MoveEvent),
}

impl Cancellable for InventoryEvent {
    fn is_cancelled(&self) -> bool {
        match self {
            Self::Click(e) => e.is_cancelled(),
            Self::Pickup(e) => e.is_cancelled(),
            Self::Move(e) => e.is_cancelled(),
        }
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        match self {
            Self::Click(e) => e.set_cancelled(cancelled),
            Self::Pickup(e) => e.set_cancelled(cancelled),
            Self::Move(e) => e.set_cancelled(cancelled),
        }
    }
}

impl From<ClickEvent> for InventoryEvent {
    fn from(event: ClickEvent) -> Self {
        Self::Click(event)
    }
}

impl From<PickupEvent> for InventoryEvent {
    fn from(event: PickupEvent) -> Self {
        Self::Pickup(event)
    }
}

impl From<MoveEvent> for InventoryEvent {
    fn from(event: MoveEvent) -> Self {
        Self::Move(event)
    }
}
