//! Custom item definitions

use slotcraft_core::{ItemId, ParticipantId};

/// Number of cells in a recipe pattern
pub const RECIPE_CELLS: usize = 9;

/// Recipe cell value for "no ingredient"
pub const EMPTY_CELL: &str = "AIR";

/// Base appearance of a custom item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base {
    /// A host material, by name
    Material(String),
    /// A player head; the owner must be set before registration
    Head { owner: Option<ParticipantId> },
}

/// Custom item definition
///
/// Definitions are immutable. To change one, turn it back into a builder
/// with [`CustomItem::to_builder`] (the id is kept) and hand the result to
/// [`ItemRegistry::reload`](crate::registry::ItemRegistry::reload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomItem {
    id: ItemId,
    name: String,
    lore: Vec<String>,
    base: Base,
    recipe: [String; RECIPE_CELLS],
    category: String,
    craftable: bool,
    usable: bool,
    ingredient: bool,
}

impl CustomItem {
    /// Start a material-based definition with a fresh id
    pub fn builder(category: impl Into<String>) -> CustomItemBuilder {
        CustomItemBuilder::new(category, Base::Material(String::new()))
    }

    /// Start a player-head definition with a fresh id
    pub fn head(category: impl Into<String>) -> CustomItemBuilder {
        CustomItemBuilder::new(category, Base::Head { owner: None })
    }

    /// Builder holding these attributes and this id
    pub fn to_builder(&self) -> CustomItemBuilder {
        CustomItemBuilder { item: self.clone() }
    }

    /// Identity
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description lines
    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    /// Base appearance
    pub fn base(&self) -> &Base {
        &self.base
    }

    /// Head owner, for head items
    pub fn head_owner(&self) -> Option<ParticipantId> {
        match self.base {
            Base::Head { owner } => owner,
            Base::Material(_) => None,
        }
    }

    /// Whether this is a head item
    pub fn is_head(&self) -> bool {
        matches!(self.base, Base::Head { .. })
    }

    /// Recipe pattern, row-major
    pub fn recipe(&self) -> &[String; RECIPE_CELLS] {
        &self.recipe
    }

    /// Category label
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether the recipe result may be crafted
    pub fn is_craftable(&self) -> bool {
        self.craftable
    }

    /// Whether players may interact while holding it
    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// Whether it may be used as a crafting ingredient
    pub fn is_ingredient(&self) -> bool {
        self.ingredient
    }
}

/// Builder for [`CustomItem`]
#[derive(Debug, Clone)]
pub struct CustomItemBuilder {
    item: CustomItem,
}

impl CustomItemBuilder {
    fn new(category: impl Into<String>, base: Base) -> Self {
        Self {
            item: CustomItem {
                id: ItemId::new(),
                name: String::new(),
                lore: Vec::new(),
                base,
                recipe: std::array::from_fn(|_| EMPTY_CELL.to_string()),
                category: category.into(),
                craftable: true,
                usable: true,
                ingredient: false,
            },
        }
    }

    /// Set display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.item.name = name.into();
        self
    }

    /// Set description lines
    pub fn lore<I, S>(mut self, lore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item.lore = lore.into_iter().map(Into::into).collect();
        self
    }

    /// Use a material as base (replaces a head base)
    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.item.base = Base::Material(material.into());
        self
    }

    /// Use a player head skinned to `owner` as base
    pub fn owner(mut self, owner: ParticipantId) -> Self {
        self.item.base = Base::Head { owner: Some(owner) };
        self
    }

    /// Set the whole recipe pattern, row-major
    pub fn recipe<S: Into<String>>(mut self, cells: [S; RECIPE_CELLS]) -> Self {
        self.item.recipe = cells.map(Into::into);
        self
    }

    /// Set one recipe cell (0..9); out of range cells are ignored
    pub fn cell(mut self, index: usize, material: impl Into<String>) -> Self {
        if let Some(cell) = self.item.recipe.get_mut(index) {
            *cell = material.into();
        }
        self
    }

    /// Set craftable flag
    pub fn craftable(mut self, craftable: bool) -> Self {
        self.item.craftable = craftable;
        self
    }

    /// Set usable flag
    pub fn usable(mut self, usable: bool) -> Self {
        self.item.usable = usable;
        self
    }

    /// Set allowed-as-ingredient flag
    pub fn ingredient(mut self, ingredient: bool) -> Self {
        self.item.ingredient = ingredient;
        self
    }

    /// Finish the definition
    pub fn build(self) -> CustomItem {
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let item = CustomItem::builder("gem").name("Ruby").build();

        assert_eq!(item.name(), "Ruby");
        assert_eq!(item.category(), "gem");
        assert!(item.lore().is_empty());
        assert!(item.recipe().iter().all(|c| c == EMPTY_CELL));
        assert!(item.is_craftable());
        assert!(item.is_usable());
        assert!(!item.is_ingredient());
        assert!(!item.is_head());
    }

    #[test]
    fn test_distinct_ids() {
        let a = CustomItem::builder("gem").name("Ruby").build();
        let b = CustomItem::builder("gem").name("Ruby").build();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_to_builder_keeps_id() {
        let item = CustomItem::builder("gem").name("Ruby").build();
        let renamed = item.to_builder().name("Red Ruby").build();

        assert_eq!(renamed.id(), item.id());
        assert_eq!(renamed.name(), "Red Ruby");
        assert_ne!(renamed, item);
    }

    #[test]
    fn test_recipe_cells() {
        let item = CustomItem::builder("gem")
            .recipe(["AIR", "AIR", "AIR", "AIR", "DIAMOND", "AIR", "AIR", "AIR", "AIR"])
            .cell(0, "STICK")
            .cell(12, "STICK")
            .build();

        assert_eq!(item.recipe()[0], "STICK");
        assert_eq!(item.recipe()[4], "DIAMOND");
    }

    #[test]
    fn test_head_owner() {
        let owner = ParticipantId::new();
        let unowned = CustomItem::head("trophy").build();
        assert!(unowned.is_head());
        assert_eq!(unowned.head_owner(), None);

        let owned = unowned.to_builder().owner(owner).build();
        assert_eq!(owned.head_owner(), Some(owner));
    }
}
