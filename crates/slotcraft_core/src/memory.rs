//! In-memory host
//!
//! Implements every host capability without a game server: a material
//! catalog, a recipe book, containers and the view each participant has
//! open. Used by the test suites and for dry runs of GUI code.

use crate::error::{HostError, Result};
use crate::host::{ContainerHost, LiveContainer, Materials, RecipeBook, SharedContainer};
use crate::id::{ContainerId, NamespacedKey, ParticipantId};
use crate::item::{ItemStack, Material};
use crate::recipe::ShapedRecipe;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

/// Materials known to a fresh [`MemoryServer`]
pub const DEFAULT_MATERIALS: &[&str] = &[
    "AIR",
    "PLAYER_HEAD",
    "WHITE_STAINED_GLASS_PANE",
    "GRAY_STAINED_GLASS_PANE",
    "BLACK_STAINED_GLASS_PANE",
    "RED_STAINED_GLASS_PANE",
    "GREEN_WOOL",
    "RED_WOOL",
    "STICK",
    "DIAMOND",
    "EMERALD",
    "GOLD_INGOT",
    "IRON_INGOT",
    "REDSTONE",
    "DIAMOND_SWORD",
    "NETHER_STAR",
    "PAPER",
    "BOOK",
];

/// Container held in memory
pub struct MemoryContainer {
    id: ContainerId,
    title: String,
    slots: RwLock<Vec<Option<ItemStack>>>,
}

impl MemoryContainer {
    /// Create an empty container
    pub fn new(size: usize, title: impl Into<String>) -> Self {
        Self {
            id: ContainerId::new(),
            title: title.into(),
            slots: RwLock::new(vec![None; size]),
        }
    }
}

impl LiveContainer for MemoryContainer {
    fn id(&self) -> ContainerId {
        self.id
    }

    fn size(&self) -> usize {
        self.slots.read().len()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn item(&self, slot: usize) -> Option<ItemStack> {
        self.slots.read().get(slot).cloned().flatten()
    }

    fn set_item(&self, slot: usize, item: Option<ItemStack>) {
        let mut slots = self.slots.write();
        match slots.get_mut(slot) {
            Some(cell) => *cell = item.filter(|s| !s.is_empty()),
            None => log::warn!("Slot {} out of range for container '{}'", slot, self.title),
        }
    }

    fn clear(&self) {
        self.slots.write().iter_mut().for_each(|cell| *cell = None);
    }
}

/// In-memory implementation of every host capability
pub struct MemoryServer {
    materials: RwLock<BTreeSet<Material>>,
    recipes: RwLock<BTreeMap<NamespacedKey, ShapedRecipe>>,
    views: RwLock<HashMap<ParticipantId, SharedContainer>>,
}

impl MemoryServer {
    /// Create a server knowing [`DEFAULT_MATERIALS`]
    pub fn new() -> Self {
        Self::with_materials(DEFAULT_MATERIALS.iter().copied())
    }

    /// Create a server knowing exactly these materials (plus `AIR`)
    pub fn with_materials<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut materials: BTreeSet<Material> = names.into_iter().map(Material::new).collect();
        materials.insert(Material::AIR);
        Self {
            materials: RwLock::new(materials),
            recipes: RwLock::new(BTreeMap::new()),
            views: RwLock::new(HashMap::new()),
        }
    }

    /// Make a material known
    pub fn register_material(&self, name: &str) -> Material {
        let material = Material::new(name);
        self.materials.write().insert(material.clone());
        material
    }

    /// Get a registered recipe
    pub fn recipe(&self, key: &NamespacedKey) -> Option<ShapedRecipe> {
        self.recipes.read().get(key).cloned()
    }

    /// Number of registered recipes
    pub fn recipe_count(&self) -> usize {
        self.recipes.read().len()
    }

    /// Result of crafting a 3x3 grid, if any recipe matches
    pub fn craft(&self, grid: &[Option<ItemStack>]) -> Option<ItemStack> {
        self.recipes
            .read()
            .values()
            .find(|recipe| recipe.matches(grid))
            .map(|recipe| recipe.result().clone())
    }

    /// Container a participant currently has open
    pub fn open_view(&self, viewer: ParticipantId) -> Option<SharedContainer> {
        self.views.read().get(&viewer).cloned()
    }

    /// Close a participant's view
    pub fn close_view(&self, viewer: ParticipantId) -> Option<SharedContainer> {
        self.views.write().remove(&viewer)
    }
}

impl Default for MemoryServer {
    fn default() -> Self {
        Self::new()
    }
}

impl Materials for MemoryServer {
    fn material(&self, name: &str) -> Option<Material> {
        let material = Material::new(name);
        self.materials.read().contains(&material).then_some(material)
    }
}

impl RecipeBook for MemoryServer {
    fn add_recipe(&self, recipe: ShapedRecipe) -> Result<()> {
        let mut recipes = self.recipes.write();
        if recipes.contains_key(recipe.key()) {
            return Err(HostError::DuplicateRecipe(recipe.key().clone()));
        }
        recipes.insert(recipe.key().clone(), recipe);
        Ok(())
    }

    fn has_recipe(&self, key: &NamespacedKey) -> bool {
        self.recipes.read().contains_key(key)
    }

    fn remove_recipe(&self, key: &NamespacedKey) -> bool {
        self.recipes.write().remove(key).is_some()
    }
}

impl ContainerHost for MemoryServer {
    fn create_container(&self, size: usize, title: &str) -> SharedContainer {
        Arc::new(MemoryContainer::new(size, title))
    }

    fn open_container(&self, viewer: ParticipantId, container: &SharedContainer) {
        self.views.write().insert(viewer, Arc::clone(container));
    }
}
