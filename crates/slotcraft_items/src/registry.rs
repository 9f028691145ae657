//! Custom item registry
//!
//! Keeps the registered definitions of one plugin and the host recipe of
//! each one in step: a definition is in the registry exactly while the
//! registry has tried to give it a recipe.

use crate::crafting::{recipe_key, shaped_recipe};
use crate::definition::{Base, CustomItem};
use crate::error::{RegistryError, Result};
use crate::tag::IdentityTag;
use slotcraft_core::{Crafting, ItemId, ItemStack, NamespacedKey, SlotcraftConfig, StackBuilder};
use std::collections::HashMap;
use std::sync::Arc;

/// A registered definition and the key of its live recipe
#[derive(Debug, Clone)]
struct RegisteredItem {
    definition: CustomItem,
    /// None after a failed reload
    recipe_key: Option<NamespacedKey>,
}

/// Registry of custom item definitions
pub struct ItemRegistry {
    /// Host crafting system
    host: Arc<dyn Crafting>,
    /// Namespace for recipe keys
    namespace: String,
    /// Identity field written into every stack
    tag: IdentityTag,
    /// Registered definitions by id
    items: HashMap<ItemId, RegisteredItem>,
}

impl ItemRegistry {
    /// Create an empty registry for a plugin namespace
    pub fn new(host: Arc<dyn Crafting>, namespace: &str) -> Result<Self> {
        let tag = IdentityTag::new(namespace)?;
        Ok(Self {
            host,
            namespace: namespace.to_string(),
            tag,
            items: HashMap::new(),
        })
    }

    /// Create an empty registry using the configured namespace
    pub fn from_config(host: Arc<dyn Crafting>, config: &SlotcraftConfig) -> Result<Self> {
        Self::new(host, &config.namespace)
    }

    /// Namespace of recipe keys and identity tags
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Identity tag used by this registry
    pub fn tag(&self) -> &IdentityTag {
        &self.tag
    }

    // ========== Lifecycle ==========

    /// Register a definition and create its recipe
    ///
    /// Registering the same definition twice is a no-op. A different
    /// definition carrying an id that is already registered fails with
    /// [`RegistryError::DuplicateIdentity`]. Nothing changes on failure.
    pub fn register(&mut self, item: CustomItem) -> Result<ItemId> {
        let id = item.id();

        if let Some(existing) = self.items.get(&id) {
            if existing.definition == item {
                return Ok(id);
            }
            log::warn!("Custom item '{}' reuses the id of '{}'", item.name(), existing.definition.name());
            return Err(RegistryError::DuplicateIdentity(id));
        }

        let key = self.create_recipe(&item)?;
        log::debug!("Registered custom item '{}' ({})", item.name(), id);
        self.items.insert(
            id,
            RegisteredItem {
                definition: item,
                recipe_key: Some(key),
            },
        );
        Ok(id)
    }

    /// Remove a definition and revoke its recipe
    ///
    /// Returns the removed definition, or None if it was not registered.
    pub fn unregister(&mut self, id: ItemId) -> Option<CustomItem> {
        let entry = self.items.remove(&id)?;
        if let Some(key) = &entry.recipe_key {
            self.remove_recipe(key);
        }
        log::debug!("Unregistered custom item '{}' ({})", entry.definition.name(), id);
        Some(entry.definition)
    }

    /// Unregister and drop a definition; true if it was registered
    pub fn delete(&mut self, id: ItemId) -> bool {
        self.unregister(id).is_some()
    }

    /// Recreate the recipe of a registered definition from `item`
    ///
    /// `item` carries the id of the registered definition and its new
    /// attributes (see [`CustomItem::to_builder`]). Unregistered ids are
    /// a no-op. If the new recipe cannot be created the old one is gone,
    /// the previous attributes stay stored and the error is returned.
    pub fn reload(&mut self, item: &CustomItem) -> Result<()> {
        let id = item.id();
        let Some(old_key) = self.items.get(&id).map(|entry| entry.recipe_key.clone()) else {
            return Ok(());
        };

        if let Some(key) = &old_key {
            self.remove_recipe(key);
        }
        let created = self.create_recipe(item);

        let Some(entry) = self.items.get_mut(&id) else {
            return Err(RegistryError::Unknown);
        };
        match created {
            Ok(key) => {
                entry.definition = item.clone();
                entry.recipe_key = Some(key);
                Ok(())
            }
            Err(e) => {
                log::warn!("Reload of custom item '{}' left it without a recipe: {}", item.name(), e);
                entry.recipe_key = None;
                Err(e)
            }
        }
    }

    /// Unregister every definition
    pub fn clear(&mut self) {
        let ids: Vec<ItemId> = self.items.keys().copied().collect();
        for id in ids {
            self.unregister(id);
        }
    }

    // ========== Lookup ==========

    /// Check if a definition is registered
    pub fn is_registered(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Get a registered definition
    pub fn get_by_id(&self, id: ItemId) -> Option<&CustomItem> {
        self.items.get(&id).map(|entry| &entry.definition)
    }

    /// Resolve a stack to the definition whose id it carries
    pub fn get_by_stack(&self, stack: &ItemStack) -> Option<&CustomItem> {
        self.get_by_id(self.tag.extract(Some(stack))?)
    }

    /// A fresh tagged stack of a registered definition
    pub fn item_stack(&self, id: ItemId) -> Option<ItemStack> {
        self.build_stack(self.get_by_id(id)?).ok()
    }

    /// Key of the live recipe of a registered definition
    pub fn recipe_key(&self, id: ItemId) -> Option<&NamespacedKey> {
        self.items.get(&id)?.recipe_key.as_ref()
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate registered definitions
    pub fn iter(&self) -> impl Iterator<Item = &CustomItem> {
        self.items.values().map(|entry| &entry.definition)
    }

    // ========== Internal ==========

    /// Tagged stack for a definition; head items need an owner
    fn build_stack(&self, item: &CustomItem) -> Result<ItemStack> {
        let builder = match item.base() {
            Base::Head { owner: Some(owner) } => StackBuilder::head(*owner),
            Base::Head { owner: None } => return Err(RegistryError::MissingOwner(item.id())),
            Base::Material(name) => {
                let material = self
                    .host
                    .material(name)
                    .ok_or_else(|| RegistryError::recipe(item.name(), format!("unknown material '{}'", name)))?;
                if material.is_air() {
                    return Err(RegistryError::recipe(item.name(), "an item cannot be made of AIR"));
                }
                StackBuilder::material(material)
            }
        };

        let stack = builder.with_name(item.name()).with_lore(item.lore()).build();
        Ok(self.tag.apply(stack, item.id()))
    }

    /// Build and register the recipe for a definition
    fn create_recipe(&self, item: &CustomItem) -> Result<NamespacedKey> {
        let result = self.build_stack(item)?;
        let key = recipe_key(&self.namespace, item)?;
        let recipe = shaped_recipe(&*self.host, key.clone(), item.recipe(), result)?;

        self.host
            .add_recipe(recipe)
            .map_err(|e| RegistryError::recipe(item.name(), e))?;
        log::info!("Successfully created {} (key: {})", item.name(), key);
        Ok(key)
    }

    fn remove_recipe(&self, key: &NamespacedKey) {
        if self.host.has_recipe(key) && self.host.remove_recipe(key) {
            log::debug!("Removed recipe {}", key);
        }
    }
}

impl std::fmt::Debug for ItemRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("namespace", &self.namespace)
            .field("items", &self.items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotcraft_core::{Material, MemoryServer, ParticipantId, RecipeBook};

    fn setup() -> (Arc<MemoryServer>, ItemRegistry) {
        let server = Arc::new(MemoryServer::new());
        let registry = ItemRegistry::new(server.clone(), "test").unwrap();
        (server, registry)
    }

    fn ruby() -> CustomItem {
        CustomItem::builder("gem")
            .name("Ruby")
            .lore(["A red gem"])
            .material("EMERALD")
            .cell(4, "DIAMOND")
            .build()
    }

    #[test]
    fn test_register_creates_recipe() {
        let (server, mut registry) = setup();
        let item = ruby();
        let id = registry.register(item.clone()).unwrap();

        assert_eq!(id, item.id());
        assert!(registry.is_registered(id));
        let key = registry.recipe_key(id).unwrap();
        assert!(server.recipe(key).is_some());
        assert_eq!(server.recipe_count(), 1);
    }

    #[test]
    fn test_item_stack_is_tagged_and_described() {
        let (_server, mut registry) = setup();
        let id = registry.register(ruby()).unwrap();
        let stack = registry.item_stack(id).unwrap();

        assert_eq!(stack.material(), &Material::new("EMERALD"));
        assert_eq!(stack.display_name(), Some("Ruby"));
        assert_eq!(stack.lore(), ["A red gem"]);
        assert_eq!(registry.tag().extract(Some(&stack)), Some(id));
        assert_eq!(registry.get_by_stack(&stack).map(CustomItem::id), Some(id));
    }

    #[test]
    fn test_register_twice_is_noop() {
        let (server, mut registry) = setup();
        let item = ruby();
        registry.register(item.clone()).unwrap();
        registry.register(item).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(server.recipe_count(), 1);
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let (server, mut registry) = setup();
        let item = ruby();
        registry.register(item.clone()).unwrap();

        let impostor = item.to_builder().name("Fake Ruby").build();
        let err = registry.register(impostor).unwrap_err();

        assert_eq!(err, RegistryError::DuplicateIdentity(item.id()));
        assert_eq!(registry.get_by_id(item.id()), Some(&item));
        assert_eq!(server.recipe_count(), 1);
    }

    #[test]
    fn test_unknown_base_material_fails_cleanly() {
        let (server, mut registry) = setup();
        let item = ruby().to_builder().material("RUBY_ORE").build();

        let err = registry.register(item.clone()).unwrap_err();
        assert_eq!(err.code(), 2);
        assert!(!registry.is_registered(item.id()));
        assert_eq!(server.recipe_count(), 0);
    }

    #[test]
    fn test_head_requires_owner() {
        let (server, mut registry) = setup();
        let head = CustomItem::head("trophy").name("Trophy").cell(4, "DIAMOND").build();

        let err = registry.register(head.clone()).unwrap_err();
        assert_eq!(err, RegistryError::MissingOwner(head.id()));
        assert_eq!(server.recipe_count(), 0);

        let owner = ParticipantId::new();
        let id = registry.register(head.to_builder().owner(owner).build()).unwrap();
        let stack = registry.item_stack(id).unwrap();
        assert_eq!(stack.material(), &Material::PLAYER_HEAD);
        assert_eq!(stack.meta().unwrap().skull_owner, Some(owner));
    }

    #[test]
    fn test_recipe_without_ingredients_rejected() {
        let (server, mut registry) = setup();
        let bare = CustomItem::builder("gem").name("Ruby").material("EMERALD").build();

        let err = registry.register(bare.clone()).unwrap_err();

        assert_eq!(err.code(), 2);
        assert!(!registry.is_registered(bare.id()));
        assert_eq!(server.recipe_count(), 0);
        assert!(server.craft(&vec![None; 9]).is_none());
    }

    #[test]
    fn test_unregister_and_delete() {
        let (server, mut registry) = setup();
        let id = registry.register(ruby()).unwrap();

        assert_eq!(registry.unregister(id).map(|i| i.id()), Some(id));
        assert_eq!(server.recipe_count(), 0);
        assert!(registry.unregister(id).is_none());
        assert!(!registry.delete(id));
    }

    #[test]
    fn test_unregister_tolerates_missing_recipe() {
        let (server, mut registry) = setup();
        let id = registry.register(ruby()).unwrap();
        let key = registry.recipe_key(id).unwrap().clone();
        server.remove_recipe(&key);

        assert!(registry.delete(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reload_renames_recipe() {
        let (server, mut registry) = setup();
        let item = ruby();
        registry.register(item.clone()).unwrap();
        let old_key = registry.recipe_key(item.id()).unwrap().clone();

        let renamed = item.to_builder().name("Red Ruby").build();
        registry.reload(&renamed).unwrap();

        let new_key = registry.recipe_key(item.id()).unwrap();
        assert_ne!(new_key, &old_key);
        assert!(!server.has_recipe(&old_key));
        assert!(server.has_recipe(new_key));
        assert_eq!(registry.get_by_id(item.id()).map(CustomItem::name), Some("Red Ruby"));
    }

    #[test]
    fn test_failed_reload_keeps_definition_without_recipe() {
        let (server, mut registry) = setup();
        let item = ruby();
        registry.register(item.clone()).unwrap();

        let broken = item.to_builder().cell(0, "RUBY_ORE").build();
        assert!(registry.reload(&broken).is_err());

        assert!(registry.is_registered(item.id()));
        assert_eq!(registry.recipe_key(item.id()), None);
        assert_eq!(registry.get_by_id(item.id()), Some(&item));
        assert_eq!(server.recipe_count(), 0);

        // A later good reload restores the recipe
        registry.reload(&item).unwrap();
        assert_eq!(server.recipe_count(), 1);
    }

    #[test]
    fn test_reload_unregistered_is_noop() {
        let (server, mut registry) = setup();
        registry.reload(&ruby()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(server.recipe_count(), 0);
    }

    #[test]
    fn test_clear() {
        let (server, mut registry) = setup();
        registry.register(ruby()).unwrap();
        registry.register(ruby()).unwrap();
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(server.recipe_count(), 0);
    }

    #[test]
    fn test_invalid_namespace() {
        let server = Arc::new(MemoryServer::new());
        let err = ItemRegistry::new(server, "Bad Namespace").unwrap_err();
        assert_eq!(err.code(), 29);
    }
}
