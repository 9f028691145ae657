//! Item policy
//!
//! Answers host events that involve custom items. The host adapter calls
//! these from its interaction and crafting listeners and applies the
//! outcome itself.

use crate::registry::ItemRegistry;
use slotcraft_core::ItemStack;

/// Whether an interaction with `held` in hand should be cancelled
///
/// True only for registered custom items whose `usable` flag is off.
pub fn cancel_interaction(registry: &ItemRegistry, held: Option<&ItemStack>) -> bool {
    held.and_then(|stack| registry.get_by_stack(stack))
        .is_some_and(|item| !item.is_usable())
}

/// Filter the result of a crafting grid
///
/// Returns `None` when the result must not be produced:
/// - a custom ingredient is not allowed as an ingredient
/// - a custom ingredient is used to craft another custom item
/// - the result is a custom item that is not craftable
pub fn filter_craft(registry: &ItemRegistry, grid: &[Option<ItemStack>], result: Option<ItemStack>) -> Option<ItemStack> {
    let result = result?;
    let custom_result = registry.get_by_stack(&result);

    if custom_result.is_some_and(|item| !item.is_craftable()) {
        return None;
    }

    for stack in grid.iter().flatten() {
        if let Some(ingredient) = registry.get_by_stack(stack) {
            if !ingredient.is_ingredient() || custom_result.is_some() {
                log::debug!("Blocked craft using custom item '{}'", ingredient.name());
                return None;
            }
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::CustomItem;
    use slotcraft_core::{Material, MemoryServer};
    use std::sync::Arc;

    fn registry() -> ItemRegistry {
        ItemRegistry::new(Arc::new(MemoryServer::new()), "test").unwrap()
    }

    fn gem(name: &str) -> CustomItem {
        CustomItem::builder("gem")
            .name(name)
            .material("EMERALD")
            .cell(4, "DIAMOND")
            .build()
    }

    #[test]
    fn test_cancel_interaction() {
        let mut registry = registry();
        let usable = registry.register(gem("Usable")).unwrap();
        let inert = registry
            .register(gem("Inert").to_builder().usable(false).build())
            .unwrap();

        let usable_stack = registry.item_stack(usable).unwrap();
        let inert_stack = registry.item_stack(inert).unwrap();

        assert!(!cancel_interaction(&registry, None));
        assert!(!cancel_interaction(&registry, Some(&ItemStack::new(Material::new("STICK")))));
        assert!(!cancel_interaction(&registry, Some(&usable_stack)));
        assert!(cancel_interaction(&registry, Some(&inert_stack)));

        // Unregistered items are no longer custom
        registry.delete(inert);
        assert!(!cancel_interaction(&registry, Some(&inert_stack)));
    }

    #[test]
    fn test_vanilla_craft_passes() {
        let registry = registry();
        let grid = vec![Some(ItemStack::new(Material::new("STICK"))); 9];
        let result = ItemStack::new(Material::new("DIAMOND_SWORD"));

        assert_eq!(filter_craft(&registry, &grid, Some(result.clone())), Some(result));
        assert_eq!(filter_craft(&registry, &grid, None), None);
    }

    #[test]
    fn test_ingredient_flag() {
        let mut registry = registry();
        let plain = registry.register(gem("Plain")).unwrap();
        let allowed = registry
            .register(gem("Allowed").to_builder().ingredient(true).build())
            .unwrap();
        let result = ItemStack::new(Material::new("DIAMOND_SWORD"));

        let mut grid = vec![None; 9];
        grid[4] = registry.item_stack(plain);
        assert_eq!(filter_craft(&registry, &grid, Some(result.clone())), None);

        grid[4] = registry.item_stack(allowed);
        assert_eq!(filter_craft(&registry, &grid, Some(result.clone())), Some(result));
    }

    #[test]
    fn test_custom_into_custom_blocked() {
        let mut registry = registry();
        let allowed = registry
            .register(gem("Allowed").to_builder().ingredient(true).build())
            .unwrap();
        let target = registry.register(gem("Target")).unwrap();
        let result = registry.item_stack(target).unwrap();

        let mut grid = vec![None; 9];
        assert_eq!(filter_craft(&registry, &grid, Some(result.clone())), Some(result.clone()));

        grid[0] = registry.item_stack(allowed);
        assert_eq!(filter_craft(&registry, &grid, Some(result)), None);
    }

    #[test]
    fn test_uncraftable_result_blocked() {
        let mut registry = registry();
        let locked = registry
            .register(gem("Locked").to_builder().craftable(false).build())
            .unwrap();
        let result = registry.item_stack(locked).unwrap();

        assert_eq!(filter_craft(&registry, &[], Some(result)), None);
    }
}
