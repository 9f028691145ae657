//! Recipe construction
//!
//! The nine recipe cells map row-major onto the fixed shape
//! `123 / 456 / 789`. Empty cells add no ingredient, but a pattern needs
//! at least one ingredient.

use crate::definition::{CustomItem, EMPTY_CELL, RECIPE_CELLS};
use crate::error::{RegistryError, Result};
use slotcraft_core::{ItemStack, Materials, NamespacedKey, ShapedRecipe, SHAPE_SYMBOLS};

/// Make a string usable as a recipe key: spaces become `_`, colons
/// become `.`, everything is lowercased
pub fn sanitize_key(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            ' ' => '_',
            ':' => '.',
            c => c,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Recipe key for a definition: sanitized name followed by the sanitized
/// id and category
pub fn recipe_key(namespace: &str, item: &CustomItem) -> Result<NamespacedKey> {
    let key = format!(
        "{}{}",
        sanitize_key(item.name()),
        sanitize_key(&format!("{}{}", item.id(), item.category()))
    );
    NamespacedKey::new(namespace, &key).map_err(|e| RegistryError::recipe(item.name(), e))
}

/// Whether a recipe cell means "no ingredient"
pub fn is_empty_cell(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || cell.eq_ignore_ascii_case(EMPTY_CELL)
}

/// Build a shaped recipe, resolving every non-empty cell through the host
///
/// Fails if a cell names an unknown material or if no cell holds an
/// ingredient.
pub fn shaped_recipe<M: Materials + ?Sized>(
    materials: &M,
    key: NamespacedKey,
    cells: &[String; RECIPE_CELLS],
    result: ItemStack,
) -> Result<ShapedRecipe> {
    let mut recipe = ShapedRecipe::new(key, result);
    let mut ingredients = 0;

    for (index, (cell, symbol)) in cells.iter().zip(SHAPE_SYMBOLS).enumerate() {
        if is_empty_cell(cell) {
            continue;
        }
        let material = materials.material(cell.trim()).ok_or_else(|| {
            RegistryError::recipe(
                recipe.key().key(),
                format!("unknown material '{}' in cell {}", cell, index + 1),
            )
        })?;
        if !material.is_air() {
            recipe.set_ingredient(symbol, material);
            ingredients += 1;
        }
    }

    if ingredients == 0 {
        return Err(RegistryError::recipe(recipe.key().key(), "recipe has no ingredients"));
    }
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotcraft_core::{Material, MemoryServer};

    fn cells(pattern: [&str; RECIPE_CELLS]) -> [String; RECIPE_CELLS] {
        pattern.map(String::from)
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("Ruby Sword"), "ruby_sword");
        assert_eq!(sanitize_key("tier:2 Gem"), "tier.2_gem");
        assert_eq!(sanitize_key("already_fine"), "already_fine");
    }

    #[test]
    fn test_recipe_key_contains_id_and_category() {
        let item = CustomItem::builder("Weapons").name("Ruby Sword").build();
        let key = recipe_key("myplugin", &item).unwrap();

        assert_eq!(key.namespace(), "myplugin");
        assert_eq!(key.key(), format!("ruby_sword{}weapons", item.id()));
    }

    #[test]
    fn test_recipe_key_distinct_for_equal_names() {
        let a = CustomItem::builder("gem").name("Ruby").build();
        let b = CustomItem::builder("gem").name("Ruby").build();
        assert_ne!(recipe_key("p", &a).unwrap(), recipe_key("p", &b).unwrap());
    }

    #[test]
    fn test_recipe_key_rejects_unusable_characters() {
        let item = CustomItem::builder("gem").name("Ruby!").build();
        let err = recipe_key("p", &item).unwrap_err();
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn test_shaped_recipe_maps_cells() {
        let server = MemoryServer::new();
        let key = NamespacedKey::new("p", "ruby").unwrap();
        let pattern = cells(["AIR", "redstone", "", "AIR", "DIAMOND", "AIR", "AIR", "STICK", "air"]);

        let recipe = shaped_recipe(&server, key, &pattern, ItemStack::new(Material::new("EMERALD"))).unwrap();

        assert_eq!(recipe.shape(), ["123", "456", "789"]);
        assert_eq!(recipe.ingredient(0), None);
        assert_eq!(recipe.ingredient(1), Some(&Material::new("REDSTONE")));
        assert_eq!(recipe.ingredient(2), None);
        assert_eq!(recipe.ingredient(4), Some(&Material::new("DIAMOND")));
        assert_eq!(recipe.ingredient(7), Some(&Material::new("STICK")));
        assert_eq!(recipe.ingredient(8), None);
    }

    #[test]
    fn test_shaped_recipe_unknown_material() {
        let server = MemoryServer::new();
        let key = NamespacedKey::new("p", "ruby").unwrap();
        let mut pattern = cells(["AIR"; RECIPE_CELLS]);
        pattern[3] = "RUBY_ORE".to_string();

        let err = shaped_recipe(&server, key, &pattern, ItemStack::new(Material::new("EMERALD"))).unwrap_err();

        assert_eq!(err.code(), 2);
        assert!(err.to_string().contains("RUBY_ORE"));
    }

    #[test]
    fn test_shaped_recipe_needs_an_ingredient() {
        let server = MemoryServer::new();
        let key = NamespacedKey::new("p", "ruby").unwrap();
        let pattern = cells(["AIR", "", "air", "AIR", " ", "AIR", "AIR", "AIR", "AIR"]);

        let err = shaped_recipe(&server, key, &pattern, ItemStack::new(Material::new("EMERALD"))).unwrap_err();

        assert_eq!(err.code(), 2);
        assert!(err.to_string().contains("no ingredients"));
    }
}
