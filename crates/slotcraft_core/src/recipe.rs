//! Shaped crafting recipes

use crate::id::NamespacedKey;
use crate::item::{ItemStack, Material};
use std::collections::BTreeMap;

/// Symbols of the fixed 3x3 shape, row-major
pub const SHAPE_SYMBOLS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// A shaped recipe: a fixed 3x3 pattern mapped to a result stack
///
/// Cells without an ingredient accept only an empty grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRecipe {
    key: NamespacedKey,
    ingredients: BTreeMap<char, Material>,
    result: ItemStack,
}

impl ShapedRecipe {
    /// Create a recipe with an empty pattern
    pub fn new(key: NamespacedKey, result: ItemStack) -> Self {
        Self {
            key,
            ingredients: BTreeMap::new(),
            result,
        }
    }

    /// The shape rows
    pub fn shape(&self) -> [&'static str; 3] {
        ["123", "456", "789"]
    }

    /// Set the ingredient for a shape symbol; unknown symbols are ignored
    pub fn set_ingredient(&mut self, symbol: char, material: Material) {
        if SHAPE_SYMBOLS.contains(&symbol) {
            self.ingredients.insert(symbol, material);
        }
    }

    /// Ingredient for a cell index (0..9)
    pub fn ingredient(&self, cell: usize) -> Option<&Material> {
        self.ingredients.get(SHAPE_SYMBOLS.get(cell)?)
    }

    /// Recipe key
    pub fn key(&self) -> &NamespacedKey {
        &self.key
    }

    /// Result stack
    pub fn result(&self) -> &ItemStack {
        &self.result
    }

    /// Check a 3x3 crafting grid against the pattern
    pub fn matches(&self, grid: &[Option<ItemStack>]) -> bool {
        if grid.len() != SHAPE_SYMBOLS.len() {
            return false;
        }
        grid.iter().enumerate().all(|(cell, stack)| {
            let present = stack.as_ref().filter(|s| !s.is_empty());
            match (self.ingredient(cell), present) {
                (Some(material), Some(stack)) => stack.material() == material,
                (None, None) => true,
                _ => false,
            }
        })
    }
}
