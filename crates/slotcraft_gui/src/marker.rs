//! GUI marker
//!
//! Every stack placed by a page carries the byte field
//! `slotcraft:inventory_item = 1`, so stacks that escape a screen can
//! still be recognized.

use slotcraft_core::{ItemStack, NamespacedKey, LIBRARY_NAMESPACE};

/// Key name of the marker field
pub const MARKER_KEY: &str = "inventory_item";

/// The marker field key
pub fn marker_key() -> NamespacedKey {
    NamespacedKey::from_static(LIBRARY_NAMESPACE, MARKER_KEY)
}

/// Mark a stack as GUI-owned; stacks without metadata are left alone
pub fn apply_marker(mut stack: ItemStack) -> ItemStack {
    if let Some(meta) = stack.meta_mut() {
        meta.data.set_byte(marker_key(), 1);
    }
    stack
}

/// Check whether a stack carries the GUI marker
pub fn is_inventory_item(stack: Option<&ItemStack>) -> bool {
    stack
        .and_then(ItemStack::meta)
        .and_then(|meta| meta.data.get_byte(&marker_key()))
        == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotcraft_core::Material;

    #[test]
    fn test_marker() {
        let stack = ItemStack::new(Material::GREEN_WOOL);
        assert!(!is_inventory_item(Some(&stack)));

        let marked = apply_marker(stack);
        assert!(is_inventory_item(Some(&marked)));
        assert_eq!(marker_key().to_string(), "slotcraft:inventory_item");
    }

    #[test]
    fn test_marker_needs_meta() {
        assert!(!is_inventory_item(None));
        assert!(!is_inventory_item(Some(&apply_marker(ItemStack::empty()))));
    }
}
