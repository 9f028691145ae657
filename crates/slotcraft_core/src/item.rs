//! Item stacks and their metadata container
//!
//! This mirrors the slice of the host's item representation the library
//! relies on: a material, an amount and an optional metadata block. Only
//! materials that carry metadata ([`Material::has_meta`]) get a block, so
//! writes to an `AIR` stack are silently dropped, as on the host.

use crate::id::{NamespacedKey, ParticipantId};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A host material, identified by its upper-case name
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Material(Cow<'static, str>);

impl Material {
    /// Empty cell / no item
    pub const AIR: Material = Material(Cow::Borrowed("AIR"));
    /// Skinnable player head
    pub const PLAYER_HEAD: Material = Material(Cow::Borrowed("PLAYER_HEAD"));
    /// Default GUI placeholder
    pub const WHITE_STAINED_GLASS_PANE: Material = Material(Cow::Borrowed("WHITE_STAINED_GLASS_PANE"));
    /// Common GUI background
    pub const GRAY_STAINED_GLASS_PANE: Material = Material(Cow::Borrowed("GRAY_STAINED_GLASS_PANE"));
    /// Common GUI background
    pub const BLACK_STAINED_GLASS_PANE: Material = Material(Cow::Borrowed("BLACK_STAINED_GLASS_PANE"));
    /// Close button
    pub const RED_STAINED_GLASS_PANE: Material = Material(Cow::Borrowed("RED_STAINED_GLASS_PANE"));
    /// "On" / "yes" button
    pub const GREEN_WOOL: Material = Material(Cow::Borrowed("GREEN_WOOL"));
    /// "Off" / "no" button
    pub const RED_WOOL: Material = Material(Cow::Borrowed("RED_WOOL"));

    /// Create a material from a name; the name is upper-cased
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into().to_uppercase()))
    }

    /// Get the material name
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Check if this is the empty material
    #[inline]
    pub fn is_air(&self) -> bool {
        self.0 == "AIR"
    }

    /// Whether stacks of this material carry a metadata block
    #[inline]
    pub fn has_meta(&self) -> bool {
        !self.is_air()
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Material({})", self.0)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tooltip sections the host can hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemFlag {
    /// Attribute modifiers
    HideAttributes,
    /// Enchantments
    HideEnchants,
    /// "Can destroy" list
    HideDestroys,
    /// "Can be placed on" list
    HidePlacedOn,
    /// Any other extra tooltip lines
    HideAdditionalTooltip,
    /// Unbreakable indicator
    HideUnbreakable,
}

impl ItemFlag {
    /// Every flag
    pub const ALL: [ItemFlag; 6] = [
        ItemFlag::HideAttributes,
        ItemFlag::HideEnchants,
        ItemFlag::HideDestroys,
        ItemFlag::HidePlacedOn,
        ItemFlag::HideAdditionalTooltip,
        ItemFlag::HideUnbreakable,
    ];
}

/// A typed value in the persistent data container
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataValue {
    /// Single byte flag
    Byte(u8),
    /// String value
    String(String),
}

/// Namespaced key/value storage that survives item moves and stacking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentData {
    values: BTreeMap<NamespacedKey, DataValue>,
}

impl PersistentData {
    /// Set a string field
    pub fn set_string(&mut self, key: NamespacedKey, value: impl Into<String>) {
        self.values.insert(key, DataValue::String(value.into()));
    }

    /// Get a string field (None if absent or not a string)
    pub fn get_string(&self, key: &NamespacedKey) -> Option<&str> {
        match self.values.get(key)? {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Set a byte field
    pub fn set_byte(&mut self, key: NamespacedKey, value: u8) {
        self.values.insert(key, DataValue::Byte(value));
    }

    /// Get a byte field (None if absent or not a byte)
    pub fn get_byte(&self, key: &NamespacedKey) -> Option<u8> {
        match self.values.get(key)? {
            DataValue::Byte(b) => Some(*b),
            _ => None,
        }
    }

    /// Check if a key is present with any type
    pub fn contains(&self, key: &NamespacedKey) -> bool {
        self.values.contains_key(key)
    }

    /// Remove a field
    pub fn remove(&mut self, key: &NamespacedKey) -> Option<DataValue> {
        self.values.remove(key)
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Metadata block of an item stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    /// Display name (None = host default name)
    pub display_name: Option<String>,
    /// Description lines
    pub lore: Vec<String>,
    /// Hidden tooltip sections
    pub flags: BTreeSet<ItemFlag>,
    /// Enchantments by name and level
    pub enchants: BTreeMap<String, u16>,
    /// Skin owner for player heads
    pub skull_owner: Option<ParticipantId>,
    /// Persistent data container
    pub data: PersistentData,
}

impl ItemMeta {
    /// Add a tooltip flag
    pub fn add_flag(&mut self, flag: ItemFlag) {
        self.flags.insert(flag);
    }

    /// Check a tooltip flag
    pub fn has_flag(&self, flag: ItemFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Add an enchantment at a level; level 0 is allowed
    pub fn add_enchant(&mut self, name: impl Into<String>, level: u16) {
        self.enchants.insert(name.into(), level);
    }
}

/// A stack of one material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    material: Material,
    amount: u8,
    meta: Option<ItemMeta>,
}

impl ItemStack {
    /// Create a single item of a material
    pub fn new(material: Material) -> Self {
        let meta = material.has_meta().then(ItemMeta::default);
        Self {
            material,
            amount: 1,
            meta,
        }
    }

    /// The empty sentinel (`AIR`, no metadata)
    pub fn empty() -> Self {
        Self::new(Material::AIR)
    }

    /// Set the amount
    pub fn with_amount(mut self, amount: u8) -> Self {
        self.amount = amount;
        self
    }

    /// Get the material
    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Get the amount
    #[inline]
    pub fn amount(&self) -> u8 {
        self.amount
    }

    /// Check if this is the empty sentinel
    pub fn is_empty(&self) -> bool {
        self.material.is_air() || self.amount == 0
    }

    /// Get the metadata block, if the material supports one
    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    /// Get the metadata block mutably, if the material supports one
    pub fn meta_mut(&mut self) -> Option<&mut ItemMeta> {
        self.meta.as_mut()
    }

    /// Replace the metadata block; ignored for materials without metadata
    pub fn set_meta(&mut self, meta: ItemMeta) {
        if self.material.has_meta() {
            self.meta = Some(meta);
        }
    }

    /// Remove all metadata (tags included)
    pub fn strip_meta(&mut self) {
        if self.material.has_meta() {
            self.meta = Some(ItemMeta::default());
        }
    }

    /// Display name, if set
    pub fn display_name(&self) -> Option<&str> {
        self.meta.as_ref()?.display_name.as_deref()
    }

    /// Description lines (empty without metadata)
    pub fn lore(&self) -> &[String] {
        self.meta.as_ref().map(|m| m.lore.as_slice()).unwrap_or(&[])
    }

    /// Check if two stacks are the same kind of item (everything but amount)
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.material == other.material && self.meta == other.meta
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_names() {
        let mat = Material::new("diamond_sword");
        assert_eq!(mat.name(), "DIAMOND_SWORD");
        assert_eq!(Material::new("air"), Material::AIR);
        assert!(Material::AIR.is_air());
        assert!(!Material::AIR.has_meta());
    }

    #[test]
    fn test_air_has_no_meta() {
        let mut stack = ItemStack::empty();
        assert!(stack.is_empty());
        assert!(stack.meta().is_none());

        stack.set_meta(ItemMeta::default());
        assert!(stack.meta().is_none());
    }

    #[test]
    fn test_persistent_data_types() {
        let key = NamespacedKey::library("test").unwrap();
        let mut data = PersistentData::default();

        data.set_string(key.clone(), "hello");
        assert_eq!(data.get_string(&key), Some("hello"));
        assert_eq!(data.get_byte(&key), None);

        data.set_byte(key.clone(), 1);
        assert_eq!(data.get_byte(&key), Some(1));
        assert_eq!(data.get_string(&key), None);
        assert!(data.contains(&key));
    }

    #[test]
    fn test_strip_meta_drops_data() {
        let key = NamespacedKey::library("test").unwrap();
        let mut stack = ItemStack::new(Material::GREEN_WOOL);
        stack.meta_mut().unwrap().data.set_byte(key.clone(), 1);

        let moved = stack.clone().with_amount(12);
        assert!(moved.is_similar(&stack));
        assert_eq!(moved.meta().unwrap().data.get_byte(&key), Some(1));

        stack.strip_meta();
        assert!(!stack.meta().unwrap().data.contains(&key));
    }
}
