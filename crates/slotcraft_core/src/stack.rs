//! Stack builder
//!
//! Builds display-ready stacks. Every stack with metadata gets all
//! [`ItemFlag`]s, so bookkeeping (identity tags, the glow enchantment)
//! never shows up in the player's tooltip.

use crate::id::ParticipantId;
use crate::item::{ItemFlag, ItemMeta, ItemStack, Material};

/// Enchantment attached at level 0 to make a stack glow
pub const GLOW_ENCHANTMENT: &str = "unbreaking";

/// What a stack looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Appearance {
    /// Plain material
    Material(Material),
    /// Player head skinned to an owner
    Head(ParticipantId),
}

impl Appearance {
    /// Material the host renders
    pub fn material(&self) -> Material {
        match self {
            Self::Material(material) => material.clone(),
            Self::Head(_) => Material::PLAYER_HEAD,
        }
    }
}

impl From<Material> for Appearance {
    fn from(material: Material) -> Self {
        Self::Material(material)
    }
}

/// Builder for display stacks
#[derive(Debug, Clone)]
pub struct StackBuilder {
    appearance: Option<Appearance>,
    name: Option<String>,
    lore: Vec<String>,
    glow: bool,
}

impl StackBuilder {
    /// Start from an appearance; `None` builds the empty sentinel
    pub fn new(appearance: Option<Appearance>) -> Self {
        Self {
            appearance,
            name: None,
            lore: Vec::new(),
            glow: false,
        }
    }

    /// Start from a material
    pub fn material(material: Material) -> Self {
        Self::new(Some(Appearance::Material(material)))
    }

    /// Start from a player head skinned to `owner`
    pub fn head(owner: ParticipantId) -> Self {
        Self::new(Some(Appearance::Head(owner)))
    }

    /// Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set description lines
    pub fn with_lore<I, S>(mut self, lore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = lore.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle the enchantment glow
    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    /// Build the stack
    pub fn build(self) -> ItemStack {
        let Some(appearance) = self.appearance else {
            return ItemStack::empty();
        };

        let mut stack = ItemStack::new(appearance.material());
        let Some(meta) = stack.meta_mut() else {
            return stack;
        };

        meta.display_name = self.name;
        meta.lore = self.lore;
        if let Appearance::Head(owner) = appearance {
            meta.skull_owner = Some(owner);
        }
        if self.glow {
            meta.add_enchant(GLOW_ENCHANTMENT, 0);
        }
        hide_tooltips(meta);
        stack
    }
}

/// Plain stack of a material with hidden tooltips; `None` gives the empty sentinel
pub fn stack(material: Option<Material>) -> ItemStack {
    StackBuilder::new(material.map(Appearance::Material)).build()
}

/// Named stack
pub fn named(material: Material, name: impl Into<String>) -> ItemStack {
    StackBuilder::material(material).with_name(name).build()
}

/// Named stack with description lines
pub fn described<I, S>(material: Material, name: impl Into<String>, lore: I) -> ItemStack
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    StackBuilder::material(material).with_name(name).with_lore(lore).build()
}

/// Named stack with description lines and optional enchantment glow
pub fn glowing<I, S>(material: Material, name: impl Into<String>, lore: I, glow: bool) -> ItemStack
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    StackBuilder::material(material)
        .with_name(name)
        .with_lore(lore)
        .with_glow(glow)
        .build()
}

/// Player head skinned to `owner`
pub fn head<I, S>(owner: ParticipantId, name: impl Into<String>, lore: I) -> ItemStack
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    StackBuilder::head(owner).with_name(name).with_lore(lore).build()
}

/// Apply every tooltip-hiding flag
pub fn hide_tooltips(meta: &mut ItemMeta) {
    for flag in ItemFlag::ALL {
        meta.add_flag(flag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_builds_empty_sentinel() {
        let stack = stack(None);
        assert!(stack.is_empty());
        assert!(stack.meta().is_none());
    }

    #[test]
    fn test_all_flags_hidden() {
        let stack = described(Material::GREEN_WOOL, "Ruby", ["A red gem", "Very shiny"]);
        let meta = stack.meta().unwrap();

        assert_eq!(stack.display_name(), Some("Ruby"));
        assert_eq!(stack.lore(), ["A red gem", "Very shiny"]);
        for flag in ItemFlag::ALL {
            assert!(meta.has_flag(flag), "missing {:?}", flag);
        }
    }

    #[test]
    fn test_glow_is_level_zero_enchant() {
        let stack = StackBuilder::material(Material::new("STICK"))
            .with_name("Wand")
            .with_glow(true)
            .build();
        let meta = stack.meta().unwrap();

        assert_eq!(meta.enchants.get(GLOW_ENCHANTMENT), Some(&0));
        assert!(meta.has_flag(ItemFlag::HideEnchants));

        let plain = named(Material::new("STICK"), "Wand");
        assert!(plain.meta().unwrap().enchants.is_empty());

        let lit = glowing(Material::new("STICK"), "Wand", ["Sparkles"], true);
        assert_eq!(lit.meta().unwrap().enchants.get(GLOW_ENCHANTMENT), Some(&0));
        assert_eq!(lit.lore(), ["Sparkles"]);
    }

    #[test]
    fn test_head_skin_owner() {
        let owner = ParticipantId::new();
        let stack = head(owner, "Trophy", Vec::<String>::new());

        assert_eq!(stack.material(), &Material::PLAYER_HEAD);
        assert_eq!(stack.meta().unwrap().skull_owner, Some(owner));
    }

    #[test]
    fn test_air_material_stays_bare() {
        let stack = named(Material::AIR, "ignored");
        assert!(stack.is_empty());
        assert_eq!(stack.display_name(), None);
    }
}
