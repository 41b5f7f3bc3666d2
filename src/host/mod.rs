//! Host Boundary
//!
//! Capabilities the core consumes but does not implement: mutating a player,
//! resolving worlds, and drawing UI. The host plugs its own types in behind
//! these traits; this layer holds no game rules.

pub mod capability;
pub mod model;

#[cfg(test)]
pub(crate) mod testing;

pub use capability::{ActorCapability, CommandSource, DisplayCapability, WorldCapability};
pub use model::{
    ChatChannel, ChecklistLine, ClickAction, EffectKind, Enchantment, EnchantmentKind,
    EquipmentSlot, GameMode, ItemKind, ItemStack, Page, Rgb, ScoreLine, Scoreboard,
    StatusBar, StatusEffect,
};
