//! Capability traits implemented by the host.

use crate::core::{Location, PlayerId, Transform, WorldId};
use super::model::{
    ChatChannel, EquipmentSlot, GameMode, ItemStack, Page, Scoreboard, StatusBar, StatusEffect,
};

/// Anything that can issue a command.
pub trait CommandSource {
    /// Display name of the source.
    fn source_name(&self) -> &str;

    /// Where the source currently stands. `None` for non-actors such as the
    /// server console.
    fn current_transform(&self) -> Option<Transform>;
}

/// A player the core can reconfigure.
pub trait ActorCapability: CommandSource {
    /// Stable identity of this player.
    fn player_id(&self) -> PlayerId;

    /// Set current and maximum health.
    fn set_health(&mut self, health: f64, max_health: f64);
    /// Set the hunger level.
    fn set_food_level(&mut self, food: u32);
    /// Switch game mode.
    fn set_game_mode(&mut self, mode: GameMode);
    /// Allow or forbid flight.
    fn set_can_fly(&mut self, can_fly: bool);
    /// Set remaining burn time. Zero extinguishes.
    fn set_fire_ticks(&mut self, ticks: u32);

    /// Replace all active status effects. An empty slice clears them.
    fn set_effects(&mut self, effects: &[StatusEffect]);

    /// Select a hotbar slot.
    fn select_hotbar_slot(&mut self, slot: u8);
    /// Put an item in the main hand.
    fn set_main_hand(&mut self, item: ItemStack);
    /// Put an item in an equipment slot.
    fn set_equipment(&mut self, slot: EquipmentSlot, item: ItemStack);
    /// Empty the inventory, equipment included.
    fn clear_inventory(&mut self);

    /// Teleport, including world change and orientation.
    fn set_transform(&mut self, transform: Transform);

    /// Attach a personal scoreboard, or clear it with `None`.
    fn set_scoreboard(&mut self, scoreboard: Option<Scoreboard>);

    /// Send text on a channel.
    fn send_message(&mut self, channel: ChatChannel, text: &str);
}

/// World lookups.
pub trait WorldCapability {
    /// Whether the world is loaded.
    fn has_world(&self, world: WorldId) -> bool;

    /// Default spawn point of the world, if it is loaded.
    fn spawn_location(&self, world: WorldId) -> Option<Location>;
}

/// UI rendering.
pub trait DisplayCapability {
    /// Show a paginated list to a command source.
    fn render_pages(&mut self, viewer: &dyn CommandSource, page: &Page);

    /// Create or refresh a status bar for all of its viewers.
    fn render_status_bar(&mut self, bar: &StatusBar);

    /// Stop showing a status bar to one player.
    fn hide_status_bar(&mut self, bar_key: &str, viewer: PlayerId);
}
