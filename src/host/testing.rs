//! Recording capability doubles for unit tests.

use std::collections::BTreeMap;

use crate::core::{Location, PlayerId, Transform, Vec3, WorldId};
use super::capability::{ActorCapability, CommandSource, DisplayCapability, WorldCapability};
use super::model::{
    ChatChannel, EquipmentSlot, GameMode, ItemStack, Page, Scoreboard, StatusBar, StatusEffect,
};

pub(crate) const WORLD: WorldId = WorldId::from_bytes([1; 16]);
pub(crate) const OTHER_WORLD: WorldId = WorldId::from_bytes([2; 16]);

/// Player identity `[n; 16]`.
pub(crate) fn pid(n: u8) -> PlayerId {
    PlayerId::new([n; 16])
}

pub(crate) fn transform_at(x: f64, y: f64, z: f64) -> Transform {
    Transform::new(WORLD, Vec3::new(x, y, z), 0.0, 0.0)
}

/// Actor that records every mutation applied to it.
#[derive(Debug)]
pub(crate) struct RecordingActor {
    pub id: PlayerId,
    pub name: String,
    pub transform: Transform,
    pub health: f64,
    pub max_health: f64,
    pub food: u32,
    pub game_mode: GameMode,
    pub can_fly: bool,
    pub fire_ticks: u32,
    pub effects: Vec<StatusEffect>,
    pub hotbar_slot: u8,
    pub main_hand: Option<ItemStack>,
    pub headwear: Option<ItemStack>,
    pub inventory_clears: u32,
    pub scoreboard: Option<Scoreboard>,
    pub messages: Vec<(ChatChannel, String)>,
}

impl RecordingActor {
    pub fn new(n: u8) -> Self {
        Self {
            id: pid(n),
            name: format!("player{}", n),
            transform: transform_at(0.0, 0.0, 0.0),
            health: 5.0,
            max_health: 20.0,
            food: 3,
            game_mode: GameMode::Survival,
            can_fly: true,
            fire_ticks: 40,
            effects: Vec::new(),
            hotbar_slot: 4,
            main_hand: None,
            headwear: None,
            inventory_clears: 0,
            scoreboard: None,
            messages: Vec::new(),
        }
    }

    pub fn standing_at(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(|(_, m)| m.as_str())
    }
}

impl CommandSource for RecordingActor {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn current_transform(&self) -> Option<Transform> {
        Some(self.transform)
    }
}

impl ActorCapability for RecordingActor {
    fn player_id(&self) -> PlayerId {
        self.id
    }

    fn set_health(&mut self, health: f64, max_health: f64) {
        self.health = health;
        self.max_health = max_health;
    }

    fn set_food_level(&mut self, food: u32) {
        self.food = food;
    }

    fn set_game_mode(&mut self, mode: GameMode) {
        self.game_mode = mode;
    }

    fn set_can_fly(&mut self, can_fly: bool) {
        self.can_fly = can_fly;
    }

    fn set_fire_ticks(&mut self, ticks: u32) {
        self.fire_ticks = ticks;
    }

    fn set_effects(&mut self, effects: &[StatusEffect]) {
        self.effects = effects.to_vec();
    }

    fn select_hotbar_slot(&mut self, slot: u8) {
        self.hotbar_slot = slot;
    }

    fn set_main_hand(&mut self, item: ItemStack) {
        self.main_hand = Some(item);
    }

    fn set_equipment(&mut self, slot: EquipmentSlot, item: ItemStack) {
        match slot {
            EquipmentSlot::Headwear => self.headwear = Some(item),
        }
    }

    fn clear_inventory(&mut self) {
        self.inventory_clears += 1;
        self.main_hand = None;
        self.headwear = None;
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn set_scoreboard(&mut self, scoreboard: Option<Scoreboard>) {
        self.scoreboard = scoreboard;
    }

    fn send_message(&mut self, channel: ChatChannel, text: &str) {
        self.messages.push((channel, text.to_string()));
    }
}

/// Source with no position, like the server console.
pub(crate) struct ConsoleSource;

impl CommandSource for ConsoleSource {
    fn source_name(&self) -> &str {
        "console"
    }

    fn current_transform(&self) -> Option<Transform> {
        None
    }
}

/// Display that keeps what it was asked to draw.
#[derive(Debug, Default)]
pub(crate) struct RecordingDisplay {
    pub pages: Vec<Page>,
    pub bars: BTreeMap<String, StatusBar>,
    pub hidden: Vec<(String, PlayerId)>,
}

impl DisplayCapability for RecordingDisplay {
    fn render_pages(&mut self, _viewer: &dyn CommandSource, page: &Page) {
        self.pages.push(page.clone());
    }

    fn render_status_bar(&mut self, bar: &StatusBar) {
        self.bars.insert(bar.key.clone(), bar.clone());
    }

    fn hide_status_bar(&mut self, bar_key: &str, viewer: PlayerId) {
        self.hidden.push((bar_key.to_string(), viewer));
    }
}

/// Worlds backed by a fixed spawn table.
#[derive(Debug, Default)]
pub(crate) struct StaticWorlds {
    pub spawns: BTreeMap<WorldId, Location>,
}

impl StaticWorlds {
    pub fn with_default() -> Self {
        let mut spawns = BTreeMap::new();
        spawns.insert(WORLD, Location::new(WORLD, Vec3::new(0.0, 64.0, 0.0)));
        Self { spawns }
    }
}

impl WorldCapability for StaticWorlds {
    fn has_world(&self, world: WorldId) -> bool {
        self.spawns.contains_key(&world)
    }

    fn spawn_location(&self, world: WorldId) -> Option<Location> {
        self.spawns.get(&world).copied()
    }
}
