//! Values passed across the host boundary.

use std::collections::BTreeSet;

use crate::core::PlayerId;

// =============================================================================
// PLAYER STATE
// =============================================================================

/// Host game mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Default free play.
    Survival,
    /// Restricted: no block breaking or placing.
    Adventure,
}

/// Timed status effect types used by the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Reduces incoming damage.
    Resistance,
    /// No drowning.
    WaterBreathing,
    /// Full brightness.
    NightVision,
}

/// A timed status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusEffect {
    /// Effect type.
    pub kind: EffectKind,
    /// Zero-based strength.
    pub amplifier: u8,
    /// Duration in host ticks (20 per second).
    pub duration_ticks: u32,
    /// Whether the host draws effect particles.
    pub particles: bool,
}

impl StatusEffect {
    /// Effect without particles.
    pub const fn quiet(kind: EffectKind, amplifier: u8, duration_ticks: u32) -> Self {
        Self { kind, amplifier, duration_ticks, particles: false }
    }
}

// =============================================================================
// ITEMS
// =============================================================================

/// 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Item types handed out by the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// The knockback weapon.
    Stick,
    /// Team-dyed helmet.
    LeatherHelmet,
}

/// Enchantment types used by the loadout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnchantmentKind {
    /// Extra knockback on hit.
    Knockback,
    /// Normal mining speed underwater.
    AquaAffinity,
    /// Slower durability loss.
    Unbreaking,
    /// Longer breath underwater.
    Respiration,
}

/// An enchantment at a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Enchantment {
    /// Enchantment type.
    pub kind: EnchantmentKind,
    /// One-based level.
    pub level: u8,
}

impl Enchantment {
    /// Create an enchantment.
    pub const fn new(kind: EnchantmentKind, level: u8) -> Self {
        Self { kind, level }
    }
}

/// Equipment slots the arena writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquipmentSlot {
    /// Helmet slot.
    Headwear,
}

/// An item stack description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    /// Item type.
    pub kind: ItemKind,
    /// Stack size.
    pub quantity: u8,
    /// Applied in order.
    pub enchantments: Vec<Enchantment>,
    /// Leather dye, if any.
    pub dye: Option<Rgb>,
    /// Never loses durability.
    pub unbreakable: bool,
}

impl ItemStack {
    /// Single plain item.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            quantity: 1,
            enchantments: Vec::new(),
            dye: None,
            unbreakable: false,
        }
    }

    /// Add an enchantment.
    pub fn with_enchantment(mut self, kind: EnchantmentKind, level: u8) -> Self {
        self.enchantments.push(Enchantment::new(kind, level));
        self
    }

    /// Set the leather dye.
    pub fn dyed(mut self, color: Rgb) -> Self {
        self.dye = Some(color);
        self
    }

    /// Mark the item unbreakable.
    pub fn unbreakable(mut self) -> Self {
        self.unbreakable = true;
        self
    }
}

// =============================================================================
// TEXT / UI
// =============================================================================

/// Where a message is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatChannel {
    /// Regular chat line.
    Chat,
    /// Server notice.
    System,
    /// Single line above the hotbar.
    ActionBar,
}

/// One row of a sidebar objective.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    /// Row label.
    pub label: String,
    /// Row value.
    pub score: u32,
}

/// A personal sidebar scoreboard with a single objective.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    /// Objective name (host limit: 16 characters).
    pub objective: String,
    /// Shown above the rows.
    pub title: String,
    /// Rows, top first.
    pub lines: Vec<ScoreLine>,
}

impl Scoreboard {
    /// Score for a label, if present.
    pub fn score(&self, label: &str) -> Option<u32> {
        self.lines.iter().find(|l| l.label == label).map(|l| l.score)
    }
}

/// A persistent boss-bar-like indicator.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBar {
    /// Host-side key, unique per bar.
    pub key: String,
    /// Text on the bar.
    pub title: String,
    /// Fill in `0.0..=1.0`.
    pub percent: f32,
    /// Players who see the bar.
    pub viewers: BTreeSet<PlayerId>,
}

impl StatusBar {
    /// Full bar with a placeholder title and no viewers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: "-".to_string(),
            percent: 1.0,
            viewers: BTreeSet::new(),
        }
    }
}

/// What happens when a checklist line is clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Execute a command immediately.
    Run(String),
    /// Pre-fill the chat box.
    Suggest(String),
}

/// A checklist row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistLine {
    /// Row text.
    pub text: String,
    /// Whether the item is complete.
    pub done: bool,
    /// Action when clicked.
    pub on_click: Option<ClickAction>,
}

/// A titled, paginated list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Page header.
    pub title: String,
    /// Rows in display order.
    pub lines: Vec<ChecklistLine>,
}
