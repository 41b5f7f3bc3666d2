//! Entering-game loadout and the neutral baseline restored on leave.

use crate::game::color::TeamColor;
use crate::host::{
    ActorCapability, EffectKind, EnchantmentKind, Enchantment, EquipmentSlot, GameMode, ItemKind,
    ItemStack, StatusEffect,
};

/// Host ticks per second.
pub const TICKS_PER_SECOND: u32 = 20;

/// Effects last 60 hours, i.e. the whole session.
pub const EFFECT_DURATION_TICKS: u32 = TICKS_PER_SECOND * 60 * 60 * 60;

/// Player configuration applied on join.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadout {
    /// Health on entry.
    pub health: f64,
    /// Health cap on entry.
    pub max_health: f64,
    /// Hunger level on entry.
    pub food: u32,
    /// Mode while in the arena.
    pub game_mode: GameMode,
    /// Flight permission while in the arena.
    pub can_fly: bool,
    /// Burn time on entry.
    pub fire_ticks: u32,
    /// Effects for the whole session.
    pub effects: Vec<StatusEffect>,
    /// Selected hotbar slot.
    pub hotbar_slot: u8,
    /// The weapon.
    pub main_hand: ItemStack,
    /// Enchantments on the team-coloured helmet.
    pub headwear_enchantments: Vec<Enchantment>,
}

impl Default for Loadout {
    fn default() -> Self {
        Self {
            health: 20.0,
            max_health: 20.0,
            food: 20,
            game_mode: GameMode::Adventure,
            can_fly: false,
            fire_ticks: 0,
            effects: vec![
                StatusEffect::quiet(EffectKind::Resistance, 5, EFFECT_DURATION_TICKS),
                StatusEffect::quiet(EffectKind::WaterBreathing, 1, EFFECT_DURATION_TICKS),
                StatusEffect::quiet(EffectKind::NightVision, 1, EFFECT_DURATION_TICKS),
            ],
            hotbar_slot: 0,
            main_hand: ItemStack::new(ItemKind::Stick)
                .with_enchantment(EnchantmentKind::Knockback, 1),
            headwear_enchantments: vec![
                Enchantment::new(EnchantmentKind::AquaAffinity, 1),
                Enchantment::new(EnchantmentKind::Unbreaking, 10),
                Enchantment::new(EnchantmentKind::Respiration, 10),
            ],
        }
    }
}

impl Loadout {
    /// Unbreakable leather helmet dyed in the team colour.
    pub fn headwear(&self, color: TeamColor) -> ItemStack {
        let mut helmet = ItemStack::new(ItemKind::LeatherHelmet)
            .dyed(color.rgb())
            .unbreakable();
        helmet.enchantments = self.headwear_enchantments.clone();
        helmet
    }

    /// Configure the actor for play. Does not teleport.
    pub fn apply(&self, actor: &mut dyn ActorCapability, color: TeamColor) {
        actor.set_health(self.health, self.max_health);
        actor.set_food_level(self.food);
        actor.set_game_mode(self.game_mode);
        actor.set_can_fly(self.can_fly);
        actor.set_fire_ticks(self.fire_ticks);
        actor.set_effects(&self.effects);
        actor.select_hotbar_slot(self.hotbar_slot);
        actor.set_main_hand(self.main_hand.clone());
        actor.set_equipment(EquipmentSlot::Headwear, self.headwear(color));
    }
}

/// Neutral baseline: empty inventory, survival, no effects, no scoreboard.
pub fn reset_to_baseline(actor: &mut dyn ActorCapability) {
    actor.clear_inventory();
    actor.set_game_mode(GameMode::Survival);
    actor.set_effects(&[]);
    actor.set_scoreboard(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingActor;

    #[test]
    fn test_apply_default_loadout() {
        let loadout = Loadout::default();
        let mut actor = RecordingActor::new(1);
        loadout.apply(&mut actor, TeamColor::Purple);

        assert_eq!((actor.health, actor.max_health, actor.food), (20.0, 20.0, 20));
        assert_eq!(actor.game_mode, GameMode::Adventure);
        assert!(!actor.can_fly);
        assert_eq!(actor.fire_ticks, 0);
        assert_eq!(actor.hotbar_slot, 0);
        assert_eq!(actor.effects.len(), 3);
        assert!(actor.effects.iter().all(|e| !e.particles && e.duration_ticks == 4_320_000));

        let stick = actor.main_hand.as_ref().unwrap();
        assert_eq!(stick.kind, ItemKind::Stick);
        assert_eq!(stick.enchantments, vec![Enchantment::new(EnchantmentKind::Knockback, 1)]);

        let helmet = actor.headwear.as_ref().unwrap();
        assert_eq!(helmet.kind, ItemKind::LeatherHelmet);
        assert_eq!(helmet.dye, Some(TeamColor::Purple.rgb()));
        assert!(helmet.unbreakable);
        assert_eq!(helmet.enchantments.len(), 3);
    }

    #[test]
    fn test_reset_to_baseline() {
        let mut actor = RecordingActor::new(1);
        Loadout::default().apply(&mut actor, TeamColor::Red);
        reset_to_baseline(&mut actor);

        assert_eq!(actor.inventory_clears, 1);
        assert_eq!(actor.game_mode, GameMode::Survival);
        assert!(actor.effects.is_empty());
        assert!(actor.scoreboard.is_none());
        assert!(actor.headwear.is_none());
    }
}
