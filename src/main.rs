//! KOW Arena demo host
//!
//! Loads the arena store, builds a demo arena if it is missing, runs a
//! scripted join/leave round against log-only capabilities, and saves the
//! store again.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use kow_arena::{
    builder::{BuildAction, BuilderDesk, FieldKind},
    core::{Location, PlayerId, Transform, Vec3, WorldId},
    game::GameRegistry,
    host::{
        ActorCapability, ChatChannel, CommandSource, DisplayCapability, EquipmentSlot, GameMode,
        ItemStack, Page, Scoreboard, StatusBar, StatusEffect, WorldCapability,
    },
    ArenaStore, KowConfig, TeamColor, VERSION,
};

const DEMO_ARENA: &str = "demo";
const DEMO_WORLD: WorldId = WorldId::from_bytes([7; 16]);

fn main() -> anyhow::Result<()> {
    let config = KowConfig::from_env();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("KOW Arena v{}", VERSION);

    let store = ArenaStore::new(&config.arena_file);
    let mut registry = GameRegistry::from_records(store.load()?, config.loadout.clone())?;
    info!("{} arenas registered", registry.game_count());

    let seed = config.builder_seed.unwrap_or_else(clock_seed);
    let mut desk = BuilderDesk::new(seed);
    let mut display = LogDisplay;
    let worlds = LogWorlds;

    let mut admin = LogActor::new(PlayerId::new([0xad; 16]), "admin");
    if registry.get_game(DEMO_ARENA).is_none() {
        build_demo_arena(&mut desk, &mut admin, &mut registry, &mut display)?;
    }

    demo_round(&mut registry, &worlds, &mut display)?;

    store.save(&registry.records())?;
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Walk the admin through every field and commit.
fn build_demo_arena(
    desk: &mut BuilderDesk,
    admin: &mut LogActor,
    registry: &mut GameRegistry,
    display: &mut LogDisplay,
) -> anyhow::Result<()> {
    info!("=== Building demo arena ===");
    let builder = desk.session_for(admin.player_id());
    builder.execute(BuildAction::Start(Some(DEMO_ARENA.to_string())), &*admin, registry)?;

    // Field tokens as the admin would type them.
    let mut stops = vec![
        ("LOBBY".to_string(), Vec3::new(0.0, 70.0, 30.0)),
        ("CORNER_PLAY_1".to_string(), Vec3::new(-10.5, 60.0, -10.5)),
        ("CORNER_PLAY_2".to_string(), Vec3::new(10.5, 80.0, 10.5)),
        ("CORNER_AREA_1".to_string(), Vec3::new(50.0, 100.0, 50.0)),
        ("CORNER_AREA_2".to_string(), Vec3::new(-50.0, 0.0, -50.0)),
    ];
    for (i, color) in TeamColor::ALL.into_iter().enumerate() {
        let angle = i as f64 * std::f64::consts::TAU / TeamColor::ALL.len() as f64;
        stops.push((
            color.to_string(),
            Vec3::new(8.0 * angle.cos(), 65.0, 8.0 * angle.sin()),
        ));
    }

    for (token, position) in stops {
        let field = FieldKind::from_token(&token)
            .with_context(|| format!("unknown field {}", token))?;
        admin.transform = Transform::new(DEMO_WORLD, position, 0.0, 0.0);
        builder.execute(BuildAction::Capture(field), &*admin, registry)?;
    }

    builder.show_progress(&*admin, display);
    builder.execute(BuildAction::Save, &*admin, registry)?;
    Ok(())
}

/// Three players join, trade hits, one leaves.
fn demo_round(
    registry: &mut GameRegistry,
    worlds: &LogWorlds,
    display: &mut LogDisplay,
) -> anyhow::Result<()> {
    info!("=== Demo round ===");
    let mut players: Vec<LogActor> = ["alice", "bob", "carol"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| LogActor::new(PlayerId::new([i as u8 + 1; 16]), name))
        .collect();

    for player in players.iter_mut() {
        let outcome = registry.join(DEMO_ARENA, player, display)?;
        player.send_message(ChatChannel::System, outcome.message());
    }

    let alice = players[0].player_id();
    let bob = players[1].player_id();
    let game = registry
        .get_game_mut(DEMO_ARENA)
        .context("demo arena missing after build")?;

    if let Some(stats) = game.stats_mut(&alice) {
        stats.record_hit_given();
        stats.record_kill();
        stats.add_points(3);
    }
    if let Some(stats) = game.stats_mut(&bob) {
        stats.record_hit_taken();
        stats.record_death();
    }

    for player in players.iter_mut() {
        game.broadcast_stats(player, display)?;
    }
    game.show_stats_of(&alice, &mut players[2]);

    let inside = players
        .iter()
        .filter(|p| game.is_inside_playground(&p.transform.location()))
        .count();
    info!("{} of {} players inside the playground", inside, players.len());

    let left = registry.leave(&mut players[1], worlds, display)?;
    info!("{} left with {} points", left.name, left.points);
    Ok(())
}

// =============================================================================
// LOG-ONLY CAPABILITIES
// =============================================================================

struct LogActor {
    id: PlayerId,
    name: String,
    transform: Transform,
}

impl LogActor {
    fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            transform: Transform::new(DEMO_WORLD, Vec3::new(0.0, 64.0, 0.0), 0.0, 0.0),
        }
    }
}

impl CommandSource for LogActor {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn current_transform(&self) -> Option<Transform> {
        Some(self.transform)
    }
}

impl ActorCapability for LogActor {
    fn player_id(&self) -> PlayerId {
        self.id
    }

    fn set_health(&mut self, health: f64, max_health: f64) {
        debug!("{}: health {}/{}", self.name, health, max_health);
    }

    fn set_food_level(&mut self, food: u32) {
        debug!("{}: food {}", self.name, food);
    }

    fn set_game_mode(&mut self, mode: GameMode) {
        debug!("{}: mode {:?}", self.name, mode);
    }

    fn set_can_fly(&mut self, can_fly: bool) {
        debug!("{}: can fly {}", self.name, can_fly);
    }

    fn set_fire_ticks(&mut self, ticks: u32) {
        debug!("{}: fire ticks {}", self.name, ticks);
    }

    fn set_effects(&mut self, effects: &[StatusEffect]) {
        debug!("{}: {} effects", self.name, effects.len());
    }

    fn select_hotbar_slot(&mut self, slot: u8) {
        debug!("{}: hotbar slot {}", self.name, slot);
    }

    fn set_main_hand(&mut self, item: ItemStack) {
        debug!("{}: main hand {:?}", self.name, item.kind);
    }

    fn set_equipment(&mut self, slot: EquipmentSlot, item: ItemStack) {
        debug!("{}: {:?} {:?} dyed {:?}", self.name, slot, item.kind, item.dye);
    }

    fn clear_inventory(&mut self) {
        debug!("{}: inventory cleared", self.name);
    }

    fn set_transform(&mut self, transform: Transform) {
        debug!("{}: teleported to {:?}", self.name, transform.position);
        self.transform = transform;
    }

    fn set_scoreboard(&mut self, scoreboard: Option<Scoreboard>) {
        match scoreboard {
            Some(board) => debug!("{}: scoreboard {:?}", self.name, board.lines),
            None => debug!("{}: scoreboard cleared", self.name),
        }
    }

    fn send_message(&mut self, channel: ChatChannel, text: &str) {
        info!("[{:?} -> {}] {}", channel, self.name, text);
    }
}

struct LogDisplay;

impl DisplayCapability for LogDisplay {
    fn render_pages(&mut self, viewer: &dyn CommandSource, page: &Page) {
        info!("[page -> {}] {}", viewer.source_name(), page.title);
        for line in &page.lines {
            info!("  {}", line.text);
        }
    }

    fn render_status_bar(&mut self, bar: &StatusBar) {
        info!("[bar {} x{}] {}", bar.key, bar.viewers.len(), bar.title);
    }

    fn hide_status_bar(&mut self, bar_key: &str, viewer: PlayerId) {
        debug!("[bar {}] hidden for {}", bar_key, viewer);
    }
}

struct LogWorlds;

impl WorldCapability for LogWorlds {
    fn has_world(&self, world: WorldId) -> bool {
        world == DEMO_WORLD
    }

    fn spawn_location(&self, world: WorldId) -> Option<Location> {
        if !self.has_world(world) {
            warn!("Unknown world {}", world);
            return None;
        }
        Some(Location::new(world, Vec3::new(0.0, 64.0, 0.0)))
    }
}
