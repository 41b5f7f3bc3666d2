//! Game Session
//!
//! Runtime state of one arena: who is playing, under which colour, and
//! their counters. All operations are synchronous and run on the host's
//! single event thread.
//!
//! ## Invariants
//!
//! - `players.len() <= arena.capacity()`
//! - no two active players share a colour
//! - mode only changes through [`GameSession::toggle_status`]

use std::collections::{BTreeMap, BTreeSet};
use serde::{Serialize, Deserialize};
use tracing::{debug, error, info, warn};

use crate::core::{Location, PlayerId, Transform};
use crate::error::ErrorKind;
use crate::game::arena::Arena;
use crate::game::color::{ColorSlotAllocator, NoSlotAvailable, TeamColor};
use crate::game::loadout::{reset_to_baseline, Loadout};
use crate::game::stats::{PlayerStats, TopSummary};
use crate::host::{ActorCapability, ChatChannel, DisplayCapability, StatusBar, WorldCapability};

const JOINED_MESSAGE: &str = "You have joined the game";

/// Whether a session accepts joins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionMode {
    /// Accepting joins.
    Ready,
    /// Joins refused. Active players stay.
    Disabled,
}

impl SessionMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            SessionMode::Ready => SessionMode::Disabled,
            SessionMode::Disabled => SessionMode::Ready,
        }
    }
}

/// Result of a join attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Player is in, with their fresh stats.
    Joined(PlayerStats),
    /// Player is already playing (here or, via the registry, elsewhere).
    AlreadyActive,
    /// Arena is at capacity.
    Full,
    /// Session is disabled.
    Disabled,
}

impl JoinOutcome {
    /// True when the player got in.
    pub fn is_joined(&self) -> bool {
        matches!(self, JoinOutcome::Joined(_))
    }

    /// Text shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            JoinOutcome::Joined(_) => JOINED_MESSAGE,
            JoinOutcome::AlreadyActive => "You are already in a game",
            JoinOutcome::Full => "You can't join, the game is at a limit",
            JoinOutcome::Disabled => "You can't join the game is not ready",
        }
    }

    /// Error class of a rejection. `None` on success.
    pub fn rejection_kind(&self) -> Option<ErrorKind> {
        match self {
            JoinOutcome::Joined(_) => None,
            JoinOutcome::AlreadyActive | JoinOutcome::Disabled => Some(ErrorKind::State),
            JoinOutcome::Full => Some(ErrorKind::Capacity),
        }
    }
}

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Player has no stats record in this session.
    #[error("Player not active")]
    NotActive,

    /// Colour allocation failed below capacity.
    #[error("Slot allocation failed: {0}")]
    NoSlotAvailable(#[from] NoSlotAvailable),
}

impl SessionError {
    /// Error class for command responses.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::NotActive => ErrorKind::State,
            SessionError::NoSlotAvailable(e) => e.kind(),
        }
    }
}

/// One arena's live session.
#[derive(Debug)]
pub struct GameSession {
    arena: Arena,
    mode: SessionMode,
    allocator: ColorSlotAllocator,
    loadout: Loadout,
    /// Active players (BTreeMap for deterministic iteration)
    players: BTreeMap<PlayerId, PlayerStats>,
    status_bar: StatusBar,
}

impl GameSession {
    /// New session in `Ready` mode with the default loadout.
    pub fn new(arena: Arena) -> Self {
        Self::with_loadout(arena, Loadout::default())
    }

    /// New session in `Ready` mode.
    pub fn with_loadout(arena: Arena, loadout: Loadout) -> Self {
        let allocator = ColorSlotAllocator::new(arena.colors());
        let status_bar = StatusBar::new(format!("kow-{}", arena.name()));

        Self {
            arena,
            mode: SessionMode::Ready,
            allocator,
            loadout,
            players: BTreeMap::new(),
            status_bar,
        }
    }

    /// Arena name, also the registry key.
    pub fn name(&self) -> &str {
        self.arena.name()
    }

    /// The committed arena behind this session.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Whether joins are accepted.
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Where leaving players are sent.
    pub fn lobby(&self) -> Transform {
        self.arena.lobby()
    }

    /// Player limit.
    pub fn capacity(&self) -> usize {
        self.allocator.capacity()
    }

    /// Get player count.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// True at the player limit.
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.capacity()
    }

    /// Active players in identity order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.keys().copied()
    }

    /// Whether `player` is in this session.
    pub fn is_active(&self, player: &PlayerId) -> bool {
        self.players.contains_key(player)
    }

    /// Counters of an active player.
    pub fn stats(&self, player: &PlayerId) -> Option<&PlayerStats> {
        self.players.get(player)
    }

    /// Mutable counters, for gameplay code outside this crate.
    pub fn stats_mut(&mut self, player: &PlayerId) -> Option<&mut PlayerStats> {
        self.players.get_mut(player)
    }

    /// The shared top-stats bar.
    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    fn colors_in_use(&self) -> BTreeSet<TeamColor> {
        self.players.values().map(|s| s.color).collect()
    }

    /// Add a player to the session.
    ///
    /// `active_elsewhere` is the player's membership in other arenas. Only
    /// [`GameRegistry::join`] can answer that, so it is the sole caller.
    ///
    /// [`GameRegistry::join`]: crate::game::registry::GameRegistry::join
    pub(crate) fn add_player(
        &mut self,
        actor: &mut dyn ActorCapability,
        active_elsewhere: bool,
        display: &mut dyn DisplayCapability,
    ) -> Result<JoinOutcome, SessionError> {
        let player_id = actor.player_id();

        if active_elsewhere || self.players.contains_key(&player_id) {
            debug!("Player {} already active, not joining {}", player_id, self.name());
            return Ok(JoinOutcome::AlreadyActive);
        }

        if self.is_full() {
            debug!("Player {} rejected: {} is full", player_id, self.name());
            return Ok(JoinOutcome::Full);
        }

        if self.mode == SessionMode::Disabled {
            debug!("Player {} rejected: {} is disabled", player_id, self.name());
            return Ok(JoinOutcome::Disabled);
        }

        let (color, spawn) = match self.allocate_slot() {
            Ok(slot) => slot,
            Err(e) => {
                error!("Arena {}: {} with {} active players", self.name(), e, self.players.len());
                debug_assert!(false, "colour allocation failed below capacity");
                return Err(e.into());
            }
        };

        self.loadout.apply(actor, color);
        actor.send_message(ChatChannel::Chat, JOINED_MESSAGE);
        actor.set_transform(spawn);

        let stats = PlayerStats::new(player_id, actor.source_name(), color);
        self.players.insert(player_id, stats.clone());
        self.status_bar.viewers.insert(player_id);

        info!("Player {} joined {} as {}", stats.name, self.name(), color);

        self.broadcast_stats(actor, display)?;
        Ok(JoinOutcome::Joined(stats))
    }

    fn allocate_slot(&self) -> Result<(TeamColor, Transform), NoSlotAvailable> {
        let color = self.allocator.allocate(&self.colors_in_use())?;
        let spawn = self
            .arena
            .spawn(color)
            .ok_or(NoSlotAvailable { capacity: self.capacity() })?;
        Ok((color, spawn))
    }

    /// Remove a player, restoring their neutral state.
    ///
    /// Returns the final stats. `NotActive` (and no side effects) if the
    /// player is not in this session.
    pub fn leave_player(
        &mut self,
        actor: &mut dyn ActorCapability,
        worlds: &dyn WorldCapability,
        display: &mut dyn DisplayCapability,
    ) -> Result<PlayerStats, SessionError> {
        let player_id = actor.player_id();
        let stats = self.players.remove(&player_id).ok_or(SessionError::NotActive)?;

        reset_to_baseline(actor);

        let destination = match worlds.spawn_location(self.arena.world()) {
            Some(location) => Transform::at(location),
            None => {
                warn!("World {} not loaded, sending {} to lobby", self.arena.world(), stats.name);
                self.arena.lobby()
            }
        };
        actor.set_transform(destination);

        self.status_bar.viewers.remove(&player_id);
        display.hide_status_bar(&self.status_bar.key, player_id);
        self.refresh_status_bar(display);

        info!("Player {} left {} ({} remaining)", stats.name, self.name(), self.players.len());
        Ok(stats)
    }

    /// Whether `location` lies in the arena area (faces inclusive).
    pub fn is_inside_area(&self, location: &Location) -> bool {
        location.world == self.arena.world() && self.arena.area().contains(location.position)
    }

    /// Whether `location` lies in the playground (faces inclusive).
    pub fn is_inside_playground(&self, location: &Location) -> bool {
        location.world == self.arena.world() && self.arena.playground().contains(location.position)
    }

    /// Spawn bound to the player's colour.
    pub fn spawn_for(&self, player: &PlayerId) -> Result<Transform, SessionError> {
        let stats = self.players.get(player).ok_or(SessionError::NotActive)?;
        self.arena.spawn(stats.color).ok_or(SessionError::NotActive)
    }

    /// Current leaders, if anyone is playing.
    pub fn top_summary(&self) -> Option<TopSummary> {
        TopSummary::compute(self.players.values())
    }

    /// Push the player's scoreboard and refresh the shared status bar.
    pub fn broadcast_stats(
        &mut self,
        actor: &mut dyn ActorCapability,
        display: &mut dyn DisplayCapability,
    ) -> Result<TopSummary, SessionError> {
        let stats = self.players.get(&actor.player_id()).ok_or(SessionError::NotActive)?;
        actor.set_scoreboard(Some(stats.scoreboard()));

        self.refresh_status_bar(display).ok_or(SessionError::NotActive)
    }

    /// Retitle the shared bar from the current leaders and redraw it.
    /// With nobody left the bar is reset and not drawn.
    fn refresh_status_bar(&mut self, display: &mut dyn DisplayCapability) -> Option<TopSummary> {
        let Some(summary) = self.top_summary() else {
            self.status_bar = StatusBar::new(self.status_bar.key.clone());
            return None;
        };

        self.status_bar.title = summary.title();
        self.status_bar.percent = 1.0;
        display.render_status_bar(&self.status_bar);
        Some(summary)
    }

    /// Show `target`'s counters on the viewer's action bar.
    ///
    /// Returns `false` if `target` is not playing here.
    pub fn show_stats_of(&self, target: &PlayerId, viewer: &mut dyn ActorCapability) -> bool {
        match self.players.get(target) {
            Some(stats) => {
                viewer.send_message(ChatChannel::ActionBar, &stats.summary_line());
                true
            }
            None => false,
        }
    }

    /// Flip between `Ready` and `Disabled`. Active players stay.
    pub fn toggle_status(&mut self) -> SessionMode {
        self.mode = self.mode.toggled();
        if self.mode == SessionMode::Disabled && !self.players.is_empty() {
            warn!("Arena {} disabled with {} active players", self.name(), self.players.len());
        } else {
            info!("Arena {} is now {:?}", self.name(), self.mode);
        }
        self.mode
    }
}
