//! Game Registry
//!
//! Named collection of sessions. Created once at process start and passed
//! explicitly; joins and leaves that must respect cross-arena uniqueness
//! go through here.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::core::PlayerId;
use crate::error::ErrorKind;
use crate::game::arena::Arena;
use crate::game::loadout::Loadout;
use crate::game::session::{GameSession, JoinOutcome, SessionError, SessionMode};
use crate::game::stats::PlayerStats;
use crate::host::{ActorCapability, DisplayCapability, WorldCapability};

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// An arena with this name is already registered.
    #[error("Arena already exists: {0}")]
    DuplicateName(String),

    /// No arena with this name.
    #[error("Game not found: {0}")]
    UnknownGame(String),

    /// Session error.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl RegistryError {
    /// Error class for command responses.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::DuplicateName(_) => ErrorKind::State,
            RegistryError::UnknownGame(_) => ErrorKind::NotFound,
            RegistryError::Session(e) => e.kind(),
        }
    }
}

/// All sessions, keyed by arena name.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: BTreeMap<String, GameSession>,
    loadout: Loadout,
}

impl GameRegistry {
    /// Empty registry using the default loadout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry whose sessions use `loadout`.
    pub fn with_loadout(loadout: Loadout) -> Self {
        Self {
            games: BTreeMap::new(),
            loadout,
        }
    }

    /// Register a new session for `arena`. Names are unique.
    pub fn create_game(&mut self, arena: Arena) -> Result<&mut GameSession, RegistryError> {
        let name = arena.name().to_string();
        if self.games.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        info!("Registered arena {} (capacity {})", name, arena.capacity());
        let session = GameSession::with_loadout(arena, self.loadout.clone());
        Ok(self.games.entry(name).or_insert(session))
    }

    /// Session by arena name.
    pub fn get_game(&self, name: &str) -> Option<&GameSession> {
        self.games.get(name)
    }

    /// Mutable session by arena name.
    pub fn get_game_mut(&mut self, name: &str) -> Option<&mut GameSession> {
        self.games.get_mut(name)
    }

    /// Sessions in name order.
    pub fn list_games(&self) -> impl Iterator<Item = &GameSession> {
        self.games.values()
    }

    /// Get active session count.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Whether `player` is in any session.
    pub fn is_player_active_anywhere(&self, player: &PlayerId) -> bool {
        self.games.values().any(|g| g.is_active(player))
    }

    /// Session currently holding `player`.
    pub fn session_of(&self, player: &PlayerId) -> Option<&GameSession> {
        self.games.values().find(|g| g.is_active(player))
    }

    /// Every active player with the arena they are in.
    pub fn active_players(&self) -> Vec<(String, PlayerId)> {
        self.games
            .values()
            .flat_map(|g| g.players().map(move |p| (g.name().to_string(), p)))
            .collect()
    }

    /// Join `name`, rejecting players already active in any arena.
    pub fn join(
        &mut self,
        name: &str,
        actor: &mut dyn ActorCapability,
        display: &mut dyn DisplayCapability,
    ) -> Result<JoinOutcome, RegistryError> {
        if !self.games.contains_key(name) {
            return Err(RegistryError::UnknownGame(name.to_string()));
        }

        let player_id = actor.player_id();
        let current = self.session_of(&player_id).map(|g| g.name().to_string());
        if let Some(current) = &current {
            debug!("Player {} already active in {}", player_id, current);
        }

        let session = self
            .games
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownGame(name.to_string()))?;
        Ok(session.add_player(actor, current.is_some(), display)?)
    }

    /// Remove the actor from whichever session holds them.
    pub fn leave(
        &mut self,
        actor: &mut dyn ActorCapability,
        worlds: &dyn WorldCapability,
        display: &mut dyn DisplayCapability,
    ) -> Result<PlayerStats, RegistryError> {
        let player_id = actor.player_id();
        let session = self
            .games
            .values_mut()
            .find(|g| g.is_active(&player_id))
            .ok_or(SessionError::NotActive)?;
        Ok(session.leave_player(actor, worlds, display)?)
    }

    /// Toggle a session between Ready and Disabled.
    pub fn toggle_status(&mut self, name: &str) -> Result<SessionMode, RegistryError> {
        self.games
            .get_mut(name)
            .map(GameSession::toggle_status)
            .ok_or_else(|| RegistryError::UnknownGame(name.to_string()))
    }

    /// Committed arenas, for persistence.
    pub fn arenas(&self) -> impl Iterator<Item = &Arena> {
        self.games.values().map(GameSession::arena)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::arena::fixture;
    use crate::game::color::TeamColor;
    use crate::host::testing::{pid, RecordingActor, RecordingDisplay, StaticWorlds};
    use std::collections::BTreeSet;

    const FOUR: [TeamColor; 4] = [TeamColor::Red, TeamColor::Green, TeamColor::Orange, TeamColor::Yellow];

    fn joined_color(outcome: &JoinOutcome) -> TeamColor {
        match outcome {
            JoinOutcome::Joined(stats) => stats.color,
            other => panic!("expected Joined, got {:?}", other),
        }
    }

    #[test]
    fn test_create_and_lookup() {
        let mut registry = GameRegistry::new();
        registry.create_game(fixture("alpha", &FOUR)).unwrap();
        registry.create_game(fixture("beta", &[TeamColor::Blue])).unwrap();

        assert_eq!(registry.game_count(), 2);
        assert!(registry.get_game("alpha").is_some());
        assert!(registry.get_game("gamma").is_none());
        let names: Vec<_> = registry.list_games().map(|g| g.name().to_string()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = GameRegistry::new();
        registry.create_game(fixture("alpha", &FOUR)).unwrap();

        let err = registry.create_game(fixture("alpha", &[TeamColor::Red])).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("alpha".to_string()));
        assert_eq!(err.kind(), ErrorKind::State);
        assert_eq!(registry.get_game("alpha").unwrap().capacity(), 4);
    }

    #[test]
    fn test_join_unknown_game() {
        let mut registry = GameRegistry::new();
        let mut display = RecordingDisplay::default();
        let err = registry.join("nope", &mut RecordingActor::new(1), &mut display).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_active_in_other_arena() {
        let mut registry = GameRegistry::new();
        let mut display = RecordingDisplay::default();
        registry.create_game(fixture("alpha", &FOUR)).unwrap();
        registry.create_game(fixture("beta", &FOUR)).unwrap();

        let mut actor = RecordingActor::new(1);
        assert!(registry.join("alpha", &mut actor, &mut display).unwrap().is_joined());
        assert!(registry.is_player_active_anywhere(&pid(1)));

        let outcome = registry.join("beta", &mut actor, &mut display).unwrap();
        assert_eq!(outcome, JoinOutcome::AlreadyActive);
        assert_eq!(registry.get_game("beta").unwrap().player_count(), 0);
        assert_eq!(registry.session_of(&pid(1)).unwrap().name(), "alpha");
        assert_eq!(registry.active_players(), vec![("alpha".to_string(), pid(1))]);
    }

    #[test]
    fn test_session_join_respects_other_arenas() {
        let mut registry = GameRegistry::new();
        let mut display = RecordingDisplay::default();
        registry.create_game(fixture("alpha", &FOUR)).unwrap();
        registry.create_game(fixture("beta", &FOUR)).unwrap();

        let mut actor = RecordingActor::new(1);
        registry.join("alpha", &mut actor, &mut display).unwrap();

        let elsewhere = registry.is_player_active_anywhere(&pid(1));
        let beta = registry.get_game_mut("beta").unwrap();
        let outcome = beta.add_player(&mut actor, elsewhere, &mut display).unwrap();

        assert_eq!(outcome, JoinOutcome::AlreadyActive);
        assert_eq!(registry.get_game("beta").unwrap().player_count(), 0);
        assert_eq!(registry.active_players(), vec![("alpha".to_string(), pid(1))]);
    }

    #[test]
    fn test_leave_through_registry() {
        let mut registry = GameRegistry::new();
        let mut display = RecordingDisplay::default();
        let worlds = StaticWorlds::with_default();
        registry.create_game(fixture("alpha", &FOUR)).unwrap();

        let mut actor = RecordingActor::new(1);
        registry.join("alpha", &mut actor, &mut display).unwrap();
        assert_eq!(registry.leave(&mut actor, &worlds, &mut display).unwrap().id, pid(1));

        let err = registry.leave(&mut actor, &worlds, &mut display).unwrap_err();
        assert_eq!(err, RegistryError::Session(SessionError::NotActive));
        assert!(!registry.is_player_active_anywhere(&pid(1)));
    }

    #[test]
    fn test_toggle_status() {
        let mut registry = GameRegistry::new();
        registry.create_game(fixture("alpha", &FOUR)).unwrap();

        assert_eq!(registry.toggle_status("alpha"), Ok(SessionMode::Disabled));
        assert_eq!(registry.toggle_status("alpha"), Ok(SessionMode::Ready));
        assert!(matches!(registry.toggle_status("x"), Err(RegistryError::UnknownGame(_))));
    }

    #[test]
    fn test_four_player_arena_end_to_end() {
        let mut registry = GameRegistry::new();
        let mut display = RecordingDisplay::default();
        let worlds = StaticWorlds::with_default();
        registry.create_game(fixture("kow", &FOUR)).unwrap();

        let mut actors: Vec<_> = (1..=6).map(RecordingActor::new).collect();
        let mut seen = BTreeSet::new();

        for actor in actors.iter_mut().take(4) {
            let outcome = registry.join("kow", actor, &mut display).unwrap();
            assert!(seen.insert(joined_color(&outcome)), "colour handed out twice");
        }
        assert_eq!(seen.len(), 4);

        let outcome = registry.join("kow", &mut actors[4], &mut display).unwrap();
        assert_eq!(outcome, JoinOutcome::Full);

        let left = registry.leave(&mut actors[2], &worlds, &mut display).unwrap();
        let outcome = registry.join("kow", &mut actors[5], &mut display).unwrap();
        assert_eq!(joined_color(&outcome), left.color);

        let game = registry.get_game("kow").unwrap();
        assert_eq!(game.player_count(), 4);
        assert!(game.player_count() <= game.capacity());
    }
}
