//! Arena Definition
//!
//! Immutable geometry, spawn points and capacity of one playable arena.

use std::collections::BTreeMap;

use crate::core::{Aabb, Transform, WorldId};
use crate::error::ErrorKind;
use crate::game::color::TeamColor;

/// Reasons an arena definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    /// Name is empty or whitespace.
    #[error("arena name is empty")]
    EmptyName,

    /// No team spawns, so capacity would be zero.
    #[error("arena has no team spawns")]
    NoSpawns,
}

impl ArenaError {
    /// Always [`ErrorKind::Validation`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// A committed arena.
///
/// Its world is the lobby's world. Capacity is the number of spawns.
#[derive(Clone, Debug, PartialEq)]
pub struct Arena {
    name: String,
    lobby: Transform,
    area: Aabb,
    playground: Aabb,
    spawns: BTreeMap<TeamColor, Transform>,
}

impl Arena {
    /// Validate and build an arena.
    pub fn new(
        name: impl Into<String>,
        lobby: Transform,
        area: Aabb,
        playground: Aabb,
        spawns: BTreeMap<TeamColor, Transform>,
    ) -> Result<Self, ArenaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArenaError::EmptyName);
        }
        if spawns.is_empty() {
            return Err(ArenaError::NoSpawns);
        }

        Ok(Self { name, lobby, area, playground, spawns })
    }

    /// Unique arena name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lobby transform.
    pub fn lobby(&self) -> Transform {
        self.lobby
    }

    /// World of the lobby.
    pub fn world(&self) -> WorldId {
        self.lobby.world
    }

    /// Outer box. Leaving it ends play.
    pub fn area(&self) -> Aabb {
        self.area
    }

    /// Inner box where fighting happens.
    pub fn playground(&self) -> Aabb {
        self.playground
    }

    /// Team spawns by colour.
    pub fn spawns(&self) -> &BTreeMap<TeamColor, Transform> {
        &self.spawns
    }

    /// Spawn transform for a team colour.
    pub fn spawn(&self, color: TeamColor) -> Option<Transform> {
        self.spawns.get(&color).copied()
    }

    /// Colours with a spawn, in declaration order.
    pub fn colors(&self) -> impl Iterator<Item = TeamColor> + '_ {
        self.spawns.keys().copied()
    }

    /// Maximum number of simultaneous players.
    pub fn capacity(&self) -> usize {
        self.spawns.len()
    }
}

/// Arena in the shared test world with spawns for `colors` spread along x.
/// Area spans (-50,0,-50)..(50,100,50), playground (-10,60,-10)..(10,80,10).
#[cfg(test)]
pub(crate) fn fixture(name: &str, colors: &[TeamColor]) -> Arena {
    use crate::core::Vec3;
    use crate::host::testing::transform_at;

    let spawns = colors
        .iter()
        .map(|c| (*c, transform_at(*c as u8 as f64 * 5.0, 65.0, 0.0)))
        .collect();

    Arena::new(
        name,
        transform_at(0.0, 70.0, 30.0),
        Aabb::from_corners(Vec3::new(-50.0, 0.0, -50.0), Vec3::new(50.0, 100.0, 50.0)),
        Aabb::from_corners(Vec3::new(-10.0, 60.0, -10.0), Vec3::new(10.0, 80.0, 10.0)),
        spawns,
    )
    .expect("fixture arena is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;
    use crate::host::testing::{transform_at, WORLD};

    #[test]
    fn test_capacity_is_spawn_count() {
        let arena = fixture("kow", &[TeamColor::Red, TeamColor::Blue, TeamColor::Green]);
        assert_eq!(arena.capacity(), 3);
        assert_eq!(arena.world(), WORLD);
        assert_eq!(
            arena.colors().collect::<Vec<_>>(),
            vec![TeamColor::Red, TeamColor::Green, TeamColor::Blue]
        );
        assert!(arena.spawn(TeamColor::Blue).is_some());
        assert!(arena.spawn(TeamColor::Yellow).is_none());
    }

    #[test]
    fn test_rejects_empty_spawns_and_name() {
        let b = Aabb::from_corners(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        let lobby = transform_at(0.0, 0.0, 0.0);

        let err = Arena::new("kow", lobby, b, b, BTreeMap::new()).unwrap_err();
        assert_eq!(err, ArenaError::NoSpawns);
        assert_eq!(err.kind(), ErrorKind::Validation);

        let spawns = [(TeamColor::Red, lobby)].into_iter().collect();
        assert_eq!(Arena::new("  ", lobby, b, b, spawns).unwrap_err(), ArenaError::EmptyName);
    }
}
