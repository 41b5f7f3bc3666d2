//! Serializable arena records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{Aabb, Transform, Vec3, WorldId};
use crate::game::arena::{Arena, ArenaError};
use crate::game::color::TeamColor;
use crate::game::loadout::Loadout;
use crate::game::registry::GameRegistry;
use super::store::StoreError;

/// World transform as stored on disk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformRecord {
    /// World identity.
    pub world: WorldId,
    /// Position x.
    pub x: f64,
    /// Position y.
    pub y: f64,
    /// Position z.
    pub z: f64,
    /// Horizontal rotation.
    pub yaw: f64,
    /// Vertical rotation.
    pub pitch: f64,
}

impl From<Transform> for TransformRecord {
    fn from(t: Transform) -> Self {
        Self {
            world: t.world,
            x: t.position.x,
            y: t.position.y,
            z: t.position.z,
            yaw: t.yaw,
            pitch: t.pitch,
        }
    }
}

impl From<TransformRecord> for Transform {
    fn from(r: TransformRecord) -> Self {
        Transform::new(r.world, Vec3::new(r.x, r.y, r.z), r.yaw, r.pitch)
    }
}

/// Box as `min`/`max` triples.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    /// Smallest corner.
    pub min: [f64; 3],
    /// Largest corner.
    pub max: [f64; 3],
}

impl From<Aabb> for BoxRecord {
    fn from(b: Aabb) -> Self {
        Self {
            min: b.min().to_array(),
            max: b.max().to_array(),
        }
    }
}

impl From<BoxRecord> for Aabb {
    /// Corners are re-normalized, so a hand-edited file with swapped
    /// values still loads.
    fn from(r: BoxRecord) -> Self {
        Aabb::from_corners(Vec3::from_array(r.min), Vec3::from_array(r.max))
    }
}

/// One committed arena as persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaRecord {
    /// Unique arena name.
    pub name: String,
    /// Lobby transform.
    pub lobby: TransformRecord,
    /// Outer box.
    pub area: BoxRecord,
    /// Inner box.
    pub playground: BoxRecord,
    /// Keyed by lowercase colour key.
    pub spawns: BTreeMap<TeamColor, TransformRecord>,
}

impl From<&Arena> for ArenaRecord {
    fn from(arena: &Arena) -> Self {
        Self {
            name: arena.name().to_string(),
            lobby: arena.lobby().into(),
            area: arena.area().into(),
            playground: arena.playground().into(),
            spawns: arena
                .spawns()
                .iter()
                .map(|(color, t)| (*color, TransformRecord::from(*t)))
                .collect(),
        }
    }
}

impl TryFrom<ArenaRecord> for Arena {
    type Error = ArenaError;

    fn try_from(record: ArenaRecord) -> Result<Self, Self::Error> {
        let spawns = record
            .spawns
            .into_iter()
            .map(|(color, t)| (color, Transform::from(t)))
            .collect();

        Arena::new(
            record.name,
            record.lobby.into(),
            record.area.into(),
            record.playground.into(),
            spawns,
        )
    }
}

impl GameRegistry {
    /// Registry with one Ready session per record.
    pub fn from_records(records: Vec<ArenaRecord>, loadout: Loadout) -> Result<Self, StoreError> {
        let mut registry = GameRegistry::with_loadout(loadout);
        for record in records {
            let name = record.name.clone();
            let arena = Arena::try_from(record)
                .map_err(|source| StoreError::InvalidArena { name, source })?;
            registry.create_game(arena)?;
        }
        Ok(registry)
    }

    /// Records for every registered arena, in name order.
    pub fn records(&self) -> Vec<ArenaRecord> {
        self.arenas().map(ArenaRecord::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::game::arena::fixture;
    use crate::host::testing::WORLD;

    #[test]
    fn test_record_layout() {
        let arena = fixture("kow", &[TeamColor::Red, TeamColor::Purple]);
        let json = serde_json::to_value(ArenaRecord::from(&arena)).unwrap();

        assert_eq!(json["name"], "kow");
        assert_eq!(json["lobby"]["world"], WORLD.to_string());
        assert_eq!(json["lobby"]["z"], 30.0);
        assert_eq!(json["area"]["min"], serde_json::json!([-50.0, 0.0, -50.0]));
        assert_eq!(json["playground"]["max"], serde_json::json!([10.0, 80.0, 10.0]));
        assert!(json["spawns"]["red"].is_object());
        assert!(json["spawns"]["purple"].is_object());
        assert!(json["spawns"].get("blue").is_none());
    }

    #[test]
    fn test_record_restores_arena() {
        let arena = fixture("kow", &[TeamColor::Green, TeamColor::Blue]);
        let restored = Arena::try_from(ArenaRecord::from(&arena)).unwrap();
        assert_eq!(restored, arena);
    }

    #[test]
    fn test_record_without_spawns_rejected() {
        let mut record = ArenaRecord::from(&fixture("kow", &[TeamColor::Red]));
        record.spawns.clear();
        assert_eq!(Arena::try_from(record), Err(ArenaError::NoSpawns));
    }

    #[test]
    fn test_registry_from_records() {
        let records = vec![
            ArenaRecord::from(&fixture("beta", &[TeamColor::Red])),
            ArenaRecord::from(&fixture("alpha", &[TeamColor::Red, TeamColor::Blue])),
        ];
        let registry = GameRegistry::from_records(records, Loadout::default()).unwrap();

        assert_eq!(registry.game_count(), 2);
        let names: Vec<_> = registry.records().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_registry_from_records_rejects_duplicates() {
        let record = ArenaRecord::from(&fixture("kow", &[TeamColor::Red]));
        let err = GameRegistry::from_records(vec![record.clone(), record], Loadout::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);
    }
}
