//! # KOW Arena
//!
//! Session and setup core for a king-of-the-wall arena minigame.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        KOW ARENA                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Host-independent primitives               │
//! │  ├── geometry.rs - Vec3, Location, Transform, Aabb           │
//! │  ├── ids.rs      - Player and world identities               │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  host/           - Capabilities supplied by the host         │
//! │  ├── capability.rs - Actor, world and display traits         │
//! │  └── model.rs    - Items, effects, scoreboards, pages        │
//! │                                                              │
//! │  game/           - Arena sessions                            │
//! │  ├── color.rs    - Team colours and slot allocation          │
//! │  ├── stats.rs    - Player stats and leaderboard              │
//! │  ├── loadout.rs  - Entering-game configuration               │
//! │  ├── arena.rs    - Committed arena definition                │
//! │  ├── session.rs  - Join, leave, containment, broadcast       │
//! │  └── registry.rs - Named sessions                            │
//! │                                                              │
//! │  builder/        - Admin arena builder                       │
//! │  ├── field.rs    - Capturable fields                         │
//! │  ├── draft.rs    - In-progress arena                         │
//! │  ├── session.rs  - Draft state machine                       │
//! │  └── desk.rs     - One builder per admin                     │
//! │                                                              │
//! │  persist/        - Arena records and JSON store              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Threading
//!
//! Everything runs on the host's single event thread. Nothing here locks,
//! blocks or performs I/O, except [`persist::ArenaStore`], which the host
//! calls at start and stop.
//!
//! Iteration order is deterministic throughout (BTreeMap/BTreeSet), so
//! colour assignment and leaderboard ties do not depend on hashing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod host;
pub mod persist;

// Re-export commonly used types
pub use builder::{ArenaBuilderSession, BuildAction, BuildError, BuilderDesk, FieldKind};
pub use config::KowConfig;
pub use core::{PlayerId, Transform, WorldId};
pub use error::ErrorKind;
pub use game::{GameRegistry, GameSession, JoinOutcome, PlayerStats, TeamColor};
pub use persist::{ArenaRecord, ArenaStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
