//! Game Module
//!
//! Arena sessions: admission, colour slots, stats and the registry.
//!
//! ## Module Structure
//!
//! - `color`: Team colours and the slot allocator
//! - `stats`: Per-player counters and the leaderboard
//! - `loadout`: Entering-game configuration and leave baseline
//! - `arena`: Committed arena definition
//! - `session`: One arena's live session
//! - `registry`: Named collection of sessions

pub mod arena;
pub mod color;
pub mod loadout;
pub mod registry;
pub mod session;
pub mod stats;

// Re-export key types
pub use arena::{Arena, ArenaError};
pub use color::{ColorSlotAllocator, NoSlotAvailable, TeamColor};
pub use loadout::Loadout;
pub use registry::{GameRegistry, RegistryError};
pub use session::{GameSession, JoinOutcome, SessionError, SessionMode};
pub use stats::{PlayerStats, TopEntry, TopSummary};
