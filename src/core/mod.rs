//! Core primitives.
//!
//! Identities, world geometry and the deterministic PRNG used by the
//! session and builder layers. Nothing here talks to the host.

pub mod geometry;
pub mod ids;
pub mod rng;

// Re-export core types
pub use geometry::{Aabb, Location, Transform, Vec3};
pub use ids::{PlayerId, WorldId};
pub use rng::DeterministicRng;
