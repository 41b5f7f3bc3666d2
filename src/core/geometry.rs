//! World Geometry
//!
//! Positions, orientations and axis-aligned boxes in host world space.
//! Boxes are closed on both ends: a point on any face is inside.

use serde::{Serialize, Deserialize};

use super::ids::WorldId;

// =============================================================================
// VECTOR
// =============================================================================

/// 3D position in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// East-west.
    pub x: f64,
    /// Height.
    pub y: f64,
    /// North-south.
    pub z: f64,
}

impl Vec3 {
    /// Origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }

    /// Snap to the block grid (floor on every axis).
    #[inline]
    pub fn floor(self) -> Self {
        Self {
            x: self.x.floor(),
            y: self.y.floor(),
            z: self.z.floor(),
        }
    }

    /// As an `[x, y, z]` array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// From an `[x, y, z]` array.
    #[inline]
    pub fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

// =============================================================================
// LOCATION / TRANSFORM
// =============================================================================

/// A point bound to a specific world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Containing world.
    pub world: WorldId,
    /// Position in that world.
    pub position: Vec3,
}

impl Location {
    /// Create a location.
    pub const fn new(world: WorldId, position: Vec3) -> Self {
        Self { world, position }
    }
}

/// Position plus orientation in a world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Containing world.
    pub world: WorldId,
    /// Position in that world.
    pub position: Vec3,
    /// Horizontal rotation in degrees.
    pub yaw: f64,
    /// Vertical rotation in degrees.
    pub pitch: f64,
}

impl Transform {
    /// Create a new transform.
    pub const fn new(world: WorldId, position: Vec3, yaw: f64, pitch: f64) -> Self {
        Self { world, position, yaw, pitch }
    }

    /// Transform at a location with neutral orientation.
    pub const fn at(location: Location) -> Self {
        Self::new(location.world, location.position, 0.0, 0.0)
    }

    /// Drop the orientation.
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.world, self.position)
    }
}

// =============================================================================
// AXIS-ALIGNED BOX
// =============================================================================

/// Axis-aligned box with `min <= max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Build from two opposite corners given in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Build from two corners snapped to block coordinates.
    pub fn from_block_corners(a: Vec3, b: Vec3) -> Self {
        Self::from_corners(a.floor(), b.floor())
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
            && point.z >= self.min.z && point.z <= self.max.z
    }
}
