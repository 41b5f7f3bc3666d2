//! Team Colours
//!
//! The fixed palette of team identities and the allocator that hands them
//! out. Allocation always walks the declared enumeration order, so the
//! same occupancy produces the same colour on every run.

use std::collections::BTreeSet;
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::error::ErrorKind;
use crate::host::Rgb;

// =============================================================================
// TEAM COLOUR
// =============================================================================

/// Team identity. Declaration order is allocation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TeamColor {
    /// First allocated.
    Red = 0,
    /// Second.
    Green = 1,
    /// Third.
    Orange = 2,
    /// Fourth.
    Yellow = 3,
    /// Fifth.
    Purple = 4,
    /// Last allocated.
    Blue = 5,
}

impl TeamColor {
    /// Every colour in declaration order.
    pub const ALL: [TeamColor; 6] = [
        TeamColor::Red,
        TeamColor::Green,
        TeamColor::Orange,
        TeamColor::Yellow,
        TeamColor::Purple,
        TeamColor::Blue,
    ];

    /// Persistence key.
    pub fn key(self) -> &'static str {
        match self {
            TeamColor::Red => "red",
            TeamColor::Green => "green",
            TeamColor::Orange => "orange",
            TeamColor::Yellow => "yellow",
            TeamColor::Purple => "purple",
            TeamColor::Blue => "blue",
        }
    }

    /// Dye applied to the team headwear.
    pub fn rgb(self) -> Rgb {
        match self {
            TeamColor::Red => Rgb(0xFF, 0x55, 0x55),
            TeamColor::Green => Rgb(0x55, 0xFF, 0x55),
            TeamColor::Orange => Rgb(0xFF, 0xAA, 0x00),
            TeamColor::Yellow => Rgb(0xFF, 0xFF, 0x55),
            TeamColor::Purple => Rgb(0xAA, 0x00, 0xAA),
            TeamColor::Blue => Rgb(0x55, 0x55, 0xFF),
        }
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key().to_ascii_uppercase())
    }
}

// =============================================================================
// SLOT ALLOCATOR
// =============================================================================

/// Every colour of the palette is taken.
///
/// Callers check capacity first, so seeing this means that check was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no free team colour (capacity {capacity})")]
pub struct NoSlotAvailable {
    /// Palette size at the time of the failure.
    pub capacity: usize,
}

impl NoSlotAvailable {
    /// Always [`ErrorKind::NoSlotAvailable`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::NoSlotAvailable
    }
}

/// Hands out colours from an arena's palette.
///
/// Holds no occupancy of its own: a colour is free exactly when no active
/// player carries it, so removing a player releases the slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSlotAllocator {
    palette: Vec<TeamColor>,
}

impl ColorSlotAllocator {
    /// Build from the arena's colours. Duplicates are dropped and the
    /// palette is kept in declaration order.
    pub fn new(colors: impl IntoIterator<Item = TeamColor>) -> Self {
        let palette: BTreeSet<TeamColor> = colors.into_iter().collect();
        Self {
            palette: palette.into_iter().collect(),
        }
    }

    /// Palette in allocation order.
    pub fn palette(&self) -> &[TeamColor] {
        &self.palette
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.palette.len()
    }

    /// First palette colour not in `in_use`.
    pub fn allocate(&self, in_use: &BTreeSet<TeamColor>) -> Result<TeamColor, NoSlotAvailable> {
        self.palette
            .iter()
            .copied()
            .find(|c| !in_use.contains(c))
            .ok_or(NoSlotAvailable { capacity: self.capacity() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_serde_key_matches_key() {
        for color in TeamColor::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.key()));
            assert_eq!(color.to_string(), color.key().to_ascii_uppercase());
        }
    }

    #[test]
    fn test_allocation_follows_declaration_order() {
        // Insertion order must not matter.
        let allocator = ColorSlotAllocator::new([TeamColor::Blue, TeamColor::Green, TeamColor::Red]);
        assert_eq!(allocator.palette(), &[TeamColor::Red, TeamColor::Green, TeamColor::Blue]);

        let mut in_use = BTreeSet::new();
        let first = allocator.allocate(&in_use).unwrap();
        assert_eq!(first, TeamColor::Red);
        in_use.insert(first);

        assert_eq!(allocator.allocate(&in_use).unwrap(), TeamColor::Green);

        in_use.insert(TeamColor::Green);
        in_use.remove(&TeamColor::Red);
        assert_eq!(allocator.allocate(&in_use).unwrap(), TeamColor::Red);
    }

    #[test]
    fn test_allocation_exhausted() {
        let allocator = ColorSlotAllocator::new([TeamColor::Red, TeamColor::Red]);
        assert_eq!(allocator.capacity(), 1);

        let in_use: BTreeSet<_> = [TeamColor::Red].into_iter().collect();
        let err = allocator.allocate(&in_use).unwrap_err();
        assert_eq!(err, NoSlotAvailable { capacity: 1 });
        assert!(err.kind().is_bug());
    }

    #[test]
    fn test_colors_outside_palette_ignored() {
        let allocator = ColorSlotAllocator::new([TeamColor::Yellow]);
        let in_use: BTreeSet<_> = [TeamColor::Red].into_iter().collect();
        assert_eq!(allocator.allocate(&in_use).unwrap(), TeamColor::Yellow);
    }
}
