//! Arena Draft
//!
//! Field-by-field capture of an arena that has not been committed yet.

use std::collections::BTreeMap;

use crate::core::{Aabb, Location, Transform};
use crate::error::ErrorKind;
use crate::game::arena::{Arena, ArenaError};
use crate::game::color::TeamColor;
use super::field::FieldKind;

/// Draft content or capture source rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field needed to commit has not been captured.
    #[error("missing required field {0}")]
    MissingRequiredField(FieldKind),

    /// The command source has no position to capture.
    #[error("You need to be a player")]
    NotAnActor,

    /// The field is not captured from a position.
    #[error("{0} cannot be captured from a position")]
    NotCapturable(FieldKind),

    /// The assembled arena is invalid.
    #[error("invalid arena: {0}")]
    InvalidArena(#[from] ArenaError),
}

impl ValidationError {
    /// Always [`ErrorKind::Validation`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// In-progress arena definition. Every field is optional until commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArenaDraft {
    /// Arena name.
    pub name: Option<String>,
    /// Lobby transform.
    pub lobby: Option<Transform>,
    /// Captured team spawns.
    pub spawns: BTreeMap<TeamColor, Transform>,
    /// Playground corners, in capture order.
    pub corner_play_1: Option<Location>,
    /// Second playground corner.
    pub corner_play_2: Option<Location>,
    /// Area corners, in capture order.
    pub corner_area_1: Option<Location>,
    /// Second area corner.
    pub corner_area_2: Option<Location>,
}

impl ArenaDraft {
    /// Empty draft with an optional name.
    pub fn named(name: Option<String>) -> Self {
        Self { name, ..Self::default() }
    }

    /// Whether a field has a value.
    pub fn is_captured(&self, field: FieldKind) -> bool {
        match field {
            FieldKind::Name => self.name.is_some(),
            FieldKind::Lobby => self.lobby.is_some(),
            FieldKind::Red
            | FieldKind::Green
            | FieldKind::Orange
            | FieldKind::Yellow
            | FieldKind::Purple
            | FieldKind::Blue => field
                .team_color()
                .is_some_and(|c| self.spawns.contains_key(&c)),
            FieldKind::CornerPlay1 => self.corner_play_1.is_some(),
            FieldKind::CornerPlay2 => self.corner_play_2.is_some(),
            FieldKind::CornerArea1 => self.corner_area_1.is_some(),
            FieldKind::CornerArea2 => self.corner_area_2.is_some(),
        }
    }

    /// Store a captured transform, overwriting any previous value.
    /// Corner fields keep only the position.
    pub fn capture(&mut self, field: FieldKind, transform: Transform) -> Result<(), ValidationError> {
        match field {
            FieldKind::Name => return Err(ValidationError::NotCapturable(field)),
            FieldKind::Lobby => self.lobby = Some(transform),
            FieldKind::Red
            | FieldKind::Green
            | FieldKind::Orange
            | FieldKind::Yellow
            | FieldKind::Purple
            | FieldKind::Blue => {
                let color = field.team_color().ok_or(ValidationError::NotCapturable(field))?;
                self.spawns.insert(color, transform);
            }
            FieldKind::CornerPlay1 => self.corner_play_1 = Some(transform.location()),
            FieldKind::CornerPlay2 => self.corner_play_2 = Some(transform.location()),
            FieldKind::CornerArea1 => self.corner_area_1 = Some(transform.location()),
            FieldKind::CornerArea2 => self.corner_area_2 = Some(transform.location()),
        }
        Ok(())
    }

    /// `(field, captured)` for every field in display order.
    pub fn progress(&self) -> Vec<(FieldKind, bool)> {
        FieldKind::ALL.iter().map(|f| (*f, self.is_captured(*f))).collect()
    }

    /// Playground box from its two corners, if both are set.
    pub fn playground(&self) -> Option<Aabb> {
        box_from(self.corner_play_1, self.corner_play_2)
    }

    /// Area box from its two corners, if both are set.
    pub fn area(&self) -> Option<Aabb> {
        box_from(self.corner_area_1, self.corner_area_2)
    }

    /// Build the arena. Requires the lobby, at least one team spawn and
    /// all four corners; the first missing field in display order is
    /// reported. `name` overrides the draft name.
    pub fn to_arena(&self, name: &str) -> Result<Arena, ValidationError> {
        use ValidationError::MissingRequiredField as Missing;

        let lobby = self.lobby.ok_or(Missing(FieldKind::Lobby))?;
        if self.spawns.is_empty() {
            return Err(Missing(FieldKind::Red));
        }

        let playground = self.playground().ok_or_else(|| Missing(self.first_missing_corner(
            FieldKind::CornerPlay1,
            FieldKind::CornerPlay2,
        )))?;
        let area = self.area().ok_or_else(|| Missing(self.first_missing_corner(
            FieldKind::CornerArea1,
            FieldKind::CornerArea2,
        )))?;

        Ok(Arena::new(name, lobby, area, playground, self.spawns.clone())?)
    }

    fn first_missing_corner(&self, first: FieldKind, second: FieldKind) -> FieldKind {
        if self.is_captured(first) { second } else { first }
    }
}

fn box_from(a: Option<Location>, b: Option<Location>) -> Option<Aabb> {
    Some(Aabb::from_block_corners(a?.position, b?.position))
}
