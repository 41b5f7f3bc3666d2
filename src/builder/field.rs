//! Capturable draft fields.
//!
//! Control operations (save, stop) are deliberately not members of this
//! enum; see [`BuildAction`](super::BuildAction).

use std::fmt;

use crate::game::color::TeamColor;

/// A field of the arena draft. Order is display order only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    /// Arena name. Set by start or rename, never captured.
    Name,
    /// Where players return to.
    Lobby,
    /// Red spawn.
    Red,
    /// Green spawn.
    Green,
    /// Orange spawn.
    Orange,
    /// Yellow spawn.
    Yellow,
    /// Purple spawn.
    Purple,
    /// Blue spawn.
    Blue,
    /// First playground corner.
    CornerPlay1,
    /// Second playground corner.
    CornerPlay2,
    /// First area corner.
    CornerArea1,
    /// Second area corner.
    CornerArea2,
}

impl FieldKind {
    /// Every field in display order.
    pub const ALL: [FieldKind; 12] = [
        FieldKind::Name,
        FieldKind::Lobby,
        FieldKind::Red,
        FieldKind::Green,
        FieldKind::Orange,
        FieldKind::Yellow,
        FieldKind::Purple,
        FieldKind::Blue,
        FieldKind::CornerPlay1,
        FieldKind::CornerPlay2,
        FieldKind::CornerArea1,
        FieldKind::CornerArea2,
    ];

    /// Command token, e.g. `CORNER_PLAY_1`.
    pub fn token(self) -> &'static str {
        match self {
            FieldKind::Name => "NAME",
            FieldKind::Lobby => "LOBBY",
            FieldKind::Red => "RED",
            FieldKind::Green => "GREEN",
            FieldKind::Orange => "ORANGE",
            FieldKind::Yellow => "YELLOW",
            FieldKind::Purple => "PURPLE",
            FieldKind::Blue => "BLUE",
            FieldKind::CornerPlay1 => "CORNER_PLAY_1",
            FieldKind::CornerPlay2 => "CORNER_PLAY_2",
            FieldKind::CornerArea1 => "CORNER_AREA_1",
            FieldKind::CornerArea2 => "CORNER_AREA_2",
        }
    }

    /// Parse a command token (case-insensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.token().eq_ignore_ascii_case(token))
    }

    /// Colour of a team spawn field.
    pub fn team_color(self) -> Option<TeamColor> {
        match self {
            FieldKind::Red => Some(TeamColor::Red),
            FieldKind::Green => Some(TeamColor::Green),
            FieldKind::Orange => Some(TeamColor::Orange),
            FieldKind::Yellow => Some(TeamColor::Yellow),
            FieldKind::Purple => Some(TeamColor::Purple),
            FieldKind::Blue => Some(TeamColor::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
