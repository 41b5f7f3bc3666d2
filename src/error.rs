//! Error taxonomy.
//!
//! Every error enum in the crate maps onto one [`ErrorKind`] so the command
//! layer can pick a response without matching on each variant.

use std::fmt;

/// Broad classification of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input or draft content is not acceptable.
    Validation,
    /// Arena is at its player limit.
    Capacity,
    /// Operation not allowed in the current state.
    State,
    /// Unknown arena, game or player.
    NotFound,
    /// Colour allocation failed with capacity left. Always a bug.
    NoSlotAvailable,
}

impl ErrorKind {
    /// True for invariant violations that should never reach a user.
    pub fn is_bug(self) -> bool {
        matches!(self, ErrorKind::NoSlotAvailable)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Capacity => "capacity",
            ErrorKind::State => "state",
            ErrorKind::NotFound => "not found",
            ErrorKind::NoSlotAvailable => "no slot available",
        };
        f.write_str(s)
    }
}
