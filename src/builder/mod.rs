//! Arena Builder
//!
//! Admin workflow that defines a new arena one captured position at a time.
//!
//! ## Module Structure
//!
//! - `field`: Capturable draft fields
//! - `draft`: In-progress arena and commit validation
//! - `session`: Builder state machine and admin commands
//! - `desk`: One builder per admin

pub mod desk;
pub mod draft;
pub mod field;
pub mod session;

// Re-export key types
pub use desk::BuilderDesk;
pub use draft::{ArenaDraft, ValidationError};
pub use field::FieldKind;
pub use session::{ArenaBuilderSession, BuildAction, BuildError, BuildOutcome, BuilderState};
