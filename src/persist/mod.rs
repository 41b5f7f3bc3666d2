//! Persistence
//!
//! On-disk form of committed arenas and the JSON file that holds them.

pub mod record;
pub mod store;

pub use record::{ArenaRecord, BoxRecord, TransformRecord};
pub use store::{ArenaStore, StoreError};
