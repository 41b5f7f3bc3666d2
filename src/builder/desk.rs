//! Per-admin builder sessions.

use std::collections::BTreeMap;
use tracing::debug;

use crate::core::{DeterministicRng, PlayerId};
use super::session::ArenaBuilderSession;

/// One builder session per admin, keyed by player.
#[derive(Clone, Debug)]
pub struct BuilderDesk {
    sessions: BTreeMap<PlayerId, ArenaBuilderSession>,
    rng: DeterministicRng,
}

impl BuilderDesk {
    /// Empty desk. `seed` derives each admin's name generator.
    pub fn new(seed: u64) -> Self {
        Self {
            sessions: BTreeMap::new(),
            rng: DeterministicRng::new(seed),
        }
    }

    /// Builder for `admin`, created on first use.
    pub fn session_for(&mut self, admin: PlayerId) -> &mut ArenaBuilderSession {
        let rng = &mut self.rng;
        self.sessions.entry(admin).or_insert_with(|| {
            debug!("Opened builder for {}", admin);
            ArenaBuilderSession::new(rng.next_u64())
        })
    }

    /// Builder for `admin`, if one was opened.
    pub fn get(&self, admin: &PlayerId) -> Option<&ArenaBuilderSession> {
        self.sessions.get(admin)
    }

    /// Drop an admin's builder and any draft in it.
    pub fn remove(&mut self, admin: &PlayerId) -> Option<ArenaBuilderSession> {
        self.sessions.remove(admin)
    }

    /// Number of admins with a draft in progress.
    pub fn open_drafts(&self) -> usize {
        self.sessions.values().filter(|s| s.has_draft()).count()
    }
}

impl Default for BuilderDesk {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::pid;

    #[test]
    fn test_drafts_are_per_admin() {
        let mut desk = BuilderDesk::new(9);
        desk.session_for(pid(1)).start(Some("alpha".to_string()));
        desk.session_for(pid(2)).start(Some("beta".to_string()));

        assert_eq!(desk.open_drafts(), 2);
        let alpha = desk.get(&pid(1)).and_then(|s| s.draft()).and_then(|d| d.name.clone());
        assert_eq!(alpha.as_deref(), Some("alpha"));

        desk.session_for(pid(2)).stop();
        assert_eq!(desk.open_drafts(), 1);
        assert!(desk.get(&pid(1)).unwrap().has_draft());
    }

    #[test]
    fn test_generated_names_differ_between_admins() {
        let mut desk = BuilderDesk::new(9);
        let a = desk.session_for(pid(1)).start(None);
        let b = desk.session_for(pid(2)).start(None);
        assert_ne!(a, b);

        assert!(desk.remove(&pid(1)).is_some());
        assert!(desk.get(&pid(1)).is_none());
    }
}
