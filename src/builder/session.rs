//! Arena Builder Session
//!
//! Single-slot state machine that captures an arena field by field and
//! commits it to the [`GameRegistry`].
//!
//! ```text
//!            start(name?)              set_field / rename
//!   NoDraft ─────────────▶ InProgress ◀──────────────────┐
//!      ▲                    │   │  └─────────────────────┘
//!      │      save (ok)     │   │
//!      ├────────────────────┘   │
//!      │      stop              │
//!      └────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use crate::core::DeterministicRng;
use crate::error::ErrorKind;
use crate::game::arena::ArenaError;
use crate::game::registry::{GameRegistry, RegistryError};
use crate::host::{ChecklistLine, ClickAction, CommandSource, DisplayCapability, Page};
use super::draft::{ArenaDraft, ValidationError};
use super::field::FieldKind;

/// Title of the progress page.
pub const PROGRESS_TITLE: &str = "New build arena";

/// Builder errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// Operation needs a draft in progress.
    #[error("No arena draft in progress")]
    NoDraft,

    /// Draft or capture rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Registry refused the committed arena.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl BuildError {
    /// Error class for command responses.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildError::NoDraft => ErrorKind::State,
            BuildError::Validation(e) => e.kind(),
            BuildError::Registry(e) => e.kind(),
        }
    }
}

/// Builder state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BuilderState {
    /// Idle.
    #[default]
    NoDraft,
    /// Capturing fields.
    InProgress(ArenaDraft),
}

/// One admin command against the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildAction {
    /// Open a draft, with a name or a generated one.
    Start(Option<String>),
    /// Capture a field from the admin's position.
    Capture(FieldKind),
    /// Commit the draft.
    Save,
    /// Discard the draft.
    Stop,
}

/// Result of [`ArenaBuilderSession::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Draft opened under this name.
    Started(String),
    /// Field recorded.
    Captured(FieldKind),
    /// Arena registered under this name.
    Saved(String),
    /// Draft discarded.
    Stopped,
}

/// Draft capture workflow for one builder context.
#[derive(Clone, Debug)]
pub struct ArenaBuilderSession {
    state: BuilderState,
    rng: DeterministicRng,
}

impl ArenaBuilderSession {
    /// New builder with no draft. `seed` drives generated names.
    pub fn new(seed: u64) -> Self {
        Self {
            state: BuilderState::NoDraft,
            rng: DeterministicRng::new(seed),
        }
    }

    /// Current state.
    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    /// Draft in progress, if any.
    pub fn draft(&self) -> Option<&ArenaDraft> {
        match &self.state {
            BuilderState::InProgress(draft) => Some(draft),
            BuilderState::NoDraft => None,
        }
    }

    /// True while a draft is open.
    pub fn has_draft(&self) -> bool {
        self.draft().is_some()
    }

    fn draft_mut(&mut self) -> Result<&mut ArenaDraft, BuildError> {
        match &mut self.state {
            BuilderState::InProgress(draft) => Ok(draft),
            BuilderState::NoDraft => Err(BuildError::NoDraft),
        }
    }

    /// Begin a fresh draft, discarding any draft already in progress.
    /// Without a name a numeric token is generated. Returns the name.
    pub fn start(&mut self, name: Option<String>) -> String {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.rng.next_token());

        if self.has_draft() {
            debug!("Discarding previous draft");
        }
        info!("Started arena draft {}", name);
        self.state = BuilderState::InProgress(ArenaDraft::named(Some(name.clone())));
        name
    }

    /// Change the draft name.
    pub fn rename(&mut self, name: &str) -> Result<(), BuildError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidArena(ArenaError::EmptyName).into());
        }
        self.draft_mut()?.name = Some(name.to_string());
        Ok(())
    }

    /// Capture `field` from the source's current transform.
    pub fn set_field(&mut self, field: FieldKind, source: &dyn CommandSource) -> Result<(), BuildError> {
        let draft = self.draft_mut()?;
        let transform = source.current_transform().ok_or(ValidationError::NotAnActor)?;
        draft.capture(field, transform)?;
        debug!("{} captured {} at {:?}", source.source_name(), field, transform.position);
        Ok(())
    }

    /// Captured flag per field in display order, or `None` without a draft.
    pub fn query_progress(&self) -> Option<Vec<(FieldKind, bool)>> {
        self.draft().map(ArenaDraft::progress)
    }

    /// Checklist page for the current state.
    pub fn progress_page(&self) -> Page {
        let lines = match self.query_progress() {
            None => vec![ChecklistLine {
                text: "No new builder start -click me- to start".to_string(),
                done: false,
                on_click: Some(ClickAction::Suggest("/kow admin build NAME <name>".to_string())),
            }],
            Some(progress) => progress
                .into_iter()
                .map(|(field, done)| ChecklistLine {
                    text: format!("{}: {}", field, if done { "Okay" } else { "--" }),
                    done,
                    on_click: Some(ClickAction::Run(format!("/kow admin build {}", field))),
                })
                .collect(),
        };

        Page {
            title: PROGRESS_TITLE.to_string(),
            lines,
        }
    }

    /// Render the checklist to `viewer`.
    pub fn show_progress(&self, viewer: &dyn CommandSource, display: &mut dyn DisplayCapability) {
        display.render_pages(viewer, &self.progress_page());
    }

    /// Commit the draft as a new game. On failure the draft is kept.
    pub fn save(&mut self, registry: &mut GameRegistry) -> Result<String, BuildError> {
        let BuilderState::InProgress(draft) = &mut self.state else {
            return Err(BuildError::NoDraft);
        };
        let name = draft.name.get_or_insert_with(|| self.rng.next_token()).clone();

        let arena = draft.to_arena(&name).map_err(|e| {
            warn!("Draft {} not saved: {}", name, e);
            e
        })?;

        registry.create_game(arena)?;
        self.state = BuilderState::NoDraft;
        info!("Saved arena {}", name);
        Ok(name)
    }

    /// Discard the draft unconditionally.
    pub fn stop(&mut self) {
        if let BuilderState::InProgress(draft) = std::mem::take(&mut self.state) {
            info!("Stopped arena draft {}", draft.name.as_deref().unwrap_or("?"));
        }
    }

    /// Dispatch one admin command.
    pub fn execute(
        &mut self,
        action: BuildAction,
        source: &dyn CommandSource,
        registry: &mut GameRegistry,
    ) -> Result<BuildOutcome, BuildError> {
        match action {
            BuildAction::Start(name) => Ok(BuildOutcome::Started(self.start(name))),
            BuildAction::Capture(field) => {
                self.set_field(field, source)?;
                Ok(BuildOutcome::Captured(field))
            }
            BuildAction::Save => self.save(registry).map(BuildOutcome::Saved),
            BuildAction::Stop => {
                self.stop();
                Ok(BuildOutcome::Stopped)
            }
        }
    }
}

impl Default for ArenaBuilderSession {
    fn default() -> Self {
        Self::new(0)
    }
}
