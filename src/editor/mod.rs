//! Modal editor session staging edits to a single profile.
//!
//! Two states: closed, or open with a create/edit mode and a working draft.
//! The biography-enhancement call is the only suspension point in the
//! system, so it runs through an explicit ticket protocol: `begin_enhancement`
//! hands out a ticket, `complete_enhancement` applies the rewritten text only
//! if that ticket is still the pending one. Cancelling, submitting, or
//! re-opening the editor invalidates outstanding tickets, so late completions
//! never touch a newer draft.

mod draft;

pub use draft::{DraftFieldChange, ProfileDraft, BIOGRAPHY_MAX_CHARS, BIOGRAPHY_WORD_GUIDANCE};

use anyhow::{bail, Result};
use uuid::Uuid;

use crate::roster::{Profile, ProfileId};

/// Sub-mode carried by the open state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(ProfileId),
}

/// Ticket plus the biography text to hand to the rewrite collaborator.
#[derive(Debug, Clone)]
pub struct PendingEnhancement {
    pub ticket: Uuid,
    pub biography: String,
}

#[derive(Debug)]
struct OpenEditor {
    mode: EditorMode,
    draft: ProfileDraft,
    pending_enhancement: Option<Uuid>,
}

#[derive(Debug)]
enum EditorState {
    Closed,
    Open(OpenEditor),
}

/// The staged-draft editor state machine.
#[derive(Debug)]
pub struct EditorSession {
    state: EditorState,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            state: EditorState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open(_))
    }

    pub fn mode(&self) -> Option<&EditorMode> {
        match &self.state {
            EditorState::Open(open) => Some(&open.mode),
            EditorState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&ProfileDraft> {
        match &self.state {
            EditorState::Open(open) => Some(&open.draft),
            EditorState::Closed => None,
        }
    }

    pub fn is_enhancing(&self) -> bool {
        matches!(
            &self.state,
            EditorState::Open(open) if open.pending_enhancement.is_some()
        )
    }

    /// Opens the editor in create mode with a fresh default draft. Replaces
    /// any existing draft entirely.
    pub fn open_create(&mut self) {
        self.state = EditorState::Open(OpenEditor {
            mode: EditorMode::Create,
            draft: ProfileDraft::empty(),
            pending_enhancement: None,
        });
    }

    /// Opens the editor in edit mode with a draft populated from `profile`.
    /// Re-triggering while already open replaces the draft entirely.
    pub fn open_edit(&mut self, profile: &Profile) {
        self.state = EditorState::Open(OpenEditor {
            mode: EditorMode::Edit(profile.id.clone()),
            draft: ProfileDraft::from_profile(profile),
            pending_enhancement: None,
        });
    }

    /// Discards the draft unconditionally. Returns whether the editor was
    /// open. Any pending enhancement ticket becomes stale.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = EditorState::Closed;
        was_open
    }

    /// Applies staged field edits to the open draft.
    pub fn apply_changes(&mut self, changes: &[DraftFieldChange]) -> Result<Vec<String>> {
        match &mut self.state {
            EditorState::Open(open) => open.draft.apply_changes(changes),
            EditorState::Closed => bail!("The editor is closed; open it before editing fields."),
        }
    }

    /// Starts a biography enhancement. Returns `None` when the editor is
    /// closed, the draft biography is empty or whitespace, or an enhancement
    /// is already in flight.
    pub fn begin_enhancement(&mut self) -> Option<PendingEnhancement> {
        let open = match &mut self.state {
            EditorState::Open(open) => open,
            EditorState::Closed => return None,
        };
        if open.pending_enhancement.is_some() || open.draft.biography.trim().is_empty() {
            return None;
        }
        let ticket = Uuid::new_v4();
        open.pending_enhancement = Some(ticket);
        Some(PendingEnhancement {
            ticket,
            biography: open.draft.biography.clone(),
        })
    }

    /// Delivers the collaborator's text for `ticket`. Applies it and clears
    /// the in-flight flag only when the editor is still open with that exact
    /// ticket pending; stale completions are discarded and return `false`.
    pub fn complete_enhancement(&mut self, ticket: Uuid, text: &str) -> bool {
        let open = match &mut self.state {
            EditorState::Open(open) => open,
            EditorState::Closed => return false,
        };
        if open.pending_enhancement != Some(ticket) {
            return false;
        }
        open.draft.set_biography(text);
        open.pending_enhancement = None;
        true
    }

    /// Finalizes the draft into a complete profile and closes the editor.
    ///
    /// Rejected while an enhancement is in flight and when a required field
    /// is empty. Edit mode reuses the existing id; create mode assigns a
    /// fresh one. All five fields are taken verbatim from the draft.
    pub fn finalize(&mut self) -> Result<Profile> {
        let open = match &self.state {
            EditorState::Open(open) => open,
            EditorState::Closed => bail!("The editor is closed; nothing to submit."),
        };
        if open.pending_enhancement.is_some() {
            bail!("A biography enhancement is in flight; wait for it before submitting.");
        }
        open.draft.validate()?;
        let id = match &open.mode {
            EditorMode::Edit(id) => id.clone(),
            EditorMode::Create => ProfileId::generate(),
        };
        let draft = &open.draft;
        let profile = Profile {
            id,
            name: draft.name.clone(),
            institution: draft.institution,
            research_line: draft.research_line.clone(),
            biography: draft.biography.clone(),
            photo_url: draft.photo_url.clone(),
        };
        self.state = EditorState::Closed;
        Ok(profile)
    }
}
