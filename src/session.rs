//! Session facade wiring the roster, the editor, and the rewrite
//! collaborator together.
//!
//! Control flow mirrors the directory page: start_create/start_edit opens
//! the editor, draft edits accumulate, an optional enhancement rewrites the
//! biography, submit commits the finalized record and closes the editor.
//! Deletion goes through an expiring confirmation ticket instead of a
//! blocking prompt.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::{self, AppConfig, CONFIG_FILE_NAME};
use crate::editor::{DraftFieldChange, EditorSession};
use crate::events::{DirectoryEventType, DirectoryLog};
use crate::refine::{BiographyRefiner, RefineStatus, RemoteRefiner};
use crate::roster::{seed_profiles, Profile, ProfileId, ProfileRegistry, RosterSnapshot};

/// Confirmation text shown before a profile is removed.
pub const REMOVE_CONFIRM_PROMPT: &str = "¿Estás seguro de que deseas eliminar este investigador?";

/// How long a queued removal confirmation stays answerable.
const REMOVAL_TICKET_TTL_MINUTES: i64 = 15;

/// A queued removal awaiting the user's yes/no answer.
#[derive(Debug, Clone)]
pub struct RemovalTicket {
    pub ticket_id: Uuid,
    pub profile_id: ProfileId,
    pub prompt: String,
    pub requested_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Summary of one enhancement round handed back to the caller.
#[derive(Debug, Clone)]
pub struct RefineReport {
    pub status: RefineStatus,
    /// Whether the rewritten text actually landed in the draft. `false`
    /// means the completion arrived stale and was discarded.
    pub applied: bool,
    pub detected_language: Option<&'static str>,
}

/// Owns the in-memory directory state for one application run.
pub struct DirectorySession {
    root: PathBuf,
    config: AppConfig,
    registry: ProfileRegistry,
    editor: EditorSession,
    refiner: Box<dyn BiographyRefiner>,
    pending_removals: Vec<RemovalTicket>,
    log: DirectoryLog,
}

impl DirectorySession {
    /// Opens a session in the default workspace with the seed roster.
    pub fn open() -> Result<Self> {
        Self::at_root(config::workspace_root()?)
    }

    /// Opens a session rooted at an explicit workspace directory.
    pub fn at_root(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_profiles_at(root, seed_profiles())
    }

    /// Opens a session with a caller-provided starting roster.
    pub fn with_profiles_at(root: impl Into<PathBuf>, profiles: Vec<Profile>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create workspace directory {:?}", root))?;
        let config = config::load_from(&root.join("config").join(CONFIG_FILE_NAME))?;
        let mut refine_settings = config.refine.clone();
        refine_settings.api_key = refine_settings.resolved_api_key();
        let refiner: Box<dyn BiographyRefiner> = Box::new(RemoteRefiner::new(refine_settings));
        let log = DirectoryLog::at_root(&root);
        Ok(Self {
            root,
            config,
            registry: ProfileRegistry::new(profiles),
            editor: EditorSession::new(),
            refiner,
            pending_removals: Vec::new(),
            log,
        })
    }

    /// Swaps the rewrite collaborator (used by embedders and tests).
    pub fn set_refiner(&mut self, refiner: Box<dyn BiographyRefiner>) {
        self.refiner = refiner;
    }

    pub fn workspace_root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    pub fn log(&self) -> &DirectoryLog {
        &self.log
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        self.registry.snapshot()
    }

    pub fn research_lines(&self) -> Vec<String> {
        self.registry.research_lines()
    }

    /// Opens the editor in create mode with a fresh draft.
    pub fn start_create(&mut self) -> Result<()> {
        self.editor.open_create();
        self.log
            .append(DirectoryEventType::EditorOpened, json!({ "mode": "create" }))?;
        Ok(())
    }

    /// Opens the editor in edit mode for the profile matching `id`.
    ///
    /// The id must belong to a currently listed profile; an unknown id is a
    /// contract violation at this seam and leaves all state untouched.
    pub fn start_edit(&mut self, id: &ProfileId) -> Result<()> {
        let profile = self
            .registry
            .get(id)
            .with_context(|| format!("No profile with id '{id}' to edit"))?
            .clone();
        self.editor.open_edit(&profile);
        self.log.append(
            DirectoryEventType::EditorOpened,
            json!({ "mode": "edit", "profile_id": profile.id.as_str() }),
        )?;
        Ok(())
    }

    /// Applies staged field edits to the open draft.
    pub fn update_draft(&mut self, changes: &[DraftFieldChange]) -> Result<Vec<String>> {
        self.editor.apply_changes(changes)
    }

    /// Runs one biography enhancement round.
    ///
    /// Returns `Ok(None)` when the editor declines to start one (closed
    /// editor, blank biography, or an enhancement already in flight); that
    /// is a no-op, not an error. Otherwise the collaborator's text is delivered
    /// through the ticket protocol and the outcome is logged.
    pub fn enhance_biography(&mut self) -> Result<Option<RefineReport>> {
        let pending = match self.editor.begin_enhancement() {
            Some(pending) => pending,
            None => return Ok(None),
        };
        let outcome = self.refiner.refine(&pending.biography);
        let applied = self.editor.complete_enhancement(pending.ticket, &outcome.text);
        self.log.append(
            DirectoryEventType::BiographyRefined,
            json!({
                "status": outcome.status.as_str(),
                "applied": applied,
                "detected_language": outcome.detected_language,
            }),
        )?;
        Ok(Some(RefineReport {
            status: outcome.status,
            applied,
            detected_language: outcome.detected_language,
        }))
    }

    /// Finalizes the draft, commits it to the roster, and closes the editor.
    pub fn submit(&mut self) -> Result<Profile> {
        let profile = self.editor.finalize()?;
        let outcome = self.registry.commit(profile.clone());
        self.log.append(
            DirectoryEventType::ProfileCommitted,
            json!({
                "profile_id": profile.id.as_str(),
                "outcome": outcome,
                "revision": self.registry.revision(),
                "hash_after": self.registry.roster_hash(),
            }),
        )?;
        Ok(profile)
    }

    /// Discards the draft and closes the editor. No registry mutation.
    pub fn cancel(&mut self) -> Result<()> {
        if self.editor.cancel() {
            self.log
                .append(DirectoryEventType::EditorCancelled, json!({}))?;
        }
        Ok(())
    }

    /// Queues a removal confirmation for the profile matching `id`.
    ///
    /// The ticket expires unanswered after fifteen minutes. Removal of an id
    /// that is not (or no longer) listed stays a no-op at confirmation time.
    pub fn request_remove(&mut self, id: &ProfileId) -> Result<RemovalTicket> {
        self.purge_expired_removals();
        let requested_at = Utc::now();
        let ticket = RemovalTicket {
            ticket_id: Uuid::new_v4(),
            profile_id: id.clone(),
            prompt: REMOVE_CONFIRM_PROMPT.to_string(),
            requested_at,
            expires_at: requested_at + Duration::minutes(REMOVAL_TICKET_TTL_MINUTES),
        };
        self.log.append(
            DirectoryEventType::RemovalRequested,
            json!({ "ticket_id": ticket.ticket_id, "profile_id": id.as_str() }),
        )?;
        self.pending_removals.push(ticket.clone());
        Ok(ticket)
    }

    /// Confirms a queued removal. Returns whether a profile was actually
    /// removed; a missing match leaves the roster unchanged.
    pub fn confirm_remove(&mut self, ticket_id: Uuid) -> Result<bool> {
        let ticket = self.take_removal_ticket(ticket_id)?;
        let removed = self.registry.remove(&ticket.profile_id);
        self.log.append(
            DirectoryEventType::RemovalConfirmed,
            json!({
                "ticket_id": ticket_id,
                "profile_id": ticket.profile_id.as_str(),
                "removed": removed,
                "hash_after": self.registry.roster_hash(),
            }),
        )?;
        Ok(removed)
    }

    /// Declines a queued removal. No state change.
    pub fn decline_remove(&mut self, ticket_id: Uuid) -> Result<()> {
        let ticket = self.take_removal_ticket(ticket_id)?;
        self.log.append(
            DirectoryEventType::RemovalDeclined,
            json!({ "ticket_id": ticket_id, "profile_id": ticket.profile_id.as_str() }),
        )?;
        Ok(())
    }

    pub fn pending_removals(&self) -> &[RemovalTicket] {
        &self.pending_removals
    }

    fn take_removal_ticket(&mut self, ticket_id: Uuid) -> Result<RemovalTicket> {
        self.purge_expired_removals();
        let position = self
            .pending_removals
            .iter()
            .position(|ticket| ticket.ticket_id == ticket_id)
            .context("Unknown or expired removal ticket")?;
        Ok(self.pending_removals.remove(position))
    }

    fn purge_expired_removals(&mut self) {
        let now = Utc::now();
        self.pending_removals.retain(|ticket| ticket.expires_at > now);
    }
}
