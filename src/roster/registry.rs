//! The owning collection of researcher profiles.

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::model::{Profile, ProfileId};

/// Outcome of committing a profile to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    Inserted,
    Replaced,
}

/// Immutable view of the roster handed to consumers.
///
/// The revision counter increases on every mutation, so view layers can
/// compare revisions instead of diffing profile lists.
#[derive(Debug, Clone, Serialize)]
pub struct RosterSnapshot {
    pub revision: u64,
    pub profiles: Vec<Profile>,
}

/// Ordered collection of profiles plus its add/update/remove operations.
///
/// The collection lives entirely in memory; order is insertion order and has
/// no meaning beyond display.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
    revision: u64,
}

impl ProfileRegistry {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            revision: 0,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| &profile.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            revision: self.revision,
            profiles: self.profiles.clone(),
        }
    }

    /// Commits a finalized profile: replaces the record with the same id in
    /// place (order preserved), or appends when the id is new.
    pub fn commit(&mut self, profile: Profile) -> CommitOutcome {
        self.revision += 1;
        if let Some(existing) = self
            .profiles
            .iter_mut()
            .find(|existing| existing.id == profile.id)
        {
            *existing = profile;
            CommitOutcome::Replaced
        } else {
            self.profiles.push(profile);
            CommitOutcome::Inserted
        }
    }

    /// Removes the profile matching `id`. Absence of a match is a no-op and
    /// returns `false`; the operation is idempotent.
    pub fn remove(&mut self, id: &ProfileId) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|profile| &profile.id != id);
        let removed = self.profiles.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Distinct research-line values across all profiles, in order of first
    /// appearance. Exact string equality: values differing only in case or
    /// whitespace produce distinct groups.
    pub fn research_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        for profile in &self.profiles {
            if !lines.contains(&profile.research_line) {
                lines.push(profile.research_line.clone());
            }
        }
        lines
    }

    /// Profiles whose research line exactly matches `line`, in roster order.
    pub fn profiles_in_line(&self, line: &str) -> Vec<&Profile> {
        self.profiles
            .iter()
            .filter(|profile| profile.research_line == line)
            .collect()
    }

    /// Lowercase hex SHA-256 over the canonical JSON serialization of the
    /// collection. Recorded as `hash_after` in mutation events.
    pub fn roster_hash(&self) -> Option<String> {
        serde_json::to_vec(&self.profiles)
            .ok()
            .map(|bytes| format!("{:x}", Sha256::digest(&bytes)))
    }
}
