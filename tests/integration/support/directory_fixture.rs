use anyhow::Result;
use collabdir::roster::seed_profiles;
use collabdir::{DirectorySession, Profile};

use crate::IntegrationHarness;

pub struct DirectoryFixture {
    harness: IntegrationHarness,
}

impl DirectoryFixture {
    pub fn new() -> Self {
        Self {
            harness: IntegrationHarness::new(),
        }
    }

    /// Session starting from the three seeded researchers.
    pub fn seeded_session(&self) -> Result<DirectorySession> {
        DirectorySession::at_root(self.harness.workspace_path())
    }

    /// Session starting from an empty roster.
    pub fn empty_session(&self) -> Result<DirectorySession> {
        DirectorySession::with_profiles_at(self.harness.workspace_path(), Vec::new())
    }

    /// Session starting from caller-provided profiles.
    pub fn session_with(&self, profiles: Vec<Profile>) -> Result<DirectorySession> {
        DirectorySession::with_profiles_at(self.harness.workspace_path(), profiles)
    }

    pub fn seed_count(&self) -> usize {
        seed_profiles().len()
    }
}
