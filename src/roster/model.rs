//! Data structures backing the researcher roster.

use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier assigned when a profile is first committed.
///
/// Seed profiles keep their original short identifiers; fresh profiles get a
/// generated UUID string. The identifier is the sole key used for
/// update/delete matching and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Closed set of institution tags. Used for badge labeling only; no
/// behavioral effect anywhere in the roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Institution {
    Udg,
    Ksu,
    Other,
}

impl Institution {
    /// Selectable tags in display order. The first entry is the default for
    /// freshly created drafts.
    pub const ALL: [Institution; 3] = [Institution::Udg, Institution::Ksu, Institution::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Institution::Udg => "Preparatoria 7 (UDG)",
            Institution::Ksu => "Kent State University (KSU)",
            Institution::Other => "Otro Colaborador",
        }
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "udg" => Ok(Institution::Udg),
            "ksu" => Ok(Institution::Ksu),
            "other" => Ok(Institution::Other),
            other => anyhow::bail!("Unknown institution '{other}'. Expected udg/ksu/other."),
        }
    }
}

impl Default for Institution {
    fn default() -> Self {
        Institution::Udg
    }
}

/// A researcher record displayed on the directory page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub institution: Institution,
    pub research_line: String,
    pub biography: String,
    pub photo_url: String,
}

/// Returns a seeded placeholder portrait URL for drafts without a photo.
pub fn placeholder_photo_url() -> String {
    let mut rng = rand::thread_rng();
    let seed: String = (0..8).map(|_| rng.sample(Alphanumeric) as char).collect();
    format!("https://picsum.photos/seed/{seed}/400/400")
}
