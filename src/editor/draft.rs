//! Staged draft of the five profile fields collected by the editor form.

use anyhow::{bail, Result};

use crate::roster::{placeholder_photo_url, Institution, Profile};

/// Hard cap applied by the biography input control.
pub const BIOGRAPHY_MAX_CHARS: usize = 1000;

/// Soft guidance shown next to the biography word counter.
pub const BIOGRAPHY_WORD_GUIDANCE: usize = 150;

/// A single staged field edit, dispatched by field name.
#[derive(Debug, Clone)]
pub struct DraftFieldChange {
    pub field: String,
    pub value: String,
}

impl DraftFieldChange {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Working copy of profile fields while the editor is open.
#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub name: String,
    pub institution: Institution,
    pub research_line: String,
    pub biography: String,
    pub photo_url: String,
}

impl ProfileDraft {
    /// Fresh draft for create mode: empty fields, default institution, and a
    /// seeded placeholder portrait.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            institution: Institution::default(),
            research_line: String::new(),
            biography: String::new(),
            photo_url: placeholder_photo_url(),
        }
    }

    /// Draft populated from an existing profile for edit mode.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            institution: profile.institution,
            research_line: profile.research_line.clone(),
            biography: profile.biography.clone(),
            photo_url: profile.photo_url.clone(),
        }
    }

    /// Applies staged edits, returning one diff line per change. Unknown
    /// field names are rejected; each update replaces the previous value.
    pub fn apply_changes(&mut self, changes: &[DraftFieldChange]) -> Result<Vec<String>> {
        let mut diff = Vec::new();
        for change in changes {
            match change.field.to_ascii_lowercase().as_str() {
                "name" => {
                    self.name = change.value.clone();
                    diff.push("Updated name".into());
                }
                "institution" => {
                    self.institution = Institution::parse(&change.value)?;
                    diff.push("Updated institution".into());
                }
                "research_line" => {
                    self.research_line = change.value.clone();
                    diff.push("Updated research line".into());
                }
                "biography" => {
                    self.set_biography(&change.value);
                    diff.push("Updated biography".into());
                }
                "photo_url" => {
                    self.photo_url = change.value.clone();
                    diff.push("Updated photo URL".into());
                }
                other => bail!("Unsupported profile field '{other}'"),
            }
        }
        Ok(diff)
    }

    /// Replaces the biography, keeping at most `BIOGRAPHY_MAX_CHARS`
    /// characters (the input control's cap, not a registry invariant).
    pub fn set_biography(&mut self, value: &str) {
        if value.chars().count() > BIOGRAPHY_MAX_CHARS {
            self.biography = value.chars().take(BIOGRAPHY_MAX_CHARS).collect();
        } else {
            self.biography = value.to_string();
        }
    }

    /// Approximate word count shown against the 150-word guidance.
    pub fn biography_word_count(&self) -> usize {
        self.biography.split_whitespace().count()
    }

    /// Required-field presence check performed at submission time.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.research_line.trim().is_empty() {
            missing.push("research_line");
        }
        if self.biography.trim().is_empty() {
            missing.push("biography");
        }
        if !missing.is_empty() {
            bail!("Required fields are empty: {}", missing.join(", "));
        }
        Ok(())
    }
}
