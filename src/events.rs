//! Append-only event log for directory mutations.
//!
//! Every registry mutation and refine attempt is recorded as one JSONL line
//! so a session's history can be inspected after the fact. The profile
//! collection itself is never persisted; this log is observability, not
//! storage.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Type of directory events that can be logged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryEventType {
    EditorOpened,
    EditorCancelled,
    ProfileCommitted,
    BiographyRefined,
    RemovalRequested,
    RemovalConfirmed,
    RemovalDeclined,
}

/// General-purpose directory event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEvent {
    pub event_id: Uuid,
    pub event_type: DirectoryEventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

/// Append-only JSONL log rooted in the workspace directory.
pub struct DirectoryLog {
    events_path: PathBuf,
}

impl DirectoryLog {
    pub fn at_root(root: &Path) -> Self {
        Self {
            events_path: root.join("log").join("events.jsonl"),
        }
    }

    pub fn events_path(&self) -> &Path {
        &self.events_path
    }

    pub fn append(
        &self,
        event_type: DirectoryEventType,
        details: serde_json::Value,
    ) -> Result<Uuid> {
        let event = DirectoryEvent {
            event_id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            details,
        };
        self.append_event(&event)?;
        Ok(event.event_id)
    }

    pub fn append_event(&self, event: &DirectoryEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Reads back all logged events, oldest first.
    pub fn load_events(&self) -> Result<Vec<DirectoryEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|line| !line.trim().is_empty()) {
            events.push(serde_json::from_str(line)?);
        }
        Ok(events)
    }
}
