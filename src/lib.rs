pub mod config;
pub mod editor;
pub mod events;
pub mod refine;
pub mod roster;
pub mod session;

// Re-export commonly used types for convenience.
pub use config::{AppConfig, RefineSettings};
pub use editor::{DraftFieldChange, EditorMode, EditorSession, ProfileDraft};
pub use refine::{BiographyRefiner, RefineOutcome, RefineStatus};
pub use roster::{Institution, Profile, ProfileId, ProfileRegistry, RosterSnapshot};
pub use session::{DirectorySession, RefineReport, RemovalTicket};
