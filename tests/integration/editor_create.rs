use anyhow::Result;
use collabdir::events::DirectoryEventType;
use collabdir::{DraftFieldChange, Institution};

use crate::support::DirectoryFixture;

#[test]
fn creating_the_first_profile_from_an_empty_roster() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.empty_session()?;
    assert!(session.registry().is_empty());

    session.start_create()?;
    assert!(session.editor().is_open());
    session.update_draft(&[
        DraftFieldChange::new("name", "Dr. X"),
        DraftFieldChange::new("research_line", "Optics"),
        DraftFieldChange::new("biography", "Bio text"),
    ])?;

    let profile = session.submit()?;
    assert_eq!(session.registry().len(), 1);
    assert!(!profile.id.as_str().is_empty());
    assert_eq!(profile.institution, Institution::ALL[0]);
    assert_eq!(profile.name, "Dr. X");
    assert!(!session.editor().is_open());

    let events = session.log().load_events()?;
    assert!(events
        .iter()
        .any(|event| event.event_type == DirectoryEventType::ProfileCommitted
            && event.details["outcome"] == "inserted"));
    Ok(())
}

#[test]
fn submit_is_blocked_until_required_fields_are_present() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.empty_session()?;

    session.start_create()?;
    session.update_draft(&[DraftFieldChange::new("name", "Dr. X")])?;
    let err = session.submit().unwrap_err().to_string();
    assert!(err.contains("research_line"), "unexpected error: {err}");
    assert!(session.registry().is_empty());
    assert!(session.editor().is_open(), "failed submit must keep the draft");
    Ok(())
}

#[test]
fn cancel_discards_the_draft_without_touching_the_roster() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.seeded_session()?;
    let before = session.snapshot();

    session.start_create()?;
    session.update_draft(&[DraftFieldChange::new("name", "Dr. Abandoned")])?;
    session.cancel()?;

    assert!(!session.editor().is_open());
    let after = session.snapshot();
    assert_eq!(after.revision, before.revision);
    assert_eq!(after.profiles.len(), before.profiles.len());
    Ok(())
}

#[test]
fn reopening_an_edit_replaces_the_previous_draft() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.seeded_session()?;

    session.start_edit(&"1".into())?;
    session.update_draft(&[DraftFieldChange::new("name", "Half-finished edit")])?;
    session.start_edit(&"2".into())?;

    let draft = session.editor().draft().expect("editor open");
    assert_eq!(draft.name, "Dr. Sarah Smith");
    Ok(())
}

#[test]
fn editing_an_unknown_id_fails_and_leaves_state_untouched() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.seeded_session()?;

    assert!(session.start_edit(&"nonexistent".into()).is_err());
    assert!(!session.editor().is_open());
    assert_eq!(session.registry().len(), fixture.seed_count());
    Ok(())
}
