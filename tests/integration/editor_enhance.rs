use anyhow::Result;
use collabdir::events::DirectoryEventType;
use collabdir::{DraftFieldChange, ProfileId, RefineStatus};

use crate::support::{CountingRefiner, DirectoryFixture, PassthroughRefiner, RewritingRefiner};

#[test]
fn successful_enhancement_replaces_the_draft_biography() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.seeded_session()?;
    session.set_refiner(Box::new(RewritingRefiner(
        "Semblanza pulida por el editor académico.".to_string(),
    )));

    session.start_edit(&ProfileId::new("1"))?;
    let report = session.enhance_biography()?.expect("enhancement ran");
    assert_eq!(report.status, RefineStatus::Refined);
    assert!(report.applied);

    let draft = session.editor().draft().expect("editor open");
    assert_eq!(draft.biography, "Semblanza pulida por el editor académico.");

    let profile = session.submit()?;
    assert_eq!(profile.biography, "Semblanza pulida por el editor académico.");
    Ok(())
}

#[test]
fn blank_biography_skips_the_external_call() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.empty_session()?;
    let (refiner, calls) = CountingRefiner::new();
    session.set_refiner(Box::new(refiner));

    session.start_create()?;
    session.update_draft(&[DraftFieldChange::new("biography", "   ")])?;
    assert!(session.enhance_biography()?.is_none());
    assert_eq!(calls.get(), 0);
    assert_eq!(session.editor().draft().expect("editor open").biography, "   ");
    Ok(())
}

#[test]
fn enhancement_with_a_closed_editor_is_a_no_op() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.seeded_session()?;
    let (refiner, calls) = CountingRefiner::new();
    session.set_refiner(Box::new(refiner));

    assert!(session.enhance_biography()?.is_none());
    assert_eq!(calls.get(), 0);
    Ok(())
}

#[test]
fn missing_credential_keeps_the_biography_unchanged() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.seeded_session()?;
    session.set_refiner(Box::new(PassthroughRefiner(RefineStatus::MissingCredential)));

    session.start_edit(&ProfileId::new("2"))?;
    let before = session.editor().draft().expect("editor open").biography.clone();
    let report = session.enhance_biography()?.expect("enhancement ran");

    assert_eq!(report.status, RefineStatus::MissingCredential);
    assert!(report.applied, "fallback text still resolves the ticket");
    assert_eq!(session.editor().draft().expect("editor open").biography, before);
    Ok(())
}

#[test]
fn transport_failure_keeps_the_biography_unchanged() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.seeded_session()?;
    session.set_refiner(Box::new(PassthroughRefiner(RefineStatus::TransportFailed)));

    session.start_edit(&ProfileId::new("3"))?;
    let before = session.editor().draft().expect("editor open").biography.clone();
    session.enhance_biography()?.expect("enhancement ran");
    assert_eq!(session.editor().draft().expect("editor open").biography, before);
    Ok(())
}

#[test]
fn enhancement_outcomes_are_logged() -> Result<()> {
    let fixture = DirectoryFixture::new();
    let mut session = fixture.seeded_session()?;
    session.set_refiner(Box::new(PassthroughRefiner(RefineStatus::MissingCredential)));

    session.start_edit(&ProfileId::new("1"))?;
    session.enhance_biography()?;

    let events = session.log().load_events()?;
    let refined = events
        .iter()
        .find(|event| event.event_type == DirectoryEventType::BiographyRefined)
        .expect("refine event logged");
    assert_eq!(refined.details["status"], "missing_credential");
    assert_eq!(refined.details["applied"], true);
    Ok(())
}
