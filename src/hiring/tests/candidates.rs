use super::common::*;
use crate::hiring::candidates::{CreateCandidateRequest, UpdateCandidateRequest};
use crate::hiring::domain::{ApplicationId, ApplicationStatus, UserId};
use crate::hiring::pipeline::PipelineStage;
use crate::hiring::repository::ApplicationStore;
use crate::hiring::service::HiringError;

#[test]
fn status_update_is_persisted_verbatim() {
    let (service, store) = build_service();
    let owner = employer(&service, "owner@example.com");
    let job = job(&service, &owner);
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");
    let application = application(&service, &candidate.id, &job.id);

    let view = service
        .update_application_status(&candidate.id, &application.id, ApplicationStatus::Interviewed)
        .expect("status update succeeds");

    assert_eq!(view.applications[0].status, ApplicationStatus::Interviewed);
    let stored = store
        .fetch_application(&application.id)
        .expect("fetch")
        .expect("present");
    assert_eq!(stored.status, ApplicationStatus::Interviewed);
}

#[test]
fn status_regression_is_accepted() {
    let (service, store) = build_service();
    let owner = employer(&service, "owner@example.com");
    let job = job(&service, &owner);
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");
    let application = application(&service, &candidate.id, &job.id);

    service
        .update_application_status(&candidate.id, &application.id, ApplicationStatus::Offered)
        .expect("move to offered");
    service
        .update_application_status(&candidate.id, &application.id, ApplicationStatus::Applied)
        .expect("regression to applied is permitted");

    let stored = store
        .fetch_application(&application.id)
        .expect("fetch")
        .expect("present");
    assert_eq!(stored.status, ApplicationStatus::Applied);
}

#[test]
fn status_update_rejects_foreign_application() {
    let (service, _) = build_service();
    let owner = employer(&service, "owner@example.com");
    let job = job(&service, &owner);
    let jane = candidate(&service, "Jane Doe", "jane@example.com");
    let marcus = candidate(&service, "Marcus Webb", "marcus@example.com");
    let application = application(&service, &jane.id, &job.id);

    let result =
        service.update_application_status(&marcus.id, &application.id, ApplicationStatus::Offered);
    match result {
        Err(HiringError::NotFound(message)) => assert_eq!(message, "Application not found"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn status_update_requires_candidate_role() {
    let (service, _) = build_service();
    let owner = employer(&service, "owner@example.com");
    let result = service.update_application_status(
        &owner,
        &ApplicationId("app-missing".to_string()),
        ApplicationStatus::Applied,
    );
    match result {
        Err(HiringError::NotFound(message)) => assert_eq!(message, "Candidate not found"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn duplicate_candidate_email_is_a_conflict() {
    let (service, _) = build_service();
    candidate(&service, "Jane Doe", "jane@example.com");

    let result = service.create_candidate(CreateCandidateRequest {
        name: "Jane Again".to_string(),
        email: "jane@example.com".to_string(),
        avatar: None,
        profile: None,
    });
    assert!(matches!(result, Err(HiringError::Conflict(_))));
}

#[test]
fn candidate_email_move_checks_uniqueness() {
    let (service, _) = build_service();
    candidate(&service, "Jane Doe", "jane@example.com");
    let marcus = candidate(&service, "Marcus Webb", "marcus@example.com");

    let result = service.update_candidate(
        &marcus.id,
        UpdateCandidateRequest {
            name: None,
            email: Some("jane@example.com".to_string()),
            profile: None,
        },
    );
    assert!(matches!(result, Err(HiringError::Conflict(_))));
}

#[test]
fn listing_filters_candidates_by_application_status() {
    let (service, _) = build_service();
    let owner = employer(&service, "owner@example.com");
    let job = job(&service, &owner);

    let jane = candidate(&service, "Jane Doe", "jane@example.com");
    let marcus = candidate(&service, "Marcus Webb", "marcus@example.com");
    let jane_app = application(&service, &jane.id, &job.id);
    application(&service, &marcus.id, &job.id);

    service
        .update_application_status(&jane.id, &jane_app.id, ApplicationStatus::Offered)
        .expect("status update");

    let offered = service
        .list_candidates(Some(ApplicationStatus::Offered))
        .expect("listing");
    assert_eq!(offered.len(), 1);
    assert_eq!(offered[0].name, "Jane Doe");

    let everyone = service.list_candidates(None).expect("listing");
    assert_eq!(everyone.len(), 2);
}

#[test]
fn candidates_without_applications_are_hidden_from_default_listing() {
    let (service, _) = build_service();
    candidate(&service, "Jane Doe", "jane@example.com");

    assert!(service.list_candidates(None).expect("listing").is_empty());
    assert_eq!(service.list_all_candidates().expect("listing").len(), 1);
}

#[test]
fn pipeline_board_reflects_current_statuses() {
    let (service, _) = build_service();
    let owner = employer(&service, "owner@example.com");
    let job = job(&service, &owner);

    let jane = candidate(&service, "Jane Doe", "jane@example.com");
    let marcus = candidate(&service, "Marcus Webb", "marcus@example.com");
    let jane_app = application(&service, &jane.id, &job.id);
    application(&service, &marcus.id, &job.id);

    service
        .update_application_status(&jane.id, &jane_app.id, ApplicationStatus::Screening)
        .expect("status update");

    let board = service.pipeline_board(&job.id).expect("board");
    let screening = board.column(PipelineStage::Screening).expect("column");
    assert_eq!(screening.candidates.len(), 1);
    assert_eq!(screening.candidates[0].candidate_name, "Jane Doe");
    let applied = board.column(PipelineStage::Applied).expect("column");
    assert_eq!(applied.candidates.len(), 1);
}

#[test]
fn pipeline_board_requires_a_job() {
    let (service, _) = build_service();
    let result = service.pipeline_board(&crate::hiring::domain::JobId("job-missing".to_string()));
    assert!(matches!(result, Err(HiringError::NotFound(_))));
}

#[test]
fn candidates_for_job_scope_applications_to_that_job() {
    let (service, _) = build_service();
    let owner = employer(&service, "owner@example.com");
    let first_job = job(&service, &owner);
    let second_job = job(&service, &owner);

    let jane = candidate(&service, "Jane Doe", "jane@example.com");
    application(&service, &jane.id, &first_job.id);
    application(&service, &jane.id, &second_job.id);

    let views = service
        .candidates_for_job(&first_job.id)
        .expect("candidates for job");
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].applications.len(), 1);
    assert_eq!(views[0].applications[0].job.id, first_job.id);
}

#[test]
fn unknown_candidate_lookup_is_not_found() {
    let (service, _) = build_service();
    let result = service.candidate_view(&UserId("user-missing".to_string()));
    assert!(matches!(result, Err(HiringError::NotFound(_))));
}
