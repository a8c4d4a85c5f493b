use super::common::*;
use crate::hiring::domain::{InterviewStatus, UserId};
use crate::hiring::interviews::UpdateInterviewRequest;
use crate::hiring::repository::InterviewStore;
use crate::hiring::service::HiringError;

#[test]
fn creation_requires_at_least_one_interviewer() {
    let (service, store) = build_service();
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");

    let mut request = interview_request(&candidate.id, None);
    request.interviewers.clear();

    match service.create_interview(request) {
        Err(HiringError::Invalid(message)) => {
            assert_eq!(message, "At least one interviewer is required");
        }
        other => panic!("expected invalid, got {other:?}"),
    }
    assert!(store.list_interviews().expect("list").is_empty());
}

#[test]
fn creation_requires_an_existing_candidate() {
    let (service, store) = build_service();
    let request = interview_request(&UserId("user-missing".to_string()), None);

    match service.create_interview(request) {
        Err(HiringError::NotFound(message)) => assert_eq!(message, "Candidate not found"),
        other => panic!("expected not found, got {other:?}"),
    }
    assert!(store.list_interviews().expect("list").is_empty());
}

#[test]
fn creation_rejects_an_application_owned_by_another_candidate() {
    let (service, store) = build_service();
    let owner = employer(&service, "owner@example.com");
    let job = job(&service, &owner);
    let jane = candidate(&service, "Jane Doe", "jane@example.com");
    let marcus = candidate(&service, "Marcus Webb", "marcus@example.com");
    let janes_application = application(&service, &jane.id, &job.id);

    let request = interview_request(&marcus.id, Some(&janes_application.id));
    match service.create_interview(request) {
        Err(HiringError::NotFound(message)) => {
            assert_eq!(
                message,
                "Job Application not found or does not belong to the candidate"
            );
        }
        other => panic!("expected not found, got {other:?}"),
    }
    assert!(store.list_interviews().expect("list").is_empty());
}

#[test]
fn creation_validates_interviewers_before_candidate() {
    let (service, _) = build_service();
    let mut request = interview_request(&UserId("user-missing".to_string()), None);
    request.interviewers.clear();

    // Empty interviewer list wins over the unknown candidate.
    assert!(matches!(
        service.create_interview(request),
        Err(HiringError::Invalid(_))
    ));
}

#[test]
fn creation_without_application_link_is_permitted() {
    let (service, _) = build_service();
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");

    let interview = service
        .create_interview(interview_request(&candidate.id, None))
        .expect("interview created");
    assert_eq!(interview.status, InterviewStatus::Upcoming);
    assert!(interview.job_application_id.is_none());
    assert!(interview.rating.is_none());
}

#[test]
fn out_of_range_rating_is_rejected_without_a_write() {
    let (service, store) = build_service();
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");
    let interview = service
        .create_interview(interview_request(&candidate.id, None))
        .expect("interview created");

    for rating in [-0.1_f32, 5.1, 42.0] {
        match service.rate_interview(&interview.id, rating) {
            Err(HiringError::Invalid(message)) => {
                assert_eq!(message, "Rating must be between 0 and 5");
            }
            other => panic!("expected invalid for {rating}, got {other:?}"),
        }
    }

    let stored = store
        .fetch_interview(&interview.id)
        .expect("fetch")
        .expect("present");
    assert_eq!(stored.status, InterviewStatus::Upcoming);
    assert!(stored.rating.is_none());
}

#[test]
fn rating_always_completes_the_interview() {
    let (service, store) = build_service();
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");
    let interview = service
        .create_interview(interview_request(&candidate.id, None))
        .expect("interview created");

    let view = service
        .rate_interview(&interview.id, 4.0)
        .expect("rating succeeds");
    assert_eq!(view.rating, Some(4.0));
    assert_eq!(view.status, InterviewStatus::Completed);

    let stored = store
        .fetch_interview(&interview.id)
        .expect("fetch")
        .expect("present");
    assert_eq!(stored.status, InterviewStatus::Completed);
}

#[test]
fn rating_completes_even_a_cancelled_interview() {
    let (service, _) = build_service();
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");
    let interview = service
        .create_interview(interview_request(&candidate.id, None))
        .expect("interview created");

    service
        .update_interview(
            &interview.id,
            UpdateInterviewRequest {
                status: Some(InterviewStatus::Cancelled),
                ..UpdateInterviewRequest::default()
            },
        )
        .expect("cancel");

    let view = service
        .rate_interview(&interview.id, 2.5)
        .expect("rating succeeds");
    assert_eq!(view.status, InterviewStatus::Completed);
    assert_eq!(view.rating, Some(2.5));
}

#[test]
fn boundary_ratings_are_accepted() {
    let (service, _) = build_service();
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");

    for rating in [0.0_f32, 5.0] {
        let interview = service
            .create_interview(interview_request(&candidate.id, None))
            .expect("interview created");
        let view = service
            .rate_interview(&interview.id, rating)
            .expect("boundary rating accepted");
        assert_eq!(view.rating, Some(rating));
    }
}

#[test]
fn rating_a_missing_interview_is_not_found() {
    let (service, _) = build_service();
    let result = service.rate_interview(
        &crate::hiring::domain::InterviewId("int-missing".to_string()),
        3.0,
    );
    match result {
        Err(HiringError::NotFound(message)) => assert_eq!(message, "Interview not found"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn rating_view_attaches_candidate_and_application_context() {
    let (service, _) = build_service();
    let owner = employer(&service, "owner@example.com");
    let job = job(&service, &owner);
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");
    let application = application(&service, &candidate.id, &job.id);

    let interview = service
        .create_interview(interview_request(&candidate.id, Some(&application.id)))
        .expect("interview created");
    let view = service
        .rate_interview(&interview.id, 4.5)
        .expect("rating succeeds");

    assert_eq!(view.candidate.name, "Jane Doe");
    let link = view.job_application.expect("application link");
    assert_eq!(link.id, application.id);
    assert_eq!(link.job.expect("job summary").title, "Backend Engineer");
}

#[test]
fn deleting_an_interview_removes_it() {
    let (service, store) = build_service();
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");
    let interview = service
        .create_interview(interview_request(&candidate.id, None))
        .expect("interview created");

    service
        .delete_interview(&interview.id)
        .expect("delete succeeds");
    assert!(store
        .fetch_interview(&interview.id)
        .expect("fetch")
        .is_none());

    assert!(matches!(
        service.delete_interview(&interview.id),
        Err(HiringError::NotFound(_))
    ));
}

#[test]
fn candidate_interviews_split_upcoming_and_completed() {
    let (service, _) = build_service();
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");

    let first = service
        .create_interview(interview_request(&candidate.id, None))
        .expect("first interview");
    service
        .create_interview(interview_request(&candidate.id, None))
        .expect("second interview");
    service.rate_interview(&first.id, 4.0).expect("rating");

    let split = service
        .candidate_interviews(&candidate.id)
        .expect("interviews split");
    assert_eq!(split.upcoming_interviews.len(), 1);
    assert_eq!(split.completed_interviews.len(), 1);
    assert_eq!(split.completed_interviews[0].id, first.id);
}

#[test]
fn ownership_check_is_not_repeated_on_generic_update() {
    let (service, _) = build_service();
    let owner = employer(&service, "owner@example.com");
    let job = job(&service, &owner);
    let candidate = candidate(&service, "Jane Doe", "jane@example.com");
    let application = application(&service, &candidate.id, &job.id);

    let interview = service
        .create_interview(interview_request(&candidate.id, Some(&application.id)))
        .expect("interview created");

    // The generic PATCH path does not re-validate application linkage.
    let view = service
        .update_interview(
            &interview.id,
            UpdateInterviewRequest {
                notes: Some("follow up on systems round".to_string()),
                ..UpdateInterviewRequest::default()
            },
        )
        .expect("update succeeds");
    assert_eq!(view.notes.as_deref(), Some("follow up on systems round"));
}
