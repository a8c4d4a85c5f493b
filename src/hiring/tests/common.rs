use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::hiring::candidates::{ApplyRequest, CandidateProfileRequest, CreateCandidateRequest};
use crate::hiring::domain::{
    ApplicationId, InterviewType, Job, JobApplication, JobId, UserId, UserRole,
};
use crate::hiring::interviews::CreateInterviewRequest;
use crate::hiring::jobs::CreateJobRequest;
use crate::hiring::memory::InMemoryStore;
use crate::hiring::service::HiringService;
use crate::hiring::users::RegisterUserRequest;
use crate::hiring::views::CandidateView;

pub(super) fn build_service() -> (HiringService<InMemoryStore>, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let service = HiringService::new(store.clone());
    (service, store)
}

pub(super) fn employer(service: &HiringService<InMemoryStore>, email: &str) -> UserId {
    service
        .register_user(RegisterUserRequest {
            name: "Priya Raman".to_string(),
            email: email.to_string(),
            role: UserRole::Employer,
            avatar: None,
        })
        .expect("employer registers")
        .id
}

pub(super) fn job(service: &HiringService<InMemoryStore>, owner: &UserId) -> Job {
    service
        .create_job(CreateJobRequest {
            title: "Backend Engineer".to_string(),
            description: "Own the hiring APIs".to_string(),
            company: "Hireflow Labs".to_string(),
            location: "Remote".to_string(),
            user_id: owner.clone(),
            salary: Some(140_000),
            status: None,
            department: None,
            team: None,
            hiring_manager: None,
            job_overview: None,
            responsibilities: None,
        })
        .expect("job created")
}

pub(super) fn candidate(
    service: &HiringService<InMemoryStore>,
    name: &str,
    email: &str,
) -> CandidateView {
    service
        .create_candidate(CreateCandidateRequest {
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
            profile: Some(CandidateProfileRequest {
                skills: Some(vec!["Rust".to_string()]),
                location: Some("Remote".to_string()),
                bio: None,
            }),
        })
        .expect("candidate created")
}

pub(super) fn application(
    service: &HiringService<InMemoryStore>,
    candidate_id: &UserId,
    job_id: &JobId,
) -> JobApplication {
    service
        .apply_to_job(
            candidate_id,
            ApplyRequest {
                job_id: job_id.clone(),
                tags: Vec::new(),
            },
        )
        .expect("application created")
}

pub(super) fn interview_request(
    candidate_id: &UserId,
    application_id: Option<&ApplicationId>,
) -> CreateInterviewRequest {
    CreateInterviewRequest {
        candidate_id: candidate_id.clone(),
        interviewers: vec!["Priya Raman".to_string()],
        interview_type: InterviewType::Technical,
        scheduled_date: Utc::now() + Duration::days(3),
        job_application_id: application_id.cloned(),
        duration: Some(45),
        notes: None,
    }
}
