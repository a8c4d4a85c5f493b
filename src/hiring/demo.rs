//! Fixture data for the `demo` CLI command and `serve --seed`.

use chrono::{Duration, Utc};

use super::candidates::{ApplyRequest, CandidateProfileRequest, CreateCandidateRequest};
use super::domain::{ApplicationId, ApplicationStatus, InterviewType, JobId, UserId, UserRole};
use super::interviews::CreateInterviewRequest;
use super::jobs::CreateJobRequest;
use super::repository::HiringStore;
use super::service::{HiringError, HiringService};
use super::users::RegisterUserRequest;

/// Ids worth holding onto after seeding.
#[derive(Debug, Clone)]
pub struct SeededData {
    pub employer_id: UserId,
    pub job_id: JobId,
    pub candidate_ids: Vec<UserId>,
    pub application_ids: Vec<ApplicationId>,
}

/// Populate the store with one employer, one posting, and a small pipeline
/// spread across stages.
pub fn seed<S>(service: &HiringService<S>) -> Result<SeededData, HiringError>
where
    S: HiringStore + 'static,
{
    let employer = service.register_user(RegisterUserRequest {
        name: "Priya Raman".to_string(),
        email: "priya.raman@example.com".to_string(),
        role: UserRole::Employer,
        avatar: None,
    })?;

    let job = service.create_job(CreateJobRequest {
        title: "Backend Engineer".to_string(),
        description: "Own the services powering the hiring pipeline.".to_string(),
        company: "Hireflow Labs".to_string(),
        location: "Remote".to_string(),
        user_id: employer.id.clone(),
        salary: Some(140_000),
        status: None,
        department: Some("Engineering".to_string()),
        team: Some("Platform".to_string()),
        hiring_manager: Some("Priya Raman".to_string()),
        job_overview: Some(vec![
            "Design and run the application APIs".to_string(),
            "Keep the pipeline board honest".to_string(),
        ]),
        responsibilities: Some(vec![
            "Ship well-tested Rust services".to_string(),
            "Review schema changes".to_string(),
        ]),
    })?;

    let seed_candidates = [
        ("Jane Doe", "jane.doe@example.com", ApplicationStatus::Applied),
        (
            "Marcus Webb",
            "marcus.webb@example.com",
            ApplicationStatus::Screening,
        ),
        (
            "Aline Costa",
            "aline.costa@example.com",
            ApplicationStatus::Interviewed,
        ),
        (
            "Tomas Novak",
            "tomas.novak@example.com",
            ApplicationStatus::Offered,
        ),
    ];

    let mut candidate_ids = Vec::new();
    let mut application_ids = Vec::new();

    for (name, email, status) in seed_candidates {
        let candidate = service.create_candidate(CreateCandidateRequest {
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
            profile: Some(CandidateProfileRequest {
                skills: Some(vec!["Rust".to_string(), "PostgreSQL".to_string()]),
                location: Some("Remote".to_string()),
                bio: None,
            }),
        })?;

        let application = service.apply_to_job(
            &candidate.id,
            ApplyRequest {
                job_id: job.id.clone(),
                tags: vec!["inbound".to_string()],
            },
        )?;

        if status != ApplicationStatus::Applied {
            service.update_application_status(&candidate.id, &application.id, status)?;
        }

        candidate_ids.push(candidate.id);
        application_ids.push(application.id);
    }

    // One scheduled conversation so the interviews listing is not empty.
    service.create_interview(CreateInterviewRequest {
        candidate_id: candidate_ids[2].clone(),
        interviewers: vec!["Priya Raman".to_string(), "Sam Oduya".to_string()],
        interview_type: InterviewType::Technical,
        scheduled_date: Utc::now() + Duration::days(2),
        job_application_id: Some(application_ids[2].clone()),
        duration: Some(60),
        notes: Some("Systems design deep dive".to_string()),
    })?;

    Ok(SeededData {
        employer_id: employer.id,
        job_id: job.id,
        candidate_ids,
        application_ids,
    })
}
