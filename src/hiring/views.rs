//! Response shapes returned by the HTTP surface.
//!
//! Views are assembled in the service layer so handlers stay thin; related
//! records (job, application, candidate summaries) are eagerly attached the
//! way the dashboard UI consumes them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{
    ApplicationId, ApplicationStatus, InterviewId, InterviewStatus, InterviewType, Job, JobId,
    JobStatus, Profile, User, UserId,
};

/// Trimmed user payload for embedding in other views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl UserSummary {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Trimmed job payload for embedding in application and interview views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub company: String,
}

impl JobSummary {
    pub fn from_job(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

impl ProfileView {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            skills: profile.skills.clone(),
            location: profile.location.clone(),
            bio: profile.bio.clone(),
        }
    }
}

/// Interview payload nested inside an application view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewView {
    pub id: InterviewId,
    pub interview_type: InterviewType,
    pub date: DateTime<Utc>,
    pub status: InterviewStatus,
    pub notes: Option<String>,
    pub interviewers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub job_application: Option<ApplicationLink>,
}

/// Back-reference from an interview to its application and job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationLink {
    pub id: ApplicationId,
    pub job: Option<JobSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationView {
    pub id: ApplicationId,
    pub job: JobSummary,
    pub status: ApplicationStatus,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub interviews: Vec<InterviewView>,
}

/// Candidate with profile and applications, the primary read shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileView>,
    pub applications: Vec<ApplicationView>,
}

/// Interview with its candidate and application context eagerly attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewDetailView {
    pub id: InterviewId,
    pub candidate: UserSummary,
    pub interview_type: InterviewType,
    pub status: InterviewStatus,
    pub scheduled_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub interviewers: Vec<String>,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub job_application: Option<ApplicationLink>,
}

/// Upcoming/completed split consumed by the candidate detail page.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateInterviewsView {
    pub upcoming_interviews: Vec<InterviewView>,
    pub completed_interviews: Vec<InterviewView>,
}

/// Paged listing wrapper for jobs.
#[derive(Debug, Clone, Serialize)]
pub struct JobPage {
    pub jobs: Vec<JobListEntry>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListEntry {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub department: String,
    pub status: JobStatus,
    pub application_count: usize,
    pub posted_by: Option<UserSummary>,
}

/// Paged listing wrapper for users.
#[derive(Debug, Clone, Serialize)]
pub struct UserPage {
    pub users: Vec<UserSummary>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Aggregates for the dashboard header cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub time_to_hire: i64,
    pub open_roles: usize,
    pub active_candidates: usize,
    pub offers_sent: OfferStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferStats {
    pub total: usize,
    pub accepted: usize,
    pub pending: usize,
}
