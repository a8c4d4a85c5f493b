use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for user records (candidates and employers alike).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for job applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier wrapper for scheduled interviews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterviewId(pub String);

/// Role discriminant on a user record. Candidate and employer lookups filter
/// on this field rather than a separate table per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Candidate,
    Employer,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Candidate => "CANDIDATE",
            UserRole::Employer => "EMPLOYER",
        }
    }
}

/// Identity record for anyone in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub initials: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// First two characters of the display name, uppercased.
    pub fn initials_for(name: &str) -> String {
        name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// 1:1 companion record to a user holding free-form career data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Lifecycle of a job posting. Transitions are free-form; any status may be
/// written over any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Open,
    Closed,
    InProgress,
    Filled,
    Cancelled,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Open => "OPEN",
            JobStatus::Closed => "CLOSED",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Filled => "FILLED",
            JobStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Open
    }
}

/// A posting owned by an employer user.
///
/// `job_overview` and `responsibilities` are never null: blank entries are
/// stripped before persistence and an absent list normalizes to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<u32>,
    pub department: String,
    pub team: String,
    pub hiring_manager: String,
    pub status: JobStatus,
    pub job_overview: Vec<String>,
    pub responsibilities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Canonical status of a candidate's application to one job.
///
/// This is the single authority for pipeline position; the Kanban stage is a
/// pure projection of it (see [`crate::hiring::pipeline::PipelineStage`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Screening,
    Interviewed,
    Assessment,
    Offered,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::Screening => "SCREENING",
            ApplicationStatus::Interviewed => "INTERVIEWED",
            ApplicationStatus::Assessment => "ASSESSMENT",
            ApplicationStatus::Offered => "OFFERED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    pub const fn ordered() -> [ApplicationStatus; 6] {
        [
            ApplicationStatus::Applied,
            ApplicationStatus::Screening,
            ApplicationStatus::Interviewed,
            ApplicationStatus::Assessment,
            ApplicationStatus::Offered,
            ApplicationStatus::Rejected,
        ]
    }

    /// The transition table is explicit but fully permissive: recruiters may
    /// move an application to any stage, including backwards
    /// (`OFFERED -> APPLIED` is accepted).
    pub const fn allows_transition_to(self, _next: ApplicationStatus) -> bool {
        true
    }
}

/// Link between one candidate and one job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub user_id: UserId,
    pub status: ApplicationStatus,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewType {
    Technical,
    HrScreening,
    FinalInterview,
    PortfolioReview,
}

impl InterviewType {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewType::Technical => "TECHNICAL",
            InterviewType::HrScreening => "HR_SCREENING",
            InterviewType::FinalInterview => "FINAL_INTERVIEW",
            InterviewType::PortfolioReview => "PORTFOLIO_REVIEW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    Upcoming,
    Completed,
    Cancelled,
    Rescheduled,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewStatus::Upcoming => "UPCOMING",
            InterviewStatus::Completed => "COMPLETED",
            InterviewStatus::Cancelled => "CANCELLED",
            InterviewStatus::Rescheduled => "RESCHEDULED",
        }
    }
}

/// A scheduled conversation with a candidate, optionally tied to one of that
/// candidate's applications.
///
/// `interviewers` holds plain display names, not references to user records.
/// That is a deliberate modeling choice carried over from the product: the
/// list is a name tag, not an ownership relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub candidate_id: UserId,
    pub job_application_id: Option<ApplicationId>,
    pub interview_type: InterviewType,
    pub status: InterviewStatus,
    pub scheduled_date: DateTime<Utc>,
    pub duration: Option<u32>,
    pub interviewers: Vec<String>,
    pub notes: Option<String>,
    pub rating: Option<f32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inclusive bounds accepted by the interview rating endpoint.
pub const RATING_MIN: f32 = 0.0;
pub const RATING_MAX: f32 = 5.0;

/// File metadata attached to a job posting. Purely descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDocument {
    pub job_id: JobId,
    pub name: String,
    pub file_type: String,
    pub file_url: String,
    pub uploaded_by: String,
    pub description: Option<String>,
}

/// Strip blank entries from a caller-supplied string list, preserving order.
pub fn normalize_string_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
