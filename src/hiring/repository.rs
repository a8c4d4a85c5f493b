//! Storage traits for the hiring domain.
//!
//! The real database lives behind these seams so services and routers can be
//! exercised against the in-memory implementation in [`super::memory`].

use super::domain::{
    ApplicationDocument, ApplicationId, Interview, InterviewId, Job, JobApplication, JobId,
    Profile, User, UserId, UserRole,
};

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

pub trait UserStore: Send + Sync {
    fn insert_user(&self, user: User) -> Result<User, RepositoryError>;
    fn update_user(&self, user: User) -> Result<(), RepositoryError>;
    fn fetch_user(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Page of users plus the total count, ordered by id.
    fn list_users(&self, skip: usize, take: usize) -> Result<(Vec<User>, usize), RepositoryError>;
    fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>, RepositoryError>;
}

pub trait ProfileStore: Send + Sync {
    fn upsert_profile(&self, profile: Profile) -> Result<Profile, RepositoryError>;
    fn fetch_profile(&self, user_id: &UserId) -> Result<Option<Profile>, RepositoryError>;
}

pub trait JobStore: Send + Sync {
    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError>;
    fn update_job(&self, job: Job) -> Result<(), RepositoryError>;
    fn fetch_job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    /// Page of jobs plus the total count, ordered by id.
    fn list_jobs(&self, skip: usize, take: usize) -> Result<(Vec<Job>, usize), RepositoryError>;
    fn delete_job(&self, id: &JobId) -> Result<(), RepositoryError>;
    fn count_jobs_with_status(
        &self,
        status: super::domain::JobStatus,
    ) -> Result<usize, RepositoryError>;
}

pub trait ApplicationStore: Send + Sync {
    fn insert_application(
        &self,
        application: JobApplication,
    ) -> Result<JobApplication, RepositoryError>;
    fn update_application(&self, application: JobApplication) -> Result<(), RepositoryError>;
    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<JobApplication>, RepositoryError>;
    fn list_applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<JobApplication>, RepositoryError>;
    fn list_applications_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<JobApplication>, RepositoryError>;
    fn list_applications(&self) -> Result<Vec<JobApplication>, RepositoryError>;
    fn delete_applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationId>, RepositoryError>;
}

pub trait InterviewStore: Send + Sync {
    fn insert_interview(&self, interview: Interview) -> Result<Interview, RepositoryError>;
    fn update_interview(&self, interview: Interview) -> Result<(), RepositoryError>;
    fn fetch_interview(&self, id: &InterviewId) -> Result<Option<Interview>, RepositoryError>;
    /// All interviews, most recently scheduled first.
    fn list_interviews(&self) -> Result<Vec<Interview>, RepositoryError>;
    fn list_interviews_for_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Interview>, RepositoryError>;
    fn list_interviews_for_candidate(
        &self,
        candidate_id: &UserId,
    ) -> Result<Vec<Interview>, RepositoryError>;
    fn delete_interview(&self, id: &InterviewId) -> Result<Interview, RepositoryError>;
    fn delete_interviews_for_applications(
        &self,
        application_ids: &[ApplicationId],
    ) -> Result<(), RepositoryError>;
}

pub trait DocumentStore: Send + Sync {
    fn insert_document(
        &self,
        document: ApplicationDocument,
    ) -> Result<ApplicationDocument, RepositoryError>;
    fn list_documents_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationDocument>, RepositoryError>;
}

/// Everything the hiring service needs from storage, in one bound.
pub trait HiringStore:
    UserStore + ProfileStore + JobStore + ApplicationStore + InterviewStore + DocumentStore
{
}

impl<S> HiringStore for S where
    S: UserStore + ProfileStore + JobStore + ApplicationStore + InterviewStore + DocumentStore
{
}
