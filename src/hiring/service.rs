use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{ApplicationId, Interview, InterviewId, JobApplication, JobId, UserId};
use super::repository::{HiringStore, RepositoryError};
use super::views::{ApplicationLink, ApplicationView, InterviewView, JobSummary};

/// Facade composing every hiring operation over one storage backend.
///
/// The struct itself is thin; the operations live in per-concern impl blocks
/// (`candidates`, `jobs`, `interviews`, `users`, `dashboard`).
pub struct HiringService<S> {
    store: Arc<S>,
}

static USER_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static INTERVIEW_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_user_id() -> UserId {
    let id = USER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    UserId(format!("user-{id:06}"))
}

pub(crate) fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:06}"))
}

pub(crate) fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

pub(crate) fn next_interview_id() -> InterviewId {
    let id = INTERVIEW_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    InterviewId(format!("int-{id:06}"))
}

impl<S> HiringService<S>
where
    S: HiringStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Build an application view with its job summary and interviews attached.
    pub(crate) fn application_view(
        &self,
        application: &JobApplication,
    ) -> Result<ApplicationView, HiringError> {
        let job = self
            .store
            .fetch_job(&application.job_id)?
            .map(|job| JobSummary::from_job(&job))
            .unwrap_or(JobSummary {
                id: application.job_id.clone(),
                title: "Untitled Job".to_string(),
                company: "Unnamed Company".to_string(),
            });

        let interviews = self
            .store
            .list_interviews_for_application(&application.id)?
            .iter()
            .map(|interview| self.interview_view(interview))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApplicationView {
            id: application.id.clone(),
            job,
            status: application.status,
            tags: application.tags.clone(),
            created_at: application.created_at,
            interviews,
        })
    }

    /// Build the nested interview payload, resolving the application back to
    /// its job where one is linked.
    pub(crate) fn interview_view(&self, interview: &Interview) -> Result<InterviewView, HiringError> {
        Ok(InterviewView {
            id: interview.id.clone(),
            interview_type: interview.interview_type,
            date: interview.scheduled_date,
            status: interview.status,
            notes: interview.notes.clone(),
            interviewers: interview.interviewers.clone(),
            rating: interview.rating,
            job_application: self.application_link(interview)?,
        })
    }

    pub(crate) fn application_link(
        &self,
        interview: &Interview,
    ) -> Result<Option<ApplicationLink>, HiringError> {
        let Some(application_id) = interview.job_application_id.as_ref() else {
            return Ok(None);
        };

        let job = match self.store.fetch_application(application_id)? {
            Some(application) => self
                .store
                .fetch_job(&application.job_id)?
                .map(|job| JobSummary::from_job(&job)),
            None => None,
        };

        Ok(Some(ApplicationLink {
            id: application_id.clone(),
            job,
        }))
    }
}

/// Error raised by hiring operations. The router maps these onto HTTP
/// statuses: `NotFound` -> 404, `Invalid` -> 400, `Conflict` -> 409, and
/// repository failures -> 404/500.
#[derive(Debug, thiserror::Error)]
pub enum HiringError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl HiringError {
    pub(crate) fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    pub(crate) fn invalid(message: &str) -> Self {
        Self::Invalid(message.to_string())
    }

    pub(crate) fn conflict(message: &str) -> Self {
        Self::Conflict(message.to_string())
    }
}
