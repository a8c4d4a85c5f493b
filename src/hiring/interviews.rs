//! Interview scheduling, updates, and the rating-completes-interview rule.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::domain::{
    ApplicationId, Interview, InterviewId, InterviewStatus, InterviewType, UserId, RATING_MAX,
    RATING_MIN,
};
use super::repository::HiringStore;
use super::service::{next_interview_id, HiringError, HiringService};
use super::views::{InterviewDetailView, UserSummary};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInterviewRequest {
    pub candidate_id: UserId,
    pub interviewers: Vec<String>,
    pub interview_type: InterviewType,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub job_application_id: Option<ApplicationId>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInterviewRequest {
    #[serde(default)]
    pub interview_type: Option<InterviewType>,
    #[serde(default)]
    pub status: Option<InterviewStatus>,
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub interviewers: Option<Vec<String>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl<S> HiringService<S>
where
    S: HiringStore + 'static,
{
    /// Schedule an interview. Validation is fail-fast in a fixed order:
    /// interviewer list, then candidate, then application ownership. Nothing
    /// is written until all three pass.
    pub fn create_interview(
        &self,
        request: CreateInterviewRequest,
    ) -> Result<Interview, HiringError> {
        if request.interviewers.is_empty() {
            return Err(HiringError::invalid(
                "At least one interviewer is required",
            ));
        }

        let candidate = self.candidate_record(&request.candidate_id)?;

        if let Some(application_id) = &request.job_application_id {
            let owned = self
                .store()
                .fetch_application(application_id)?
                .map(|application| application.user_id == candidate.id)
                .unwrap_or(false);
            if !owned {
                return Err(HiringError::not_found(
                    "Job Application not found or does not belong to the candidate",
                ));
            }
        }

        let now = Utc::now();
        let interview = Interview {
            id: next_interview_id(),
            candidate_id: candidate.id,
            job_application_id: request.job_application_id,
            interview_type: request.interview_type,
            status: InterviewStatus::Upcoming,
            scheduled_date: request.scheduled_date,
            duration: request.duration,
            // Plain display names by design; never resolved to user records.
            interviewers: request.interviewers,
            notes: request.notes,
            rating: None,
            created_at: now,
            updated_at: now,
        };

        Ok(self.store().insert_interview(interview)?)
    }

    /// Record an evaluator score.
    ///
    /// The range check runs before any lookup or write. A successful rating
    /// always forces `COMPLETED`, whatever the interview's prior status,
    /// `CANCELLED` included.
    pub fn rate_interview(
        &self,
        id: &InterviewId,
        rating: f32,
    ) -> Result<InterviewDetailView, HiringError> {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(HiringError::invalid("Rating must be between 0 and 5"));
        }

        let mut interview = self.interview_record(id)?;
        interview.rating = Some(rating);
        interview.status = InterviewStatus::Completed;
        interview.updated_at = Utc::now();
        self.store().update_interview(interview.clone())?;

        self.interview_detail(&interview)
    }

    /// Generic partial update with no field-specific validation.
    pub fn update_interview(
        &self,
        id: &InterviewId,
        request: UpdateInterviewRequest,
    ) -> Result<InterviewDetailView, HiringError> {
        let mut interview = self.interview_record(id)?;

        if let Some(interview_type) = request.interview_type {
            interview.interview_type = interview_type;
        }
        if let Some(status) = request.status {
            interview.status = status;
        }
        if let Some(scheduled_date) = request.scheduled_date {
            interview.scheduled_date = scheduled_date;
        }
        if let Some(duration) = request.duration {
            interview.duration = Some(duration);
        }
        if let Some(interviewers) = request.interviewers {
            interview.interviewers = interviewers;
        }
        if let Some(notes) = request.notes {
            interview.notes = Some(notes);
        }
        interview.updated_at = Utc::now();

        self.store().update_interview(interview.clone())?;
        self.interview_detail(&interview)
    }

    pub fn delete_interview(&self, id: &InterviewId) -> Result<Interview, HiringError> {
        match self.store().delete_interview(id) {
            Ok(interview) => Ok(interview),
            Err(super::repository::RepositoryError::NotFound) => {
                Err(HiringError::not_found("Interview not found"))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn get_interview(&self, id: &InterviewId) -> Result<InterviewDetailView, HiringError> {
        let interview = self.interview_record(id)?;
        self.interview_detail(&interview)
    }

    /// All interviews with candidate and application context, most recently
    /// scheduled first.
    pub fn list_interviews(&self) -> Result<Vec<InterviewDetailView>, HiringError> {
        self.store()
            .list_interviews()?
            .iter()
            .map(|interview| self.interview_detail(interview))
            .collect()
    }

    fn interview_record(&self, id: &InterviewId) -> Result<Interview, HiringError> {
        self.store()
            .fetch_interview(id)?
            .ok_or_else(|| HiringError::not_found("Interview not found"))
    }

    fn interview_detail(&self, interview: &Interview) -> Result<InterviewDetailView, HiringError> {
        let candidate = self
            .store()
            .fetch_user(&interview.candidate_id)?
            .map(|user| UserSummary::from_user(&user))
            .ok_or_else(|| HiringError::not_found("Candidate not found"))?;

        Ok(InterviewDetailView {
            id: interview.id.clone(),
            candidate,
            interview_type: interview.interview_type,
            status: interview.status,
            scheduled_date: interview.scheduled_date,
            duration: interview.duration,
            interviewers: interview.interviewers.clone(),
            notes: interview.notes.clone(),
            rating: interview.rating,
            job_application: self.application_link(interview)?,
        })
    }
}
