//! Candidate records, their applications, and pipeline status updates.

use chrono::Utc;
use serde::Deserialize;

use super::domain::{
    ApplicationId, ApplicationStatus, InterviewStatus, JobApplication, JobId, Profile, User,
    UserId, UserRole,
};
use super::pipeline::{self, PipelineBoard};
use super::repository::HiringStore;
use super::service::{next_application_id, next_user_id, HiringError, HiringService};
use super::views::{CandidateInterviewsView, CandidateView, ProfileView};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCandidateRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub profile: Option<CandidateProfileRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateProfileRequest {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCandidateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile: Option<CandidateProfileRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    pub job_id: JobId,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl<S> HiringService<S>
where
    S: HiringStore + 'static,
{
    /// Create a candidate, optionally with an initial profile. Duplicate
    /// email is a conflict.
    pub fn create_candidate(
        &self,
        request: CreateCandidateRequest,
    ) -> Result<CandidateView, HiringError> {
        if self.store().fetch_user_by_email(&request.email)?.is_some() {
            return Err(HiringError::conflict(
                "Candidate with this email already exists",
            ));
        }

        let now = Utc::now();
        let candidate = User {
            id: next_user_id(),
            initials: User::initials_for(&request.name),
            name: request.name,
            email: request.email,
            role: UserRole::Candidate,
            avatar: request.avatar,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let candidate = self.store().insert_user(candidate)?;

        if let Some(profile) = request.profile {
            self.store().upsert_profile(Profile {
                user_id: candidate.id.clone(),
                bio: profile.bio,
                location: profile.location,
                skills: profile.skills.unwrap_or_default(),
                education: Vec::new(),
                experience: Vec::new(),
            })?;
        }

        self.candidate_view(&candidate.id)
    }

    /// Partial update of name/email/profile. Email moves are checked against
    /// the unique constraint before any write.
    pub fn update_candidate(
        &self,
        id: &UserId,
        request: UpdateCandidateRequest,
    ) -> Result<CandidateView, HiringError> {
        let mut candidate = self.candidate_record(id)?;

        if let Some(email) = &request.email {
            if email != &candidate.email && self.store().fetch_user_by_email(email)?.is_some() {
                return Err(HiringError::conflict("Email already in use"));
            }
        }

        if let Some(name) = request.name {
            candidate.initials = User::initials_for(&name);
            candidate.name = name;
        }
        if let Some(email) = request.email {
            candidate.email = email;
        }
        candidate.updated_at = Utc::now();
        self.store().update_user(candidate.clone())?;

        if let Some(patch) = request.profile {
            let existing = self
                .store()
                .fetch_profile(id)?
                .unwrap_or(Profile {
                    user_id: id.clone(),
                    ..Profile::default()
                });
            self.store().upsert_profile(Profile {
                user_id: id.clone(),
                bio: patch.bio.or(existing.bio),
                location: patch.location.or(existing.location),
                skills: patch.skills.unwrap_or(existing.skills),
                education: existing.education,
                experience: existing.experience,
            })?;
        }

        self.candidate_view(id)
    }

    /// Candidate apply path: records a new application in `APPLIED`.
    /// Duplicate applications to the same job are deliberately not prevented.
    pub fn apply_to_job(
        &self,
        candidate_id: &UserId,
        request: ApplyRequest,
    ) -> Result<JobApplication, HiringError> {
        let candidate = self.candidate_record(candidate_id)?;
        self.store()
            .fetch_job(&request.job_id)?
            .ok_or_else(|| HiringError::not_found("Job not found"))?;

        let now = Utc::now();
        let application = JobApplication {
            id: next_application_id(),
            job_id: request.job_id,
            user_id: candidate.id,
            status: ApplicationStatus::Applied,
            tags: request.tags,
            created_at: now,
            updated_at: now,
        };

        Ok(self.store().insert_application(application)?)
    }

    /// Overwrite an application's status.
    ///
    /// The application must exist and belong to the candidate; beyond that
    /// the transition table is permissive, so any status may replace any
    /// other, including regressions like `OFFERED -> APPLIED`.
    pub fn update_application_status(
        &self,
        candidate_id: &UserId,
        application_id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<CandidateView, HiringError> {
        let candidate = self.candidate_record(candidate_id)?;

        let mut application = self
            .store()
            .fetch_application(application_id)?
            .filter(|application| application.user_id == candidate.id)
            .ok_or_else(|| HiringError::not_found("Application not found"))?;

        if !application.status.allows_transition_to(status) {
            return Err(HiringError::invalid("Status transition not permitted"));
        }

        application.status = status;
        application.updated_at = Utc::now();
        self.store().update_application(application)?;

        self.candidate_view(candidate_id)
    }

    pub fn candidate_view(&self, id: &UserId) -> Result<CandidateView, HiringError> {
        let candidate = self.candidate_record(id)?;
        self.assemble_candidate(&candidate, None)
    }

    /// Candidates holding at least one application, optionally filtered by
    /// application status.
    pub fn list_candidates(
        &self,
        status_filter: Option<ApplicationStatus>,
    ) -> Result<Vec<CandidateView>, HiringError> {
        let mut views = Vec::new();
        for candidate in self.store().list_users_by_role(UserRole::Candidate)? {
            let view = self.assemble_candidate(&candidate, None)?;
            let matches = match status_filter {
                Some(status) => view
                    .applications
                    .iter()
                    .any(|application| application.status == status),
                None => !view.applications.is_empty(),
            };
            if matches {
                views.push(view);
            }
        }
        Ok(views)
    }

    /// Every candidate, applications or not.
    pub fn list_all_candidates(&self) -> Result<Vec<CandidateView>, HiringError> {
        self.store()
            .list_users_by_role(UserRole::Candidate)?
            .iter()
            .map(|candidate| self.assemble_candidate(candidate, None))
            .collect()
    }

    /// Candidates for one job, applications filtered to that job. Feeds the
    /// pipeline board.
    pub fn candidates_for_job(&self, job_id: &JobId) -> Result<Vec<CandidateView>, HiringError> {
        let mut views = Vec::new();
        for candidate in self.store().list_users_by_role(UserRole::Candidate)? {
            let view = self.assemble_candidate(&candidate, Some(job_id))?;
            if !view.applications.is_empty() {
                views.push(view);
            }
        }
        Ok(views)
    }

    /// Kanban board for one job: a stateless projection of current statuses.
    pub fn pipeline_board(&self, job_id: &JobId) -> Result<PipelineBoard, HiringError> {
        self.store()
            .fetch_job(job_id)?
            .ok_or_else(|| HiringError::not_found("Job not found"))?;

        let applications = self
            .store()
            .list_applications_for_job(job_id)?
            .into_iter()
            .map(|application| {
                let candidate = self.store().fetch_user(&application.user_id)?;
                Ok((application, candidate))
            })
            .collect::<Result<Vec<_>, HiringError>>()?;

        Ok(pipeline::project_board(&applications))
    }

    pub fn candidate_applications(
        &self,
        id: &UserId,
    ) -> Result<Vec<super::views::ApplicationView>, HiringError> {
        Ok(self.candidate_view(id)?.applications)
    }

    /// Upcoming/completed interview split for the candidate detail page.
    /// Cancelled and rescheduled interviews fall out of both lists.
    pub fn candidate_interviews(
        &self,
        id: &UserId,
    ) -> Result<CandidateInterviewsView, HiringError> {
        let candidate = self.candidate_record(id)?;
        let interviews = self.store().list_interviews_for_candidate(&candidate.id)?;

        let mut upcoming = Vec::new();
        let mut completed = Vec::new();
        for interview in &interviews {
            match interview.status {
                InterviewStatus::Upcoming => upcoming.push(self.interview_view(interview)?),
                InterviewStatus::Completed => completed.push(self.interview_view(interview)?),
                InterviewStatus::Cancelled | InterviewStatus::Rescheduled => {}
            }
        }

        Ok(CandidateInterviewsView {
            upcoming_interviews: upcoming,
            completed_interviews: completed,
        })
    }

    pub(crate) fn candidate_record(&self, id: &UserId) -> Result<User, HiringError> {
        self.store()
            .fetch_user(id)?
            .filter(|user| user.role == UserRole::Candidate)
            .ok_or_else(|| HiringError::not_found("Candidate not found"))
    }

    fn assemble_candidate(
        &self,
        candidate: &User,
        job_filter: Option<&JobId>,
    ) -> Result<CandidateView, HiringError> {
        let profile = self
            .store()
            .fetch_profile(&candidate.id)?
            .map(|profile| ProfileView::from_profile(&profile));

        let applications = self
            .store()
            .list_applications_for_user(&candidate.id)?
            .iter()
            .filter(|application| {
                job_filter
                    .map(|job_id| &application.job_id == job_id)
                    .unwrap_or(true)
            })
            .map(|application| self.application_view(application))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CandidateView {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            profile,
            applications,
        })
    }
}
