//! Job posting CRUD and attached document metadata.

use chrono::Utc;
use serde::Deserialize;

use super::domain::{
    normalize_string_list, ApplicationDocument, Job, JobId, JobStatus, UserId,
};
use super::repository::HiringStore;
use super::service::{next_job_id, HiringError, HiringService};
use super::views::{JobListEntry, JobPage, UserSummary};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub user_id: UserId,
    #[serde(default)]
    pub salary: Option<u32>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub hiring_manager: Option<String>,
    #[serde(default)]
    pub job_overview: Option<Vec<String>>,
    #[serde(default)]
    pub responsibilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJobRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<u32>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub hiring_manager: Option<String>,
    #[serde(default)]
    pub job_overview: Option<Vec<String>>,
    #[serde(default)]
    pub responsibilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachDocumentRequest {
    pub name: String,
    pub file_type: String,
    pub file_url: String,
    pub uploaded_by: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl<S> HiringService<S>
where
    S: HiringStore + 'static,
{
    pub fn create_job(&self, request: CreateJobRequest) -> Result<Job, HiringError> {
        if request.title.trim().is_empty() || request.description.trim().is_empty() {
            return Err(HiringError::invalid("Title and description are required"));
        }

        let now = Utc::now();
        let job = Job {
            id: next_job_id(),
            user_id: request.user_id,
            title: request.title,
            description: request.description,
            company: request.company,
            location: request.location,
            salary: request.salary,
            department: request.department.unwrap_or_else(|| "Unspecified".to_string()),
            team: request.team.unwrap_or_else(|| "General".to_string()),
            hiring_manager: request
                .hiring_manager
                .unwrap_or_else(|| "Unassigned".to_string()),
            status: request.status.unwrap_or_default(),
            job_overview: normalize_string_list(request.job_overview.unwrap_or_default()),
            responsibilities: normalize_string_list(request.responsibilities.unwrap_or_default()),
            created_at: now,
            updated_at: now,
        };

        Ok(self.store().insert_job(job)?)
    }

    /// Full-record update. Title and description stay required; absent
    /// optional fields fall back to the posting's defaults rather than
    /// clearing, and the list fields re-normalize on every write.
    pub fn update_job(&self, id: &JobId, request: UpdateJobRequest) -> Result<Job, HiringError> {
        let existing = self.job_record(id)?;

        let title = request.title.unwrap_or(existing.title);
        let description = request.description.unwrap_or(existing.description);
        if title.trim().is_empty() || description.trim().is_empty() {
            return Err(HiringError::invalid("Title and description are required"));
        }

        let job = Job {
            id: existing.id,
            user_id: existing.user_id,
            title,
            description,
            company: request.company.unwrap_or(existing.company),
            location: request.location.unwrap_or(existing.location),
            salary: request.salary.or(existing.salary),
            department: request.department.unwrap_or(existing.department),
            team: request.team.unwrap_or(existing.team),
            hiring_manager: request.hiring_manager.unwrap_or(existing.hiring_manager),
            status: request.status.unwrap_or(existing.status),
            job_overview: request
                .job_overview
                .map(normalize_string_list)
                .unwrap_or(existing.job_overview),
            responsibilities: request
                .responsibilities
                .map(normalize_string_list)
                .unwrap_or(existing.responsibilities),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.store().update_job(job.clone())?;
        Ok(job)
    }

    /// Delete a posting. Applications for the job and their interviews go
    /// with it, mirroring the cascading delete in the schema.
    pub fn delete_job(&self, id: &JobId) -> Result<(), HiringError> {
        self.job_record(id)?;
        let removed = self.store().delete_applications_for_job(id)?;
        self.store().delete_interviews_for_applications(&removed)?;
        self.store().delete_job(id)?;
        Ok(())
    }

    pub fn get_job(&self, id: &JobId) -> Result<Job, HiringError> {
        self.job_record(id)
    }

    pub fn list_jobs(&self, page: usize, limit: usize) -> Result<JobPage, HiringError> {
        let page = page.max(1);
        let limit = limit.max(1);
        let (jobs, total) = self.store().list_jobs((page - 1) * limit, limit)?;

        let mut entries = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let application_count = self.store().list_applications_for_job(&job.id)?.len();
            let posted_by = self
                .store()
                .fetch_user(&job.user_id)?
                .map(|user| UserSummary::from_user(&user));
            entries.push(JobListEntry {
                id: job.id.clone(),
                title: job.title.clone(),
                company: job.company.clone(),
                location: job.location.clone(),
                department: job.department.clone(),
                status: job.status,
                application_count,
                posted_by,
            });
        }

        Ok(JobPage {
            jobs: entries,
            total,
            page,
            total_pages: total.div_ceil(limit),
        })
    }

    pub fn attach_document(
        &self,
        job_id: &JobId,
        request: AttachDocumentRequest,
    ) -> Result<ApplicationDocument, HiringError> {
        self.job_record(job_id)?;
        Ok(self.store().insert_document(ApplicationDocument {
            job_id: job_id.clone(),
            name: request.name,
            file_type: request.file_type,
            file_url: request.file_url,
            uploaded_by: request.uploaded_by,
            description: request.description,
        })?)
    }

    pub fn job_documents(&self, job_id: &JobId) -> Result<Vec<ApplicationDocument>, HiringError> {
        self.job_record(job_id)?;
        Ok(self.store().list_documents_for_job(job_id)?)
    }

    fn job_record(&self, id: &JobId) -> Result<Job, HiringError> {
        self.store()
            .fetch_job(id)?
            .ok_or_else(|| HiringError::not_found("Job not found"))
    }
}
