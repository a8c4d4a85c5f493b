//! In-memory store backing the service when no database is wired in.
//!
//! Each map sits behind its own mutex; every operation is a single lock
//! acquisition, which matches the last-write-wins model the API promises.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::domain::{
    ApplicationDocument, ApplicationId, Interview, InterviewId, Job, JobApplication, JobId,
    JobStatus, Profile, User, UserId, UserRole,
};
use super::repository::{
    ApplicationStore, DocumentStore, InterviewStore, JobStore, ProfileStore, RepositoryError,
    UserStore,
};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: Mutex<BTreeMap<UserId, User>>,
    profiles: Mutex<BTreeMap<UserId, Profile>>,
    jobs: Mutex<BTreeMap<JobId, Job>>,
    applications: Mutex<BTreeMap<ApplicationId, JobApplication>>,
    interviews: Mutex<BTreeMap<InterviewId, Interview>>,
    documents: Mutex<Vec<ApplicationDocument>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<'a, T>(mutex: &'a Mutex<T>) -> Result<std::sync::MutexGuard<'a, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
}

impl UserStore for InMemoryStore {
    fn insert_user(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = lock(&self.users)?;
        if users.contains_key(&user.id) {
            return Err(RepositoryError::Conflict);
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    fn update_user(&self, user: User) -> Result<(), RepositoryError> {
        let mut users = lock(&self.users)?;
        if !users.contains_key(&user.id) {
            return Err(RepositoryError::NotFound);
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }

    fn fetch_user(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.users)?.get(id).cloned())
    }

    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.users)?
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn list_users(&self, skip: usize, take: usize) -> Result<(Vec<User>, usize), RepositoryError> {
        let users = lock(&self.users)?;
        let total = users.len();
        let page = users.values().skip(skip).take(take).cloned().collect();
        Ok((page, total))
    }

    fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>, RepositoryError> {
        Ok(lock(&self.users)?
            .values()
            .filter(|user| user.role == role)
            .cloned()
            .collect())
    }
}

impl ProfileStore for InMemoryStore {
    fn upsert_profile(&self, profile: Profile) -> Result<Profile, RepositoryError> {
        let mut profiles = lock(&self.profiles)?;
        profiles.insert(profile.user_id.clone(), profile.clone());
        Ok(profile)
    }

    fn fetch_profile(&self, user_id: &UserId) -> Result<Option<Profile>, RepositoryError> {
        Ok(lock(&self.profiles)?.get(user_id).cloned())
    }
}

impl JobStore for InMemoryStore {
    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut jobs = lock(&self.jobs)?;
        if jobs.contains_key(&job.id) {
            return Err(RepositoryError::Conflict);
        }
        jobs.insert(job.id.clone(), job.clone());
        Ok(job)
    }

    fn update_job(&self, job: Job) -> Result<(), RepositoryError> {
        let mut jobs = lock(&self.jobs)?;
        if !jobs.contains_key(&job.id) {
            return Err(RepositoryError::NotFound);
        }
        jobs.insert(job.id.clone(), job);
        Ok(())
    }

    fn fetch_job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(lock(&self.jobs)?.get(id).cloned())
    }

    fn list_jobs(&self, skip: usize, take: usize) -> Result<(Vec<Job>, usize), RepositoryError> {
        let jobs = lock(&self.jobs)?;
        let total = jobs.len();
        let page = jobs.values().skip(skip).take(take).cloned().collect();
        Ok((page, total))
    }

    fn delete_job(&self, id: &JobId) -> Result<(), RepositoryError> {
        let mut jobs = lock(&self.jobs)?;
        jobs.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn count_jobs_with_status(&self, status: JobStatus) -> Result<usize, RepositoryError> {
        Ok(lock(&self.jobs)?
            .values()
            .filter(|job| job.status == status)
            .count())
    }
}

impl ApplicationStore for InMemoryStore {
    fn insert_application(
        &self,
        application: JobApplication,
    ) -> Result<JobApplication, RepositoryError> {
        let mut applications = lock(&self.applications)?;
        if applications.contains_key(&application.id) {
            return Err(RepositoryError::Conflict);
        }
        applications.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn update_application(&self, application: JobApplication) -> Result<(), RepositoryError> {
        let mut applications = lock(&self.applications)?;
        if !applications.contains_key(&application.id) {
            return Err(RepositoryError::NotFound);
        }
        applications.insert(application.id.clone(), application);
        Ok(())
    }

    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<JobApplication>, RepositoryError> {
        Ok(lock(&self.applications)?.get(id).cloned())
    }

    fn list_applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        Ok(lock(&self.applications)?
            .values()
            .filter(|application| &application.job_id == job_id)
            .cloned()
            .collect())
    }

    fn list_applications_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        Ok(lock(&self.applications)?
            .values()
            .filter(|application| &application.user_id == user_id)
            .cloned()
            .collect())
    }

    fn list_applications(&self) -> Result<Vec<JobApplication>, RepositoryError> {
        Ok(lock(&self.applications)?.values().cloned().collect())
    }

    fn delete_applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationId>, RepositoryError> {
        let mut applications = lock(&self.applications)?;
        let removed: Vec<ApplicationId> = applications
            .values()
            .filter(|application| &application.job_id == job_id)
            .map(|application| application.id.clone())
            .collect();
        for id in &removed {
            applications.remove(id);
        }
        Ok(removed)
    }
}

impl InterviewStore for InMemoryStore {
    fn insert_interview(&self, interview: Interview) -> Result<Interview, RepositoryError> {
        let mut interviews = lock(&self.interviews)?;
        if interviews.contains_key(&interview.id) {
            return Err(RepositoryError::Conflict);
        }
        interviews.insert(interview.id.clone(), interview.clone());
        Ok(interview)
    }

    fn update_interview(&self, interview: Interview) -> Result<(), RepositoryError> {
        let mut interviews = lock(&self.interviews)?;
        if !interviews.contains_key(&interview.id) {
            return Err(RepositoryError::NotFound);
        }
        interviews.insert(interview.id.clone(), interview);
        Ok(())
    }

    fn fetch_interview(&self, id: &InterviewId) -> Result<Option<Interview>, RepositoryError> {
        Ok(lock(&self.interviews)?.get(id).cloned())
    }

    fn list_interviews(&self) -> Result<Vec<Interview>, RepositoryError> {
        let interviews = lock(&self.interviews)?;
        let mut all: Vec<Interview> = interviews.values().cloned().collect();
        all.sort_by(|a, b| b.scheduled_date.cmp(&a.scheduled_date));
        Ok(all)
    }

    fn list_interviews_for_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Interview>, RepositoryError> {
        Ok(lock(&self.interviews)?
            .values()
            .filter(|interview| interview.job_application_id.as_ref() == Some(application_id))
            .cloned()
            .collect())
    }

    fn list_interviews_for_candidate(
        &self,
        candidate_id: &UserId,
    ) -> Result<Vec<Interview>, RepositoryError> {
        Ok(lock(&self.interviews)?
            .values()
            .filter(|interview| &interview.candidate_id == candidate_id)
            .cloned()
            .collect())
    }

    fn delete_interview(&self, id: &InterviewId) -> Result<Interview, RepositoryError> {
        let mut interviews = lock(&self.interviews)?;
        interviews.remove(id).ok_or(RepositoryError::NotFound)
    }

    fn delete_interviews_for_applications(
        &self,
        application_ids: &[ApplicationId],
    ) -> Result<(), RepositoryError> {
        let mut interviews = lock(&self.interviews)?;
        interviews.retain(|_, interview| {
            interview
                .job_application_id
                .as_ref()
                .map(|id| !application_ids.contains(id))
                .unwrap_or(true)
        });
        Ok(())
    }
}

impl DocumentStore for InMemoryStore {
    fn insert_document(
        &self,
        document: ApplicationDocument,
    ) -> Result<ApplicationDocument, RepositoryError> {
        lock(&self.documents)?.push(document.clone());
        Ok(document)
    }

    fn list_documents_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationDocument>, RepositoryError> {
        Ok(lock(&self.documents)?
            .iter()
            .filter(|document| &document.job_id == job_id)
            .cloned()
            .collect())
    }
}
