//! Applicant-tracking domain: postings, candidates, applications, and
//! interviews, plus the pipeline-board projection over application status.
//!
//! Layering mirrors the request path: `domain` types flow through the
//! storage traits in `repository` (with an in-memory backend in `memory`),
//! the per-concern service impls, and out through `router`.

mod candidates;
mod dashboard;
pub mod demo;
pub mod domain;
mod interviews;
mod jobs;
pub mod memory;
pub mod pipeline;
pub mod repository;
pub mod router;
mod service;
mod users;
pub mod views;

#[cfg(test)]
mod tests;

pub use candidates::{
    ApplyRequest, CandidateProfileRequest, CreateCandidateRequest, UpdateCandidateRequest,
};
pub use domain::{
    ApplicationDocument, ApplicationId, ApplicationStatus, Education, Experience, Interview,
    InterviewId, InterviewStatus, InterviewType, Job, JobApplication, JobId, JobStatus, Profile,
    User, UserId, UserRole,
};
pub use interviews::{CreateInterviewRequest, UpdateInterviewRequest};
pub use jobs::{AttachDocumentRequest, CreateJobRequest, UpdateJobRequest};
pub use memory::InMemoryStore;
pub use pipeline::{PipelineBoard, PipelineCard, PipelineColumn, PipelineStage};
pub use repository::{HiringStore, RepositoryError};
pub use router::hiring_router;
pub use service::{HiringError, HiringService};
pub use users::{ProfileRequest, RegisterUserRequest};
pub use views::{
    ApplicationView, CandidateInterviewsView, CandidateView, DashboardStats, InterviewDetailView,
    InterviewView, JobPage, UserPage, UserSummary,
};
