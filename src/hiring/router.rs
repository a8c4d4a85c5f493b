//! HTTP surface for the hiring service.
//!
//! Handlers stay thin: extract, delegate to the service, map domain errors
//! onto status codes. All state flows through the shared `Arc` service;
//! there is no ambient global.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::candidates::{ApplyRequest, CreateCandidateRequest, UpdateCandidateRequest};
use super::domain::{ApplicationId, ApplicationStatus, InterviewId, JobId, UserId};
use super::interviews::{CreateInterviewRequest, UpdateInterviewRequest};
use super::jobs::{AttachDocumentRequest, CreateJobRequest, UpdateJobRequest};
use super::repository::{HiringStore, RepositoryError};
use super::service::{HiringError, HiringService};
use super::users::{ProfileRequest, RegisterUserRequest};

/// Router builder exposing the full applicant-tracking API.
pub fn hiring_router<S>(service: Arc<HiringService<S>>) -> Router
where
    S: HiringStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/candidates",
            get(list_candidates::<S>).post(create_candidate::<S>),
        )
        .route("/api/v1/candidates/all", get(list_all_candidates::<S>))
        .route("/api/v1/candidates/employers", get(list_employers::<S>))
        .route("/api/v1/candidates/job/:id", get(candidates_for_job::<S>))
        .route(
            "/api/v1/candidates/:id",
            get(get_candidate::<S>).patch(update_candidate::<S>),
        )
        .route(
            "/api/v1/candidates/:id/applications",
            get(candidate_applications::<S>).post(apply_to_job::<S>),
        )
        .route(
            "/api/v1/candidates/:id/interviews",
            get(candidate_interviews::<S>),
        )
        .route(
            "/api/v1/candidates/:id/applications/:application_id/status",
            patch(update_application_status::<S>),
        )
        .route("/api/v1/jobs", get(list_jobs::<S>).post(create_job::<S>))
        .route(
            "/api/v1/jobs/:id",
            get(get_job::<S>).put(update_job::<S>).delete(delete_job::<S>),
        )
        .route("/api/v1/jobs/:id/pipeline", get(job_pipeline::<S>))
        .route(
            "/api/v1/jobs/:id/documents",
            get(job_documents::<S>).post(attach_document::<S>),
        )
        .route(
            "/api/v1/interviews",
            get(list_interviews::<S>).post(create_interview::<S>),
        )
        .route(
            "/api/v1/interviews/:id",
            get(get_interview::<S>)
                .patch(update_interview::<S>)
                .delete(delete_interview::<S>),
        )
        .route("/api/v1/interviews/:id/rating", patch(rate_interview::<S>))
        .route("/api/v1/users/register", post(register_user::<S>))
        .route("/api/v1/users", get(list_users::<S>))
        .route("/api/v1/users/email/:email", get(user_by_email::<S>))
        .route("/api/v1/users/:id", get(get_user::<S>))
        .route(
            "/api/v1/users/:id/profile",
            get(get_profile::<S>)
                .post(upsert_profile::<S>)
                .patch(upsert_profile::<S>),
        )
        .route("/api/v1/dashboard/stats", get(dashboard_stats::<S>))
        .with_state(service)
}

/// Wire-level error: a domain failure plus its HTTP mapping.
#[derive(Debug)]
pub struct ApiError(HiringError);

impl From<HiringError> for ApiError {
    fn from(error: HiringError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            HiringError::NotFound(_) => StatusCode::NOT_FOUND,
            HiringError::Invalid(_) => StatusCode::BAD_REQUEST,
            HiringError::Conflict(_) => StatusCode::CONFLICT,
            HiringError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            HiringError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            HiringError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

type ServiceState<S> = State<Arc<HiringService<S>>>;

#[derive(Debug, Default, Deserialize)]
struct CandidateQuery {
    #[serde(rename = "applicationStatus")]
    application_status: Option<ApplicationStatus>,
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<usize>,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
struct RatingBody {
    rating: f32,
}

async fn create_candidate<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Json(request): Json<CreateCandidateRequest>,
) -> Result<Response, ApiError> {
    let view = service.create_candidate(request)?;
    Ok((StatusCode::CREATED, Json(view)).into_response())
}

async fn list_candidates<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Query(query): Query<CandidateQuery>,
) -> Result<Response, ApiError> {
    let views = service.list_candidates(query.application_status)?;
    Ok(Json(views).into_response())
}

async fn list_all_candidates<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
) -> Result<Response, ApiError> {
    Ok(Json(service.list_all_candidates()?).into_response())
}

async fn list_employers<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
) -> Result<Response, ApiError> {
    Ok(Json(service.list_employers()?).into_response())
}

async fn candidates_for_job<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(job_id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.candidates_for_job(&JobId(job_id))?).into_response())
}

async fn get_candidate<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.candidate_view(&UserId(id))?).into_response())
}

async fn update_candidate<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCandidateRequest>,
) -> Result<Response, ApiError> {
    Ok(Json(service.update_candidate(&UserId(id), request)?).into_response())
}

async fn candidate_applications<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.candidate_applications(&UserId(id))?).into_response())
}

async fn apply_to_job<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
    Json(request): Json<ApplyRequest>,
) -> Result<Response, ApiError> {
    let application = service.apply_to_job(&UserId(id), request)?;
    Ok((StatusCode::CREATED, Json(application)).into_response())
}

async fn candidate_interviews<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.candidate_interviews(&UserId(id))?).into_response())
}

async fn update_application_status<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path((id, application_id)): Path<(String, String)>,
    Json(body): Json<StatusBody>,
) -> Result<Response, ApiError> {
    let view = service.update_application_status(
        &UserId(id),
        &ApplicationId(application_id),
        body.status,
    )?;
    Ok(Json(view).into_response())
}

async fn list_jobs<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);
    Ok(Json(service.list_jobs(page, limit)?).into_response())
}

async fn create_job<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Response, ApiError> {
    let job = service.create_job(request)?;
    Ok((StatusCode::CREATED, Json(job)).into_response())
}

async fn get_job<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.get_job(&JobId(id))?).into_response())
}

async fn update_job<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
    Json(request): Json<UpdateJobRequest>,
) -> Result<Response, ApiError> {
    Ok(Json(service.update_job(&JobId(id), request)?).into_response())
}

async fn delete_job<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    service.delete_job(&JobId(id))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn job_pipeline<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.pipeline_board(&JobId(id))?).into_response())
}

async fn job_documents<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.job_documents(&JobId(id))?).into_response())
}

async fn attach_document<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
    Json(request): Json<AttachDocumentRequest>,
) -> Result<Response, ApiError> {
    let document = service.attach_document(&JobId(id), request)?;
    Ok((StatusCode::CREATED, Json(document)).into_response())
}

async fn list_interviews<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
) -> Result<Response, ApiError> {
    Ok(Json(service.list_interviews()?).into_response())
}

async fn create_interview<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Json(request): Json<CreateInterviewRequest>,
) -> Result<Response, ApiError> {
    let interview = service.create_interview(request)?;
    Ok((StatusCode::CREATED, Json(interview)).into_response())
}

async fn get_interview<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.get_interview(&InterviewId(id))?).into_response())
}

async fn update_interview<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
    Json(request): Json<UpdateInterviewRequest>,
) -> Result<Response, ApiError> {
    Ok(Json(service.update_interview(&InterviewId(id), request)?).into_response())
}

async fn delete_interview<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.delete_interview(&InterviewId(id))?).into_response())
}

async fn rate_interview<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
    Json(body): Json<RatingBody>,
) -> Result<Response, ApiError> {
    Ok(Json(service.rate_interview(&InterviewId(id), body.rating)?).into_response())
}

async fn register_user<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Response, ApiError> {
    let user = service.register_user(request)?;
    Ok((StatusCode::CREATED, Json(user)).into_response())
}

async fn list_users<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);
    Ok(Json(service.list_users(page, limit)?).into_response())
}

async fn user_by_email<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(email): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.find_user_by_email(&email)?).into_response())
}

async fn get_user<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.find_user(&UserId(id))?).into_response())
}

async fn get_profile<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.find_profile(&UserId(id))?).into_response())
}

async fn upsert_profile<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
    Path(id): Path<String>,
    Json(request): Json<ProfileRequest>,
) -> Result<Response, ApiError> {
    Ok(Json(service.upsert_profile(&UserId(id), request)?).into_response())
}

async fn dashboard_stats<S: HiringStore + 'static>(
    State(service): ServiceState<S>,
) -> Result<Response, ApiError> {
    Ok(Json(service.dashboard_stats()?).into_response())
}
