use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store::{
    create_job, delete_job, get_job, list_jobs, list_jobs_applied_by, list_jobs_by_creator,
    update_job, JobUpdate, NewJob,
};
use crate::models::job::JobRow;
use crate::state::AppState;

/// Identifies the authenticated caller. Token verification happens upstream;
/// by the time a request lands here the id is trusted.
#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub budget: f64,
    pub location: Option<String>,
    pub end_date: Option<DateTime<Utc>>,
    pub creator_id: Uuid,
}

#[derive(Serialize)]
pub struct JobResponse {
    pub message: String,
    pub job: JobRow,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobResponse>), AppError> {
    validate_budget(req.budget)?;
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }

    let job = create_job(
        &state.db,
        NewJob {
            title: &req.title,
            company: &req.company,
            description: &req.description,
            skills: &req.skills,
            budget: req.budget,
            location: req.location.as_deref(),
            end_date: req.end_date,
            creator_id: req.creator_id,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(JobResponse {
            message: "Job created".to_string(),
            job,
        }),
    ))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_jobs(&state.db).await?))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    Ok(Json(get_job(&state.db, id).await?))
}

#[derive(Deserialize)]
pub struct UpdateJobRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub budget: f64,
    pub location: Option<String>,
    pub end_date: Option<DateTime<Utc>>,
    pub user_id: Uuid,
}

/// PUT /api/v1/jobs/:id — owner only.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<JobResponse>, AppError> {
    validate_budget(req.budget)?;

    let existing = get_job(&state.db, id).await?;
    if existing.creator_id != req.user_id {
        return Err(AppError::Forbidden);
    }

    let job = update_job(
        &state.db,
        id,
        JobUpdate {
            title: &req.title,
            company: &req.company,
            description: &req.description,
            skills: &req.skills,
            budget: req.budget,
            location: req.location.as_deref(),
            end_date: req.end_date,
        },
    )
    .await?;

    Ok(Json(JobResponse {
        message: "Job updated".to_string(),
        job,
    }))
}

/// DELETE /api/v1/jobs/:id — owner only.
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let existing = get_job(&state.db, id).await?;
    if existing.creator_id != params.user_id {
        return Err(AppError::Forbidden);
    }
    delete_job(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/jobs/recruiter/mine
pub async fn handle_jobs_by_recruiter(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_jobs_by_creator(&state.db, params.user_id).await?))
}

/// GET /api/v1/jobs/user/applied
pub async fn handle_jobs_applied_by_user(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_jobs_applied_by(&state.db, params.user_id).await?))
}

fn validate_budget(budget: f64) -> Result<(), AppError> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(AppError::Validation(
            "budget must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}
