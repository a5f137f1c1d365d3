use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::applications::service::{
    apply_to_job, list_applicants, withdraw_application, ResolvedApplicant,
};
use crate::errors::AppError;
use crate::jobs::handlers::UserIdQuery;
use crate::jobs::store::get_job;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ApplyRequest {
    pub user_id: Uuid,
    /// Opaque storage path or URL from the upload collaborator. Optional —
    /// an application without one is stored in the bare legacy shape.
    pub resume_ref: Option<String>,
}

/// POST /api/v1/jobs/:id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ApplyRequest>,
) -> Result<Json<Value>, AppError> {
    apply_to_job(&state.db, id, req.user_id, req.resume_ref).await?;
    Ok(Json(json!({ "message": "Applied to job successfully" })))
}

#[derive(Deserialize)]
pub struct WithdrawRequest {
    pub user_id: Uuid,
}

/// PUT /api/v1/jobs/:id/withdraw
pub async fn handle_withdraw(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<WithdrawRequest>,
) -> Result<Json<Value>, AppError> {
    withdraw_application(&state.db, id, req.user_id).await?;
    Ok(Json(json!({ "message": "Application withdrawn" })))
}

#[derive(Serialize)]
pub struct ApplicantsResponse {
    pub applicants: Vec<ResolvedApplicant>,
}

/// GET /api/v1/jobs/:id/applicants — owner only.
pub async fn handle_list_applicants(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ApplicantsResponse>, AppError> {
    let job = get_job(&state.db, id).await?;
    if job.creator_id != params.user_id {
        return Err(AppError::Forbidden);
    }

    let applicants = list_applicants(&state.db, id).await?;
    Ok(Json(ApplicantsResponse { applicants }))
}
