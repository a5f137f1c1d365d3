use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::jobs::handlers::UserIdQuery;
use crate::jobs::store::list_jobs;
use crate::matching::ranker::{rank_jobs, RankedJobs};
use crate::models::user::User;
use crate::state::AppState;

/// GET /api/v1/jobs/matches
///
/// Ranks every visible job against the requesting seeker's stored skills.
/// Matched jobs come first, sorted by score; jobs without a score follow in
/// their original order. A seeker with no skills gets an empty `matched` set.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RankedJobs>, AppError> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(params.user_id)
        .fetch_optional(&state.db)
        .await?;
    let user = user.ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;

    let jobs = list_jobs(&state.db).await?;
    let seeker_skills = user.skills.join(", ");

    Ok(Json(rank_jobs(&seeker_skills, jobs)))
}
