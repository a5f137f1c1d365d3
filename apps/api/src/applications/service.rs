//! Application service: orchestrates apply / withdraw / applicant listing
//! against the job store and the user directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::applications::registry::{has_applied, new_application, remove_applicant};
use crate::errors::AppError;
use crate::jobs::store::{append_applicant_if_absent, get_job, replace_applicants};
use crate::models::user::PublicUser;

/// One applicant resolved against the user directory. Both storage shapes
/// collapse to this uniform record — callers cannot tell how the entry was
/// stored. `applied_at` is absent when the stored entry never carried a
/// timestamp (legacy bare references); it is never approximated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedApplicant {
    pub user: PublicUser,
    pub resume: Option<String>,
    pub applied_at: Option<DateTime<Utc>>,
}

/// Records one application: a `WithResume` entry when `resume_ref` is given,
/// a bare reference otherwise.
///
/// The duplicate check runs twice. The in-memory `has_applied` gives the
/// common case a clean rejection; the storage-level conditional append
/// re-checks inside the UPDATE itself, so two racing requests that both
/// passed the first check still produce exactly one entry.
pub async fn apply_to_job(
    pool: &PgPool,
    job_id: Uuid,
    user_id: Uuid,
    resume_ref: Option<String>,
) -> Result<(), AppError> {
    let job = get_job(pool, job_id).await?;

    if has_applied(&job.applicants, user_id) {
        return Err(AppError::DuplicateApplication);
    }

    let record = new_application(user_id, resume_ref, Utc::now());
    let appended = append_applicant_if_absent(pool, job_id, &record).await?;
    if !appended {
        // Lost a race with a concurrent application for the same user.
        return Err(AppError::DuplicateApplication);
    }

    info!("User {user_id} applied to job {job_id}");
    Ok(())
}

/// Resolves a job's applicant entries into uniform records via the user
/// directory. Entries whose user no longer exists are skipped silently —
/// the caller simply sees fewer applicants than raw entries.
pub async fn list_applicants(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Vec<ResolvedApplicant>, AppError> {
    let job = get_job(pool, job_id).await?;

    let mut resolved = Vec::with_capacity(job.applicants.len());
    for entry in job.applicants.iter() {
        let user: Option<PublicUser> =
            sqlx::query_as("SELECT id, name, email, role FROM users WHERE id = $1")
                .bind(entry.user_id())
                .fetch_optional(pool)
                .await?;
        let Some(user) = user else {
            continue;
        };
        resolved.push(ResolvedApplicant {
            user,
            resume: entry.resume_ref().map(str::to_string),
            applied_at: entry.applied_at(),
        });
    }
    Ok(resolved)
}

/// Withdraws a user's application, removing their entry under either shape.
pub async fn withdraw_application(
    pool: &PgPool,
    job_id: Uuid,
    user_id: Uuid,
) -> Result<(), AppError> {
    let job = get_job(pool, job_id).await?;

    let mut applicants = job.applicants.0;
    if !remove_applicant(&mut applicants, user_id) {
        return Err(AppError::NotFound(format!(
            "No application by user {user_id} on job {job_id}"
        )));
    }
    replace_applicants(pool, job_id, &applicants).await?;

    info!("User {user_id} withdrew from job {job_id}");
    Ok(())
}
