//! Job storage. Runtime sqlx queries against the `jobs` table.
//!
//! The applicant list lives in a JSONB column so previously stored data in
//! either legacy shape (plain id string or `{user, resume}` object) reads
//! back unchanged. Queries that look for a user's application must cover
//! both shapes in a single predicate.

use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{ApplicantRecord, JobRow};

/// Fields accepted when creating a job posting.
pub struct NewJob<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub description: &'a str,
    pub skills: &'a [String],
    pub budget: f64,
    pub location: Option<&'a str>,
    pub end_date: Option<DateTime<Utc>>,
    pub creator_id: Uuid,
}

pub async fn create_job(pool: &PgPool, new: NewJob<'_>) -> Result<JobRow, AppError> {
    let job: JobRow = sqlx::query_as(
        r#"
        INSERT INTO jobs
            (id, title, company, description, skills, budget, location, end_date,
             creator_id, applicants)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, '[]'::jsonb)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.title)
    .bind(new.company)
    .bind(new.description)
    .bind(new.skills)
    .bind(new.budget)
    .bind(new.location)
    .bind(new.end_date)
    .bind(new.creator_id)
    .fetch_one(pool)
    .await?;

    info!("Created job {} ({})", job.id, job.title);
    Ok(job)
}

pub async fn get_job(pool: &PgPool, job_id: Uuid) -> Result<JobRow, AppError> {
    let job: Option<JobRow> = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?;
    job.ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

pub async fn list_jobs(pool: &PgPool) -> Result<Vec<JobRow>, AppError> {
    let jobs = sqlx::query_as("SELECT * FROM jobs ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(jobs)
}

pub async fn list_jobs_by_creator(pool: &PgPool, creator_id: Uuid) -> Result<Vec<JobRow>, AppError> {
    let jobs = sqlx::query_as("SELECT * FROM jobs WHERE creator_id = $1 ORDER BY created_at DESC")
        .bind(creator_id)
        .fetch_all(pool)
        .await?;
    Ok(jobs)
}

/// Jobs that carry an applicant entry for `user_id` under either shape.
pub async fn list_jobs_applied_by(pool: &PgPool, user_id: Uuid) -> Result<Vec<JobRow>, AppError> {
    let jobs = sqlx::query_as(
        r#"
        SELECT * FROM jobs
        WHERE EXISTS (
            SELECT 1 FROM jsonb_array_elements(applicants) AS entry
            WHERE entry = to_jsonb($1::text) OR entry->>'user' = $1
        )
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id.to_string())
    .fetch_all(pool)
    .await?;
    Ok(jobs)
}

/// Replaceable fields for a job-owner edit.
pub struct JobUpdate<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub description: &'a str,
    pub skills: &'a [String],
    pub budget: f64,
    pub location: Option<&'a str>,
    pub end_date: Option<DateTime<Utc>>,
}

pub async fn update_job(
    pool: &PgPool,
    job_id: Uuid,
    update: JobUpdate<'_>,
) -> Result<JobRow, AppError> {
    let job: Option<JobRow> = sqlx::query_as(
        r#"
        UPDATE jobs
        SET title = $2, company = $3, description = $4, skills = $5,
            budget = $6, location = $7, end_date = $8
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(job_id)
    .bind(update.title)
    .bind(update.company)
    .bind(update.description)
    .bind(update.skills)
    .bind(update.budget)
    .bind(update.location)
    .bind(update.end_date)
    .fetch_optional(pool)
    .await?;
    job.ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

pub async fn delete_job(pool: &PgPool, job_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(job_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    info!("Deleted job {job_id}");
    Ok(())
}

/// Appends an applicant entry only if no entry for that user exists yet,
/// in either shape, as one conditional UPDATE. This is the atomic
/// insert-if-absent that closes the check-then-act race between two
/// concurrent applications: whichever request lands second matches zero
/// rows and records nothing.
///
/// Returns `true` when the entry was appended, `false` when an entry for
/// the user was already present.
pub async fn append_applicant_if_absent(
    pool: &PgPool,
    job_id: Uuid,
    record: &ApplicantRecord,
) -> Result<bool, AppError> {
    let entry = json!(record);
    let user_id = record.user_id().to_string();

    let result = sqlx::query(
        r#"
        UPDATE jobs
        SET applicants = applicants || jsonb_build_array($2::jsonb)
        WHERE id = $1
          AND NOT EXISTS (
              SELECT 1 FROM jsonb_array_elements(applicants) AS entry
              WHERE entry = to_jsonb($3::text) OR entry->>'user' = $3
          )
        "#,
    )
    .bind(job_id)
    .bind(entry)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Overwrites a job's applicant list wholesale. Used by withdrawal, where the
/// filtered remainder replaces the stored array.
pub async fn replace_applicants(
    pool: &PgPool,
    job_id: Uuid,
    applicants: &[ApplicantRecord],
) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE jobs SET applicants = $2 WHERE id = $1")
        .bind(job_id)
        .bind(json!(applicants))
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    Ok(())
}
