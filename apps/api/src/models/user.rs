use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// "seeker" or "recruiter".
    pub role: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Projection of a user safe to show to a job owner reviewing applicants.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}
