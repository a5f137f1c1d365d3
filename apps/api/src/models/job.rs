use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One entry in a job's applicant list.
///
/// Two historical on-disk shapes coexist: a bare user id (oldest records) and
/// an object carrying the user id plus a resume reference. `untagged` lets
/// both deserialize from previously stored JSON unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApplicantRecord {
    WithResume(ResumeApplication),
    BareReference(Uuid),
}

/// The structured applicant shape: user id plus an opaque resume reference
/// (a storage path or URL — never interpreted here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeApplication {
    pub user: Uuid,
    pub resume: String,
    /// Recorded at insert time. Legacy rows predate this field and
    /// deserialize to `None` — reported as unknown, never guessed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
}

impl ApplicantRecord {
    /// The user identity behind either shape.
    ///
    /// Every place that compares applicant identity (duplicate check,
    /// resolution, withdrawal) must go through this one accessor so no code
    /// path silently handles only one shape.
    pub fn user_id(&self) -> Uuid {
        match self {
            ApplicantRecord::WithResume(a) => a.user,
            ApplicantRecord::BareReference(id) => *id,
        }
    }

    pub fn resume_ref(&self) -> Option<&str> {
        match self {
            ApplicantRecord::WithResume(a) => Some(a.resume.as_str()),
            ApplicantRecord::BareReference(_) => None,
        }
    }

    pub fn applied_at(&self) -> Option<DateTime<Utc>> {
        match self {
            ApplicantRecord::WithResume(a) => a.applied_at,
            ApplicantRecord::BareReference(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub skills: Vec<String>,
    pub budget: f64,
    pub location: Option<String>,
    pub end_date: Option<DateTime<Utc>>,
    pub creator_id: Uuid,
    pub applicants: Json<Vec<ApplicantRecord>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_reference_parses_from_plain_string() {
        let id = Uuid::new_v4();
        let json = format!(r#""{id}""#);
        let record: ApplicantRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, ApplicantRecord::BareReference(id));
        assert_eq!(record.user_id(), id);
        assert_eq!(record.resume_ref(), None);
        assert_eq!(record.applied_at(), None);
    }

    #[test]
    fn test_legacy_object_without_timestamp_parses() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"user": "{id}", "resume": "uploads/cv-123.pdf"}}"#);
        let record: ApplicantRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.user_id(), id);
        assert_eq!(record.resume_ref(), Some("uploads/cv-123.pdf"));
        // No stored timestamp: unknown, not fabricated.
        assert_eq!(record.applied_at(), None);
    }

    #[test]
    fn test_with_resume_round_trips_with_timestamp() {
        let record = ApplicantRecord::WithResume(ResumeApplication {
            user: Uuid::new_v4(),
            resume: "uploads/cv-456.pdf".to_string(),
            applied_at: Some(Utc::now()),
        });
        let json = serde_json::to_string(&record).unwrap();
        let back: ApplicantRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_bare_reference_serializes_as_plain_string() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(ApplicantRecord::BareReference(id)).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }

    #[test]
    fn test_mixed_applicant_list_parses() {
        let bare = Uuid::new_v4();
        let structured = Uuid::new_v4();
        let json = format!(
            r#"["{bare}", {{"user": "{structured}", "resume": "r.pdf"}}]"#
        );
        let list: Vec<ApplicantRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].user_id(), bare);
        assert_eq!(list[1].user_id(), structured);
    }
}
