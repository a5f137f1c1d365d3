#![allow(dead_code)]

//! Applicant registry: pure operations over a job's applicant list.
//!
//! The list mixes two historical shapes (see `models::job::ApplicantRecord`).
//! Every operation here resolves identity through the single
//! `ApplicantRecord::user_id()` accessor — the failure mode this module
//! exists to prevent is one code path checking one shape while another path
//! checks the other, letting a user apply twice.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{ApplicantRecord, ResumeApplication};

/// True if any entry, under either shape, belongs to `user_id`.
pub fn has_applied(applicants: &[ApplicantRecord], user_id: Uuid) -> bool {
    applicants.iter().any(|a| a.user_id() == user_id)
}

/// Builds the entry a new application should append: the structured shape
/// when a resume reference is present, the bare legacy shape otherwise.
/// Only the structured shape carries a timestamp.
pub fn new_application(
    user_id: Uuid,
    resume_ref: Option<String>,
    now: DateTime<Utc>,
) -> ApplicantRecord {
    match resume_ref {
        Some(resume) => ApplicantRecord::WithResume(ResumeApplication {
            user: user_id,
            resume,
            applied_at: Some(now),
        }),
        None => ApplicantRecord::BareReference(user_id),
    }
}

/// Appends an application to a list, rejecting duplicates across both
/// shapes. This is the in-memory form of the operation; the persisted path
/// goes through the storage layer's conditional append, which enforces the
/// same condition inside the UPDATE.
pub fn push_application(
    applicants: &mut Vec<ApplicantRecord>,
    user_id: Uuid,
    resume_ref: Option<String>,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    if has_applied(applicants, user_id) {
        return Err(AppError::DuplicateApplication);
    }
    applicants.push(new_application(user_id, resume_ref, now));
    Ok(())
}

/// Removes every entry belonging to `user_id`, regardless of shape.
/// Returns true if anything was removed.
pub fn remove_applicant(applicants: &mut Vec<ApplicantRecord>, user_id: Uuid) -> bool {
    let before = applicants.len();
    applicants.retain(|a| a.user_id() != user_id);
    applicants.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(user: Uuid) -> ApplicantRecord {
        ApplicantRecord::BareReference(user)
    }

    fn with_resume(user: Uuid, resume: &str) -> ApplicantRecord {
        ApplicantRecord::WithResume(ResumeApplication {
            user,
            resume: resume.to_string(),
            applied_at: Some(Utc::now()),
        })
    }

    #[test]
    fn test_has_applied_sees_bare_shape() {
        let user = Uuid::new_v4();
        assert!(has_applied(&[bare(user)], user));
        assert!(!has_applied(&[bare(user)], Uuid::new_v4()));
    }

    #[test]
    fn test_has_applied_sees_resume_shape() {
        let user = Uuid::new_v4();
        assert!(has_applied(&[with_resume(user, "r1.pdf")], user));
        assert!(!has_applied(&[with_resume(user, "r1.pdf")], Uuid::new_v4()));
    }

    #[test]
    fn test_duplicate_rejected_across_shapes() {
        // An earlier bare-shape entry must block a resume-shape reapply,
        // and the other way around.
        let user = Uuid::new_v4();
        let now = Utc::now();

        let mut list = vec![bare(user)];
        let err = push_application(&mut list, user, Some("r1.pdf".to_string()), now);
        assert!(matches!(err, Err(AppError::DuplicateApplication)));
        assert_eq!(list.len(), 1);

        let mut list = vec![with_resume(user, "r1.pdf")];
        let err = push_application(&mut list, user, None, now);
        assert!(matches!(err, Err(AppError::DuplicateApplication)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_push_picks_shape_from_resume_presence() {
        let user = Uuid::new_v4();
        let now = Utc::now();
        let mut list = Vec::new();

        push_application(&mut list, user, Some("cv.pdf".to_string()), now).unwrap();
        assert!(matches!(list[0], ApplicantRecord::WithResume(_)));
        assert_eq!(list[0].resume_ref(), Some("cv.pdf"));
        assert_eq!(list[0].applied_at(), Some(now));

        let other = Uuid::new_v4();
        push_application(&mut list, other, None, now).unwrap();
        assert_eq!(list[1], ApplicantRecord::BareReference(other));
        assert_eq!(list[1].applied_at(), None);
    }

    #[test]
    fn test_distinct_users_can_all_apply() {
        let now = Utc::now();
        let mut list = Vec::new();
        for _ in 0..5 {
            push_application(&mut list, Uuid::new_v4(), None, now).unwrap();
        }
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_remove_covers_both_shapes() {
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();

        let mut list = vec![bare(user), with_resume(other, "o.pdf")];
        assert!(remove_applicant(&mut list, user));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].user_id(), other);

        let mut list = vec![with_resume(user, "u.pdf"), bare(other)];
        assert!(remove_applicant(&mut list, user));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].user_id(), other);
    }

    #[test]
    fn test_remove_absent_user_is_noop() {
        let mut list = vec![bare(Uuid::new_v4())];
        assert!(!remove_applicant(&mut list, Uuid::new_v4()));
        assert_eq!(list.len(), 1);
    }
}
