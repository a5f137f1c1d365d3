// Job postings: CRUD store and handlers.
// Application-specific logic (apply/withdraw/list applicants) lives in
// `applications`; this module only owns the job records themselves.

pub mod handlers;
pub mod store;
