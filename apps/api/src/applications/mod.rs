// Applicant registry and application orchestration.
// `registry` is the pure core (dedup invariant across both legacy shapes);
// `service` wires it to the job store and user directory.

pub mod handlers;
pub mod registry;
pub mod service;
