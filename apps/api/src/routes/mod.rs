pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::applications::handlers as application_handlers;
use crate::jobs::handlers as job_handlers;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route(
            "/api/v1/jobs",
            post(job_handlers::handle_create_job).get(job_handlers::handle_list_jobs),
        )
        .route(
            "/api/v1/jobs/matches",
            get(matching_handlers::handle_job_matches),
        )
        .route(
            "/api/v1/jobs/recruiter/mine",
            get(job_handlers::handle_jobs_by_recruiter),
        )
        .route(
            "/api/v1/jobs/user/applied",
            get(job_handlers::handle_jobs_applied_by_user),
        )
        .route(
            "/api/v1/jobs/:id",
            get(job_handlers::handle_get_job)
                .put(job_handlers::handle_update_job)
                .delete(job_handlers::handle_delete_job),
        )
        // Applications
        .route(
            "/api/v1/jobs/:id/apply",
            post(application_handlers::handle_apply),
        )
        .route(
            "/api/v1/jobs/:id/withdraw",
            put(application_handlers::handle_withdraw),
        )
        .route(
            "/api/v1/jobs/:id/applicants",
            get(application_handlers::handle_list_applicants),
        )
        .with_state(state)
}
