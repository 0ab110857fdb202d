// src/jobs/routes.rs

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers;

/// Create the jobs router with all job-related routes
pub fn jobs_routes() -> Router {
    Router::new()
        .route(
            "/api/admin/jobs",
            get(handlers::list_jobs).post(handlers::create_job),
        )
        .route(
            "/api/admin/jobs/:id",
            put(handlers::update_job).delete(handlers::delete_job),
        )
}
