// src/exports/routes.rs

use axum::{routing::get, Router};

use super::handlers;

pub fn exports_routes() -> Router {
    Router::new()
        .route("/api/admin/export/jobs", get(handlers::export_jobs))
        .route("/api/admin/export/users", get(handlers::export_users))
        .route(
            "/api/admin/export/resources",
            get(handlers::export_resources),
        )
        .route(
            "/api/admin/export/analytics",
            get(handlers::export_analytics),
        )
}
