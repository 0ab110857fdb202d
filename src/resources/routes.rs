// src/resources/routes.rs

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers;

pub fn resources_routes() -> Router {
    Router::new()
        .route(
            "/api/admin/resources",
            get(handlers::list_resources).post(handlers::create_resource),
        )
        .route(
            "/api/admin/resources/:id",
            put(handlers::update_resource).delete(handlers::delete_resource),
        )
}
