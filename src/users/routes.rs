// src/users/routes.rs

use axum::{routing::get, Router};

use super::handlers;

pub fn users_routes() -> Router {
    Router::new().route(
        "/api/admin/users",
        get(handlers::list_users).patch(handlers::update_user_status),
    )
}
