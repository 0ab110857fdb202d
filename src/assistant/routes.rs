// src/assistant/routes.rs

use axum::{routing::post, Router};

use crate::assistant::handlers;

pub fn assistant_routes() -> Router {
    Router::new()
        .route("/api/assistant/chat", post(handlers::chat))
        .route(
            "/api/assistant/resume/enhance",
            post(handlers::enhance_resume),
        )
}
