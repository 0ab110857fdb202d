// src/assistant/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::assistant_routes;
