// src/analytics/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use routes::analytics_routes;
