// src/exports/mod.rs

pub mod csv;
pub mod handlers;
pub mod routes;


pub use routes::exports_routes;
