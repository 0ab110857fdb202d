// src/auth/mod.rs

pub mod extractors;

pub use extractors::AdminToken;
