// Services module - external collaborators

pub mod ai;

pub use ai::AiService;
