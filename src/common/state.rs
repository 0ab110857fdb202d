// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::services::ai::AiService;

/// Application state containing the database pool, admin token, and the
/// AI collaborator.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Value expected in the X-Admin-Token header. None means the instance
    /// runs open (local development).
    pub admin_token: Option<String>,
    pub ai_service: Arc<AiService>,
}
