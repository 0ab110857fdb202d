//! Admin-token extractor for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::common::{ApiError, AppState};

/// Extractor guarding admin routes.
///
/// Compares the X-Admin-Token header against the configured admin token.
/// When no token is configured the instance runs open, which is the
/// intended mode for local development.
#[derive(Debug)]
pub struct AdminToken;

#[async_trait]
impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let Some(expected) = app_state.admin_token else {
            debug!("No admin token configured, allowing request");
            return Ok(AdminToken);
        };

        let provided = parts
            .headers
            .get("x-admin-token")
            .and_then(|h| h.to_str().ok());

        match provided {
            Some(token) if token == expected => Ok(AdminToken),
            Some(_) => {
                warn!("Admin request rejected: invalid admin token");
                Err(ApiError::Forbidden("invalid admin token".to_string()))
            }
            None => {
                warn!("Admin request rejected: missing X-Admin-Token header");
                Err(ApiError::Forbidden("missing admin token".to_string()))
            }
        }
    }
}
