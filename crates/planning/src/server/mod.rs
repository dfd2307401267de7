use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::server::endpoints::{planning, status};
use crate::types::AppState;

pub mod endpoints;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(planning::get_planning))
        .route("/equipe", get(planning::get_team))
        .route("/health", get(status::get_health))
        .with_state(app_state)
}
