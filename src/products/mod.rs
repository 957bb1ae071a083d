mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

/// `state` is needed up front to build the auth layer on protected routes.
pub fn router(state: AppState) -> Router<AppState> {
    handlers::product_routes(state)
}
