use crate::state::AppState;
use axum::Router;

mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
mod password;
pub mod repo;
mod rules;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
