use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, instrument};

use crate::{
    auth::{extractors::AuthUser, repo::User},
    error::ApiError,
    state::AppState,
};

use super::dto::UserSummary;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

/// Debug listing of all accounts; requires a valid bearer token.
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = User::list_all(&state.db).await?;
    debug!(caller = %caller, count = users.len(), "users listed");

    let items = users
        .into_iter()
        .map(|u| UserSummary {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
        })
        .collect();
    Ok(Json(items))
}
