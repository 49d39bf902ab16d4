use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::{
    auth::{extractors::AuthUser, repo::User},
    error::ApiError,
    state::AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCountResponse {
    pub page_count: i32,
}

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user/increment-page", post(increment_page))
}

#[instrument(skip(state, claims))]
pub async fn increment_page(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<PageCountResponse>, ApiError> {
    let page_count = User::increment_page_count(&state.db, claims.sub)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %claims.sub, "page count for missing user");
            ApiError::NotFound("User not found".into())
        })?;

    Ok(Json(PageCountResponse { page_count }))
}
