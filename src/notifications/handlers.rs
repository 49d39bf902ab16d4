use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    notifications::{dto::CreateNotificationRequest, repo::Notification},
    state::AppState,
};

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(list_notifications).post(create_notification),
        )
        .route("/notifications/:id/read", post(mark_read))
}

#[instrument(skip(state, claims))]
pub async fn list_notifications(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let items = Notification::list_by_user(&state.db, claims.sub).await?;
    Ok(Json(items))
}

#[instrument(skip(state, claims, payload))]
pub async fn create_notification(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<Json<Notification>, ApiError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(ApiError::Validation("Message is required".into()));
    }

    let notification = Notification::create(&state.db, claims.sub, message).await?;
    Ok(Json(notification))
}

#[instrument(skip(state, claims))]
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, ApiError> {
    let notification = Notification::mark_read(&state.db, claims.sub, id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %claims.sub, notification_id = %id, "mark read on missing notification");
            ApiError::NotFound("Notification not found".into())
        })?;

    Ok(Json(notification))
}
