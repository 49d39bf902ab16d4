use serde::Deserialize;

/// Request body for creating a notification.
#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    #[serde(default)]
    pub message: String,
}
