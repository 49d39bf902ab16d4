use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo::User;

/// Request body for signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub institution: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub email: String,
}

/// Plain acknowledgment body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// User record as exposed to the client, without the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub institution: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub page_count: i32,
    pub created_at: OffsetDateTime,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            institution: user.institution,
            class_name: user.class_name,
            page_count: user.page_count,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_response_has_no_password_field() {
        let response = ProfileResponse {
            id: Uuid::new_v4(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            institution: Some("St. Mary's".into()),
            class_name: Some("10-B".into()),
            page_count: 3,
            created_at: OffsetDateTime::now_utc(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"pageCount\":3"));
        assert!(json.contains("\"class\":\"10-B\""));
        assert!(!json.contains("password"));
    }

    #[test]
    fn signup_request_accepts_class_key() {
        let body = r#"{
            "username": "ada",
            "email": "ada@example.com",
            "password": "secret1",
            "class": "10-B"
        }"#;
        let request: SignupRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.class_name.as_deref(), Some("10-B"));
        assert_eq!(request.institution, None);
    }
}
