use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload asserting the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,        // user ID
    pub email: String,    // login email at issue time
    pub username: String, // display name at issue time
    pub iat: usize,       // issued at (unix timestamp)
    pub exp: usize,       // expires at (unix timestamp)
}
