use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub institution: Option<String>,
    pub class_name: Option<String>,
    pub page_count: i32,
    pub created_at: OffsetDateTime,
}

impl User {
    /// Find a user by email, the login key.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, institution, class_name,
                   page_count, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, institution, class_name,
                   page_count, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with an already hashed password.
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        institution: Option<&str>,
        class_name: Option<&str>,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, institution, class_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, institution, class_name,
                      page_count, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(institution)
        .bind(class_name)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Atomically bump the page counter, returning the new value.
    /// None means the user record no longer exists.
    pub async fn increment_page_count(db: &PgPool, id: Uuid) -> anyhow::Result<Option<i32>> {
        let count = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE users
            SET page_count = page_count + 1
            WHERE id = $1
            RETURNING page_count
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(count)
    }
}

/// True when the error wraps the unique-email index rejecting an insert.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|db| db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_skips_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            institution: None,
            class_name: None,
            page_count: 0,
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn plain_anyhow_error_is_not_a_unique_violation() {
        let err = anyhow::anyhow!("some other failure");
        assert!(!is_unique_violation(&err));
    }
}
