use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::user::{User, UserCredentials, UserUpdate};

/// One method per statement against the `users` table.
///
/// Each call checks a connection out of the pool for the duration of the
/// statement; the connection goes back to the pool on every exit path.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All rows in store order. A decode failure on any row fails the whole
    /// call; nothing collected so far is returned.
    pub async fn select_all(&self) -> Result<Vec<User>, DatabaseError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, username, email, role FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn select_404(&self, id: i32) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>("SELECT id, name, username, email, role FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("user {}", id)))
    }

    pub async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>, DatabaseError> {
        let row = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, password, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Insert a user. `password_hash` must already be hashed.
    pub async fn insert(
        &self,
        name: &str,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO users (name, username, email, password) VALUES ($1, $2, $3, $4)")
            .bind(name)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Update name, username and email. Zero affected rows is `NotFound`.
    pub async fn update_404(&self, id: i32, update: &UserUpdate) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE users SET name = $1, username = $2, email = $3 WHERE id = $4")
            .bind(&update.name)
            .bind(&update.username)
            .bind(&update.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("user {}", id)));
        }
        Ok(())
    }

    /// Delete by id. Zero affected rows is `NotFound`.
    pub async fn delete_404(&self, id: i32) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("user {}", id)));
        }
        Ok(())
    }
}
