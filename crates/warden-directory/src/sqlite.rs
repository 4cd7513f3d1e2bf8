//! SQLite-backed user store.

use crate::error::StoreError;
use crate::store::{UserStore, UserUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::fs;
use std::path::Path;
use warden_auth::{DirectoryError, IdentityDirectory};
use warden_core::User;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL
);
"#;

type UserRow = (String, String, String, String, DateTime<Utc>);

fn row_to_user(row: UserRow) -> User {
    let (id, name, email, password_hash, created_at) = row;
    User {
        id,
        name,
        email,
        password_hash,
        created_at,
    }
}

/// User store backed by a local SQLite file.
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Open (creating if needed) the database at `path` and apply the schema.
    pub async fn connect(path: &str) -> Result<Self, StoreError> {
        ensure_parent_dir(path).map_err(|e| StoreError::Database(e.to_string()))?;
        let pool = SqlitePool::connect(&sqlite_url(path)).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests).
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }
}

fn sqlite_url(path: &str) -> String {
    format!("sqlite://{path}?mode=rwc")
}

fn ensure_parent_dir(path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_user))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_user))
    }

    async fn update(&self, id: &str, update: &UserUpdate) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE users SET name = COALESCE(?, name), email = COALESCE(?, email) WHERE id = ?",
        )
        .bind(update.name.as_deref())
        .bind(update.email.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at FROM users ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(row_to_user).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}

#[async_trait]
impl IdentityDirectory for SqliteUserStore {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, DirectoryError> {
        UserStore::get_by_id(self, id)
            .await
            .map_err(|e| DirectoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteUserStore {
        // One connection: each pooled connection to :memory: would get its
        // own empty database.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteUserStore::from_pool(pool).await.unwrap()
    }

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.into(),
            name: format!("User {id}"),
            email: email.into(),
            password_hash: "hash".into(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_round_trip() {
        let store = store().await;
        store.create(&user("u1", "a@example.com")).await.unwrap();

        let found = UserStore::get_by_id(&store, "u1").await.unwrap().unwrap();
        assert_eq!(found.email, "a@example.com");
        assert_eq!(found.password_hash, "hash");

        let by_email = store.get_by_email("a@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, "u1");
    }

    #[tokio::test]
    async fn test_unique_email_maps_to_email_taken() {
        let store = store().await;
        store.create(&user("u1", "a@example.com")).await.unwrap();
        let err = store.create(&user("u2", "a@example.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::EmailTaken));
    }

    #[tokio::test]
    async fn test_update_and_delete_not_found() {
        let store = store().await;
        assert!(matches!(
            store.update("ghost", &UserUpdate::default()).await.unwrap_err(),
            StoreError::NotFound
        ));
        assert!(matches!(
            store.delete("ghost").await.unwrap_err(),
            StoreError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_connect_creates_file_and_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/warden.sqlite");
        let store = SqliteUserStore::connect(path.to_str().unwrap()).await.unwrap();

        store.create(&user("u1", "a@example.com")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let store = store().await;
        store.create(&user("u1", "a@example.com")).await.unwrap();
        store.create(&user("u2", "b@example.com")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
