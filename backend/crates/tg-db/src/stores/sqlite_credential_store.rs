use crate::{DbError, Result as DbErrorResult};

use tg_core::{CredentialStore, StoreError, StoreResult, UserIdentity, normalize_email};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "users";

/// Credential store on SQLite. Email uniqueness is the table's UNIQUE
/// constraint, so concurrent registrations race safely.
#[derive(Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn create(&self, user: &UserIdentity) -> StoreResult<()> {
        let email = normalize_email(&user.email);

        sqlx::query(
            r#"
              INSERT INTO users (
                  id, email, password_hash, first_name, last_name, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &email))?;

        debug!("Inserted user {}", user.id);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<UserIdentity> {
        let row = sqlx::query(
            r#"
              SELECT id, email, password_hash, first_name, last_name, created_at, updated_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        match row {
            Some(row) => Ok(identity_from_row(&row)?),
            None => Err(StoreError::not_found(id.to_string())),
        }
    }

    async fn get_by_email(&self, email: &str) -> StoreResult<UserIdentity> {
        let email = normalize_email(email);

        let row = sqlx::query(
            r#"
              SELECT id, email, password_hash, first_name, last_name, created_at, updated_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(&email)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        match row {
            Some(row) => Ok(identity_from_row(&row)?),
            None => Err(StoreError::not_found(email)),
        }
    }

    async fn update(&self, user: &UserIdentity) -> StoreResult<()> {
        let email = normalize_email(&user.email);

        let result = sqlx::query(
            r#"
              UPDATE users
              SET email = ?, password_hash = ?, first_name = ?, last_name = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.updated_at.timestamp())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &email))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(user.id.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(read_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id.to_string()));
        }
        Ok(())
    }
}

fn identity_from_row(row: &SqliteRow) -> DbErrorResult<UserIdentity> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(UserIdentity {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::corrupt_row(TABLE, format!("bad id '{}': {}", id, e)))?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        created_at: timestamp(created_at)?,
        updated_at: timestamp(updated_at)?,
    })
}

fn timestamp(secs: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::corrupt_row(TABLE, format!("timestamp {} out of range", secs)))
}

#[track_caller]
fn write_error(e: sqlx::Error, email: &str) -> StoreError {
    let is_unique_violation = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if is_unique_violation {
        StoreError::duplicate_email(email)
    } else {
        read_error(e)
    }
}

#[track_caller]
fn read_error(e: sqlx::Error) -> StoreError {
    error!("User table query failed: {}", e);
    DbError::from(e).into()
}
