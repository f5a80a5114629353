use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::identity::models::AccountId;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::Username;
use crate::identity::errors::IdentityError;
use crate::identity::ports::IdentityRepository;

pub struct SqliteIdentityRepository {
    pool: SqlitePool,
}

impl SqliteIdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Raw row shape; conversion back into domain types happens in `TryFrom`.
#[derive(sqlx::FromRow)]
struct IdentityRow {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = IdentityError;

    fn try_from(row: IdentityRow) -> Result<Self, Self::Error> {
        Ok(Identity {
            id: AccountId::from_string(&row.id)?,
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

/// Map a write failure, converting a lost uniqueness race into a conflict.
fn map_write_error(e: sqlx::Error) -> IdentityError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return IdentityError::Conflict;
        }
    }
    IdentityError::DatabaseError(e.to_string())
}

#[async_trait]
impl IdentityRepository for SqliteIdentityRepository {
    async fn insert(&self, identity: Identity) -> Result<Identity, IdentityError> {
        sqlx::query(
            r#"
            INSERT INTO identities (id, username, email, password_hash, is_active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(identity.id.to_string())
        .bind(identity.username.as_str())
        .bind(identity.email.as_str())
        .bind(&identity.password_hash)
        .bind(identity.is_active)
        .bind(identity.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(identity)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Identity>, IdentityError> {
        let row: Option<IdentityRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM identities
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        row.map(Identity::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError> {
        let row: Option<IdentityRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM identities
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        row.map(Identity::try_from).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, IdentityError> {
        let found: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT 1 FROM identities WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, IdentityError> {
        let found: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT 1 FROM identities WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError> {
        let rows: Vec<IdentityRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM identities
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Identity::try_from).collect()
    }

    async fn update(&self, identity: Identity) -> Result<Identity, IdentityError> {
        let result = sqlx::query(
            r#"
            UPDATE identities
            SET username = ?2, email = ?3, password_hash = ?4, is_active = ?5
            WHERE id = ?1
            "#,
        )
        .bind(identity.id.to_string())
        .bind(identity.username.as_str())
        .bind(identity.email.as_str())
        .bind(&identity.password_hash)
        .bind(identity.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(IdentityError::NotFound(identity.id.to_string()));
        }

        Ok(identity)
    }

    async fn delete(&self, id: &AccountId) -> Result<(), IdentityError> {
        let result = sqlx::query(
            r#"
            DELETE FROM identities
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(IdentityError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
