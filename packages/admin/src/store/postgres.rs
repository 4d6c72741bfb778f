use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use api::models::User;
use api::Role;

use super::{AdminRecord, AdminStore};
use crate::settings::Database;
use crate::AdminError;

/// PostgreSQL store owning the script's pool.
///
/// Call [`close`](PgStore::close) before exiting, whatever the workflow returned.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database: &Database) -> Result<Self, AdminError> {
        let pool = PgPoolOptions::new()
            .max_connections(database.connections)
            .connect(&database.url)
            .await?;
        tracing::debug!(connections = database.connections, "database pool opened");
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn close(self) {
        self.pool.close().await;
        tracing::debug!("database pool closed");
    }
}

impl AdminStore for PgStore {
    async fn find_user(&self, email: &str) -> Result<Option<User>, AdminError> {
        let user = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn list_emails(&self) -> Result<Vec<String>, AdminError> {
        let emails = sqlx::query_scalar("SELECT email FROM users ORDER BY email")
            .fetch_all(&self.pool)
            .await?;
        Ok(emails)
    }

    async fn upsert_admin(&self, record: &AdminRecord) -> Result<User, AdminError> {
        let user = sqlx::query_as(
            "INSERT INTO users (email, password, role, name) VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO UPDATE SET
                password = EXCLUDED.password,
                role = EXCLUDED.role,
                name = EXCLUDED.name,
                updated_at = NOW()
             RETURNING *",
        )
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(Role::Admin.as_str())
        .bind(&record.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn set_role(&self, email: &str, role: Role) -> Result<Option<User>, AdminError> {
        let user = sqlx::query_as(
            "UPDATE users SET role = $2, updated_at = NOW() WHERE email = $1 RETURNING *",
        )
        .bind(email)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn rename_action(&self, from: &str, to: &str) -> Result<u64, AdminError> {
        let result = sqlx::query("UPDATE activity_logs SET action = $2 WHERE action = $1")
            .bind(from)
            .bind(to)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
