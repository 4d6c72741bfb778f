//! Activity log rows written by the site when a visitor does something.

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Canonical label for a page view.
pub const VIEW_PAGE: &str = "view_page";

/// Label older rows were written with before actions were lowercased.
pub const LEGACY_VIEW_PAGE: &str = "VIEW_PAGE";

/// One row of the `activity_logs` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ActivityLog {
    pub fn new(user_id: Option<Uuid>, action: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            action: action.to_string(),
            created_at: Utc::now(),
        }
    }
}
