//! # User model
//!
//! [`User`] (server only) is the complete row from the `users` table, loadable with
//! [`sqlx::FromRow`]:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email` — unique; the key every admin script looks users up by.
//! - `password` — Argon2id PHC hash.
//! - `role` — [`Role`] stored as its upper-case text form (`"ADMIN"`, `"USER"`).
//! - `name` — optional display name.
//! - `created_at` / `updated_at` — audit timestamps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Account role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Parsed role; unknown labels read as [`Role::User`].
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}
