//! # API crate — shared models and server functions for the course site
//!
//! Everything the landing site and the admin tooling agree on lives here: the
//! database models, the content model that drives the landing page sections,
//! password hashing and the PostgreSQL pool.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2id password hashing and verification |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | `User`/`Role`, `ActivityLog`, `Section` content blocks, `SiteSettings` |
//!
//! ## Server functions exposed here
//!
//! - `get_site_settings` — branding settings consumed by the `Logo` component

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use models::{PageContent, Role, Section, SectionBlock, SiteSettings};

/// Keys of the `settings` table that make up [`SiteSettings`].
pub const SITE_SETTING_KEYS: [&str; 3] = ["site_logo", "site_name", "show_site_name"];

/// Read the branding settings from the `settings` table.
#[cfg(feature = "server")]
#[get("/api/site/settings")]
pub async fn get_site_settings() -> Result<SiteSettings, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(String, String)> =
        sqlx::query_as("SELECT key, value FROM settings WHERE key = ANY($1)")
            .bind(&SITE_SETTING_KEYS[..])
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::debug!(count = rows.len(), "loaded site settings");

    Ok(SiteSettings::from_pairs(rows))
}

#[cfg(not(feature = "server"))]
#[get("/api/site/settings")]
pub async fn get_site_settings() -> Result<SiteSettings, ServerFnError> {
    Ok(SiteSettings::default())
}
