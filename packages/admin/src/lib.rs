//! # Admin tooling for the course site database
//!
//! Three run-once maintenance programs share this library:
//!
//! | Binary | Workflow | Failure exit code |
//! |--------|----------|-------------------|
//! | `create-admin` | [`workflows::provision_admin`] — upsert the configured admin account | `1` |
//! | `make-admin` | [`workflows::promote_to_admin`] — give an existing user the `ADMIN` role | `0` (logged) |
//! | `fix-activity-logs` | [`workflows::normalize_activity_actions`] — rewrite `VIEW_PAGE` rows to `view_page` | `0` (logged) |
//!
//! Workflows are written against the [`store::AdminStore`] trait. The binaries use
//! [`store::PgStore`], which owns one pool for the life of the process and is closed
//! on every path once it has been opened; tests use [`store::MemoryStore`].

pub mod error;
pub mod settings;
pub mod store;
pub mod workflows;

pub use error::AdminError;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr so stdout carries only the script's result lines.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
