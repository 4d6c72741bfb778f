//! # Store — the queries the admin workflows need
//!
//! [`AdminStore`] is the seam between the workflows and the database. Every method is
//! a single statement against the `users` or `activity_logs` table:
//!
//! | Method | Statement |
//! |--------|-----------|
//! | [`find_user`](AdminStore::find_user) | lookup by unique email |
//! | [`list_emails`](AdminStore::list_emails) | all emails, sorted |
//! | [`upsert_admin`](AdminStore::upsert_admin) | insert or overwrite password/role/name, keyed by email |
//! | [`set_role`](AdminStore::set_role) | update one user's role, `None` if no row matched |
//! | [`rename_action`](AdminStore::rename_action) | bulk relabel activity rows, returns rows changed |

use std::future::Future;

use api::models::User;
use api::Role;

use crate::AdminError;

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// An admin account ready to be written. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRecord {
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

pub trait AdminStore {
    fn find_user(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, AdminError>>;
    fn list_emails(&self) -> impl Future<Output = Result<Vec<String>, AdminError>>;
    fn upsert_admin(
        &self,
        record: &AdminRecord,
    ) -> impl Future<Output = Result<User, AdminError>>;
    fn set_role(
        &self,
        email: &str,
        role: Role,
    ) -> impl Future<Output = Result<Option<User>, AdminError>>;
    fn rename_action(
        &self,
        from: &str,
        to: &str,
    ) -> impl Future<Output = Result<u64, AdminError>>;
}
