use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use api::models::{ActivityLog, User};
use api::Role;

use super::{AdminRecord, AdminStore};
use crate::AdminError;

/// In-memory AdminStore for testing.
///
/// Users are keyed by email, mirroring the unique constraint on `users.email`.
/// [`writes`](MemoryStore::writes) counts statements that changed at least one row.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<Mutex<BTreeMap<String, User>>>,
    logs: Arc<Mutex<Vec<ActivityLog>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user without counting it as a write.
    pub fn insert_user(&self, email: &str, role: Role) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password: String::new(),
            role: role.as_str().to_string(),
            name: None,
            created_at: now,
            updated_at: now,
        };
        self.users
            .lock()
            .unwrap()
            .insert(user.email.clone(), user.clone());
        user
    }

    /// Seed an activity log row without counting it as a write.
    pub fn insert_log(&self, action: &str) {
        self.logs.lock().unwrap().push(ActivityLog::new(None, action));
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().values().cloned().collect()
    }

    pub fn actions(&self) -> Vec<String> {
        self.logs
            .lock()
            .unwrap()
            .iter()
            .map(|log| log.action.clone())
            .collect()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

impl AdminStore for MemoryStore {
    async fn find_user(&self, email: &str) -> Result<Option<User>, AdminError> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }

    async fn list_emails(&self) -> Result<Vec<String>, AdminError> {
        Ok(self.users.lock().unwrap().keys().cloned().collect())
    }

    async fn upsert_admin(&self, record: &AdminRecord) -> Result<User, AdminError> {
        let now = Utc::now();
        let user = {
            let mut users = self.users.lock().unwrap();
            let user = users.entry(record.email.clone()).or_insert_with(|| User {
                id: Uuid::new_v4(),
                email: record.email.clone(),
                password: String::new(),
                role: Role::User.as_str().to_string(),
                name: None,
                created_at: now,
                updated_at: now,
            });
            user.password = record.password_hash.clone();
            user.role = Role::Admin.as_str().to_string();
            user.name = Some(record.name.clone());
            user.updated_at = now;
            user.clone()
        };
        self.record_write();
        Ok(user)
    }

    async fn set_role(&self, email: &str, role: Role) -> Result<Option<User>, AdminError> {
        let updated = self.users.lock().unwrap().get_mut(email).map(|user| {
            user.role = role.as_str().to_string();
            user.updated_at = Utc::now();
            user.clone()
        });
        if updated.is_some() {
            self.record_write();
        }
        Ok(updated)
    }

    async fn rename_action(&self, from: &str, to: &str) -> Result<u64, AdminError> {
        let mut changed = 0;
        for log in self.logs.lock().unwrap().iter_mut() {
            if log.action == from {
                log.action = to.to_string();
                changed += 1;
            }
        }
        if changed > 0 {
            self.record_write();
        }
        Ok(changed)
    }
}
