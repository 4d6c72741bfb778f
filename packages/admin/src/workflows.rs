//! The three maintenance workflows, independent of any particular database.

use api::auth::hash_password;
use api::models::User;
use api::Role;
use tracing::{info, warn};

use crate::settings::Admin;
use crate::store::{AdminRecord, AdminStore};
use crate::AdminError;

/// Create the admin account, or overwrite its password, role and name if the email
/// is already registered. Running it again only replaces the password hash.
pub async fn provision_admin<S: AdminStore>(
    store: &S,
    admin: &Admin,
) -> Result<User, AdminError> {
    let password_hash = hash_password(&admin.password).map_err(AdminError::Hash)?;

    let user = store
        .upsert_admin(&AdminRecord {
            email: admin.email.clone(),
            password_hash,
            name: admin.name.clone(),
        })
        .await?;

    info!(email = %user.email, id = %user.id, "admin account provisioned");
    Ok(user)
}

/// Result of [`promote_to_admin`].
#[derive(Debug)]
pub enum Promotion {
    Promoted(User),
    /// Nothing was changed; these are the emails that do exist.
    NotFound { known_emails: Vec<String> },
}

/// Give the user with `email` the `ADMIN` role.
pub async fn promote_to_admin<S: AdminStore>(
    store: &S,
    email: &str,
) -> Result<Promotion, AdminError> {
    if store.find_user(email).await?.is_some() {
        if let Some(user) = store.set_role(email, Role::Admin).await? {
            info!(email = %user.email, "user promoted to admin");
            return Ok(Promotion::Promoted(user));
        }
    }

    let known_emails = store.list_emails().await?;
    warn!(email, known = known_emails.len(), "no user with this email");
    Ok(Promotion::NotFound { known_emails })
}

/// Relabel every activity log row whose action is exactly `from`. Returns the
/// number of rows changed.
pub async fn normalize_activity_actions<S: AdminStore>(
    store: &S,
    from: &str,
    to: &str,
) -> Result<u64, AdminError> {
    let changed = store.rename_action(from, to).await?;
    info!(from, to, changed, "activity log actions normalized");
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use api::auth::verify_password;
    use api::models::{LEGACY_VIEW_PAGE, VIEW_PAGE};

    fn admin(password: &str) -> Admin {
        Admin {
            email: "admin@example.com".into(),
            password: password.into(),
            name: "Admin".into(),
        }
    }

    #[tokio::test]
    async fn test_provision_creates_admin() {
        let store = MemoryStore::new();

        let user = provision_admin(&store, &admin("first-secret")).await.unwrap();

        assert!(user.is_admin());
        assert_eq!(user.name.as_deref(), Some("Admin"));
        assert!(verify_password("first-secret", &user.password).unwrap());
        assert_eq!(store.users().len(), 1);
    }

    #[tokio::test]
    async fn test_provision_twice_keeps_one_record_with_latest_password() {
        let store = MemoryStore::new();

        let first = provision_admin(&store, &admin("first-secret")).await.unwrap();
        let second = provision_admin(&store, &admin("second-secret")).await.unwrap();

        let users = store.users();
        assert_eq!(users.len(), 1);
        assert_eq!(first.id, second.id);
        assert_eq!(users[0].password, second.password);
        assert!(verify_password("second-secret", &users[0].password).unwrap());
        assert!(!verify_password("first-secret", &users[0].password).unwrap());
    }

    #[tokio::test]
    async fn test_provision_overwrites_existing_user() {
        let store = MemoryStore::new();
        let existing = store.insert_user("admin@example.com", Role::User);

        let user = provision_admin(&store, &admin("secret")).await.unwrap();

        assert_eq!(user.id, existing.id);
        assert!(user.is_admin());
        assert_eq!(store.users().len(), 1);
    }

    #[tokio::test]
    async fn test_promote_existing_user() {
        let store = MemoryStore::new();
        store.insert_user("instructor@example.com", Role::User);

        let outcome = promote_to_admin(&store, "instructor@example.com").await.unwrap();

        let Promotion::Promoted(user) = outcome else {
            panic!("expected promotion");
        };
        assert_eq!(user.role(), Role::Admin);
        assert!(store.users()[0].is_admin());
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn test_promote_missing_user_lists_emails_without_writing() {
        let store = MemoryStore::new();
        store.insert_user("zoe@example.com", Role::User);
        store.insert_user("ada@example.com", Role::User);

        let outcome = promote_to_admin(&store, "nobody@example.com").await.unwrap();

        let Promotion::NotFound { known_emails } = outcome else {
            panic!("expected not found");
        };
        assert_eq!(known_emails, vec!["ada@example.com", "zoe@example.com"]);
        assert_eq!(store.writes(), 0);
        assert!(store.users().iter().all(|u| !u.is_admin()));
    }

    #[tokio::test]
    async fn test_normalize_counts_and_is_repeatable() {
        let store = MemoryStore::new();
        for _ in 0..3 {
            store.insert_log(LEGACY_VIEW_PAGE);
        }
        store.insert_log(VIEW_PAGE);
        store.insert_log("enroll_course");
        store.insert_log("View_Page");

        let changed = normalize_activity_actions(&store, LEGACY_VIEW_PAGE, VIEW_PAGE)
            .await
            .unwrap();
        assert_eq!(changed, 3);

        let actions = store.actions();
        assert!(!actions.iter().any(|a| a == LEGACY_VIEW_PAGE));
        assert_eq!(actions.iter().filter(|a| *a == VIEW_PAGE).count(), 4);
        assert!(actions.iter().any(|a| a == "View_Page"));

        let changed = normalize_activity_actions(&store, LEGACY_VIEW_PAGE, VIEW_PAGE)
            .await
            .unwrap();
        assert_eq!(changed, 0);
    }
}
