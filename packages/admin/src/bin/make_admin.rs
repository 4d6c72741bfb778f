//! Promote an existing user to the ADMIN role.

use std::process::ExitCode;

use admin::settings::{load_env_file, Settings};
use admin::store::PgStore;
use admin::workflows::{promote_to_admin, Promotion};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    admin::init_tracing();
    load_env_file();

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "failed to load settings");
            return ExitCode::FAILURE;
        }
    };
    let store = match PgStore::connect(&settings.database).await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "failed to connect to database");
            return ExitCode::FAILURE;
        }
    };

    let email = settings.promote.email;
    let result = promote_to_admin(&store, &email).await;
    store.close().await;

    match result {
        Ok(Promotion::Promoted(user)) => {
            println!("{} is now {}", user.email, user.role);
        }
        Ok(Promotion::NotFound { known_emails }) => {
            println!("No user found with email {}", email);
            println!("Registered users:");
            for known in known_emails {
                println!("  {}", known);
            }
        }
        // Logged only; the exit status stays 0.
        Err(e) => error!(error = %e, email = %email, "failed to promote user"),
    }

    ExitCode::SUCCESS
}
