//! Rewrite legacy `VIEW_PAGE` activity labels to `view_page`.

use std::process::ExitCode;

use admin::settings::Settings;
use admin::store::PgStore;
use admin::workflows::normalize_activity_actions;
use api::models::{LEGACY_VIEW_PAGE, VIEW_PAGE};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    admin::init_tracing();
    dotenvy::dotenv().ok();

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

    let result = normalize_activity_actions(&store, LEGACY_VIEW_PAGE, VIEW_PAGE).await;
    store.close().await;

    match result {
        Ok(changed) => println!(
            "Updated {} activity log rows from {} to {}",
            changed, LEGACY_VIEW_PAGE, VIEW_PAGE
        ),
        // Logged only; the exit status stays 0.
        Err(e) => error!(error = %e, "failed to normalize activity log actions"),
    }

    ExitCode::SUCCESS
}
