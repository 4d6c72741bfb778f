//! Create the admin account, or reset its password if it already exists.

use std::process::ExitCode;

use admin::settings::{load_env_file, Settings};
use admin::store::PgStore;
use admin::workflows::provision_admin;
use admin::AdminError;

#[tokio::main]
async fn main() -> ExitCode {
    admin::init_tracing();
    load_env_file();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "failed to provision admin account");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AdminError> {
    let settings = Settings::new()?;
    let store = PgStore::connect(&settings.database).await?;

    let result = provision_admin(&store, &settings.admin).await;
    store.close().await;

    let user = result?;
    println!("Admin account ready: {} ({})", user.email, user.role);
    Ok(())
}
