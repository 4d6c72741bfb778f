use dioxus::prelude::*;

use views::{Home, Preview};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/preview/:slug")]
    Preview { slug: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Dark mode flag shared by the header switch and the page wrapper.
#[derive(Clone, Copy)]
pub(crate) struct DarkMode(pub Signal<bool>);

fn main() {
    #[cfg(feature = "server")]
    {
        init_tracing();

        let result = tokio::runtime::Runtime::new()
            .map_err(|e| e.to_string())
            .and_then(|rt| rt.block_on(launch_server()).map_err(|e| e.to_string()));
        if let Err(e) = result {
            tracing::error!("Server failed: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    // Initialize database pool
    let pool = api::db::get_pool().await?;

    // Run migrations
    sqlx::migrate!("../api/migrations").run(pool).await?;

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    let dark = use_context_provider(|| DarkMode(Signal::new(false)));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::LANDING_CSS }

        div {
            class: if (dark.0)() { "dark" } else { "" },
            Router::<Route> {}
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_installed_before_runtime() {
        init_tracing();
        assert!(tracing::dispatcher::has_been_set());
    }
}
