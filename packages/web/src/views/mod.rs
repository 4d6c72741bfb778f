use api::SiteSettings;
use dioxus::prelude::*;

mod header;
pub use header::SiteHeader;

mod home;
pub use home::Home;

mod preview;
pub use preview::Preview;

/// Branding settings from the server, or the defaults until they arrive.
pub(crate) fn use_site_settings() -> SiteSettings {
    let settings = use_resource(|| async {
        api::get_site_settings().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "site settings unavailable, using defaults");
            SiteSettings::default()
        })
    });

    settings.cloned().unwrap_or_default()
}
