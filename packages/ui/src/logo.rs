//! Brand mark for the header and footer.

use api::SiteSettings;
use dioxus::prelude::*;

use crate::icons::FaCode;
use crate::Icon;

/// What the logo draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandMark {
    /// Uploaded logo image.
    Image(String),
    /// Built-in vector icon.
    Icon,
}

impl BrandMark {
    pub fn resolve(settings: &SiteSettings) -> Self {
        match settings.logo_url() {
            Some(url) => BrandMark::Image(url.to_string()),
            None => BrandMark::Icon,
        }
    }
}

/// The name is shown only when the site enables it and the caller asks for it.
pub fn shows_label(settings: &SiteSettings, show_text: bool) -> bool {
    show_text && settings.site_name_visible()
}

/// Site logo. Settings are passed in by the page that loaded them.
#[component]
pub fn Logo(
    settings: SiteSettings,
    #[props(default = true)] show_text: bool,
) -> Element {
    let name = settings.site_name().unwrap_or("Academy").to_string();
    let label = shows_label(&settings, show_text);

    rsx! {
        a {
            class: "logo inline-flex items-center gap-2",
            href: "/",
            {match BrandMark::resolve(&settings) {
                BrandMark::Image(url) => rsx! {
                    img { class: "logo-image h-8 w-auto", src: "{url}", alt: "{name}" }
                },
                BrandMark::Icon => rsx! {
                    span {
                        class: "logo-icon flex h-8 w-8 items-center justify-center rounded-md bg-orange-500 text-white",
                        Icon { icon: FaCode, width: 18, height: 18 }
                    }
                },
            }}
            if label {
                span { class: "logo-text text-xl font-bold", "{name}" }
            }
        }
    }
}
