use api::SiteSettings;
use dioxus::prelude::*;
use ui::{Logo, Switch};

use crate::DarkMode;

#[component]
pub fn SiteHeader(settings: SiteSettings) -> Element {
    let DarkMode(mut dark) = use_context::<DarkMode>();

    rsx! {
        header {
            class: "site-header",
            Logo { settings }
            Switch {
                checked: dark(),
                label: "Dark mode",
                on_change: move |next| dark.set(next),
            }
        }
    }
}
