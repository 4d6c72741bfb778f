use api::PageContent;
use dioxus::prelude::*;
use ui::{BottomCta, SectionList};

use super::{use_site_settings, SiteHeader};

const HOME_CONTENT: &str = include_str!("../../content/home.toml");

#[component]
pub fn Home() -> Element {
    let settings = use_site_settings();
    let sections = use_hook(|| match PageContent::from_toml(HOME_CONTENT) {
        Ok(content) => content.sections,
        Err(e) => {
            tracing::warn!(error = %e, "invalid home page content");
            Vec::new()
        }
    });

    rsx! {
        SiteHeader { settings }
        main {
            SectionList { sections }
        }
        BottomCta {}
    }
}
