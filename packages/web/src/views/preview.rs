use dioxus::prelude::*;
use ui::{Watermark, WatermarkMode};

use super::{use_site_settings, SiteHeader};

/// Free lesson preview, watermarked with the site name.
#[component]
pub fn Preview(slug: String) -> Element {
    let settings = use_site_settings();
    let mark = settings.site_name().unwrap_or("Preview").to_string();
    let title = slug.replace('-', " ");

    rsx! {
        SiteHeader { settings }
        article {
            class: "preview",
            h1 { "{title}" }
            p { "This lesson is a free preview. Enroll to unlock the full course, exercises and code reviews." }
            Watermark { text: mark, mode: WatermarkMode::Absolute }
        }
    }
}
