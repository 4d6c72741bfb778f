//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const LANDING_CSS: Asset = asset!("/assets/landing.css");

mod cta_section;
pub use cta_section::{
    BottomCta, CtaAction, CtaContent, CtaSection, SectionList, DEFAULT_BUTTON_TEXT,
    DEFAULT_DESTINATION, DEFAULT_HEADING, DEFAULT_SUBHEADING,
};

mod logo;
pub use logo::{shows_label, BrandMark, Logo};

mod switch;
pub use switch::{activate, Switch};

mod watermark;
pub use watermark::{Watermark, WatermarkMode, WATERMARK_TILES};
