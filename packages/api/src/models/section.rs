//! # Landing page content model
//!
//! A page is an ordered list of [`SectionBlock`]s. Each block is a variant tag plus a
//! [`Section`] record, written in TOML as `[[sections]]` tables:
//!
//! ```toml
//! [[sections]]
//! kind = "cta"
//! title = "Learn Rust by building"
//! subtitle = "Twelve projects, one compiler"
//! ctaText = "Browse courses"
//! ctaLink = "/courses"
//! ```
//!
//! Sections are read-only to the components that render them; the content file is
//! edited by hand or by content tooling.

use serde::{Deserialize, Serialize};

/// Text and optional call-to-action for one renderable block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub cta_link: Option<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            ..Self::default()
        }
    }

    pub fn with_cta(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.cta_text = Some(text.into());
        self.cta_link = Some(link.into());
        self
    }

    /// The link target, if one is set and not blank.
    pub fn link(&self) -> Option<&str> {
        non_blank(self.cta_link.as_deref())
    }
}

/// A section tagged with the block it renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBlock {
    Cta(Section),
    BottomCta(Section),
}

/// All sections of one page, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub sections: Vec<SectionBlock>,
}

impl PageContent {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

/// Trimmed value, or `None` when absent or whitespace only.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
