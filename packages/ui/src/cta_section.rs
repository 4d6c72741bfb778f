//! Call-to-action blocks rendered from [`Section`] records.
//!
//! Both components resolve their text through [`CtaContent`] first: blank fields take
//! the defaults below, and the action button exists only when the section carries a
//! link.

use api::{Section, SectionBlock};
use dioxus::prelude::*;

use crate::icons::FaArrowRight;
use crate::Icon;

pub const DEFAULT_HEADING: &str = "Ready to start coding?";
pub const DEFAULT_SUBHEADING: &str = "Join thousands of learners shipping real projects.";
pub const DEFAULT_BUTTON_TEXT: &str = "Get started";
pub const DEFAULT_DESTINATION: &str = "/courses";

/// The button of a call-to-action block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaAction {
    pub label: String,
    pub href: String,
}

/// Text of a call-to-action block after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaContent {
    pub heading: String,
    pub subheading: String,
    pub action: Option<CtaAction>,
}

impl CtaContent {
    pub fn from_section(section: &Section) -> Self {
        let action = section.link().map(|href| CtaAction {
            label: or_default(section.cta_text.as_deref(), DEFAULT_BUTTON_TEXT),
            href: href.to_string(),
        });

        Self {
            heading: or_default(Some(&section.title), DEFAULT_HEADING),
            subheading: or_default(Some(&section.subtitle), DEFAULT_SUBHEADING),
            action,
        }
    }

    /// The block shown when a page has no section configured at all.
    pub fn fallback() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            subheading: DEFAULT_SUBHEADING.to_string(),
            action: Some(CtaAction {
                label: DEFAULT_BUTTON_TEXT.to_string(),
                href: DEFAULT_DESTINATION.to_string(),
            }),
        }
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[component]
pub fn CtaSection(section: Section) -> Element {
    let content = CtaContent::from_section(&section);

    rsx! {
        section {
            class: "cta-section mx-auto max-w-4xl px-6 py-16 text-center",
            h2 { class: "cta-heading text-3xl font-bold", "{content.heading}" }
            p { class: "cta-subheading mt-4 text-lg text-neutral-600", "{content.subheading}" }
            if let Some(action) = content.action.clone() {
                CtaButton { action }
            }
        }
    }
}

/// Full-width band closing a page.
///
/// Without a section this renders [`CtaContent::fallback`], which always links to
/// [`DEFAULT_DESTINATION`].
#[component]
pub fn BottomCta(#[props(default)] section: Option<Section>) -> Element {
    let content = match &section {
        Some(section) => CtaContent::from_section(section),
        None => CtaContent::fallback(),
    };

    rsx! {
        section {
            class: "bottom-cta w-full bg-gradient-to-r from-orange-500 to-amber-400 py-20",
            div {
                class: "mx-auto max-w-3xl px-6 text-center text-white",
                h2 { class: "cta-heading text-4xl font-extrabold", "{content.heading}" }
                p { class: "cta-subheading mt-4 text-xl opacity-90", "{content.subheading}" }
                if let Some(action) = content.action.clone() {
                    CtaButton { action }
                }
            }
        }
    }
}

#[component]
fn CtaButton(action: CtaAction) -> Element {
    rsx! {
        a {
            class: "cta-action mt-8 inline-flex items-center gap-2 rounded-lg bg-neutral-900 px-6 py-3 font-semibold text-white",
            href: "{action.href}",
            "{action.label}"
            Icon { icon: FaArrowRight, width: 14, height: 14 }
        }
    }
}

/// Render a page's sections in order, each with the component its variant names.
#[component]
pub fn SectionList(sections: Vec<SectionBlock>) -> Element {
    rsx! {
        for (index, block) in sections.into_iter().enumerate() {
            {match block {
                SectionBlock::Cta(section) => rsx! {
                    CtaSection { key: "{index}", section }
                },
                SectionBlock::BottomCta(section) => rsx! {
                    BottomCta { key: "{index}", section }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_defaults_for_blank_fields() {
        let content = CtaContent::from_section(&Section::new("  ", ""));
        assert_eq!(content.heading, DEFAULT_HEADING);
        assert_eq!(content.subheading, DEFAULT_SUBHEADING);
        assert!(content.action.is_none());
    }

    #[test]
    fn test_link_without_text_uses_default_label() {
        let section = Section {
            cta_link: Some("/pricing".into()),
            ..Section::new("Plans", "Pick one")
        };
        let content = CtaContent::from_section(&section);
        assert_eq!(
            content.action,
            Some(CtaAction {
                label: DEFAULT_BUTTON_TEXT.into(),
                href: "/pricing".into(),
            })
        );
    }

    #[test]
    fn test_text_without_link_has_no_action() {
        let section = Section {
            cta_text: Some("Enroll".into()),
            ..Section::new("Plans", "Pick one")
        };
        assert!(CtaContent::from_section(&section).action.is_none());
    }

    #[test]
    fn test_cta_section_without_link_renders_no_action() {
        fn app() -> Element {
            rsx! {
                CtaSection {
                    section: Section {
                        cta_text: Some("Enroll".into()),
                        ..Section::new("Rust for web devs", "Eight weeks")
                    },
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Rust for web devs"));
        assert!(html.contains("Eight weeks"));
        assert!(!html.contains("cta-action"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn test_cta_section_with_link_renders_anchor() {
        fn app() -> Element {
            rsx! {
                CtaSection {
                    section: Section::new("Rust for web devs", "Eight weeks")
                        .with_cta("Enroll now", "/courses/rust-web"),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("cta-action"));
        assert!(html.contains("href=\"/courses/rust-web\""));
        assert!(html.contains("Enroll now"));
    }

    #[test]
    fn test_bottom_cta_without_section_links_to_default_destination() {
        fn app() -> Element {
            rsx! { BottomCta {} }
        }

        let html = render(app);
        assert!(html.contains(DEFAULT_HEADING));
        assert!(html.contains(&format!("href=\"{DEFAULT_DESTINATION}\"")));
    }

    #[test]
    fn test_bottom_cta_with_linkless_section_renders_no_action() {
        fn app() -> Element {
            rsx! { BottomCta { section: Section::new("Questions?", "Write to us") } }
        }

        let html = render(app);
        assert!(html.contains("Questions?"));
        assert!(!html.contains("cta-action"));
    }

    #[test]
    fn test_section_list_dispatches_on_kind() {
        fn app() -> Element {
            rsx! {
                SectionList {
                    sections: vec![
                        SectionBlock::Cta(Section::new("First", "a")),
                        SectionBlock::BottomCta(Section::new("Last", "b").with_cta("Go", "/go")),
                    ],
                }
            }
        }

        let html = render(app);
        let first = html.find("cta-section").unwrap();
        let last = html.find("bottom-cta").unwrap();
        assert!(first < last);
        assert_eq!(html.matches("cta-action").count(), 1);
    }
}
