//! Repeated text overlay for protected course content.

use dioxus::prelude::*;

/// Number of text tiles in one overlay.
pub const WATERMARK_TILES: usize = 40;

/// How the overlay is anchored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatermarkMode {
    /// Covers the viewport.
    #[default]
    Fixed,
    /// Covers the nearest positioned container.
    Absolute,
}

impl WatermarkMode {
    pub fn position(&self) -> &'static str {
        match self {
            WatermarkMode::Fixed => "fixed",
            WatermarkMode::Absolute => "absolute",
        }
    }
}

/// Non-interactive overlay repeating `text` across its area.
#[component]
pub fn Watermark(text: String, #[props(default)] mode: WatermarkMode) -> Element {
    let position = mode.position();

    rsx! {
        div {
            class: "watermark",
            aria_hidden: "true",
            style: "position: {position}; inset: 0; z-index: 50; overflow: hidden; pointer-events: none; user-select: none;",
            div {
                class: "watermark-grid",
                style: "position: absolute; inset: -50%; display: grid; grid-template-columns: repeat(5, 1fr); gap: 6rem 4rem; align-content: center; transform: rotate(-30deg); opacity: 0.08;",
                for index in 0..WATERMARK_TILES {
                    span {
                        key: "{index}",
                        class: "watermark-tile",
                        style: "white-space: nowrap; font-size: 1.25rem; font-weight: 600;",
                        "{text}"
                    }
                }
            }
        }
    }
}
