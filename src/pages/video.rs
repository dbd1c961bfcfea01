//! Video generation catalog page

use dioxus::prelude::*;

use crate::catalog::{VIDEO_FILTERS, VIDEO_PROVIDERS, VIDEO_SORTS};
use crate::components::{CatalogPage, PageShell};

#[component]
pub fn Video() -> Element {
    rsx! {
        PageShell {
            CatalogPage {
                title: "Video Generation",
                subtitle: "Create cinematic videos with AI-powered generators",
                icon: "\u{1F3AC}",
                gradient: "from-iridescent-purple to-coral-pink",
                search_placeholder: "Search video generators...",
                providers: VIDEO_PROVIDERS,
                filters: VIDEO_FILTERS,
                sorts: VIDEO_SORTS,
            }
        }
    }
}
