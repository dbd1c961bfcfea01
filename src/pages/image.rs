//! Image generation catalog page

use dioxus::prelude::*;

use crate::catalog::{DEFAULT_SORTS, IMAGE_FILTERS, IMAGE_PROVIDERS};
use crate::components::{CatalogPage, PageShell};

#[component]
pub fn Image() -> Element {
    rsx! {
        PageShell {
            CatalogPage {
                title: "Image Generation",
                subtitle: "Create stunning images with AI-powered generators",
                icon: "\u{1F3A8}",
                gradient: "from-electric-blue to-neon-cyan",
                search_placeholder: "Search image generators...",
                providers: IMAGE_PROVIDERS,
                filters: IMAGE_FILTERS,
                sorts: DEFAULT_SORTS,
            }
        }
    }
}
