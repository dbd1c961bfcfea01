//! Audio generation catalog page

use dioxus::prelude::*;

use crate::catalog::{AUDIO_PROVIDERS, DEFAULT_FILTERS, DEFAULT_SORTS};
use crate::components::{CatalogPage, PageShell};

#[component]
pub fn Audio() -> Element {
    rsx! {
        PageShell {
            CatalogPage {
                title: "Audio Generation",
                subtitle: "Create voices, music, and sound effects with AI",
                icon: "\u{1F3A7}",
                gradient: "from-neon-green to-golden-yellow",
                search_placeholder: "Search audio generators...",
                providers: AUDIO_PROVIDERS,
                filters: DEFAULT_FILTERS,
                sorts: DEFAULT_SORTS,
            }
        }
    }
}
