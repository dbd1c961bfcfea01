//! Text and language catalog page

use dioxus::prelude::*;

use crate::catalog::{DEFAULT_FILTERS, DEFAULT_SORTS, TEXT_PROVIDERS};
use crate::components::{CatalogPage, PageShell};

#[component]
pub fn Text() -> Element {
    rsx! {
        PageShell {
            CatalogPage {
                title: "Text & Language",
                subtitle: "Generate and transform text with leading language models",
                icon: "\u{1F9E0}",
                gradient: "from-golden-yellow to-electric-blue",
                search_placeholder: "Search language models...",
                providers: TEXT_PROVIDERS,
                filters: DEFAULT_FILTERS,
                sorts: DEFAULT_SORTS,
            }
        }
    }
}
