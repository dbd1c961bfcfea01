//! 3D generation catalog page

use dioxus::prelude::*;

use crate::catalog::{DEFAULT_FILTERS, DEFAULT_SORTS, THREE_D_PROVIDERS};
use crate::components::{CatalogPage, PageShell};

#[component]
pub fn ThreeD() -> Element {
    rsx! {
        PageShell {
            CatalogPage {
                title: "3D Generation",
                subtitle: "Create 3D models and scenes with AI technology",
                icon: "\u{1F4E6}",
                gradient: "from-coral-pink to-iridescent-purple",
                search_placeholder: "Search 3D generators...",
                providers: THREE_D_PROVIDERS,
                filters: DEFAULT_FILTERS,
                sorts: DEFAULT_SORTS,
            }
        }
    }
}
