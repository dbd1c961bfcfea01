//! Page layout shells

use dioxus::prelude::*;

use super::{CategorySidebar, Header};

/// Content area to the right of the sidebar, below the header.
#[component]
pub fn MainLayout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-light",
            main {
                class: "ml-80 pt-16",
                div { class: "p-6", {children} }
            }
        }
    }
}

/// Standard chrome shared by every page except sign-in: header, category
/// sidebar, content shell.
#[component]
pub fn PageShell(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen",
            Header {}
            CategorySidebar {}
            MainLayout { {children} }
        }
    }
}
