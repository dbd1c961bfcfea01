//! Fixed top header with navigation and the demo session controls

use dioxus::prelude::*;

use super::{Button, ButtonVariant};
use crate::routes::Route;
use crate::session::use_session;
use crate::types::SessionStatus;

const NAV_ITEMS: &[(&str, Route)] = &[
    ("Dashboard", Route::Home {}),
    ("Image", Route::Image {}),
    ("Video", Route::Video {}),
    ("Audio", Route::Audio {}),
    ("3D", Route::ThreeD {}),
    ("Text", Route::Text {}),
    ("Workflows", Route::Workflows {}),
];

#[component]
pub fn Header() -> Element {
    let session = use_session();
    let mut menu_open = use_signal(|| false);
    let mut profile_open = use_signal(|| false);

    let status = session.status();
    let user = session.user.read().clone();

    let sign_in = {
        let session = session.clone();
        move |_: MouseEvent| session.sign_in()
    };
    let sign_out = {
        let session = session.clone();
        move |_: MouseEvent| {
            session.sign_out();
            profile_open.set(false);
        }
    };

    rsx! {
        header {
            class: "fixed top-0 left-0 right-0 z-50 glass border-b border-white/20",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex items-center justify-between h-16",

                    // Logo
                    Link {
                        to: Route::Home {},
                        class: "flex items-center space-x-2",
                        div {
                            class: "w-8 h-8 bg-gradient-to-br from-electric-blue to-neon-cyan rounded-lg flex items-center justify-center shadow-glow text-white font-bold",
                            "\u{26A1}"
                        }
                        span { class: "text-xl font-bold gradient-text", "Hi-API" }
                    }

                    // Desktop Navigation
                    nav {
                        class: "hidden md:flex items-center space-x-8",
                        for (name, route) in NAV_ITEMS {
                            Link {
                                to: route.clone(),
                                class: "text-gray-700 hover:text-electric-blue transition-colors duration-200 font-medium",
                                "{name}"
                            }
                        }
                    }

                    // Right Side Actions
                    div {
                        class: "flex items-center space-x-4",

                        if status == SessionStatus::Loading {
                            div { class: "w-8 h-8 animate-pulse bg-gray-200 rounded-full" }
                        } else if status == SessionStatus::Authenticated {
                            // Credits Display
                            div {
                                class: "hidden sm:flex items-center space-x-2 glass px-3 py-1 rounded-full",
                                span {
                                    class: "text-sm font-semibold text-gray-700",
                                    "{session.credits()}"
                                }
                                span { class: "text-xs text-gray-500", "credits" }
                            }

                            // Profile Dropdown
                            div {
                                class: "relative",
                                button {
                                    class: "flex items-center space-x-2 glass p-2 rounded-full hover:shadow-glow transition-all duration-200",
                                    onclick: move |_| profile_open.set(!profile_open()),
                                    div {
                                        class: "w-8 h-8 bg-gradient-to-br from-iridescent-purple to-electric-blue rounded-full flex items-center justify-center text-white text-sm",
                                        "\u{1F464}"
                                    }
                                }

                                if profile_open() {
                                    div {
                                        class: "absolute right-0 mt-2 w-48 glass border border-white/20 rounded-lg shadow-lg py-1",
                                        if let Some(user) = &user {
                                            div {
                                                class: "px-4 py-2 border-b border-white/20",
                                                p { class: "text-sm font-medium text-gray-900", "{user.name}" }
                                                p { class: "text-xs text-gray-600", "{user.email}" }
                                                p {
                                                    class: "text-xs text-electric-blue",
                                                    "{user.tier.label()} tier"
                                                }
                                            }
                                        }
                                        button {
                                            class: "flex items-center w-full px-4 py-2 text-sm text-red-600 hover:bg-white/10 transition-colors",
                                            onclick: sign_out,
                                            "Sign Out"
                                        }
                                    }
                                }
                            }
                        } else {
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: sign_in,
                                "Demo Sign In"
                            }
                        }

                        // Mobile Menu Button
                        button {
                            class: "md:hidden glass p-2 rounded-lg text-gray-700",
                            onclick: move |_| menu_open.set(!menu_open()),
                            if menu_open() { "\u{2715}" } else { "\u{2630}" }
                        }
                    }
                }

                // Mobile Navigation
                if menu_open() {
                    div {
                        class: "md:hidden border-t border-white/20 py-4",
                        nav {
                            class: "flex flex-col space-y-2",
                            for (name, route) in NAV_ITEMS {
                                Link {
                                    to: route.clone(),
                                    class: "px-4 py-2 text-gray-700 hover:text-electric-blue hover:bg-white/10 rounded-lg transition-all duration-200",
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
