//! Sign-in page
//!
//! Lists the configured OAuth providers and offers the demo sign-in. Until
//! real OAuth is wired, every button establishes the demo session.

use dioxus::prelude::*;

use crate::auth::OAUTH_PROVIDERS;
use crate::components::{Button, ButtonSize, ButtonVariant, Card};
use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn SignIn() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    // Already signed in: straight back to the dashboard.
    if session.is_authenticated() {
        navigator.replace(Route::Home {});
        return rsx! {};
    }

    let sign_in_and_go = EventHandler::new({
        let session = session.clone();
        move |_: MouseEvent| {
            session.sign_in();
            navigator.push(Route::Home {});
        }
    });

    rsx! {
        div {
            class: "min-h-screen bg-gradient-light flex items-center justify-center p-4",
            div {
                class: "w-full max-w-md",

                div {
                    class: "text-center mb-8",
                    div {
                        class: "w-16 h-16 bg-gradient-to-br from-electric-blue to-neon-cyan rounded-2xl flex items-center justify-center mx-auto mb-6 shadow-glow text-3xl",
                        "\u{2728}"
                    }
                    h1 {
                        class: "text-3xl font-bold gradient-text mb-2",
                        "Welcome to Hi-API"
                    }
                    p {
                        class: "text-gray-600",
                        "Sign in to access 80+ premium AI services"
                    }
                }

                Card {
                    class: "p-8".to_string(),
                    glow_on_hover: true,
                    div {
                        class: "space-y-4",
                        for provider in OAUTH_PROVIDERS {
                            Button {
                                key: "{provider.id}",
                                variant: ButtonVariant::Glass,
                                size: ButtonSize::Large,
                                class: "w-full justify-start".to_string(),
                                onclick: sign_in_and_go,
                                "Continue with {provider.name}"
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            class: "w-full".to_string(),
                            onclick: sign_in_and_go,
                            "Demo Sign In"
                        }
                    }

                    div {
                        class: "mt-8 pt-6 border-t border-gray-200 text-center",
                        p {
                            class: "text-sm text-gray-600",
                            "By signing in, you agree to our "
                            a { href: "/terms", class: "text-electric-blue hover:underline", "Terms of Service" }
                            " and "
                            a { href: "/privacy", class: "text-electric-blue hover:underline", "Privacy Policy" }
                        }
                    }
                }

                div {
                    class: "mt-8 text-center",
                    h3 {
                        class: "text-lg font-semibold text-gray-900 mb-4",
                        "Start with $5 Credit"
                    }
                    div {
                        class: "grid grid-cols-3 gap-4 text-sm text-gray-600",
                        div {
                            div { class: "text-2xl", "\u{1F3A8}" }
                            div { "Image Generation" }
                        }
                        div {
                            div { class: "text-2xl", "\u{1F3AC}" }
                            div { "Video Creation" }
                        }
                        div {
                            div { class: "text-2xl", "\u{1F3B5}" }
                            div { "Audio Synthesis" }
                        }
                    }
                }
            }
        }
    }
}
