//! Workflows page: multi-step templates chaining services together

use dioxus::prelude::*;

use crate::catalog::WORKFLOW_TEMPLATES;
use crate::components::{Button, ButtonVariant, Card, PageShell};

#[component]
pub fn Workflows() -> Element {
    rsx! {
        PageShell {
            div {
                class: "mb-8",
                div {
                    class: "flex items-center justify-between mb-4",
                    div {
                        class: "flex items-center space-x-3",
                        div {
                            class: "w-12 h-12 bg-gradient-to-br from-neon-cyan to-neon-green rounded-xl flex items-center justify-center text-2xl",
                            "\u{1F500}"
                        }
                        div {
                            h1 { class: "text-3xl font-bold text-gray-900", "Workflows" }
                            p {
                                class: "text-gray-600",
                                "Chain AI services together for complex tasks"
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        "+ Create Workflow"
                    }
                }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
                for template in WORKFLOW_TEMPLATES {
                    Card {
                        class: "p-6 h-full flex flex-col".to_string(),
                        glow_on_hover: true,
                        div {
                            class: "flex items-center justify-between mb-4",
                            span {
                                class: "text-xs bg-cyan-100 text-cyan-700 px-2 py-1 rounded-full",
                                "{template.category}"
                            }
                            span {
                                class: "text-xs text-gray-500",
                                "{template.steps} steps"
                            }
                        }
                        h3 {
                            class: "text-xl font-bold text-gray-900 mb-2",
                            "{template.name}"
                        }
                        p {
                            class: "text-sm text-gray-600 mb-6 flex-grow",
                            "{template.description}"
                        }
                        div {
                            class: "flex space-x-2 mt-auto",
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "flex-1".to_string(),
                                "\u{25B6} Run Workflow"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                "\u{2699} Customize"
                            }
                        }
                    }
                }
            }
        }
    }
}
