//! Home page: hero, platform stats, featured providers

use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, Card, CardVariant, PageShell};
use crate::routes::Route;

struct FeaturedProvider {
    name: &'static str,
    category: &'static str,
    logo: &'static str,
    description: &'static str,
    rating: f32,
    gradient: &'static str,
}

static FEATURED_PROVIDERS: &[FeaturedProvider] = &[
    FeaturedProvider {
        name: "DALL-E 3",
        category: "Image",
        logo: "\u{1F3A8}",
        description: "OpenAI's most advanced image generation model",
        rating: 4.9,
        gradient: "from-electric-blue to-neon-cyan",
    },
    FeaturedProvider {
        name: "Minimax Video",
        category: "Video",
        logo: "\u{1F3AC}",
        description: "High-quality video generation with multiple models",
        rating: 4.8,
        gradient: "from-iridescent-purple to-coral-pink",
    },
    FeaturedProvider {
        name: "ElevenLabs",
        category: "Audio",
        logo: "\u{1F399}",
        description: "Ultra-realistic voice synthesis and cloning",
        rating: 4.9,
        gradient: "from-neon-green to-golden-yellow",
    },
    FeaturedProvider {
        name: "Meshy 3D",
        category: "3D",
        logo: "\u{1F3AD}",
        description: "Text-to-3D and image-to-3D generation",
        rating: 4.7,
        gradient: "from-coral-pink to-iridescent-purple",
    },
    FeaturedProvider {
        name: "GPT-4",
        category: "Text",
        logo: "\u{1F9E0}",
        description: "Most advanced language model for any task",
        rating: 4.9,
        gradient: "from-golden-yellow to-electric-blue",
    },
];

static PLATFORM_STATS: &[(&str, &str)] = &[
    ("80+", "AI Services"),
    ("50K+", "Happy Users"),
    ("120+", "Countries"),
    ("99.9%", "Uptime"),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        PageShell {
            // Hero Section
            section {
                class: "relative mb-12",
                div {
                    class: "text-center max-w-4xl mx-auto",
                    h1 {
                        class: "text-5xl md:text-7xl font-bold mb-6 gradient-text",
                        "The Ultimate AI Platform"
                    }
                    p {
                        class: "text-xl md:text-2xl text-gray-600 mb-8 max-w-3xl mx-auto",
                        "Access 80+ premium AI services in one place. Generate stunning images, videos, audio, 3D models, and text with the world's most advanced AI providers."
                    }
                    div {
                        class: "flex flex-col sm:flex-row gap-4 justify-center",
                        Link {
                            to: Route::Image {},
                            Button {
                                size: ButtonSize::ExtraLarge,
                                variant: ButtonVariant::Primary,
                                "\u{2728} Start Creating"
                            }
                        }
                        Link {
                            to: Route::Workflows {},
                            Button {
                                size: ButtonSize::ExtraLarge,
                                variant: ButtonVariant::Glass,
                                "Explore Services \u{2192}"
                            }
                        }
                    }
                }
            }

            // Stats Section
            section {
                class: "mb-16",
                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-6",
                    for (value, label) in PLATFORM_STATS {
                        Card {
                            class: "p-6 text-center".to_string(),
                            glow_on_hover: true,
                            div { class: "text-2xl font-bold text-gray-900 mb-1", "{value}" }
                            div { class: "text-sm text-gray-600", "{label}" }
                        }
                    }
                }
            }

            // Featured Providers
            section {
                class: "mb-16",
                div {
                    class: "text-center mb-8",
                    h2 {
                        class: "text-3xl font-bold text-gray-900 mb-4",
                        "Featured AI Services"
                    }
                    p {
                        class: "text-lg text-gray-600",
                        "Handpicked premium providers for exceptional results"
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for provider in FEATURED_PROVIDERS {
                        Card {
                            class: "p-6 h-full".to_string(),
                            glow_on_hover: true,
                            div {
                                class: "flex items-center space-x-3 mb-4",
                                div {
                                    class: "w-12 h-12 rounded-xl bg-gradient-to-br {provider.gradient} flex items-center justify-center text-2xl shadow-lg",
                                    "{provider.logo}"
                                }
                                div {
                                    class: "flex-1",
                                    h3 { class: "font-bold text-lg text-gray-900", "{provider.name}" }
                                    div {
                                        class: "flex items-center space-x-2",
                                        span { class: "text-sm text-gray-600", "{provider.category}" }
                                        span {
                                            class: "text-sm font-medium text-gray-700",
                                            "\u{2605} {provider.rating}"
                                        }
                                    }
                                }
                            }
                            p { class: "text-gray-600 mb-4", "{provider.description}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                class: "w-full".to_string(),
                                "Try Now \u{2192}"
                            }
                        }
                    }
                }
            }

            // CTA Section
            section {
                Card {
                    class: "p-12 text-center bg-gradient-to-br from-electric-blue/5 to-neon-cyan/5".to_string(),
                    variant: CardVariant::Gradient,
                    div { class: "text-5xl mb-6", "\u{26A1}" }
                    h2 {
                        class: "text-3xl font-bold text-gray-900 mb-4",
                        "Ready to Create Something Amazing?"
                    }
                    p {
                        class: "text-lg text-gray-600 mb-8 max-w-2xl mx-auto",
                        "Join thousands of creators using Hi-API to bring their ideas to life. Start with $5 and unlock unlimited possibilities."
                    }
                    div {
                        class: "flex flex-col sm:flex-row gap-4 justify-center",
                        Link {
                            to: Route::SignIn {},
                            Button {
                                size: ButtonSize::Large,
                                variant: ButtonVariant::Primary,
                                "\u{2728} Get Started - $5 Minimum"
                            }
                        }
                        Button {
                            size: ButtonSize::Large,
                            variant: ButtonVariant::Glass,
                            "View Pricing"
                        }
                    }
                }
            }
        }
    }
}
