//! Provider card component

use dioxus::prelude::*;

use super::{Button, ButtonVariant, Card};
use crate::types::{Price, Provider, Quality, Speed};

#[derive(Props, Clone, PartialEq)]
pub struct ProviderCardProps {
    pub provider: Provider,
}

/// Card displaying a single provider listing record.
#[component]
pub fn ProviderCard(props: ProviderCardProps) -> Element {
    let provider = props.provider;
    let speed_styles = get_speed_styles(provider.speed);
    let quality_badge = get_quality_badge(provider.quality);
    let price = price_label(provider.price);

    rsx! {
        Card {
            class: "p-6 h-full relative overflow-hidden group flex flex-col".to_string(),
            glow_on_hover: true,

            // Badge
            if let Some(badge) = provider.badge {
                div {
                    class: "absolute top-4 right-4 bg-gradient-to-r from-electric-blue to-neon-cyan text-white px-3 py-1 rounded-full text-xs font-semibold",
                    "{badge}"
                }
            }

            // Provider Header
            div {
                class: "flex items-start space-x-4 mb-4",
                div { class: "text-4xl", "{provider.logo}" }
                div {
                    class: "flex-1",
                    h3 {
                        class: "text-xl font-bold text-gray-900 mb-1",
                        "{provider.display_name}"
                    }
                    div {
                        class: "flex items-center space-x-2 mb-2",
                        div {
                            class: "flex items-center space-x-1",
                            svg {
                                class: "w-4 h-4 text-yellow-400 fill-current",
                                view_box: "0 0 24 24",
                                path {
                                    d: "M11.48 3.5a.56.56 0 011.04 0l2.13 5.11a.56.56 0 00.47.35l5.52.44c.5.04.7.66.32.99l-4.2 3.6a.56.56 0 00-.18.56l1.28 5.38a.56.56 0 01-.84.61l-4.72-2.88a.56.56 0 00-.59 0l-4.72 2.88a.56.56 0 01-.84-.6l1.28-5.39a.56.56 0 00-.18-.56l-4.2-3.6a.56.56 0 01.32-.99l5.52-.44a.56.56 0 00.47-.35z"
                                }
                            }
                            span {
                                class: "text-sm font-medium text-gray-700",
                                "{provider.rating}"
                            }
                        }
                        span {
                            class: "px-2 py-1 rounded-full text-xs font-medium {quality_badge}",
                            "{provider.quality.label()} quality"
                        }
                    }
                    p { class: "text-sm text-gray-600", "{provider.description}" }
                }
            }

            // Pricing
            div {
                class: "flex items-center space-x-2 mb-4",
                span { class: "text-lg font-bold text-gray-900", "{price}" }
                span { class: "text-sm text-gray-600", "per {provider.price.unit}" }
                span {
                    class: "text-xs font-medium {speed_styles.text}",
                    "{speed_styles.icon} {provider.speed.label()}"
                }
                if let Some(duration) = provider.max_duration_secs {
                    span {
                        class: "text-xs bg-purple-100 text-purple-700 px-2 py-0.5 rounded-full",
                        "up to {duration}s"
                    }
                }
            }

            // Features
            div {
                class: "space-y-2 mb-4",
                h4 { class: "text-sm font-semibold text-gray-700", "Key Features:" }
                div {
                    class: "flex flex-wrap gap-1",
                    for feature in provider.features.iter().take(3) {
                        span {
                            class: "text-xs bg-gray-100 text-gray-700 px-2 py-1 rounded-full",
                            "{feature}"
                        }
                    }
                    if provider.features.len() > 3 {
                        span {
                            class: "text-xs text-gray-500",
                            "+{provider.features.len() - 3} more"
                        }
                    }
                }
            }

            // Styles
            if !provider.styles.is_empty() {
                div {
                    class: "space-y-2 mb-6",
                    h4 { class: "text-sm font-semibold text-gray-700", "Supported Styles:" }
                    div {
                        class: "flex flex-wrap gap-1",
                        for style in provider.styles.iter().take(3) {
                            span {
                                class: "text-xs bg-blue-100 text-blue-700 px-2 py-1 rounded-full",
                                "{style}"
                            }
                        }
                        if provider.styles.len() > 3 {
                            span {
                                class: "text-xs text-blue-500",
                                "+{provider.styles.len() - 3} more"
                            }
                        }
                    }
                }
            }

            // Action Buttons
            div {
                class: "flex space-x-2 mt-auto",
                Button {
                    variant: ButtonVariant::Primary,
                    class: "flex-1".to_string(),
                    "\u{2728} Generate"
                }
                Button { variant: ButtonVariant::Glass, "\u{25B6} Preview" }
                Button { variant: ButtonVariant::Ghost, "\u{2699} Config" }
            }
        }
    }
}

struct SpeedStyles {
    icon: &'static str,
    text: &'static str,
}

fn get_speed_styles(speed: Speed) -> SpeedStyles {
    match speed {
        Speed::Fast => SpeedStyles {
            icon: "\u{26A1}",
            text: "text-green-600",
        },
        Speed::Medium => SpeedStyles {
            icon: "\u{23F1}",
            text: "text-yellow-600",
        },
        Speed::Slow => SpeedStyles {
            icon: "\u{23F1}",
            text: "text-red-600",
        },
    }
}

fn get_quality_badge(quality: Quality) -> &'static str {
    match quality {
        Quality::High => "bg-green-100 text-green-800",
        Quality::Medium => "bg-yellow-100 text-yellow-800",
        Quality::Low => "bg-red-100 text-red-800",
    }
}

/// "$0.08", "$0.025" — up to three decimals, trailing zeros trimmed.
fn price_label(price: Price) -> String {
    let mut amount = format!("{:.3}", price.base);
    while amount.ends_with('0') {
        amount.pop();
    }
    if amount.ends_with('.') {
        amount.pop();
    }
    format!("${amount}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_label_trims_trailing_zeros() {
        let label = |base| {
            price_label(Price {
                base,
                unit: "image",
            })
        };
        assert_eq!(label(0.08), "$0.08");
        assert_eq!(label(0.025), "$0.025");
        assert_eq!(label(0.5), "$0.5");
        assert_eq!(label(3.0), "$3");
    }
}
