//! Card component

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Glass,
    Solid,
    Gradient,
}

impl CardVariant {
    fn classes(&self) -> &'static str {
        match self {
            CardVariant::Glass => "glass",
            CardVariant::Solid => "bg-white shadow-lg border border-gray-200",
            CardVariant::Gradient => {
                "bg-gradient-to-br from-white/10 to-white/5 backdrop-blur-xl border border-white/20"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(default)]
    pub variant: CardVariant,
    #[props(default = true)]
    pub hover_3d: bool,
    #[props(default)]
    pub glow_on_hover: bool,
    #[props(default)]
    pub class: String,
    pub children: Element,
}

/// Rounded container with hover/glow affordances handled in CSS.
#[component]
pub fn Card(props: CardProps) -> Element {
    let variant = props.variant.classes();
    let hover = if props.hover_3d { "btn-3d" } else { "" };
    let glow = if props.glow_on_hover { "hover:shadow-glow" } else { "" };
    let extra = props.class;
    let children = props.children;

    rsx! {
        div {
            class: "rounded-xl transition-all duration-300 {variant} {hover} {glow} {extra}",
            {children}
        }
    }
}
