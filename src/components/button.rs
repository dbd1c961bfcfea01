//! Button component

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Glass,
    Gradient,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-gradient-to-r from-electric-blue to-neon-cyan text-white hover:shadow-glow focus:ring-electric-blue"
            }
            ButtonVariant::Secondary => {
                "bg-white/10 backdrop-blur-md border border-white/20 text-gray-700 hover:bg-white/20 focus:ring-gray-300"
            }
            ButtonVariant::Ghost => "text-gray-700 hover:bg-white/10 focus:ring-gray-300",
            ButtonVariant::Glass => "glass text-gray-700 hover:shadow-glow focus:ring-electric-blue",
            ButtonVariant::Gradient => {
                "bg-gradient-to-r from-iridescent-purple to-coral-pink text-white hover:shadow-glow focus:ring-iridescent-purple"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1.5 text-sm",
            ButtonSize::Medium => "px-4 py-2 text-sm",
            ButtonSize::Large => "px-6 py-3 text-base",
            ButtonSize::ExtraLarge => "px-8 py-4 text-lg",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub class: String,
    #[props(default)]
    pub icon: Option<Element>,
    #[props(default)]
    pub loading: bool,
    #[props(default)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: EventHandler<MouseEvent>,
    pub children: Element,
}

/// Button with a style variant and size enumeration; disabled while loading.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = props.variant.classes();
    let size = props.size.classes();
    let extra = props.class;
    let onclick = props.onclick;
    let icon = props.icon;
    let children = props.children;

    rsx! {
        button {
            class: "inline-flex items-center justify-center rounded-lg font-medium transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed btn-3d {variant} {size} {extra}",
            disabled: props.disabled || props.loading,
            onclick: move |evt| onclick.call(evt),

            if props.loading {
                div { class: "w-4 h-4 border-2 border-current border-t-transparent rounded-full mr-2 animate-spin" }
            }
            if let Some(icon) = &icon {
                span { class: "mr-2", {icon.clone()} }
            }
            {children}
        }
    }
}
