use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Which element a navigable control renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavElement {
    /// Client-side navigation through `leptos_router`.
    #[default]
    Router,
    /// A plain `<a href>` with a full page load.
    Anchor,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-500 text-white \
                 hover:bg-indigo-600 \
                 active:bg-indigo-700 \
                 border border-indigo-500"
            }
            ButtonVariant::Secondary => {
                "bg-gray-100 text-gray-900 \
                 hover:bg-gray-200 \
                 focus:ring-2 focus:ring-gray-300 \
                 active:bg-gray-300 \
                 border border-gray-200"
            }
        }
    }
}

impl ButtonSize {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-2 py-1 text-xs",
            ButtonSize::Medium => "px-3 py-2 text-sm",
            ButtonSize::Large => "px-4 py-2 text-base",
        }
    }
}

pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    full_width: bool,
    extra: &str,
) -> String {
    // disabled buttons always render as secondary
    let variant = if disabled {
        ButtonVariant::Secondary
    } else {
        variant
    };
    let base_classes = "inline-flex items-center justify-center font-medium rounded transition-all duration-150 focus:outline-none no-underline";

    let disabled_classes = if disabled {
        "opacity-50 cursor-not-allowed pointer-events-none"
    } else {
        "cursor-pointer"
    };

    let width_classes = if full_width { "w-full" } else { "" };

    [
        base_classes,
        variant.get_classes(),
        size.get_classes(),
        disabled_classes,
        width_classes,
        extra,
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// A button-styled navigation control. `nav` picks the element it renders as.
#[component]
pub fn LinkButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] nav: NavElement,
    #[prop(into)] href: String,
    children: Children,
) -> impl IntoView {
    let combined_classes = button_classes(variant, size, disabled, full_width, &class);

    match nav {
        NavElement::Router => view! {
            <A href=href attr:class=combined_classes>
                {children()}
            </A>
        }
        .into_any(),
        NavElement::Anchor => view! {
            <a class=combined_classes href=href>
                {children()}
            </a>
        }
        .into_any(),
    }
}
