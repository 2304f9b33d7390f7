use leptos::prelude::*;
use leptos_icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ArrowLeft,
}

impl Glyph {
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::ArrowLeft => "arrow-left",
        }
    }
}

#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    #[prop(optional, into)] size: Option<String>,
) -> impl IntoView {
    let size = size.unwrap_or_else(|| "14".to_string());

    let icon = match glyph {
        Glyph::ArrowLeft => icondata_fi::FiArrowLeft,
    };

    view! {
        <span class="inline-flex items-center align-middle" data-glyph=glyph.name()>
            <Icon icon=icon width=size.clone() height=size />
        </span>
    }
}
