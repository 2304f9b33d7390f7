use leptos::prelude::*;

use crate::components::ui::{ButtonSize, ButtonVariant, Glyph, GlyphIcon, LinkButton, NavElement};
use crate::theme::Theme;

/// Where the header's call-to-action sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTarget {
    ToLogin,
    #[default]
    ToSignup,
}

impl From<bool> for AuthTarget {
    fn from(to_login: bool) -> Self {
        if to_login {
            AuthTarget::ToLogin
        } else {
            AuthTarget::ToSignup
        }
    }
}

impl AuthTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            AuthTarget::ToLogin => "Already have an account?",
            AuthTarget::ToSignup => "Don't have an account?",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            AuthTarget::ToLogin => "Log in",
            AuthTarget::ToSignup => "Sign up",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            AuthTarget::ToLogin => "/login",
            AuthTarget::ToSignup => "/signup",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            AuthTarget::ToLogin => AuthTarget::ToSignup,
            AuthTarget::ToSignup => AuthTarget::ToLogin,
        }
    }
}

#[component]
fn TextBlock(children: Children) -> impl IntoView {
    view! { <span class="inline-block px-[9px]">{children()}</span> }
}

/// Navigation row for the login and signup screens: a "Back" link on the left
/// and a prompt plus call-to-action on the right.
///
/// The back link only runs `on_back` when one is given; otherwise the
/// surrounding page decides what clicking it means.
#[component]
pub fn AuthHeader(
    #[prop(optional)] to_login: bool,
    #[prop(optional)] theme: Theme,
    #[prop(optional)] nav: NavElement,
    #[prop(optional)] on_back: Option<Callback<web_sys::MouseEvent>>,
) -> impl IntoView {
    let target = AuthTarget::from(to_login);
    log::debug!("rendering auth header for {target:?}");

    let back_style = format!("color: {}", theme.primary_color);
    let form_style = format!("color: {}", theme.dark_grey_color);

    view! {
        <div class="w-full flex flex-row justify-between items-center">
            <div
                class="font-bold text-[14px] leading-[17px] cursor-pointer hover:opacity-80"
                style=back_style
                on:click=move |ev| {
                    if let Some(handler) = on_back {
                        handler.run(ev);
                    }
                }
            >
                <GlyphIcon glyph=Glyph::ArrowLeft />
                <TextBlock>"Back"</TextBlock>
            </div>
            <div class="text-[11px] leading-[13px]" style=form_style>
                <TextBlock>{target.prompt()}</TextBlock>
                <LinkButton
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Small
                    nav=nav
                    href=target.href()
                >
                    {target.action_label()}
                </LinkButton>
            </div>
        </div>
    }
}
