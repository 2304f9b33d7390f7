use leptos::prelude::*;
use web_sys::window;

use crate::components::auth_header::{AuthHeader, AuthTarget};
use crate::theme::Theme;

#[component]
fn AuthPage(offer: AuthTarget, title: &'static str, theme: Theme) -> impl IntoView {
    let go_back = Callback::new(|_: web_sys::MouseEvent| history_back());

    view! {
        <div class="min-h-screen bg-gray-50 flex justify-center">
            <div class="w-full max-w-md p-6 space-y-8">
                <AuthHeader
                    to_login=matches!(offer, AuthTarget::ToLogin)
                    theme=theme
                    on_back=go_back
                />
                <h1 class="text-2xl font-bold text-gray-800">{title}</h1>
            </div>
        </div>
    }
}

/// The login screen offers a way to sign up instead.
#[component]
pub fn LoginPage(theme: Theme) -> impl IntoView {
    view! { <AuthPage offer=AuthTarget::ToSignup title="Log in" theme=theme /> }
}

/// The signup screen offers a way to log in instead.
#[component]
pub fn SignupPage(theme: Theme) -> impl IntoView {
    view! { <AuthPage offer=AuthTarget::ToLogin title="Sign up" theme=theme /> }
}

fn history_back() {
    if let Some(window) = window() {
        if let Ok(history) = window.history() {
            if let Err(e) = history.back() {
                log::warn!("history.back() failed: {e:?}");
            }
        }
    }
}
