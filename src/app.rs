use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path, StaticSegment,
};

use crate::pages::auth::{LoginPage, SignupPage};
use crate::theme::Theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // the server provides the configured theme; the client falls back to the default
    let theme = use_context::<Theme>().unwrap_or_default();

    view! {
        <Stylesheet id="leptos" href="/pkg/authgate.css" />
        <Title text="authgate" />
        <Router>
            <main>
                <AuthRoutes theme=theme />
            </main>
        </Router>
    }
}

/// `/login` and `/signup`, with `/` redirecting to `/login`. Must sit inside a `<Router>`.
#[component]
pub fn AuthRoutes(theme: Theme) -> impl IntoView {
    let login_theme = theme.clone();
    let signup_theme = theme;

    view! {
        <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=|| view! { <Redirect path="/login" /> } />
            <Route
                path=path!("login")
                view=move || view! { <LoginPage theme=login_theme.clone() /> }
            />
            <Route
                path=path!("signup")
                view=move || view! { <SignupPage theme=signup_theme.clone() /> }
            />
        </Routes>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use leptos_router::components::provide_server_redirect;
    use leptos_router::location::RequestUrl;
    use std::sync::{Arc, Mutex};

    fn render_at(url: &str) -> (String, Option<String>) {
        let redirected = Arc::new(Mutex::new(None::<String>));
        let sink = redirected.clone();

        let html = Owner::new().with(|| {
            provide_context(RequestUrl::new(url));
            provide_server_redirect(move |path| {
                *sink.lock().unwrap() = Some(path.to_string());
            });
            view! {
                <Router>
                    <AuthRoutes theme=Theme::default() />
                </Router>
            }
            .to_html()
        });

        let redirect = redirected.lock().unwrap().clone();
        (html, redirect)
    }

    #[test]
    fn test_login_route_offers_signup() {
        let (html, redirect) = render_at("/login");
        assert!(html.contains("Don't have an account?"));
        assert!(html.contains("Sign up"));
        assert!(html.contains(r#"href="/signup""#));
        assert_eq!(redirect, None);
    }

    #[test]
    fn test_signup_route_offers_login() {
        let (html, redirect) = render_at("/signup");
        assert!(html.contains("Already have an account?"));
        assert!(html.contains("Log in"));
        assert!(html.contains(r#"href="/login""#));
        assert_eq!(redirect, None);
    }

    #[test]
    fn test_root_redirects_to_login() {
        let (_, redirect) = render_at("/");
        assert_eq!(redirect.as_deref(), Some("/login"));
    }

    #[test]
    fn test_unknown_route_falls_back() {
        let (html, redirect) = render_at("/nowhere");
        assert!(html.contains("Page not found."));
        assert_eq!(redirect, None);
    }
}
