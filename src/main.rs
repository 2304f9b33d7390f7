use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::{
            body::Body as AxumBody,
            extract::State,
            http::Request,
            response::IntoResponse,
            routing::get,
            Router,
        };
        use dotenv::dotenv;
        use env_logger::Env;
        use authgate::app::*;
        use authgate::error::ServerError;
        use authgate::theme::Theme;
        use leptos::prelude::*;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use tower_http::trace::TraceLayer;

        #[derive(axum::extract::FromRef, Clone)]
        struct AppState {
            leptos_options: LeptosOptions,
            theme: Theme,
        }

        #[tokio::main]
        async fn main() {
            dotenv().ok();
            env_logger::init_from_env(Env::default().default_filter_or("info"));

            if let Err(e) = run().await {
                log::error!("{e}");
                std::process::exit(1);
            }
        }

        async fn run() -> Result<(), ServerError> {
            let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
            let addr = conf.leptos_options.site_addr;
            let leptos_options = conf.leptos_options;

            let theme = Theme::from_env()?;
            log::info!(
                "using theme primary={} dark_grey={}",
                theme.primary_color,
                theme.dark_grey_color
            );

            // Generate the list of routes in your Leptos App
            let routes = generate_route_list(App);

            let app_state = AppState {
                leptos_options: leptos_options.clone(),
                theme,
            };

            let app = Router::new()
                .leptos_routes_with_handler(routes, get(|State(app_state): State<AppState>, request: Request<AxumBody>| async move {
                    let leptos_options = app_state.leptos_options.clone();
                    let handler = leptos_axum::render_app_to_stream_with_context(
                        move || {
                            provide_context(app_state.theme.clone());
                        },
                        move || shell(leptos_options.clone())
                    );
                    handler(request).await.into_response()
                }))
                .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<AxumBody>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }))
                .with_state(app_state);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .map_err(|source| ServerError::Bind { addr, source })?;
            log::info!("listening on http://{}", &addr);
            axum::serve(listener, app.into_make_service()).await?;

            Ok(())
        }
    } else {
        pub fn main() {
            // no client-side main function
            // see lib.rs for hydration function instead
        }
    }
}
