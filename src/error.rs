use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid color `{0}`: expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("invalid value for {var}: {source}")]
    InvalidEnvVar {
        var: &'static str,
        #[source]
        source: Box<ThemeError>,
    },
}

#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load leptos configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
