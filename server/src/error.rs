//! Startup and serve failures for the SSR host.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {var} value {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
