//! Startup and serving failures for the SSR host.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
