#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Backend responded with {0}")]
    BackendStatus(u16),

    #[error("{0}")]
    Network(String),

    #[error("Unable to reach the backend")]
    Unreachable,

    #[error("Failed to parse response: {0}")]
    Payload(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
