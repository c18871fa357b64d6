use crate::models::{error::AppError, prediction::NextGamePrediction};

// CONSTANTS
const BASE_URL: &str = "https://lakers-win-api.onrender.com";
const PREDICTION_PATH: &str = "/next-game-prediction";

// API CONFIGURATION
/// Configuration for the prediction backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Constructs the full URL of the next-game prediction endpoint.
    ///
    /// The backend serves a health banner at the bare base URL; the payload
    /// itself always lives under the fixed prediction path.
    pub fn prediction_url(&self) -> String {
        format!("{}{PREDICTION_PATH}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// PREDICTOR CLIENT
/// HTTP client for the win-predictor backend.
pub struct PredictorClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PredictorClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the next-game prediction payload.
    pub async fn fetch_next_game(&self) -> Result<NextGamePrediction, AppError> {
        let response = self
            .http
            .get(self.config.prediction_url())
            .send()
            .await
            .map_err(|e| Self::classify_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::BackendStatus(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Payload(e.to_string()))
    }

    /// Converts a transport-level reqwest error into an `AppError`, falling
    /// back to a generic message when the error carries none.
    fn classify_transport_error(error: &reqwest::Error) -> AppError {
        let message = error.to_string();
        if message.is_empty() {
            AppError::Unreachable
        } else {
            AppError::Network(message)
        }
    }
}

impl Default for PredictorClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the next-game prediction using default configuration.
pub async fn fetch_next_game_prediction() -> Result<NextGamePrediction, AppError> {
    PredictorClient::new()?.fetch_next_game().await
}
