use crate::config::Config;
use crate::models::{
    charging::{ChargeDuration, OptimalWindow},
    energy::ForecastSequence,
    error::AppError,
};
use crate::services::timeout::with_timeout;
use serde::de::DeserializeOwned;

// API CONFIGURATION
/// Configuration for the dashboard backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout_ms: u32,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Builds the configuration from the `API_URL` value baked in at compile time.
    pub fn from_env() -> Self {
        let builder = Self::builder();
        match option_env!("API_URL") {
            Some(url) if !url.trim().is_empty() => builder.base_url(url).build(),
            _ => builder.build(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Multi-day fuel mix forecast.
    pub fn energy_url(&self) -> String {
        format!("{}/energy", self.base_url)
    }

    /// Optimal charging window for a session of `duration`.
    pub fn optimal_charging_url(&self, duration: ChargeDuration) -> String {
        let hours = duration.hours();
        format!("{}/optimal-charging?hours={hours}", self.base_url)
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
    timeout_ms: Option<u32>,
}

impl ApiConfigBuilder {
    /// Sets the backend base URL. A trailing slash is ignored.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::DEFAULT_API_URL.to_string());

        ApiConfig {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout_ms: self.timeout_ms.unwrap_or(Config::REQUEST_TIMEOUT_MS),
        }
    }
}

/// Read-only operations the dashboard needs from its backend.
#[allow(async_fn_in_trait)]
pub trait EnergyApi {
    /// Fetches the fuel mix forecast, today first.
    async fn fetch_forecast(&self) -> Result<ForecastSequence, AppError>;

    /// Asks the backend for the cleanest window of the given length.
    async fn fetch_optimal_window(
        &self,
        duration: ChargeDuration,
    ) -> Result<OptimalWindow, AppError>;
}

// DASHBOARD CLIENT
/// HTTP client for the clean energy backend.
#[derive(Debug)]
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client from the build-time environment.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::from_env())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Executes a single GET and decodes the JSON body, bounded by the configured timeout.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        with_timeout(self.fetch(url), self.config.timeout_ms).await
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Malformed response from {url}: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Timeout(self.config.timeout_ms)
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl PartialEq for DashboardClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl EnergyApi for DashboardClient {
    async fn fetch_forecast(&self) -> Result<ForecastSequence, AppError> {
        self.get_json(&self.config.energy_url()).await
    }

    async fn fetch_optimal_window(
        &self,
        duration: ChargeDuration,
    ) -> Result<OptimalWindow, AppError> {
        self.get_json(&self.config.optimal_charging_url(duration))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::energy::DayRecord;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::DEFAULT_API_URL);
        assert_eq!(config.timeout_ms(), Config::REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::builder()
            .base_url("https://grid.example.com/api/")
            .build();
        assert_eq!(config.energy_url(), "https://grid.example.com/api/energy");
    }

    #[test]
    fn test_optimal_charging_url_carries_duration() {
        let config = ApiConfig::builder().base_url("http://backend").build();

        for duration in ChargeDuration::all() {
            let url = config.optimal_charging_url(duration);
            assert_eq!(
                url,
                format!("http://backend/optimal-charging?hours={}", duration.hours())
            );
        }
    }

    #[test]
    fn test_custom_timeout() {
        let config = ApiConfig::builder().timeout_ms(500).build();
        assert_eq!(config.timeout_ms(), 500);
    }

    #[test]
    fn test_client_creation() {
        let client = DashboardClient::with_config(ApiConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_energy_response_parsing() {
        let json = r#"[
            {
                "date": "2025-01-01",
                "metrics": {"gas": 35.2, "wind": 40.1, "coal": 0},
                "clean_energy_percent": 58.3
            },
            {
                "date": "2025-01-02",
                "metrics": {"wind": 60},
                "clean_energy_percent": 60
            }
        ]"#;

        let days: ForecastSequence = serde_json::from_str(json).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].metrics.len(), 3);
        assert_eq!(days[1].date.to_string(), "2025-01-02");
    }

    #[test]
    fn test_energy_response_rejects_loose_records() {
        let json = r#"[{"date": "not a date", "metrics": {}, "clean_energy_percent": 1}]"#;
        assert!(serde_json::from_str::<Vec<DayRecord>>(json).is_err());
    }
}
