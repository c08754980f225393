//! Open-Meteo API client

use async_trait::async_trait;
use serde::Deserialize;

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

// ============================================================================
// Wire types
// ============================================================================

/// Geocoding API response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

/// Forecast API response with `current_weather=true`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i32,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response parse error: {0}")]
    Parse(String),
}

// ============================================================================
// Client
// ============================================================================

/// The two calls a lookup needs
#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn geocode(&self, name: &str) -> Result<GeocodingResponse, ApiError>;

    async fn current_weather(&self, lat: f64, lon: f64) -> Result<ForecastResponse, ApiError>;
}

/// Live client for the public Open-Meteo endpoints
#[derive(Clone, Debug, Default)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn geocoding_url(name: &str) -> String {
    format!("{}?name={}", GEOCODING_URL, urlencoding::encode(name))
}

pub fn forecast_url(lat: f64, lon: f64) -> String {
    format!(
        "{}?latitude={}&longitude={}&current_weather=true",
        FORECAST_URL, lat, lon
    )
}

#[async_trait]
impl WeatherApi for OpenMeteoClient {
    async fn geocode(&self, name: &str) -> Result<GeocodingResponse, ApiError> {
        // Status is not checked: an error body has no `results`, which reads as "not found".
        let response = self.http.get(geocoding_url(name)).send().await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn current_weather(&self, lat: f64, lon: f64) -> Result<ForecastResponse, ApiError> {
        let response = self.http.get(forecast_url(lat, lon)).send().await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
