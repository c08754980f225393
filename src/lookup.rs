//! City lookup: geocode the name, then fetch current conditions

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::WeatherApi;
use crate::state::WeatherResult;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name.";
pub const NOT_FOUND_MESSAGE: &str = "City not found. Try another one.";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching data. Please try again later.";

/// Why a lookup produced no result
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LookupError {
    #[error("empty city name")]
    EmptyQuery,
    #[error("no geocoding match for {0:?}")]
    NotFound(String),
    #[error("fetch failed: {0}")]
    Fetch(String),
}

impl LookupError {
    /// The message shown in place of a result
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::EmptyQuery => EMPTY_QUERY_MESSAGE,
            LookupError::NotFound(_) => NOT_FOUND_MESSAGE,
            LookupError::Fetch(_) => FETCH_FAILED_MESSAGE,
        }
    }
}

/// Resolve `query` to a city and fetch its current weather.
///
/// Blank input never reaches the API. The geocoder sees the raw query,
/// surrounding whitespace included. Only the first geocoding match is used,
/// and no forecast request is made when there is none.
pub async fn perform_lookup(
    api: &dyn WeatherApi,
    query: &str,
) -> Result<WeatherResult, LookupError> {
    if query.trim().is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let geo = api
        .geocode(query)
        .await
        .map_err(|e| LookupError::Fetch(e.to_string()))?;

    let Some(place) = geo.results.and_then(|results| results.into_iter().next()) else {
        return Err(LookupError::NotFound(query.to_string()));
    };

    let forecast = api
        .current_weather(place.latitude, place.longitude)
        .await
        .map_err(|e| LookupError::Fetch(e.to_string()))?;

    let current = forecast.current_weather;
    Ok(WeatherResult {
        location_name: place.name,
        country_name: place.country.unwrap_or_default(),
        temperature_celsius: current.temperature,
        wind_speed_kmh: current.windspeed,
        weather_code: current.weathercode,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::{
        ApiError, CurrentWeather, ForecastResponse, GeocodingResponse, GeocodingResult,
    };

    /// Scripted API that records every call
    #[derive(Default)]
    struct FakeApi {
        geocode: Option<GeocodingResponse>,
        forecast: Option<CurrentWeather>,
        geocode_calls: Mutex<Vec<String>>,
        forecast_calls: Mutex<Vec<(f64, f64)>>,
    }

    impl FakeApi {
        fn geocode_calls(&self) -> Vec<String> {
            self.geocode_calls.lock().unwrap().clone()
        }

        fn forecast_calls(&self) -> Vec<(f64, f64)> {
            self.forecast_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherApi for FakeApi {
        async fn geocode(&self, name: &str) -> Result<GeocodingResponse, ApiError> {
            self.geocode_calls.lock().unwrap().push(name.to_string());
            self.geocode
                .clone()
                .ok_or_else(|| ApiError::Parse("connection reset".into()))
        }

        async fn current_weather(&self, lat: f64, lon: f64) -> Result<ForecastResponse, ApiError> {
            self.forecast_calls.lock().unwrap().push((lat, lon));
            self.forecast
                .clone()
                .map(|current_weather| ForecastResponse { current_weather })
                .ok_or_else(|| ApiError::Parse("missing field `current_weather`".into()))
        }
    }

    fn berlin() -> GeocodingResponse {
        GeocodingResponse {
            results: Some(vec![
                GeocodingResult {
                    name: "Berlin".into(),
                    latitude: 52.52,
                    longitude: 13.41,
                    country: Some("Germany".into()),
                },
                GeocodingResult {
                    name: "Berlin".into(),
                    latitude: 44.47,
                    longitude: -71.18,
                    country: Some("United States".into()),
                },
            ]),
        }
    }

    fn drizzle() -> CurrentWeather {
        CurrentWeather {
            temperature: 8.3,
            windspeed: 17.6,
            weathercode: 53,
        }
    }

    #[tokio::test]
    async fn test_blank_query_makes_no_calls() {
        let api = FakeApi::default();
        for query in ["", "   ", "\t\n"] {
            let result = perform_lookup(&api, query).await;
            assert_eq!(result, Err(LookupError::EmptyQuery));
        }
        assert!(api.geocode_calls().is_empty());
        assert!(api.forecast_calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_uses_first_match() {
        let api = FakeApi {
            geocode: Some(berlin()),
            forecast: Some(drizzle()),
            ..Default::default()
        };

        let result = perform_lookup(&api, "Berlin").await.unwrap();

        assert_eq!(
            result,
            WeatherResult {
                location_name: "Berlin".into(),
                country_name: "Germany".into(),
                temperature_celsius: 8.3,
                wind_speed_kmh: 17.6,
                weather_code: 53,
            }
        );
        assert_eq!(api.forecast_calls(), vec![(52.52, 13.41)]);
    }

    #[tokio::test]
    async fn test_raw_query_is_sent_untrimmed() {
        let api = FakeApi {
            geocode: Some(berlin()),
            forecast: Some(drizzle()),
            ..Default::default()
        };
        perform_lookup(&api, "  Berlin ").await.unwrap();
        assert_eq!(api.geocode_calls(), vec!["  Berlin ".to_string()]);
    }

    #[tokio::test]
    async fn test_no_matches_skips_forecast() {
        for geocode in [
            GeocodingResponse { results: None },
            GeocodingResponse {
                results: Some(Vec::new()),
            },
        ] {
            let api = FakeApi {
                geocode: Some(geocode),
                forecast: Some(drizzle()),
                ..Default::default()
            };

            let result = perform_lookup(&api, "Atlantis").await;

            assert_eq!(result, Err(LookupError::NotFound("Atlantis".into())));
            assert_eq!(api.geocode_calls().len(), 1);
            assert!(api.forecast_calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_geocode_failure_is_fetch_error() {
        let api = FakeApi::default();
        let err = perform_lookup(&api, "Paris").await.unwrap_err();
        assert!(matches!(err, LookupError::Fetch(_)));
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        assert!(api.forecast_calls().is_empty());
    }

    #[tokio::test]
    async fn test_forecast_failure_is_fetch_error() {
        let api = FakeApi {
            geocode: Some(berlin()),
            ..Default::default()
        };
        let err = perform_lookup(&api, "Berlin").await.unwrap_err();
        assert!(matches!(err, LookupError::Fetch(_)));
        assert_eq!(api.forecast_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_country_becomes_empty() {
        let api = FakeApi {
            geocode: Some(GeocodingResponse {
                results: Some(vec![GeocodingResult {
                    name: "Null Island".into(),
                    latitude: 0.0,
                    longitude: 0.0,
                    country: None,
                }]),
            }),
            forecast: Some(drizzle()),
            ..Default::default()
        };
        let result = perform_lookup(&api, "Null Island").await.unwrap();
        assert_eq!(result.country_name, "");
        assert_eq!(result.display_name(), "Null Island");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            LookupError::EmptyQuery.user_message(),
            "Please enter a city name."
        );
        assert_eq!(
            LookupError::NotFound("x".into()).user_message(),
            "City not found. Try another one."
        );
        assert_eq!(
            LookupError::Fetch("x".into()).user_message(),
            "Error fetching data. Please try again later."
        );
    }
}
