//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::theme::Theme;

/// Current conditions for a resolved city
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub location_name: String,
    pub country_name: String,
    pub temperature_celsius: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32, // WMO weather code
}

impl WeatherResult {
    /// "Name, Country", or just the name when the country is unknown
    pub fn display_name(&self) -> String {
        if self.country_name.is_empty() {
            self.location_name.clone()
        } else {
            format!("{}, {}", self.location_name, self.country_name)
        }
    }

    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_celsius)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", self.wind_speed_kmh)
    }
}

/// Animation timing for the title pulse while a lookup is in flight.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text currently in the city input
    #[debug(section = "Lookup", label = "Query")]
    pub query: String,

    /// Lookup lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Lookup", label = "Weather", debug_fmt)]
    pub weather: DataResource<WeatherResult>,

    /// Id of the most recent lookup; completions for older ids are dropped
    #[debug(section = "Lookup", label = "Request")]
    pub request_id: u64,

    #[debug(section = "UI", label = "Theme", debug_fmt)]
    pub theme: Theme,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current pulse cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,
}

impl AppState {
    /// Create idle state with the startup theme
    pub fn new(theme: Theme) -> Self {
        Self {
            query: String::new(),
            weather: DataResource::Empty,
            request_id: 0,
            theme,
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
        }
    }

    /// Idle state with a pre-filled query
    pub fn with_query(theme: Theme, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::new(theme)
        }
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        self.weather.data()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.weather.error()
    }

    pub fn is_loading(&self) -> bool {
        self.weather.is_loading()
    }

    pub fn loading_anim_active(&self) -> bool {
        self.is_loading() || self.loading_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
