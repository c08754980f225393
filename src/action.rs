//! Actions: user intents, async results, and ticks

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lookup::LookupError;
use crate::state::WeatherResult;
use crate::theme::Theme;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query category =====
    /// City input text changed
    QueryChange(String),

    // ===== Lookup category =====
    /// Intent: look up the current query (triggers async task)
    LookupSubmit,

    /// Result: lookup finished with current conditions
    LookupDidLoad {
        request_id: u64,
        result: WeatherResult,
    },

    /// Result: lookup failed (not found or fetch error)
    LookupDidError {
        request_id: u64,
        error: LookupError,
    },

    // ===== Theme category =====
    /// Flip light/dark and persist the choice
    ThemeToggle,

    /// Result: the theme preference was written
    ThemeDidPersist(Theme),

    /// Result: writing the theme preference failed
    ThemeDidFailPersist { theme: Theme, error: String },

    // ===== UI category =====
    /// Force a re-render (for cursor movement, etc.)
    UiRender,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading pulse
    Tick,

    /// Exit the application
    Quit,
}
