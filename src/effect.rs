//! Effects - side effects declared by the reducer

use crate::theme::Theme;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Geocode `query` and fetch its current weather
    Lookup { request_id: u64, query: String },
    /// Write the theme to the preference store (best-effort)
    PersistTheme { theme: Theme },
}
