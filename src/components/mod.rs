pub mod lookup_panel;
pub mod pulse;
pub mod title_header;
pub mod weather_card;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use lookup_panel::{LookupPanel, LookupPanelProps};
pub use title_header::{TitleHeader, TitleHeaderProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
