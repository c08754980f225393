//! Weather Now - city weather lookup TUI
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod codes;
pub mod components;
pub mod effect;
pub mod icons;
pub mod lookup;
pub mod prefs;
pub mod reducer;
pub mod state;
pub mod theme;
