//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::lookup::LookupError;
use crate::state::{AppState, LOADING_ANIM_CYCLE_TICKS};
use crate::theme::toggle_theme;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        // ===== Lookup actions =====
        Action::LookupSubmit => {
            // The "Get Weather" button is disabled while fetching
            if state.is_loading() {
                return DispatchResult::unchanged();
            }
            if state.query.trim().is_empty() {
                state.weather =
                    DataResource::Failed(LookupError::EmptyQuery.user_message().to_string());
                return DispatchResult::changed();
            }

            state.request_id = state.request_id.wrapping_add(1);
            state.weather = DataResource::Loading;
            state.tick_count = 0;
            state.loading_anim_ticks_remaining = 0;
            log::info!("lookup #{} for {:?}", state.request_id, state.query);
            DispatchResult::changed_with(Effect::Lookup {
                request_id: state.request_id,
                query: state.query.clone(),
            })
        }

        Action::LookupDidLoad { request_id, result } => {
            if request_id != state.request_id {
                log::debug!("dropping stale lookup #{request_id}");
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(result);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::LookupDidError { request_id, error } => {
            if request_id != state.request_id {
                log::debug!("dropping stale lookup #{request_id}");
                return DispatchResult::unchanged();
            }
            log::warn!("lookup #{request_id} failed: {error}");
            state.weather = DataResource::Failed(error.user_message().to_string());
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        // ===== Theme actions =====
        Action::ThemeToggle => {
            state.theme = toggle_theme(state.theme);
            DispatchResult::changed_with(Effect::PersistTheme { theme: state.theme })
        }

        Action::ThemeDidPersist(theme) => {
            log::debug!("saved {} theme", theme.as_str());
            DispatchResult::unchanged()
        }

        Action::ThemeDidFailPersist { theme, error } => {
            log::warn!("could not save {} theme: {error}", theme.as_str());
            DispatchResult::unchanged()
        }

        // ===== UI actions =====
        Action::UiRender => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.loading_anim_active() {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Ticks left until the pulse returns to its resting phase
fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 { 0 } else { cycle - remainder }
}
