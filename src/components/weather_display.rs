use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::lookup_panel::PANEL_HEIGHT;
use super::title_header::HEADER_HEIGHT;
use super::weather_card::preferred_height;
use super::{
    Component, LookupPanel, LookupPanelProps, TitleHeader, TitleHeaderProps, WeatherCard,
    WeatherCardProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Width of the centered lookup column
const CARD_WIDTH: u16 = 56;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: title, lookup panel, result card and help bar
#[derive(Default)]
pub struct WeatherDisplay {
    panel: LookupPanel,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => return vec![Action::LookupSubmit],
            KeyCode::F(2) => return vec![Action::ThemeToggle],
            KeyCode::Char('t') if ctrl => return vec![Action::ThemeToggle],
            KeyCode::Char('c') if ctrl => return vec![Action::Quit],
            KeyCode::Esc => return vec![Action::Quit],
            _ => {}
        }

        // Everything else is typing
        let state = props.state;
        self.panel
            .handle_event(
                event,
                LookupPanelProps {
                    query: &state.query,
                    is_loading: state.is_loading(),
                    error: state.error_message(),
                    theme: state.theme,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let palette = state.theme.palette();

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.backdrop()).fg(palette.foreground)),
            area,
        );

        let rows = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let [column] = Layout::horizontal([Constraint::Max(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(rows[0]);

        let card_height = if state.result().is_some() {
            preferred_height()
        } else {
            0
        };
        let chunks = Layout::vertical([
            Constraint::Max(HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Length(1),
            Constraint::Max(card_height),
        ])
        .flex(Flex::Center)
        .split(column);

        let mut header = TitleHeader;
        header.render(
            frame,
            chunks[0],
            TitleHeaderProps {
                theme: state.theme,
                is_animating: state.loading_anim_active(),
                tick_count: state.tick_count,
            },
        );

        self.panel.render(
            frame,
            chunks[2],
            LookupPanelProps {
                query: &state.query,
                is_loading: state.is_loading(),
                error: state.error_message(),
                theme: state.theme,
                is_focused: props.is_focused,
            },
        );

        if let Some(result) = state.result() {
            let mut card = WeatherCard;
            card.render(
                frame,
                chunks[4],
                WeatherCardProps {
                    result,
                    theme: state.theme,
                },
            );
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            rows[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "lookup"),
                    StatusBarHint::new("^t", "theme"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
