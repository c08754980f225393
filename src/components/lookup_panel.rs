use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::theme::Theme;

pub const PLACEHOLDER: &str = "Enter city name...";
pub const BUTTON_IDLE: &str = "Get Weather";
pub const BUTTON_BUSY: &str = "Fetching Weather...";

/// Input (3) + gap (1) + button (1) + gap (1) + error (1)
pub const PANEL_HEIGHT: u16 = 7;

/// City input, submit button and error line
pub struct LookupPanel {
    input: TextInput,
}

impl Default for LookupPanel {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

pub struct LookupPanelProps<'a> {
    pub query: &'a str,
    pub is_loading: bool,
    pub error: Option<&'a str>,
    pub theme: Theme,
    pub is_focused: bool,
}

fn input_props<'a>(query: &'a str, is_focused: bool) -> TextInputProps<'a, Action> {
    TextInputProps {
        value: query,
        placeholder: PLACEHOLDER,
        is_focused,
        style: TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::all(1),
                bg: Some(Color::Rgb(243, 244, 246)),
                fg: Some(Color::Rgb(31, 41, 55)),
            },
            placeholder_style: None,
            cursor_style: None,
        },
        on_change: Action::QueryChange,
        on_submit: |_| Action::LookupSubmit,
        on_cursor_move: Some(|_| Action::UiRender),
    }
}

/// Label for the submit button
pub fn button_label(is_loading: bool) -> &'static str {
    if is_loading { BUTTON_BUSY } else { BUTTON_IDLE }
}

impl Component<Action> for LookupPanel {
    type Props<'a> = LookupPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        self.input
            .handle_event(event, input_props(props.query, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.theme.palette();
        let chunks = Layout::vertical([
            Constraint::Length(3), // Input
            Constraint::Length(1),
            Constraint::Length(1), // Button
            Constraint::Length(1),
            Constraint::Length(1), // Error
        ])
        .split(area);

        self.input
            .render(frame, chunks[0], input_props(props.query, props.is_focused));

        let button_style = if props.is_loading {
            // Disabled look
            Style::default()
                .fg(Color::Rgb(255, 237, 213))
                .bg(Color::Rgb(194, 120, 60))
                .add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(249, 115, 22))
                .add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(Line::from(button_label(props.is_loading)).centered())
            .style(button_style);
        frame.render_widget(button, chunks[2]);

        if let Some(error) = props.error {
            let line = Line::from(vec![Span::styled(
                error.to_string(),
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            )])
            .centered();
            frame.render_widget(
                Paragraph::new(line).style(Style::default().bg(Color::Rgb(127, 29, 29))),
                chunks[4],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn props(query: &str) -> LookupPanelProps<'_> {
        LookupPanelProps {
            query,
            is_loading: false,
            error: None,
            theme: Theme::Light,
            is_focused: true,
        }
    }

    #[test]
    fn test_typing_changes_query() {
        let mut panel = LookupPanel::default();
        let actions: Vec<_> = panel
            .handle_event(&EventKind::Key(key("a")), props(""))
            .into_iter()
            .collect();
        actions.assert_first(Action::QueryChange("a".into()));
    }

    #[test]
    fn test_unfocused_ignores_input() {
        let mut panel = LookupPanel::default();
        let actions: Vec<_> = panel
            .handle_event(
                &EventKind::Key(key("a")),
                LookupPanelProps {
                    is_focused: false,
                    ..props("")
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_shows_placeholder_and_button() {
        let mut render = RenderHarness::new(40, 7);
        let mut panel = LookupPanel::default();

        let output = render.render_to_string_plain(|frame| {
            panel.render(frame, frame.area(), props(""));
        });

        assert!(output.contains(PLACEHOLDER));
        assert!(output.contains(BUTTON_IDLE));
    }

    #[test]
    fn test_render_loading_and_error() {
        let mut render = RenderHarness::new(60, 7);
        let mut panel = LookupPanel::default();

        let output = render.render_to_string_plain(|frame| {
            panel.render(
                frame,
                frame.area(),
                LookupPanelProps {
                    is_loading: true,
                    error: Some("City not found. Try another one."),
                    ..props("Atlantis")
                },
            );
        });

        assert!(output.contains(BUTTON_BUSY));
        assert!(output.contains("City not found"));
    }
}
