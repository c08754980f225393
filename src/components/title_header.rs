use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Renderer, fonts, integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use super::pulse::{PulseGradient, phase_for_tick};
use crate::action::Action;
use crate::theme::Theme;

pub const TITLE: &str = "Weather Now";

pub struct TitleHeader;

pub struct TitleHeaderProps {
    pub theme: Theme,
    pub is_animating: bool,
    pub tick_count: u32,
}

/// Rows the header wants: FIGlet title plus the toggle row.
pub const HEADER_HEIGHT: u16 = 7;

fn gradient_colors(theme: Theme) -> (ArtColor, ArtColor) {
    match theme {
        Theme::Light => (
            ArtColor::rgb(255, 255, 255), // White
            ArtColor::rgb(253, 224, 71),  // Yellow-300
        ),
        Theme::Dark => (
            ArtColor::rgb(229, 231, 235), // Gray-200
            ArtColor::rgb(251, 146, 60),  // Orange-400
        ),
    }
}

impl Component<Action> for TitleHeader {
    type Props<'a> = TitleHeaderProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.theme.palette();
        let chunks = Layout::vertical([
            Constraint::Length(1), // Theme toggle
            Constraint::Fill(1),   // FIGlet title
        ])
        .split(area);

        // Toggle shows the theme you'd switch to
        let toggle = Line::from(vec![
            Span::styled(
                palette.toggle_glyph,
                Style::default().fg(palette.toggle_color).bg(palette.card),
            ),
            Span::raw(" "),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(toggle), chunks[0]);

        let phase = if props.is_animating {
            phase_for_tick(props.tick_count)
        } else {
            0.0
        };
        let (start, end) = gradient_colors(props.theme);
        let fill = PulseGradient::new(start, end).with_angle(5.0).fill(phase);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);

        frame.render_widget(ArtBox::new(&renderer, TITLE), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_render_shows_theme_toggle() {
        let mut render = RenderHarness::new(60, HEADER_HEIGHT);
        let mut header = TitleHeader;

        let light = render.render_to_string_plain(|frame| {
            header.render(
                frame,
                frame.area(),
                TitleHeaderProps {
                    theme: Theme::Light,
                    is_animating: true,
                    tick_count: 12,
                },
            );
        });

        assert!(light.contains(Theme::Light.palette().toggle_glyph));
    }
}
