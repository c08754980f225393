use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::codes::{self, IconCategory};
use crate::icons::{self, ICON_HEIGHT};
use crate::state::WeatherResult;
use crate::theme::Theme;

pub const WIND_ICON: &str = "\u{1f4a8}";
pub const DROPLET_ICON: &str = "\u{1f4a7}";
pub const FEELS_GOOD: &str = "Feels good";

pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub result: &'a WeatherResult,
    pub theme: Theme,
}

/// Fixed rows: padding + name + blank + description + wind + padding.
const LAYOUT_FIXED: u16 = 6;

/// Temperature caps: terminus(6), miniwi(4), plain(1)
const TEMP_TIERS: [u16; 3] = [6, 4, 1];

struct LayoutSizing {
    icon_h: u16,
    show_art: bool,
    temp_cap: u16,
}

/// Keep the icon art as long as possible by shrinking the temperature first.
fn compute_layout(area_height: u16) -> LayoutSizing {
    for &temp_cap in &TEMP_TIERS {
        if area_height >= ICON_HEIGHT + temp_cap + LAYOUT_FIXED {
            return LayoutSizing {
                icon_h: ICON_HEIGHT,
                show_art: true,
                temp_cap,
            };
        }
    }
    // No room for art - glyph with plain temperature
    LayoutSizing {
        icon_h: 1,
        show_art: false,
        temp_cap: 1,
    }
}

/// Rows the card needs to show everything at full size
pub fn preferred_height() -> u16 {
    ICON_HEIGHT + TEMP_TIERS[0] + LAYOUT_FIXED
}

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        t if t < 15.0 => (ArtColor::rgb(253, 224, 71), ArtColor::rgb(150, 220, 200)),
        t if t < 25.0 => (ArtColor::rgb(253, 224, 71), ArtColor::rgb(255, 200, 80)),
        _ => (ArtColor::rgb(253, 224, 71), ArtColor::rgb(255, 120, 80)),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.theme.palette();
        let result = props.result;
        let sizing = compute_layout(area.height);
        let category = codes::classify_icon(result.weather_code);

        frame.render_widget(Block::default().style(Style::default().bg(palette.card)), area);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(sizing.icon_h), // Icon
            Constraint::Length(1),             // Name, Country
            Constraint::Max(sizing.temp_cap),  // Temperature
            Constraint::Length(1),             // Description
            Constraint::Length(1),             // Wind
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .split(area);

        render_icon(frame, chunks[1], category, sizing.show_art);

        let name = Line::from(vec![Span::styled(
            result.display_name(),
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(name), chunks[2]);

        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(result.temperature_celsius));
        frame.render_widget(
            ArtBox::new(&renderer, &result.temperature_label()),
            chunks[3],
        );

        let desc = Line::from(vec![Span::styled(
            codes::describe(result.weather_code),
            Style::default().fg(palette.foreground),
        )])
        .centered();
        frame.render_widget(Paragraph::new(desc), chunks[4]);

        let wind = Line::from(vec![
            Span::raw(format!("{WIND_ICON} ")),
            Span::styled(result.wind_label(), Style::default().fg(palette.muted)),
            Span::raw(format!("   {DROPLET_ICON} ")),
            Span::styled(FEELS_GOOD, Style::default().fg(palette.muted)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(wind), chunks[5]);
    }
}

fn render_icon(frame: &mut Frame, area: Rect, category: IconCategory, show_art: bool) {
    if show_art {
        frame.render_widget(
            Paragraph::new(icons::icon_art(category)).alignment(Alignment::Center),
            area,
        );
    } else {
        let glyph = Line::from(Span::styled(
            icons::icon_glyph(category),
            Style::default().fg(icons::icon_color(category)),
        ))
        .centered();
        frame.render_widget(Paragraph::new(glyph), area);
    }
}
