//! Multi-color ASCII icons for each weather category
//!
//! Each icon is a stack of layers drawn back-to-front. Spaces are
//! transparent, so a foreground layer only covers the cells it draws.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::codes::IconCategory;

/// Rows in every icon
pub const ICON_HEIGHT: u16 = 5;

mod art {
    pub const SUN: &str = r"    \   /
     .-.
  - (   ) -
     `-'
    /   \";

    pub const CLOUD: &str = r"
     .--.
  .-(    ).
 (___.__)__)
";

    pub const RAIN_CLOUD: &str = r"     .-.
    (   ).
   (___(__)";

    pub const RAIN: &str = r"


    ‘ ‘ ‘ ‘
   ‘ ‘ ‘ ‘";

    pub const BOLT: &str = r"


     ϟ ‘ ϟ
    ‘ ‘ ‘ ‘";

    pub const WIND: &str = r"
  ~~~~~~~~~
    ~~~~~~~~~
  ~~~~~~~~~
";
}

/// A single icon layer with its content and color
struct IconLayer {
    content: &'static str,
    color: Color,
}

/// Composite layers into Text, treating spaces as transparent
fn composite_layers(layers: &[IconLayer]) -> Text<'static> {
    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    let lines = (0..ICON_HEIGHT as usize)
        .map(|row| {
            let spans = (0..max_width)
                .map(|col| {
                    // Last layer is the foreground
                    let cell = layers.iter().zip(&layer_lines).rev().find_map(|(layer, lines)| {
                        lines
                            .get(row)
                            .and_then(|line| line.get(col))
                            .filter(|ch| **ch != ' ')
                            .map(|ch| (*ch, layer.color))
                    });
                    let (ch, color) = cell.unwrap_or((' ', Color::Reset));
                    Span::styled(ch.to_string(), Style::default().fg(color))
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}

/// Primary color for a category
pub fn icon_color(category: IconCategory) -> Color {
    match category {
        IconCategory::Clear => Color::Rgb(250, 204, 21),   // yellow-400
        IconCategory::Cloudy => Color::Rgb(156, 163, 175), // gray-400
        IconCategory::Rainy => Color::Rgb(59, 130, 246),   // blue-500
        IconCategory::Stormy => Color::Rgb(147, 51, 234),  // purple-600
        IconCategory::Windy => Color::Rgb(56, 189, 248),   // sky-400
    }
}

/// Art for a category, `ICON_HEIGHT` rows tall
pub fn icon_art(category: IconCategory) -> Text<'static> {
    let color = icon_color(category);
    let layers = match category {
        IconCategory::Clear => vec![IconLayer {
            content: art::SUN,
            color,
        }],
        IconCategory::Cloudy => vec![IconLayer {
            content: art::CLOUD,
            color,
        }],
        IconCategory::Rainy => vec![
            IconLayer {
                content: art::RAIN_CLOUD,
                color: icon_color(IconCategory::Cloudy),
            },
            IconLayer {
                content: art::RAIN,
                color,
            },
        ],
        IconCategory::Stormy => vec![
            IconLayer {
                content: art::RAIN_CLOUD,
                color: Color::Rgb(107, 114, 128),
            },
            IconLayer {
                content: art::BOLT,
                color,
            },
        ],
        IconCategory::Windy => vec![IconLayer {
            content: art::WIND,
            color,
        }],
    };
    composite_layers(&layers)
}

/// Single-glyph icon for when the art doesn't fit
pub fn icon_glyph(category: IconCategory) -> &'static str {
    match category {
        IconCategory::Clear => "\u{2600}\u{fe0f}",
        IconCategory::Cloudy => "\u{2601}\u{fe0f}",
        IconCategory::Rainy => "\u{1f327}\u{fe0f}",
        IconCategory::Stormy => "\u{26c8}\u{fe0f}",
        IconCategory::Windy => "\u{1f32c}\u{fe0f}",
    }
}
