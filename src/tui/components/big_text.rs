//! # BigText Component
//!
//! Renders a short string in a 5-row block font, centered in its area.
//!
//! ```text
//! █████ █████   █████ █████
//! █   █     █ █ █   █     █
//! █   █ █████   █   █ █████
//! █   █ █       █   █     █
//! █████ █████ █ █████ █████
//! ```
//!
//! Covers digits, `:`, and the letters of `BREAK` and `DONE`. Anything else
//! becomes a blank cell of the same width. When the rendered text is wider
//! than the area it falls back to the plain string.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const GLYPH_HEIGHT: u16 = 5;

type Glyph = [&'static str; GLYPH_HEIGHT as usize];

const BLANK: &str = "      ";

fn glyph(c: char) -> Option<Glyph> {
    let rows = match c {
        '0' | 'O' => ["█████", "█   █", "█   █", "█   █", "█████"],
        '1' => ["    █", "    █", "    █", "    █", "    █"],
        '2' => ["█████", "    █", "█████", "█    ", "█████"],
        '3' => ["█████", "    █", "█████", "    █", "█████"],
        '4' => ["█   █", "█   █", "█████", "    █", "    █"],
        '5' => ["█████", "█    ", "█████", "    █", "█████"],
        '6' => ["█████", "█    ", "█████", "█   █", "█████"],
        '7' => ["█████", "    █", "    █", "    █", "    █"],
        '8' | 'B' => ["█████", "█   █", "█████", "█   █", "█████"],
        '9' => ["█████", "█   █", "█████", "    █", "█████"],
        ':' => [" ", "█", " ", "█", " "],
        'R' => ["█████", "█   █", "█████", "█ █  ", "█  █ "],
        'E' => ["█████", "█    ", "█████", "█    ", "█████"],
        'A' => ["█████", "█   █", "█████", "█   █", "█   █"],
        'K' => ["█   █", "█ █  ", "███  ", "█ █  ", "█   █"],
        'D' => ["████ ", "█   █", "█   █", "█   █", "████ "],
        'N' => ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
        _ => return None,
    };
    Some(rows)
}

/// The block-font rows for `text`, one `String` per row.
pub fn big_lines(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT as usize)
        .map(|row| {
            text.chars()
                .map(|c| match glyph(c) {
                    Some(rows) => format!("{} ", rows[row]),
                    None => BLANK.to_string(),
                })
                .collect()
        })
        .collect()
}

/// Display width of `text` once rendered big.
pub fn big_width(text: &str) -> u16 {
    big_lines(text)
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0) as u16
}

/// Large centered text.
///
/// # Props
///
/// - `text`: What to draw (e.g. `"00:25:00"`, `"BREAK"`)
/// - `style`: Foreground style for the glyphs
pub struct BigText<'a> {
    pub text: &'a str,
    pub style: Style,
}

impl<'a> BigText<'a> {
    pub fn new(text: &'a str, style: Style) -> Self {
        Self { text, style }
    }
}

impl Component for BigText<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = if big_width(self.text) <= area.width {
            big_lines(self.text).into_iter().map(Line::from).collect()
        } else {
            vec![Line::from(self.text.to_string())]
        };

        let paragraph = Paragraph::new(lines)
            .style(self.style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
