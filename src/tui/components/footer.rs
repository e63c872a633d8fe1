//! # Footer Component
//!
//! One line of key hints on the bottom row of the screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const EXIT_HINT: &str = "Press Ctrl+Q or Ctrl+C to exit";

pub struct Footer<'a> {
    pub hint: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(hint: &'a str) -> Self {
        Self { hint }
    }

    /// The bottom row of `area`.
    pub fn area(area: Rect) -> Rect {
        Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        }
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.hint)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, Self::area(area));
    }
}
