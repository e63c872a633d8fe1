//! # FlourishScreen Component
//!
//! One frame of the expiry animation. Blinking kinds alternate between a
//! full frame and a frame with only the footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::flourish::FlourishKind;
use crate::tui::component::Component;
use crate::tui::components::big_text::{BigText, GLYPH_HEIGHT};
use crate::tui::components::footer::Footer;

/// Text and colours for one flourish kind.
struct Card {
    heading: Option<(&'static str, Color)>,
    subheading: Option<&'static str>,
    big: &'static str,
    big_color: Color,
    hint: &'static str,
}

fn card(kind: FlourishKind) -> Card {
    match kind {
        FlourishKind::TimeUp => Card {
            heading: None,
            subheading: None,
            big: "00:00:00",
            big_color: Color::White,
            hint: "Press Enter to stop flashing or Ctrl+C to exit",
        },
        FlourishKind::FocusComplete => Card {
            heading: Some(("🍅 FOCUS COMPLETE!", Color::Red)),
            subheading: Some("Press Enter to start break"),
            big: "BREAK",
            big_color: Color::Green,
            hint: "Press Enter to continue or Ctrl+C to exit",
        },
        FlourishKind::BreakComplete => Card {
            heading: Some(("☕ BREAK COMPLETE!", Color::Green)),
            subheading: Some("Pomodoro cycle finished!"),
            big: "DONE",
            big_color: Color::Yellow,
            hint: "Press Enter to exit or Ctrl+C to exit",
        },
    }
}

pub struct FlourishScreen {
    pub kind: FlourishKind,
    pub visible: bool,
}

impl FlourishScreen {
    pub fn new(kind: FlourishKind, visible: bool) -> Self {
        Self { kind, visible }
    }
}

impl Component for FlourishScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let card = card(self.kind);
        Footer::new(card.hint).render(frame, area);
        if !self.visible {
            return;
        }

        let [body, _footer] = Layout::vertical([Min(0), Length(1)]).areas(area);
        let [heading_area, _, subheading_area, _, big_area] = Layout::vertical([
            Length(1),
            Length(1),
            Length(1),
            Length(1),
            Length(GLYPH_HEIGHT),
        ])
        .flex(Flex::Center)
        .areas(body);

        if let Some((heading, color)) = card.heading {
            let line = Line::from(Span::styled(
                heading,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), heading_area);
        }
        if let Some(subheading) = card.subheading {
            let paragraph = Paragraph::new(subheading)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, subheading_area);
        }

        let big_style = Style::default()
            .fg(card.big_color)
            .add_modifier(Modifier::BOLD);
        BigText::new(card.big, big_style).render(frame, big_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(kind: FlourishKind, visible: bool) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| FlourishScreen::new(kind, visible).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_time_up_visible_frame() {
        let text = render(FlourishKind::TimeUp, true);
        assert!(text.contains("█████"));
        assert!(text.contains("Press Enter to stop flashing"));
    }

    #[test]
    fn test_blank_frame_keeps_footer_only() {
        let text = render(FlourishKind::TimeUp, false);
        assert!(!text.contains('█'));
        assert!(text.contains("Press Enter to stop flashing"));
    }

    #[test]
    fn test_focus_complete_frame() {
        let text = render(FlourishKind::FocusComplete, true);
        assert!(text.contains("FOCUS COMPLETE!"));
        assert!(text.contains("Press Enter to start break"));
        assert!(text.contains("Press Enter to continue"));
    }

    #[test]
    fn test_break_complete_frame() {
        let text = render(FlourishKind::BreakComplete, true);
        assert!(text.contains("BREAK COMPLETE!"));
        assert!(text.contains("Pomodoro cycle finished!"));
        assert!(text.contains("████ "));
    }
}
