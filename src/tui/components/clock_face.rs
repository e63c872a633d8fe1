//! # ClockFace Component
//!
//! The steady-state countdown screen.
//!
//! ```text
//!                 🍅 FOCUS TIME              ← phase banner (or title)
//!
//!   █████ █████   █████ █████   █████ █████  ← HH:MM:SS, block font
//!   ...
//!
//!          ████████████░░░░░░░░░░░░           ← elapsed fraction
//!
//!        Press Ctrl+Q or Ctrl+C to exit       ← bottom row
//! ```

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::core::countdown::CountdownView;
use crate::core::pomodoro::Phase;
use crate::tui::component::Component;
use crate::tui::components::big_text::{BigText, GLYPH_HEIGHT};
use crate::tui::components::footer::{EXIT_HINT, Footer};

/// `HH:MM:SS`, whole seconds rounded down.
pub fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

fn banner(phase: Option<Phase>) -> Option<Line<'static>> {
    let (text, color) = match phase {
        None => ("COUNTDOWN TIMER", Color::Cyan),
        Some(Phase::Focus) => ("🍅 FOCUS TIME", Color::Red),
        Some(Phase::Break) => ("☕ BREAK TIME", Color::Green),
        Some(Phase::Completed) => return None,
    };
    Some(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
}

pub struct ClockFace {
    pub view: CountdownView,
}

impl ClockFace {
    pub fn new(view: CountdownView) -> Self {
        Self { view }
    }
}

impl Component for ClockFace {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min, Percentage};

        let [body, _footer] = Layout::vertical([Min(0), Length(1)]).areas(area);
        let [banner_area, _, digits_area, _, gauge_area] = Layout::vertical([
            Length(1),
            Length(1),
            Length(GLYPH_HEIGHT),
            Length(1),
            Length(1),
        ])
        .flex(Flex::Center)
        .areas(body);

        if let Some(line) = banner(self.view.phase) {
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), banner_area);
        }

        let clock = format_clock(self.view.remaining);
        let digits_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        BigText::new(&clock, digits_style).render(frame, digits_area);

        let [bar_area] = Layout::horizontal([Percentage(50)])
            .flex(Flex::Center)
            .areas(gauge_area);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .ratio(self.view.progress())
            .label("")
            .use_unicode(true);
        frame.render_widget(gauge, bar_area);

        Footer::new(EXIT_HINT).render(frame, area);
    }
}
