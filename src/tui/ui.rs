use ratatui::Frame;

use crate::tui::Scene;
use crate::tui::component::Component;
use crate::tui::components::{ClockFace, FlourishScreen};

pub fn draw_scene(frame: &mut Frame, scene: &Scene) {
    let area = frame.area();
    match *scene {
        Scene::Countdown(view) => ClockFace::new(view).render(frame, area),
        Scene::Flourish { kind, visible } => FlourishScreen::new(kind, visible).render(frame, area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::countdown::CountdownView;
    use crate::core::flourish::FlourishKind;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn draw(scene: Scene) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_scene(f, &scene)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_countdown_scene() {
        let text = draw(Scene::Countdown(CountdownView {
            remaining: Duration::from_secs(90),
            total: Duration::from_secs(120),
            phase: None,
        }));
        assert!(text.contains("COUNTDOWN TIMER"));
    }

    #[test]
    fn test_draw_flourish_scene() {
        let text = draw(Scene::Flourish {
            kind: FlourishKind::BreakComplete,
            visible: true,
        });
        assert!(text.contains("BREAK COMPLETE!"));
    }
}
