use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::game::state::GameState;
use crate::ui::theme::Theme;

/// Time, score and wpm side by side.
pub struct StatsBar<'a> {
    state: Option<&'a GameState>,
    theme: &'a Theme,
}

impl<'a> StatsBar<'a> {
    pub fn new(state: Option<&'a GameState>, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

fn stat_values(state: Option<&GameState>) -> [(&'static str, String); 3] {
    let (secs, score, wpm) = state
        .map(|s| (s.elapsed_secs, s.score, s.wpm))
        .unwrap_or_default();
    [
        ("Time", format!("{secs}s")),
        ("Score", score.to_string()),
        ("WPM", wpm.to_string()),
    ]
}

impl Widget for StatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(inner);

        for (i, (label, value)) in stat_values(self.state).into_iter().enumerate() {
            let line = Line::from(vec![
                Span::styled(format!("{label} "), Style::default().fg(colors.text_pending())),
                Span::styled(
                    value,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(columns[i], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::difficulty::Difficulty;

    #[test]
    fn test_stat_values_format() {
        let mut state = GameState::new(Difficulty::Easy, "let".to_string());
        state.elapsed_secs = 42;
        state.score = 7;
        state.wpm = 31;
        let values = stat_values(Some(&state));
        assert_eq!(values[0], ("Time", "42s".to_string()));
        assert_eq!(values[1], ("Score", "7".to_string()));
        assert_eq!(values[2], ("WPM", "31".to_string()));
    }

    #[test]
    fn test_stat_values_without_session() {
        let values = stat_values(None);
        assert_eq!(values[0].1, "0s");
        assert_eq!(values[2].1, "0");
    }
}
