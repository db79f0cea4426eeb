use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct InputField<'a> {
    value: &'a str,
    theme: &'a Theme,
}

impl<'a> InputField<'a> {
    pub fn new(value: &'a str, theme: &'a Theme) -> Self {
        Self { value, theme }
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));

        let line = if self.value.is_empty() {
            Line::from(Span::styled(
                "Start typing...",
                Style::default().fg(colors.text_pending()),
            ))
        } else {
            Line::from(vec![
                Span::styled(self.value, Style::default().fg(colors.fg())),
                Span::styled("\u{258f}", Style::default().fg(colors.accent())), // ▏
            ])
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
