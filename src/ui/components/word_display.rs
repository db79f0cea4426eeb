use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::game::input::{CharStatus, WordProgress};
use crate::ui::theme::{Theme, ThemeColors};

/// The target word, coloured character by character, with any overtyped
/// characters on the line below.
pub struct WordDisplay<'a> {
    progress: Option<&'a WordProgress>,
    theme: &'a Theme,
}

impl<'a> WordDisplay<'a> {
    pub fn new(progress: Option<&'a WordProgress>, theme: &'a Theme) -> Self {
        Self { progress, theme }
    }
}

fn char_style(status: CharStatus, colors: &ThemeColors) -> Style {
    match status {
        CharStatus::Correct => Style::default().fg(colors.text_correct()),
        CharStatus::Incorrect => Style::default()
            .fg(colors.text_incorrect())
            .bg(colors.text_incorrect_bg()),
        CharStatus::Pending => Style::default().fg(colors.text_pending()),
    }
}

fn word_lines(progress: &WordProgress, colors: &ThemeColors) -> Vec<Line<'static>> {
    let word: Vec<Span<'static>> = progress
        .chars
        .iter()
        .map(|&(ch, status)| {
            Span::styled(
                ch.to_string(),
                char_style(status, colors).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let mut lines = vec![Line::from(word)];
    if !progress.overtyped.is_empty() {
        lines.push(Line::from(Span::styled(
            progress.overtyped.clone(),
            char_style(CharStatus::Incorrect, colors),
        )));
    }
    lines
}

impl Widget for WordDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let lines = match self.progress {
            Some(progress) => word_lines(progress, colors),
            None => vec![Line::from(Span::styled(
                "no words loaded",
                Style::default().fg(colors.text_pending()),
            ))],
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
