use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

/// One-line unlock banner. Renders nothing when there is no notification.
pub struct NotificationBanner<'a> {
    text: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> NotificationBanner<'a> {
    pub fn new(text: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for NotificationBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(name) = self.text else {
            return;
        };
        let colors = &self.theme.colors;
        let message = format!(" \u{2605} Achievement unlocked: {name} ");
        Paragraph::new(Span::styled(
            message,
            Style::default()
                .fg(colors.unlocked())
                .bg(colors.notification_bg())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}
