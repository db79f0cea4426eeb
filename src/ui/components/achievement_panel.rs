use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::dataset::achievements::AchievementDef;
use crate::ui::theme::Theme;

pub struct AchievementPanel<'a> {
    entries: &'a [AchievementDef],
    unlocked: &'a [String],
    theme: &'a Theme,
}

impl<'a> AchievementPanel<'a> {
    pub fn new(entries: &'a [AchievementDef], unlocked: &'a [String], theme: &'a Theme) -> Self {
        Self {
            entries,
            unlocked,
            theme,
        }
    }
}

impl Widget for AchievementPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let unlocked_count = self
            .entries
            .iter()
            .filter(|a| self.unlocked.contains(&a.name))
            .count();

        let block = Block::bordered()
            .title(Span::styled(
                format!(" Achievements {unlocked_count}/{} ", self.entries.len()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let mut lines = Vec::with_capacity(self.entries.len() * 2);
        for achievement in self.entries {
            let is_unlocked = self.unlocked.contains(&achievement.name);
            let (icon, color) = if is_unlocked {
                ("\u{2605}", colors.unlocked()) // ★
            } else {
                ("\u{00b7}", colors.locked()) // ·
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(color)),
                Span::styled(
                    achievement.name.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {}", achievement.description),
                    Style::default().fg(color).add_modifier(Modifier::DIM),
                ),
                Span::styled(
                    format!("  [{}]", achievement.condition),
                    Style::default().fg(colors.text_pending()),
                ),
            ]));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::achievements::AchievementCatalog;

    fn rendered_rows(panel: AchievementPanel<'_>, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_panel_lists_conditions_and_unlock_count() {
        let catalog = AchievementCatalog::from_json(
            r#"{"achievements": [
                {"name": "First Step", "description": "One word", "condition": "score >= 1"},
                {"name": "Quick", "description": "Go fast", "condition": "wpm>=30"}
            ]}"#,
        )
        .unwrap();
        let unlocked = vec!["First Step".to_string()];
        let theme = Theme::default();
        let rows = rendered_rows(
            AchievementPanel::new(catalog.entries(), &unlocked, &theme),
            Rect::new(0, 0, 60, 8),
        );

        assert!(rows[0].contains("Achievements 1/2"));
        assert!(rows.iter().any(|r| r.contains("[score >= 1]")));
        assert!(rows.iter().any(|r| r.contains("[wpm >= 30]")));
    }
}
