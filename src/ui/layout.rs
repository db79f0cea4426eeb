use ratatui::layout::{Constraint, Direction, Layout, Rect};

const MAX_COLUMN_WIDTH: u16 = 80;

pub struct GameLayout {
    pub header: Rect,
    pub word: Rect,
    pub input: Rect,
    pub stats: Rect,
    pub notification: Rect,
    pub achievements: Option<Rect>,
    pub footer: Rect,
}

impl GameLayout {
    pub fn new(area: Rect, show_achievements: bool, footer_height: u16) -> Self {
        let column = centered_column(MAX_COLUMN_WIDTH, area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(column);

        Self {
            header: vertical[0],
            word: vertical[1],
            input: vertical[2],
            stats: vertical[3],
            notification: vertical[4],
            achievements: show_achievements.then_some(vertical[5]),
            footer: vertical[6],
        }
    }
}

/// Horizontally centered slice of `area`, at most `max_width` wide.
pub fn centered_column(max_width: u16, area: Rect) -> Rect {
    let width = area.width.min(max_width);
    let left = area.x.saturating_add((area.width - width) / 2);
    Rect::new(left, area.y, width, area.height)
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}
