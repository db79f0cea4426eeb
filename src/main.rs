mod app;
mod config;
mod dataset;
mod engine;
mod error;
mod event;
mod game;
mod logging;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing::{info, warn};

use app::App;
use config::Config;
use event::EventHandler;
use game::difficulty::Difficulty;
use ui::components::achievement_panel::AchievementPanel;
use ui::components::input_field::InputField;
use ui::components::notification::NotificationBanner;
use ui::components::stats_bar::StatsBar;
use ui::components::word_display::WordDisplay;
use ui::layout::{GameLayout, pack_hint_lines};
use ui::theme::Theme;

const HINTS: &[&str] = &[
    "[Tab] Difficulty",
    "[Ctrl+R] Restart",
    "[Ctrl+A] Achievements",
    "[Ctrl+W] Delete word",
    "[Esc] Quit",
];

#[derive(Parser)]
#[command(name = "codetypr", version, about = "Type the code snippet as fast as you can")]
struct Cli {
    #[arg(short, long, help = "Starting difficulty (easy, medium, hard)")]
    difficulty: Option<Difficulty>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Word bank JSON file instead of the bundled one")]
    words: Option<PathBuf>,

    #[arg(long, help = "Achievements JSON file instead of the bundled one")]
    achievements: Option<PathBuf>,

    #[arg(short, long, help = "Config file path")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("codetypr: running without a log file: {err:#}");
            None
        }
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path).unwrap_or_else(|err| {
        warn!(error = %err, "using default config");
        Config::default()
    });
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.words.is_some() {
        config.words_path = cli.words;
    }
    if cli.achievements.is_some() {
        config.achievements_path = cli.achievements;
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(
            theme = %config.theme,
            available = ?Theme::available_themes(),
            "unknown theme, using default"
        );
        Theme::default()
    });
    let frame_rate = config.frame_rate();
    let mut app = App::new(config, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(frame_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }
    info!("exiting");

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        // Typing can starve Frame events, so the clock moves on every event.
        app.handle_event(events.next()?, Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;
    let colors = &theme.colors;

    frame.render_widget(Block::default().style(Style::default().bg(colors.bg())), area);

    let hint_lines = pack_hint_lines(HINTS, area.width.min(80) as usize);
    let layout = GameLayout::new(area, app.show_achievements, hint_lines.len() as u16);

    let status = match (&app.session, app.is_running()) {
        (None, _) => "datasets unavailable, see log".to_string(),
        (Some(_), false) => "Type something to start!".to_string(),
        (Some(_), true) => "Go!".to_string(),
    };
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                " CodeTypr ",
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" Difficulty: {} ", app.difficulty().label()),
                Style::default().fg(colors.fg()).bg(colors.header_bg()),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(colors.text_pending()),
        )),
    ])
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let session = app.session.as_ref();
    let progress = session.map(|s| s.word_progress());
    let state = session.map(|s| s.state());

    frame.render_widget(WordDisplay::new(progress.as_ref(), theme), layout.word);
    frame.render_widget(InputField::new(app.input.value(), theme), layout.input);
    frame.render_widget(StatsBar::new(state, theme), layout.stats);
    frame.render_widget(
        NotificationBanner::new(state.and_then(|s| s.notification.as_deref()), theme),
        layout.notification,
    );

    if let (Some(panel), Some(session)) = (layout.achievements, session) {
        frame.render_widget(
            AchievementPanel::new(
                session.datasets().achievements.entries(),
                &session.state().unlocked_achievements,
                theme,
            ),
            panel,
        );
    }

    let footer = Paragraph::new(
        hint_lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_pending()))))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(footer, layout.footer);
}
