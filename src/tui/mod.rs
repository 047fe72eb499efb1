//! Terminal UI host for the trivia board.

mod app;
mod input;
mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use jeopardy::{CategoryProvider, GameController, JServiceClient, TriviaConfig};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{error, info, instrument};

use app::App;
use input::Action;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI client
pub async fn run_tui(config: TriviaConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create("jeopardy_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(api_base_url = %config.api_base_url(), "Starting Jeopardy TUI");

    let provider = JServiceClient::from_config(&config)?;
    let mut controller = GameController::new(provider);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &mut controller).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Main input loop: draw, read a key, forward intents to the controller.
#[instrument(skip_all)]
async fn run_game<P: CategoryProvider>(
    terminal: &mut Tui,
    controller: &mut GameController<P>,
) -> Result<()> {
    let mut app = App::new();
    deal(terminal, &mut app, controller).await?;

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let action = match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind == KeyEventKind::Release => continue,
            Event::Key(key) => input::action_for(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                match ui::cell_at(screen, app.snapshot(), mouse.column, mouse.row) {
                    Some(cursor) => {
                        app.select(cursor);
                        Action::Reveal
                    }
                    None => Action::None,
                }
            }
            _ => Action::None,
        };

        match action {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Move(direction) => app.move_cursor(direction),
            Action::Reveal if app.can_reveal() => {
                let cursor = app.cursor();
                app.apply_reveal(controller.handle_reveal(cursor.category, cursor.clue));
            }
            Action::Restart if !app.is_loading() => {
                info!("Restart requested");
                deal(terminal, &mut app, controller).await?;
            }
            _ => {}
        }
    }
}

/// Shows the loading view while a new board is dealt.
///
/// Keys pressed while the deal is in flight are dropped.
#[instrument(skip_all)]
async fn deal<P: CategoryProvider>(
    terminal: &mut Tui,
    app: &mut App,
    controller: &mut GameController<P>,
) -> Result<()> {
    app.begin_loading();
    terminal.draw(|f| ui::draw(f, app))?;

    let result = controller.start_new_game().await;

    while event::poll(Duration::ZERO)? {
        event::read()?;
    }

    app.finish_loading(result);
    Ok(())
}
