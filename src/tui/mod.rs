pub mod detail;
pub mod event;
pub mod help;
pub mod list;
pub mod navigator;
pub mod screen;
pub mod viewport;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, text::Text, widgets::Paragraph, Terminal};

use crate::app::{AppContext, CorpusError, Result};
use crate::config::Config;
use crate::store::Store;

use self::event::{Action, AppEvent, Effect, Event, EventHandler};
use self::help::HelpScreen;
use self::list::ListScreen;
use self::navigator::Navigator;

pub const ARTICLES: &str = "articles";
pub const HELP: &str = "help";

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Registers the article list and the help screen and wires them together.
pub fn build_navigator(store: Arc<dyn Store>, config: &Config) -> Result<Navigator> {
    let mut navigator = Navigator::new(ARTICLES);

    let list = ListScreen::new(config.ui.username.clone(), Vec::new())
        .with_store(store)
        .with_style(config.colors.clone(), config.keybindings.footer_hints())
        .with_layout(config.ui.row_width, config.ui.excerpt_words);
    let help = HelpScreen::new(&config.keybindings, config.colors.clone());

    navigator.register_screen(ARTICLES, Box::new(list))?;
    navigator.register_screen(HELP, Box::new(help))?;
    navigator.register_transition(ARTICLES, Action::Help, HELP)?;
    navigator.register_transition(HELP, Action::Help, ARTICLES)?;
    Ok(navigator)
}

pub fn run(ctx: &AppContext, config: &Config) -> Result<()> {
    let mut navigator = build_navigator(ctx.store.clone(), config)?;
    if navigator.initialize()? == Effect::Quit {
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut navigator, config);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Tui, navigator: &mut Navigator, config: &Config) -> Result<()> {
    let event_handler = EventHandler::new(Duration::from_millis(250));

    let size = terminal.size()?;
    navigator.broadcast(&Event::Resize {
        width: size.width,
        height: size.height,
    })?;

    // Last frame that rendered cleanly, repainted if the active screen vanishes.
    let mut last_frame = Text::default();

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            match navigator.render(area.width) {
                Ok(text) => last_frame = text,
                Err(e) => tracing::warn!("Render failed, keeping previous frame: {}", e),
            }
            frame.render_widget(Paragraph::new(last_frame.clone()), area);
        })?;

        let outcome = match event_handler.next()? {
            AppEvent::Key(key) => match config.keybindings.get_action(&key) {
                Action::None => continue,
                action => navigator.dispatch(&Event::Action(action)),
            },
            AppEvent::Scroll(action) => navigator.dispatch(&Event::Action(action)),
            AppEvent::Resize(width, height) => {
                navigator.broadcast(&Event::Resize { width, height })
            }
            AppEvent::Tick => continue,
        };

        match outcome {
            Ok(Effect::Quit) => break,
            Ok(Effect::None) => {}
            Err(e @ CorpusError::MissingScreen(_)) => tracing::warn!("{}", e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
