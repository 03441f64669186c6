//! Heroes TUI
//!
//! 1. Event (keyboard/mouse) -> HeroesPage.handle_event() -> Actions
//! 2. Actions dispatched to the Store
//! 3. Reducer updates state and declares effects
//! 4. Effects run on the TaskManager (the hero fetch)
//! 5. If state changed, re-render
//!
//! # Usage
//!
//! ```sh
//! heroes
//! heroes --api-endpoint http://localhost:8080 --log
//! ```

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use heroes_core::{actions, LoggingMiddleware, Store};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};

use heroes_tui::components::{Component, HeroesPage, HeroesPageProps};
use heroes_tui::event::EventKind;
use heroes_tui::state::LOADING_ANIM_TICK_MS;
use heroes_tui::{
    handle_effect, logging, reducer, Action, AppState, Args, Config, EffectContext, Effect,
    EventOutcome, HeroesClient, Runtime,
};

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Fail before entering TUI mode
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_tracing(config.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let client = match HeroesClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: could not build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(endpoint = %config.api_endpoint, "Starting heroes");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Terminal error");
    }
    result
}

struct HeroesUi {
    page: HeroesPage,
    endpoint: String,
}

impl HeroesUi {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let props = HeroesPageProps {
            state,
            endpoint: &self.endpoint,
            is_focused: true,
        };
        self.page.render(frame, area, props);
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(width, height) = event {
            return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
        }

        let props = HeroesPageProps {
            state,
            endpoint: &self.endpoint,
            is_focused: true,
        };
        EventOutcome::from_actions(self.page.handle_event(event, props))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: HeroesClient,
) -> io::Result<()> {
    let store = Store::with_middleware(AppState::default(), reducer, LoggingMiddleware::new());

    let mut runtime = Runtime::from_store(store)
        .with_tick(Duration::from_millis(LOADING_ANIM_TICK_MS), || Action::Tick);

    // Fetch once on mount, before any input is handled
    runtime.enqueue(actions::fetch_request().into());

    let ui = RefCell::new(HeroesUi {
        page: HeroesPage::default(),
        endpoint: client.endpoint().to_string(),
    });

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect: Effect, ctx: &mut EffectContext<'_, Action>| {
                handle_effect(&client, effect, ctx)
            },
        )
        .await
}
