//! Runtime: terminal lifecycle and the single event loop of the shell.
//!
//! Responsibilities
//! - Own the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - Drive one `select!` loop over terminal input, a slow tick, unread-count
//!   changes and Ctrl+C.
//! - Route input to [`MainView`] and execute the returned [`Effect`]s against
//!   the shell controller, then mount or unmount the chrome to match the route.
//!
//! Input comes from a dedicated OS thread that blocks on `crossterm::event::read`
//! and forwards events over a channel, so the async loop never blocks on the
//! terminal.

use std::io::Stdout;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use neobank_types::{Effect, Msg};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

type ShellTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Catches terminals that resize without delivering an event.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("failed to read terminal event: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

fn setup_terminal() -> Result<ShellTerminal> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut ShellTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut ShellTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Applies effects to the shell. Returns `true` when the app should exit.
pub(crate) async fn process_effects(app: &mut App, effects: Vec<Effect>) -> bool {
    if effects.is_empty() {
        return false;
    }

    let mut quit = false;
    let mut navigated = false;
    for effect in effects {
        debug!(?effect, "processing effect");
        match effect {
            Effect::ActivateLink(path) => {
                app.shell.activate_link(&path);
                navigated = true;
            }
            Effect::ToggleDrawer => app.shell.toggle_drawer(),
            Effect::ActivateOverlay => app.shell.activate_overlay(),
            Effect::NavigateBack => navigated |= app.shell.navigate_back(),
            Effect::Logout => {
                app.shell.logout().await;
                navigated = true;
            }
            Effect::Quit => quit = true,
        }
    }

    app.shell.sync_lifecycle().await;
    if navigated {
        app.sync_sidebar_cursor();
    }
    quit
}

/// Sets up the terminal, runs the event loop and always restores the terminal
/// and stops the refresh loop on the way out.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut main_view = MainView::new();
    info!(theme = app.ctx.theme_id, path = app.shell.current_path(), "shell started");

    let result = event_loop(&mut terminal, &mut app, &mut main_view).await;

    app.shell.unmount().await;
    cleanup_terminal(&mut terminal)?;
    info!("shell exited");
    result
}

async fn event_loop(terminal: &mut ShellTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut unread = app.shell.subscribe_unread();
    let mut unread_open = true;

    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update(&Msg::Resize(width, height));
    }
    app.shell.sync_lifecycle().await;
    render(terminal, app, main_view)?;

    loop {
        let mut needs_render = false;
        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input thread is gone; nothing more can reach us.
                    break;
                };
                needs_render = true;
                handle_input_event(app, main_view, event)
            }

            changed = unread.changed(), if unread_open => {
                match changed {
                    Ok(()) => {
                        let count = *unread.borrow_and_update();
                        needs_render = true;
                        main_view.handle_message(app, Msg::UnreadCountChanged(count))
                    }
                    Err(_) => {
                        unread_open = false;
                        Vec::new()
                    }
                }
            }

            _ = ticker.tick() => {
                if let Ok((width, height)) = crossterm::terminal::size()
                    && app.viewport != (width, height)
                {
                    needs_render = true;
                    main_view.handle_message(app, Msg::Resize(width, height))
                } else {
                    main_view.handle_message(app, Msg::Tick)
                }
            }

            _ = signal::ctrl_c() => break,
        };

        if !effects.is_empty() {
            needs_render = true;
            if process_effects(app, effects).await {
                break;
            }
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use neobank_api::demo::{DemoNotifications, DemoSession};
    use neobank_types::{LOGIN_PATH, SessionUser};

    use super::*;
    use crate::router::HistoryRouter;
    use crate::shell::{ShellController, ShellSettings};
    use crate::ui::theme::{LoadedTheme, NEOBANK_THEME_ID, NeoBankTheme};

    fn app() -> App {
        let shell = ShellController::new(
            Arc::new(DemoSession::new(Some(SessionUser::new("Fox", "EMPLOYEE")))),
            Arc::new(DemoNotifications::new(2, 1)),
            Box::new(HistoryRouter::new("/dashboard")),
            ShellSettings::default(),
        );
        let theme = LoadedTheme {
            id: NEOBANK_THEME_ID,
            theme: Box::new(NeoBankTheme::new()),
        };
        App::new(theme, shell)
    }

    #[tokio::test(start_paused = true)]
    async fn link_activation_navigates_and_closes_drawer() {
        let mut app = app();
        app.shell.toggle_drawer();

        let quit = process_effects(&mut app, vec![Effect::ActivateLink("/staff".into())]).await;

        assert!(!quit);
        assert_eq!(app.shell.current_path(), "/staff");
        assert!(!app.shell.drawer().is_open());
        assert!(app.shell.is_mounted());
        assert_eq!(app.sidebar.cursor, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_effect_unmounts_on_login_route() {
        let mut app = app();
        process_effects(&mut app, vec![Effect::ToggleDrawer]).await;
        assert!(app.shell.is_mounted());

        process_effects(&mut app, vec![Effect::Logout]).await;

        assert_eq!(app.shell.current_path(), LOGIN_PATH);
        assert!(!app.shell.is_mounted());
        assert!(!app.shell.drawer().is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn back_returns_to_previous_route() {
        let mut app = app();
        process_effects(&mut app, vec![Effect::ActivateLink("/profile".into())]).await;
        process_effects(&mut app, vec![Effect::NavigateBack]).await;

        assert_eq!(app.shell.current_path(), "/dashboard");
        assert_eq!(app.sidebar.cursor, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_effect_stops_the_loop() {
        let mut app = app();
        assert!(process_effects(&mut app, vec![Effect::ToggleDrawer, Effect::Quit]).await);
        assert!(app.shell.drawer().is_open());
    }
}
