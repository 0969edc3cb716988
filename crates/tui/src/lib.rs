//! # NeoBank Shell TUI
//!
//! The persistent chrome of the NeoBank client as a terminal UI: a role-aware
//! navigation sidebar, a top bar with the page title and role badge, an unread
//! notifications badge refreshed in the background, and sign-out.
//!
//! ## Architecture
//!
//! Decisions live in plain modules that are testable without a terminal:
//! [`navigation`] (role → links, active-route matching, titles, badge text),
//! [`drawer`], [`router`], [`poller`] and the [`shell::ShellController`] that
//! ties them to the session and notification collaborators. The `ui` module
//! renders a [`shell::ShellModel`] with ratatui and turns input into effects.

mod app;
pub mod drawer;
pub mod navigation;
pub mod poller;
pub mod router;
pub mod shell;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use neobank_api::{NotificationProvider, SessionProvider};

pub use router::{HistoryRouter, Router};
pub use shell::{LogoutOutcome, ShellController, ShellModel, ShellSettings};

/// Runs the shell until the user quits.
///
/// Starts on the dashboard, or on the login screen when there is no signed-in
/// user. `preferred_theme` is the configured theme name, if any.
pub async fn run(
    session: Arc<dyn SessionProvider>,
    notifications: Arc<dyn NotificationProvider>,
    settings: ShellSettings,
    preferred_theme: Option<&str>,
) -> Result<()> {
    let start_path = if session.current_user().is_some() {
        neobank_types::DASHBOARD_PATH
    } else {
        neobank_types::LOGIN_PATH
    };
    let shell = ShellController::new(session, notifications, Box::new(HistoryRouter::new(start_path)), settings);
    let theme = ui::theme::load(preferred_theme);
    ui::runtime::run_app(app::App::new(theme, shell)).await
}
