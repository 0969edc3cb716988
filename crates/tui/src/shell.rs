//! Shell controller: drawer state, sign-out, the notification refresh loop,
//! and composition of what the chrome should show.
//!
//! The controller owns no rendering code. [`ShellController::compose`]
//! produces a [`ShellModel`] that the sidebar and top bar components draw,
//! which keeps every decision here testable without a terminal.

use std::sync::Arc;
use std::time::Duration;

use neobank_api::{NotificationProvider, SessionProvider};
use neobank_types::{LOGIN_PATH, NOTIFICATIONS_PATH, NavEntry, Role};
use tokio::sync::watch;
use tokio::time;
use tracing::{info, warn};

use crate::drawer::DrawerState;
use crate::navigation::{badge_text, is_active, page_title, resolve_for_user};
use crate::poller::{DEFAULT_POLL_INTERVAL, NotificationPoller, PollerHandle};
use crate::router::Router;

pub const BRAND_NAME: &str = "NeoBank";
pub const BRAND_ICON: &str = "⌂";
/// Avatar letter used when there is no user or the name is blank.
pub const FALLBACK_INITIAL: char = 'U';

pub const DEFAULT_LOGOUT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSettings {
    pub poll_interval: Duration,
    /// How long sign-out waits for the backend before leaving anyway.
    pub logout_timeout: Duration,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            logout_timeout: DEFAULT_LOGOUT_TIMEOUT,
        }
    }
}

/// What happened to the backend call during sign-out. Navigation to the
/// login screen happens in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    Completed,
    Failed,
    TimedOut,
}

/// A sidebar link ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub entry: NavEntry,
    pub active: bool,
    pub badge: Option<String>,
}

/// Footer card describing the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub initial: char,
    pub name: String,
    /// Role exactly as the backend reported it.
    pub role_label: String,
    pub role: Option<Role>,
}

/// Everything the chrome needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellModel {
    pub links: Vec<NavLink>,
    pub title: &'static str,
    pub user: UserCard,
    pub drawer_open: bool,
}

impl ShellModel {
    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|link| link.active)
    }
}

pub struct ShellController {
    session: Arc<dyn SessionProvider>,
    notifications: Arc<dyn NotificationProvider>,
    router: Box<dyn Router>,
    drawer: DrawerState,
    unread: watch::Receiver<u32>,
    poller: Option<PollerHandle>,
    settings: ShellSettings,
}

impl std::fmt::Debug for ShellController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellController")
            .field("router", &self.router)
            .field("drawer", &self.drawer)
            .field("mounted", &self.poller.is_some())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ShellController {
    pub fn new(
        session: Arc<dyn SessionProvider>,
        notifications: Arc<dyn NotificationProvider>,
        router: Box<dyn Router>,
        settings: ShellSettings,
    ) -> Self {
        let unread = notifications.unread_count();
        Self {
            session,
            notifications,
            router,
            drawer: DrawerState::default(),
            unread,
            poller: None,
            settings,
        }
    }

    /// Starts the refresh loop: one fetch now, then one per interval.
    /// Mounting an already mounted shell does nothing.
    pub fn mount(&mut self) {
        if self.poller.is_some() {
            return;
        }
        info!(path = self.router.current_path(), "shell mounted");
        let poller = NotificationPoller::new(Arc::clone(&self.notifications), self.settings.poll_interval);
        self.poller = Some(poller.spawn());
    }

    /// Stops the refresh loop. No fetch starts after this returns.
    pub async fn unmount(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.shutdown().await;
            info!("shell unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.poller.is_some()
    }

    /// Mounts the chrome on shell routes and unmounts it on the login route.
    pub async fn sync_lifecycle(&mut self) {
        if self.is_login_route() {
            self.unmount().await;
        } else {
            self.mount();
        }
    }

    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    pub fn is_login_route(&self) -> bool {
        is_active(self.router.current_path(), LOGIN_PATH)
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer.toggle();
    }

    /// Navigates to `path` and closes the drawer.
    pub fn activate_link(&mut self, path: &str) {
        self.drawer.activate_link();
        self.router.navigate_to(path);
    }

    pub fn activate_overlay(&mut self) {
        self.drawer.activate_overlay();
    }

    pub fn navigate_back(&mut self) -> bool {
        self.router.back()
    }

    /// Latest unread count published by the notification store.
    pub fn unread_count(&self) -> u32 {
        *self.unread.borrow()
    }

    /// Another view of the unread cell, for waking the event loop on change.
    pub fn subscribe_unread(&self) -> watch::Receiver<u32> {
        self.unread.clone()
    }

    pub fn navigation(&self) -> &'static [NavEntry] {
        resolve_for_user(self.session.current_user().as_ref())
    }

    /// Ends the session and leaves for the login screen.
    ///
    /// The backend call is bounded by the configured timeout; failures and
    /// timeouts are logged and otherwise ignored.
    pub async fn logout(&mut self) -> LogoutOutcome {
        let outcome = match time::timeout(self.settings.logout_timeout, self.session.logout()).await {
            Ok(Ok(())) => LogoutOutcome::Completed,
            Ok(Err(error)) => {
                warn!(%error, "session termination failed; signing out locally");
                LogoutOutcome::Failed
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.settings.logout_timeout.as_secs_f64(),
                    "session termination timed out; signing out locally"
                );
                LogoutOutcome::TimedOut
            }
        };

        self.drawer.activate_link();
        self.router.navigate_to(LOGIN_PATH);
        self.sync_lifecycle().await;
        info!(?outcome, "signed out");
        outcome
    }

    pub fn compose(&self) -> ShellModel {
        let user = self.session.current_user();
        let entries = resolve_for_user(user.as_ref());
        let current_path = self.router.current_path();
        let unread = self.unread_count();

        let links = entries
            .iter()
            .map(|entry| NavLink {
                entry: *entry,
                active: is_active(current_path, entry.path),
                badge: if entry.path == NOTIFICATIONS_PATH { badge_text(unread) } else { None },
            })
            .collect();

        let user = match user {
            Some(user) => UserCard {
                initial: user.initial().unwrap_or(FALLBACK_INITIAL),
                role: user.role(),
                name: user.name,
                role_label: user.role,
            },
            None => UserCard {
                initial: FALLBACK_INITIAL,
                name: String::new(),
                role_label: String::new(),
                role: None,
            },
        };

        ShellModel {
            links,
            title: page_title(entries, current_path),
            user,
            drawer_open: self.drawer.is_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use neobank_api::ApiError;
    use neobank_types::SessionUser;

    use super::*;
    use crate::router::HistoryRouter;

    #[derive(Clone, Copy)]
    enum LogoutBehavior {
        Succeed,
        Fail,
        Hang,
    }

    struct FakeSession {
        user: Option<SessionUser>,
        behavior: LogoutBehavior,
        logout_calls: AtomicUsize,
    }

    impl FakeSession {
        fn new(user: Option<SessionUser>, behavior: LogoutBehavior) -> Arc<Self> {
            Arc::new(Self {
                user,
                behavior,
                logout_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SessionProvider for FakeSession {
        fn current_user(&self) -> Option<SessionUser> {
            self.user.clone()
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.logout_calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                LogoutBehavior::Succeed => Ok(()),
                LogoutBehavior::Fail => Err(ApiError::Status {
                    method: "POST".into(),
                    path: "/auth/logout".into(),
                    status: 500,
                }),
                LogoutBehavior::Hang => std::future::pending().await,
            }
        }
    }

    struct FakeNotifications {
        unread: watch::Sender<u32>,
        fetches: AtomicUsize,
    }

    impl FakeNotifications {
        fn with_count(count: u32) -> Arc<Self> {
            Arc::new(Self {
                unread: watch::channel(count).0,
                fetches: AtomicUsize::new(0),
            })
        }

        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl NotificationProvider for FakeNotifications {
        fn unread_count(&self) -> watch::Receiver<u32> {
            self.unread.subscribe()
        }

        async fn fetch_unread_count(&self) -> Result<(), ApiError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn controller_at(
        path: &str,
        session: Arc<FakeSession>,
        notifications: Arc<FakeNotifications>,
    ) -> ShellController {
        ShellController::new(
            session,
            notifications,
            Box::new(HistoryRouter::new(path)),
            ShellSettings::default(),
        )
    }

    fn customer() -> Option<SessionUser> {
        Some(SessionUser::new("carol", "CUSTOMER"))
    }

    async fn settle() {
        time::sleep(Duration::from_millis(1)).await;
    }

    #[test]
    fn compose_marks_the_active_section_and_title() {
        let shell = controller_at(
            "/loans/7",
            FakeSession::new(customer(), LogoutBehavior::Succeed),
            FakeNotifications::with_count(5),
        );
        let model = shell.compose();

        assert_eq!(model.title, "Loans");
        let active: Vec<_> = model.links.iter().filter(|l| l.active).map(|l| l.entry.path).collect();
        assert_eq!(active, ["/loans"]);
        assert_eq!(model.active_index(), Some(3));
        assert_eq!(model.user.initial, 'C');
        assert_eq!(model.user.role, Some(Role::Customer));
    }

    #[test]
    fn compose_puts_the_badge_on_notifications_only() {
        let notifications = FakeNotifications::with_count(5);
        let shell = controller_at(
            "/dashboard",
            FakeSession::new(customer(), LogoutBehavior::Succeed),
            notifications.clone(),
        );

        let badges: Vec<_> = shell
            .compose()
            .links
            .into_iter()
            .filter_map(|link| link.badge.map(|badge| (link.entry.path, badge)))
            .collect();
        assert_eq!(badges, [("/notifications", "5".to_string())]);

        notifications.unread.send_replace(150);
        let model = shell.compose();
        let badge = model.links.iter().find(|l| l.entry.path == NOTIFICATIONS_PATH).and_then(|l| l.badge.clone());
        assert_eq!(badge.as_deref(), Some("99+"));

        notifications.unread.send_replace(0);
        assert!(shell.compose().links.iter().all(|link| link.badge.is_none()));
    }

    #[test]
    fn compose_without_user_uses_customer_nav_and_placeholders() {
        let shell = controller_at(
            "/unknown",
            FakeSession::new(None, LogoutBehavior::Succeed),
            FakeNotifications::with_count(0),
        );
        let model = shell.compose();
        assert_eq!(model.links.len(), crate::navigation::CUSTOMER_NAV.len());
        assert_eq!(model.title, "Dashboard");
        assert_eq!(model.active_index(), None);
        assert_eq!(model.user.initial, FALLBACK_INITIAL);
        assert!(model.user.name.is_empty());
    }

    #[test]
    fn unrecognized_role_is_shown_raw_but_navigates_as_customer() {
        let shell = controller_at(
            "/dashboard",
            FakeSession::new(Some(SessionUser::new("Sam", "AUDITOR")), LogoutBehavior::Succeed),
            FakeNotifications::with_count(0),
        );
        let model = shell.compose();
        assert_eq!(model.user.role_label, "AUDITOR");
        assert_eq!(model.user.role, None);
        assert_eq!(shell.navigation(), crate::navigation::CUSTOMER_NAV);
    }

    #[test]
    fn link_and_overlay_activation_close_the_drawer() {
        let mut shell = controller_at(
            "/dashboard",
            FakeSession::new(customer(), LogoutBehavior::Succeed),
            FakeNotifications::with_count(0),
        );
        assert!(!shell.drawer().is_open());

        shell.toggle_drawer();
        assert!(shell.compose().drawer_open);
        shell.activate_link("/accounts");
        assert!(!shell.drawer().is_open());
        assert_eq!(shell.current_path(), "/accounts");

        shell.toggle_drawer();
        shell.activate_overlay();
        assert!(!shell.drawer().is_open());
        assert_eq!(shell.current_path(), "/accounts", "overlay does not navigate");

        assert!(shell.navigate_back());
        assert_eq!(shell.current_path(), "/dashboard");
    }

    #[tokio::test(start_paused = true)]
    async fn logout_navigates_to_login_on_success() {
        let session = FakeSession::new(customer(), LogoutBehavior::Succeed);
        let mut shell = controller_at("/accounts", session.clone(), FakeNotifications::with_count(0));
        shell.toggle_drawer();

        assert_eq!(shell.logout().await, LogoutOutcome::Completed);
        assert_eq!(shell.current_path(), LOGIN_PATH);
        assert!(!shell.drawer().is_open());
        assert_eq!(session.logout_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_navigates_even_when_termination_fails() {
        let mut shell = controller_at(
            "/accounts",
            FakeSession::new(customer(), LogoutBehavior::Fail),
            FakeNotifications::with_count(0),
        );
        assert_eq!(shell.logout().await, LogoutOutcome::Failed);
        assert_eq!(shell.current_path(), LOGIN_PATH);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_navigates_even_when_termination_never_resolves() {
        let mut shell = controller_at(
            "/accounts",
            FakeSession::new(customer(), LogoutBehavior::Hang),
            FakeNotifications::with_count(0),
        );
        let started = time::Instant::now();
        assert_eq!(shell.logout().await, LogoutOutcome::TimedOut);
        assert_eq!(shell.current_path(), LOGIN_PATH);
        assert!(started.elapsed() >= DEFAULT_LOGOUT_TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn mount_polls_until_the_login_route_unmounts() {
        let notifications = FakeNotifications::with_count(0);
        let mut shell = controller_at(
            "/dashboard",
            FakeSession::new(customer(), LogoutBehavior::Succeed),
            notifications.clone(),
        );

        shell.sync_lifecycle().await;
        assert!(shell.is_mounted());
        settle().await;
        assert_eq!(notifications.fetches(), 1);

        shell.mount();
        settle().await;
        assert_eq!(notifications.fetches(), 1, "second mount must not start another loop");

        time::sleep(DEFAULT_POLL_INTERVAL).await;
        settle().await;
        assert_eq!(notifications.fetches(), 2);

        shell.logout().await;
        assert!(!shell.is_mounted());
        time::sleep(DEFAULT_POLL_INTERVAL * 4).await;
        assert_eq!(notifications.fetches(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_before_first_interval_prevents_further_fetches() {
        let notifications = FakeNotifications::with_count(0);
        let mut shell = controller_at(
            "/dashboard",
            FakeSession::new(customer(), LogoutBehavior::Succeed),
            notifications.clone(),
        );
        shell.mount();
        settle().await;
        shell.unmount().await;

        time::sleep(DEFAULT_POLL_INTERVAL * 2).await;
        assert_eq!(notifications.fetches(), 1);
        assert!(!shell.is_mounted());
    }
}
