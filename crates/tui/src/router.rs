//! In-process router: the current path plus a history stack.

use neobank_types::DASHBOARD_PATH;
use tracing::debug;

/// Source of the current path and sink for navigation requests.
pub trait Router: Send + std::fmt::Debug {
    fn current_path(&self) -> &str;
    fn navigate_to(&mut self, path: &str);

    /// Returns to the previous path, if the router keeps history.
    fn back(&mut self) -> bool {
        false
    }
}

/// Deepest history kept; the oldest entries fall off beyond this.
pub const MAX_HISTORY: usize = 64;

/// Router keeping recently visited paths so `back` can retrace them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRouter {
    history: Vec<String>,
}

impl HistoryRouter {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            history: vec![initial_path.into()],
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new(DASHBOARD_PATH)
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or(DASHBOARD_PATH)
    }

    fn navigate_to(&mut self, path: &str) {
        if self.current_path() == path {
            return;
        }
        debug!(from = self.current_path(), to = path, "navigating");
        self.history.push(path.to_string());
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(..excess);
        }
    }

    /// The first path is never popped.
    fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        debug!(path = self.current_path(), "navigated back");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dashboard() {
        assert_eq!(HistoryRouter::default().current_path(), "/dashboard");
    }

    #[test]
    fn navigation_pushes_history_and_skips_repeats() {
        let mut router = HistoryRouter::default();
        router.navigate_to("/accounts");
        router.navigate_to("/accounts");
        router.navigate_to("/accounts/42");
        assert_eq!(router.history(), ["/dashboard", "/accounts", "/accounts/42"]);
        assert_eq!(router.current_path(), "/accounts/42");
    }

    #[test]
    fn history_depth_is_bounded() {
        let mut router = HistoryRouter::default();
        for round in 0..MAX_HISTORY {
            router.navigate_to("/accounts");
            router.navigate_to(&format!("/accounts/{round}"));
        }

        assert_eq!(router.history().len(), MAX_HISTORY);
        assert_eq!(router.current_path(), format!("/accounts/{}", MAX_HISTORY - 1));
        let mut steps = 0;
        while router.back() {
            steps += 1;
        }
        assert_eq!(steps, MAX_HISTORY - 1);
        assert_ne!(router.current_path(), "/dashboard");
    }

    #[test]
    fn back_stops_at_the_first_path() {
        let mut router = HistoryRouter::new("/loans");
        router.navigate_to("/loans/7");
        assert!(router.back());
        assert_eq!(router.current_path(), "/loans");
        assert!(!router.back());
        assert_eq!(router.current_path(), "/loans");
    }
}
