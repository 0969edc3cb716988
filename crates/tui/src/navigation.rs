//! Role-based navigation sets and active-route matching.
//!
//! The sidebar content is a fixed table per [`Role`]. Every entry path is a
//! complete path segment (`/loans`, never `/loan`), which is what keeps the
//! prefix matching in [`is_active`] from highlighting unrelated sections.

use neobank_types::{DASHBOARD_PATH, NOTIFICATIONS_PATH, NavEntry, PROFILE_PATH, Role, SessionUser};

/// Title shown when the current path matches no entry.
pub const FALLBACK_TITLE: &str = "Dashboard";

/// Largest unread count rendered verbatim; anything above shows as `99+`.
pub const BADGE_CEILING: u32 = 99;

const DASHBOARD: NavEntry = NavEntry::new(DASHBOARD_PATH, "Dashboard", "◫");
const NOTIFICATIONS: NavEntry = NavEntry::new(NOTIFICATIONS_PATH, "Notifications", "♪");
const PROFILE: NavEntry = NavEntry::new(PROFILE_PATH, "Profile", "◉");
const STAFF: NavEntry = NavEntry::new("/staff", "Staff Panel", "▦");
const LOAN_OFFICER: NavEntry = NavEntry::new("/loan-officers", "Loan Officer", "≡");

pub const CUSTOMER_NAV: &[NavEntry] = &[
    DASHBOARD,
    NavEntry::new("/accounts", "Accounts", "$"),
    NavEntry::new("/transactions", "Transactions", "⇅"),
    NavEntry::new("/loans", "Loans", "≡"),
    NavEntry::new("/statements", "Statements", "▤"),
    NOTIFICATIONS,
    PROFILE,
];

pub const EMPLOYEE_NAV: &[NavEntry] = &[DASHBOARD, STAFF, LOAN_OFFICER, NOTIFICATIONS, PROFILE];

pub const ADMIN_NAV: &[NavEntry] = &[
    DASHBOARD,
    STAFF,
    LOAN_OFFICER,
    NavEntry::new("/admin", "Admin", "⚙"),
    NOTIFICATIONS,
    PROFILE,
];

/// Navigation set for a role. A missing role gets the customer set.
pub fn resolve(role: Option<Role>) -> &'static [NavEntry] {
    match role {
        Some(Role::Admin) => ADMIN_NAV,
        Some(Role::Employee) => EMPLOYEE_NAV,
        Some(Role::Customer) | None => CUSTOMER_NAV,
    }
}

/// Navigation set for the session user, tolerating no user and
/// unrecognized role strings.
pub fn resolve_for_user(user: Option<&SessionUser>) -> &'static [NavEntry] {
    resolve(user.and_then(SessionUser::role))
}

/// `true` when `current_path` is `entry_path` itself or a page beneath it.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    match current_path.strip_prefix(entry_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Label of the first entry matching `current_path`, else [`FALLBACK_TITLE`].
pub fn page_title(entries: &[NavEntry], current_path: &str) -> &'static str {
    entries
        .iter()
        .find(|entry| is_active(current_path, entry.path))
        .map(|entry| entry.label)
        .unwrap_or(FALLBACK_TITLE)
}

/// Badge text for an unread count; `None` hides the badge.
pub fn badge_text(unread: u32) -> Option<String> {
    match unread {
        0 => None,
        count if count > BADGE_CEILING => Some(format!("{BADGE_CEILING}+")),
        count => Some(count.to_string()),
    }
}
