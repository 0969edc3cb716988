//! Shared type definitions for the NeoBank shell.
//!
//! Everything in here is plain data: roles, navigation entries, the session
//! user as reported by the auth backend, and the `Msg`/`Effect` vocabulary the
//! runtime and components exchange.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Landing destination for every role, and the fallback page title.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Destination of the notifications entry; the only entry carrying a badge.
pub const NOTIFICATIONS_PATH: &str = "/notifications";
/// Destination of the profile entry.
pub const PROFILE_PATH: &str = "/profile";
/// Destination after sign-out. The shell chrome is not rendered here.
pub const LOGIN_PATH: &str = "/login";

/// Access role attached to an authenticated user.
///
/// The set is closed. Callers that receive a role from the outside should go
/// through [`Role::parse_lenient`] and treat `None` as "no usable role".
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Customer,
    Employee,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Customer, Role::Employee, Role::Admin];

    /// Upper-case wire name (`CUSTOMER`, `EMPLOYEE`, `ADMIN`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Employee => "EMPLOYEE",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses a role case-insensitively, ignoring surrounding whitespace.
    /// Anything unrecognized yields `None`.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.trim().to_ascii_uppercase().parse().ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(Self::Customer),
            "EMPLOYEE" => Ok(Self::Employee),
            "ADMIN" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}'; expected CUSTOMER, EMPLOYEE or ADMIN")]
pub struct ParseRoleError(pub String);

/// A single sidebar destination.
///
/// Entries are defined statically per role, so all fields borrow from
/// `'static` data. Identity is the `path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavEntry {
    /// Route path, always a complete segment such as `/loans`.
    pub path: &'static str,
    /// Human-friendly label, also used as the page title.
    pub label: &'static str,
    /// Short glyph rendered before the label.
    pub icon: &'static str,
}

impl NavEntry {
    pub const fn new(path: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { path, label, icon }
    }
}

/// The user as reported by the auth backend.
///
/// `role` is kept as the raw string so the UI can show exactly what the
/// backend sent, while navigation goes through [`SessionUser::role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub role: String,
}

impl SessionUser {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// Parsed role, or `None` when the backend sent something unrecognized.
    pub fn role(&self) -> Option<Role> {
        Role::parse_lenient(&self.role)
    }

    /// First character of the name, upper-cased.
    pub fn initial(&self) -> Option<char> {
        self.name.trim().chars().next().and_then(|c| c.to_uppercase().next())
    }
}

/// Messages delivered to the shell by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// The notification store published a new unread count
    UnreadCountChanged(u32),
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A navigation link was activated: navigate and close the drawer
    ActivateLink(String),
    /// Flip the drawer open/closed
    ToggleDrawer,
    /// The dimmed overlay was activated: close the drawer
    ActivateOverlay,
    /// Go back one step in router history
    NavigateBack,
    /// Terminate the session and go to the login screen
    Logout,
    /// Leave the application
    Quit,
}
