//! Banking API client and the collaborators the shell depends on.
//!
//! The shell talks to two collaborators through traits defined here:
//!
//! - [`SessionProvider`]: current user and sign-out
//! - [`NotificationProvider`]: the unread-notification count cell
//!
//! [`HttpSessionStore`] and [`HttpNotificationStore`] implement them against
//! the banking API through [`BankClient`]; the [`demo`] module implements them
//! in memory for offline use.

mod client;
pub mod demo;
mod error;
mod notifications;
mod session;

pub use client::BankClient;
pub use error::ApiError;
pub use notifications::{HttpNotificationStore, NotificationProvider};
pub use session::{HttpSessionStore, SessionProvider};
