//! Navigation sidebar: brand header, role-based links with the unread badge,
//! and the signed-in user footer with a sign-out button.
//!
//! The component renders whatever [`crate::shell::ShellModel`] the controller
//! composes and turns keys and clicks into [`neobank_types::Effect`]s.

mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::SidebarState;
