//! Terminal rendering for the shell: components, layout, theme and the runtime
//! event loop.

pub mod components;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
