//! UI components: sidebar, top bar, routed content and the login screen.

pub mod component;
pub mod content;
pub mod sidebar;
pub mod top_bar;

pub(crate) use component::Component;
pub use content::{LoginComponent, PageComponent};
pub use sidebar::{SidebarComponent, SidebarState};
pub use top_bar::{TopBarComponent, TopBarState};
