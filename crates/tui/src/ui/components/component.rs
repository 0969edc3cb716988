//! Component system for the shell UI.
//!
//! Components own only local UI behavior. They read and mutate [`App`] state,
//! render into the `Rect` they are given, and report anything with wider
//! consequences (navigation, sign-out, quitting) back to the runtime as
//! [`Effect`]s instead of acting on it directly.

use crossterm::event::{KeyEvent, MouseEvent};
use neobank_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI element with its own event handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input arrives through `handle_key_events()` and
///    `handle_mouse_events()`; application messages through `handle_message()`.
/// 2. **Rendering**: `render()` draws the component and records any hit-test
///    areas needed by the next mouse event.
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key press routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event. Components should hit-test against the areas
    /// they recorded during the last render and ignore everything else.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Keyboard hints shown in the hint bar while this component is visible.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Splits `area` into the sub-areas this component renders into.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}
