/// Open/closed state of the collapsible sidebar on narrow terminals.
///
/// Only [`DrawerState::toggle`] can open it. Link and overlay activations
/// always close it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn activate_link(&mut self) {
        self.open = false;
    }

    pub fn activate_overlay(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.is_open());
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn link_activation_closes() {
        let mut drawer = DrawerState::default();
        drawer.toggle();
        drawer.activate_link();
        assert!(!drawer.is_open());
        drawer.activate_link();
        assert!(!drawer.is_open(), "activation never reopens");
    }

    #[test]
    fn overlay_activation_closes() {
        let mut drawer = DrawerState::default();
        drawer.toggle();
        drawer.activate_overlay();
        assert!(!drawer.is_open());
        drawer.activate_overlay();
        assert!(!drawer.is_open());
    }
}
