// MenuState
//
// the mobile menu is a single flag.  the DOM carries it three times (panel class,
// aria-expanded, toggle class), and all three are always written from one MenuState,
// never one at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) -> MenuState {
        self.expanded = !self.expanded;
        *self
    }

    /// Forces the hidden state.  Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores() {
        let mut state = MenuState::default();

        assert!(state.toggle().expanded());
        assert_eq!(state.aria_expanded(), "true");
        assert!(!state.toggle().expanded());
        assert_eq!(state, MenuState::default());
    }

    #[test]
    fn close_always_hides() {
        let mut state = MenuState::default();
        assert!(!state.close());
        assert!(!state.expanded());

        state.toggle();
        assert!(state.close());
        assert!(!state.expanded());
        assert_eq!(state.aria_expanded(), "false");
    }
}
