/// Whether keyboard navigation steps with Up/Down (rows) or Left/Right
/// (donut segments).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Navigation intent decoded from a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
    Clear,
    Activate,
}

impl NavKey {
    /// Decodes a DOM `KeyboardEvent.key` value; `None` for keys the chart
    /// does not handle, which the caller lets bubble.
    pub fn from_key(key: &str, orientation: Orientation) -> Option<Self> {
        match (key, orientation) {
            ("ArrowDown", Orientation::Vertical) | ("ArrowRight", Orientation::Horizontal) => {
                Some(NavKey::Next)
            }
            ("ArrowUp", Orientation::Vertical) | ("ArrowLeft", Orientation::Horizontal) => {
                Some(NavKey::Prev)
            }
            ("Escape", _) => Some(NavKey::Clear),
            ("Enter", _) | (" ", _) => Some(NavKey::Activate),
            _ => None,
        }
    }
}

/// Which single item of an N-item chart is emphasized.
///
/// Hover and keyboard focus are tracked independently and combined by an
/// explicit precedence rule (hover wins) instead of update ordering, so a
/// pointer passing over a keyboard-focused chart cannot race the focus away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<usize>,
    focused: Option<usize>,
}

impl InteractionState {
    /// The effective active index: hover if present, else keyboard focus.
    /// At most one item is ever active.
    pub fn active(&self) -> Option<usize> {
        self.hovered.or(self.focused)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn hover_enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    /// Click/tap: toggles the clicked item, replacing any previous pin.
    pub fn toggle(&mut self, index: usize) {
        if self.focused == Some(index) {
            self.focused = None;
        } else {
            self.focused = Some(index);
        }
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.focused = None;
    }

    /// Apply a navigation key over a list of `len` items. Steps clamp to
    /// [0, len-1]; the first step from nothing lands on item 0.
    pub fn key(&mut self, key: NavKey, len: usize) {
        if len == 0 {
            return;
        }
        match key {
            NavKey::Next => {
                self.focused = Some(match self.focused {
                    None => 0,
                    Some(i) => (i + 1).min(len - 1),
                });
            }
            NavKey::Prev => {
                self.focused = Some(match self.focused {
                    None => 0,
                    Some(i) => i.saturating_sub(1),
                });
            }
            NavKey::Clear => self.focused = None,
            NavKey::Activate => {
                if self.focused.is_none() {
                    self.focused = Some(0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_down_from_nothing_lands_on_zero_then_clamps() {
        let mut st = InteractionState::default();
        st.key(NavKey::Next, 3);
        assert_eq!(st.active(), Some(0));
        st.key(NavKey::Next, 3);
        st.key(NavKey::Next, 3);
        st.key(NavKey::Next, 3);
        assert_eq!(st.active(), Some(2));
    }

    #[test]
    fn arrow_up_clamps_at_zero() {
        let mut st = InteractionState::default();
        st.key(NavKey::Prev, 3);
        assert_eq!(st.active(), Some(0));
        st.key(NavKey::Prev, 3);
        assert_eq!(st.active(), Some(0));
    }

    #[test]
    fn escape_always_clears_focus() {
        let mut st = InteractionState::default();
        st.key(NavKey::Clear, 5);
        assert_eq!(st.focused(), None);
        st.key(NavKey::Next, 5);
        st.key(NavKey::Next, 5);
        st.key(NavKey::Clear, 5);
        assert_eq!(st.focused(), None);
    }

    #[test]
    fn hover_takes_precedence_and_reverts_to_focus() {
        let mut st = InteractionState::default();
        st.key(NavKey::Next, 5);
        st.key(NavKey::Next, 5); // focused = 1
        st.hover_enter(3);
        assert_eq!(st.active(), Some(3));
        st.hover_leave();
        assert_eq!(st.active(), Some(1));
    }

    #[test]
    fn click_toggles_the_active_item() {
        let mut st = InteractionState::default();
        st.toggle(2);
        assert_eq!(st.active(), Some(2));
        st.toggle(2);
        assert_eq!(st.active(), None);
        st.toggle(2);
        st.toggle(4);
        assert_eq!(st.active(), Some(4));
    }

    #[test]
    fn activate_starts_navigation_at_the_first_item() {
        let mut st = InteractionState::default();
        st.key(NavKey::Activate, 4);
        assert_eq!(st.focused(), Some(0));
        st.key(NavKey::Next, 4);
        st.key(NavKey::Activate, 4); // no-op once navigating
        assert_eq!(st.focused(), Some(1));
    }

    #[test]
    fn empty_chart_ignores_keys() {
        let mut st = InteractionState::default();
        st.key(NavKey::Next, 0);
        assert_eq!(st.active(), None);
    }

    #[test]
    fn key_decoding_respects_orientation() {
        assert_eq!(
            NavKey::from_key("ArrowDown", Orientation::Vertical),
            Some(NavKey::Next)
        );
        assert_eq!(NavKey::from_key("ArrowDown", Orientation::Horizontal), None);
        assert_eq!(
            NavKey::from_key("ArrowLeft", Orientation::Horizontal),
            Some(NavKey::Prev)
        );
        assert_eq!(NavKey::from_key("Escape", Orientation::Horizontal), Some(NavKey::Clear));
        assert_eq!(NavKey::from_key("Tab", Orientation::Vertical), None);
        assert_eq!(
            NavKey::from_key(" ", Orientation::Vertical),
            Some(NavKey::Activate)
        );
    }
}
