//! Slide-out navigation menu and its keyboard focus trap.

/// Side effects of opening or closing the menu.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEffect {
    /// Hide the header/main/footer chrome behind the menu.
    HideChrome,
    ShowChrome,
    LockScroll,
    UnlockScroll,
    RestoreScroll(f64),
    /// Return focus to the menu toggle.
    FocusToggle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuState {
    Closed,
    Open { scroll_offset: f64 },
}

/// The slide-out menu. CSS owns the animation; this machine owns the
/// captured scroll offset and the chrome/scroll side effects.
#[derive(Debug)]
pub struct NavMenu {
    state: MenuState,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: MenuState::Closed,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    /// Opens the menu, capturing the scroll offset for restoration.
    pub fn open(&mut self, scroll_offset: f64) -> Vec<NavEffect> {
        if self.is_open() {
            return Vec::new();
        }
        self.state = MenuState::Open { scroll_offset };
        vec![NavEffect::HideChrome, NavEffect::LockScroll]
    }

    /// Closes the menu, restoring focus and the captured scroll offset.
    pub fn close(&mut self) -> Vec<NavEffect> {
        let MenuState::Open { scroll_offset } = self.state else {
            return Vec::new();
        };
        self.state = MenuState::Closed;
        vec![
            NavEffect::FocusToggle,
            NavEffect::UnlockScroll,
            NavEffect::RestoreScroll(scroll_offset),
            NavEffect::ShowChrome,
        ]
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

/// A focusable element inside the open menu, in tab order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStop {
    pub id: String,
    pub visible: bool,
}

impl TabStop {
    #[must_use]
    pub fn new(id: &str, visible: bool) -> Self {
        Self {
            id: id.to_owned(),
            visible,
        }
    }
}

/// Focus trap for the open menu: Tab on the last tab-stop wraps focus to
/// the first visible one. Returns the index to focus, or `None` to let the
/// default tab order proceed.
#[must_use]
pub fn trap_tab(stops: &[TabStop], focused: usize) -> Option<usize> {
    if focused + 1 == stops.len() {
        stops.iter().position(|stop| stop.visible)
    } else {
        None
    }
}
