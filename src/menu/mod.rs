//! Mobile navigation toggle.
//!
//! Two states. Opening reveals the nav panel, sets `aria-expanded`, and turns
//! the three hamburger bars into a cross; closing reverses all of it. The
//! visual state is a pure function of `open`, so toggling twice always lands
//! back on the initial styles.


#[cfg(feature = "browser")]
pub mod dom;

/// One inline style assignment on a hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub property: &'static str,
    pub value: &'static str,
}

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle { property: "transform", value: "rotate(-45deg) translate(-5px, 6px)" },
    BarStyle { property: "opacity", value: "0" },
    BarStyle { property: "transform", value: "rotate(45deg) translate(-5px, -6px)" },
];

const CLOSED_BARS: [BarStyle; 3] = [
    BarStyle { property: "transform", value: "none" },
    BarStyle { property: "opacity", value: "1" },
    BarStyle { property: "transform", value: "none" },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A nav link was followed. Returns whether the menu closed.
    pub fn link_activated(&mut self) -> bool {
        let was_open = self.open;
        self.close();
        was_open
    }

    /// Escape closes an open menu. Returns whether the key changed state.
    pub fn key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }

    /// `aria-expanded` value for the trigger.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// CSS `display` for the nav panel.
    #[must_use]
    pub fn nav_display(self) -> &'static str {
        if self.open { "block" } else { "none" }
    }

    /// Inline styles for the three bars, top to bottom.
    #[must_use]
    pub fn bar_styles(self) -> [BarStyle; 3] {
        if self.open { OPEN_BARS } else { CLOSED_BARS }
    }
}
