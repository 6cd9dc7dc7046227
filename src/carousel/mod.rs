//! Rotating services carousel.
//!
//! [`Carousel`] is the state machine: an index into a fixed ring of cards,
//! whether autoplay is enabled, whether its timer should be live, and the
//! drag gesture in flight. Every input returns the [`Action`]s the host must
//! perform, so the machine is driven identically by the DOM binding
//! ([`dom`], `browser` feature) and by tests.
//!
//! Visual classification is a pure query: the card at `current` is center,
//! its ring neighbors are left and right, all others are hidden.


#[cfg(feature = "browser")]
pub mod dom;

use std::rc::Rc;

use crate::consts::SWIPE_THRESHOLD_PX;
use crate::motion::MotionPreference;

/// Side effects requested by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Re-apply card, indicator, and `aria-current` state.
    Render,
    /// Replace any live autoplay timer with a fresh one.
    StartAutoplay,
    /// Cancel the live autoplay timer.
    StopAutoplay,
}

/// Where a card sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPosition {
    Center,
    Left,
    Right,
    Hidden,
}

impl CardPosition {
    /// Modifier suffix of the position class, `None` for hidden cards.
    #[must_use]
    pub fn class_suffix(self) -> Option<&'static str> {
        match self {
            Self::Center => Some("center"),
            Self::Left => Some("left"),
            Self::Right => Some("right"),
            Self::Hidden => None,
        }
    }

    /// Every suffix a card may carry, for clearing before re-render.
    pub const ALL_SUFFIXES: [&'static str; 3] = ["left", "center", "right"];
}

/// Net horizontal movement of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub start_x: f64,
    pub current_x: f64,
}

impl Drag {
    /// Positive when the pointer travelled left.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.start_x - self.current_x
    }
}

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    playing: bool,
    autoplay_running: bool,
    drag: Option<Drag>,
    swipe_threshold: f64,
    motion: Rc<dyn MotionPreference>,
}

impl Carousel {
    /// Build a carousel over `len` cards. Returns `None` for an empty ring,
    /// which disables the component.
    #[must_use]
    pub fn new(len: usize, motion: Rc<dyn MotionPreference>) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let playing = !motion.prefers_reduced_motion();
        Some(Self {
            len,
            current: 0,
            playing,
            autoplay_running: false,
            drag: None,
            swipe_threshold: SWIPE_THRESHOLD_PX,
            motion,
        })
    }

    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; empty carousels are never constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether autoplay is enabled at all.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether an autoplay timer should currently be live.
    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay_running
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn position(&self, index: usize) -> CardPosition {
        let left = (self.current + self.len - 1) % self.len;
        let right = (self.current + 1) % self.len;
        if index == self.current {
            CardPosition::Center
        } else if index == left {
            CardPosition::Left
        } else if index == right {
            CardPosition::Right
        } else {
            CardPosition::Hidden
        }
    }

    #[must_use]
    pub fn positions(&self) -> Vec<CardPosition> {
        (0..self.len).map(|i| self.position(i)).collect()
    }

    #[must_use]
    pub fn is_indicator_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Whether the card at `index` carries `aria-current`.
    #[must_use]
    pub fn is_current(&self, index: usize) -> bool {
        index == self.current
    }

    // --- Navigation ---

    pub fn prev(&mut self) -> Vec<Action> {
        self.current = (self.current + self.len - 1) % self.len;
        vec![Action::Render]
    }

    pub fn next(&mut self) -> Vec<Action> {
        self.current = (self.current + 1) % self.len;
        vec![Action::Render]
    }

    /// Jump to `index`; out-of-range indexes are ignored.
    pub fn goto_slide(&mut self, index: usize) -> Vec<Action> {
        if index >= self.len {
            return Vec::new();
        }
        self.current = index;
        vec![Action::Render]
    }

    // --- Autoplay ---

    /// Initial render, plus the autoplay timer when motion is allowed.
    pub fn start(&mut self) -> Vec<Action> {
        let mut actions = vec![Action::Render];
        actions.extend(self.resume());
        actions
    }

    /// The autoplay timer fired.
    pub fn tick(&mut self) -> Vec<Action> {
        self.next()
    }

    /// Stop the timer without disabling autoplay.
    pub fn pause(&mut self) -> Vec<Action> {
        if !self.autoplay_running {
            return Vec::new();
        }
        self.autoplay_running = false;
        vec![Action::StopAutoplay]
    }

    /// Restart the timer if autoplay is enabled and motion is allowed.
    pub fn resume(&mut self) -> Vec<Action> {
        if !self.playing || self.motion.prefers_reduced_motion() {
            return Vec::new();
        }
        self.autoplay_running = true;
        vec![Action::StartAutoplay]
    }

    /// Platform preference changed. Reduced motion disables autoplay for good;
    /// reverting the preference does not turn it back on.
    pub fn reduced_motion_changed(&mut self, reduced: bool) -> Vec<Action> {
        if !reduced {
            return Vec::new();
        }
        self.playing = false;
        self.autoplay_running = false;
        vec![Action::StopAutoplay]
    }

    pub fn hover_enter(&mut self) -> Vec<Action> {
        self.pause()
    }

    /// Pointer left the container. Ends any mouse drag in flight, then
    /// resumes autoplay.
    pub fn hover_leave(&mut self) -> Vec<Action> {
        let mut actions = self.drag_end();
        if actions.contains(&Action::StartAutoplay) {
            return actions;
        }
        actions.extend(self.resume());
        actions
    }

    // --- Gestures ---

    /// Touch start or mouse down at horizontal position `x`.
    pub fn drag_start(&mut self, x: f64) -> Vec<Action> {
        self.drag = Some(Drag { start_x: x, current_x: x });
        self.pause()
    }

    pub fn drag_move(&mut self, x: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current_x = x;
        }
    }

    /// Touch end or mouse up. Swipes beyond the threshold navigate one step:
    /// leftward travel goes forward, rightward goes back.
    pub fn drag_end(&mut self) -> Vec<Action> {
        let Some(drag) = self.drag.take() else {
            return Vec::new();
        };
        let delta = drag.displacement();
        let mut actions = if delta.abs() <= self.swipe_threshold {
            Vec::new()
        } else if delta > 0.0 {
            self.next()
        } else {
            self.prev()
        };
        actions.extend(self.resume());
        actions
    }

    // --- Keyboard ---

    /// Arrow-key navigation. `None` means the key is not ours and its default
    /// behavior must be left alone.
    pub fn key(&mut self, key: &str) -> Option<Vec<Action>> {
        match key {
            "ArrowLeft" => Some(self.prev()),
            "ArrowRight" => Some(self.next()),
            _ => None,
        }
    }
}
