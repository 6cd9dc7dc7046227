//! Reduced-motion preference.
//!
//! Components query the platform preference through [`MotionPreference`] so
//! their state machines can be driven by a fixed value in tests and by the
//! live `(prefers-reduced-motion: reduce)` media query in the browser.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use std::cell::Cell;
use std::fmt::Debug;

/// Synchronous query of the reduced-motion preference.
pub trait MotionPreference: Debug {
    /// Whether the user asked the platform to minimize animation.
    fn prefers_reduced_motion(&self) -> bool;
}

/// A preference held in memory. Used on the host and in tests.
#[derive(Debug, Default)]
pub struct FixedMotion {
    reduced: Cell<bool>,
}

impl FixedMotion {
    #[must_use]
    pub fn new(reduced: bool) -> Self {
        Self { reduced: Cell::new(reduced) }
    }

    /// Flip the stored preference, as a platform change notification would.
    pub fn set(&self, reduced: bool) {
        self.reduced.set(reduced);
    }
}

impl MotionPreference for FixedMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced.get()
    }
}

/// The live media query. Queries fail closed to "not reduced" when the
/// window or `matchMedia` is unavailable.
#[cfg(feature = "browser")]
#[derive(Debug)]
pub struct MediaMotion {
    query: Option<web_sys::MediaQueryList>,
}

#[cfg(feature = "browser")]
impl MediaMotion {
    #[must_use]
    pub fn new() -> Self {
        let query = web_sys::window().and_then(|w| match w.match_media(crate::consts::REDUCED_MOTION_QUERY) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("matchMedia failed: {err:?}");
                None
            }
        });
        Self { query }
    }

    /// The underlying list, for registering change listeners.
    #[must_use]
    pub fn query_list(&self) -> Option<&web_sys::MediaQueryList> {
        self.query.as_ref()
    }
}

#[cfg(feature = "browser")]
impl Default for MediaMotion {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "browser")]
impl MotionPreference for MediaMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.query.as_ref().is_some_and(web_sys::MediaQueryList::matches)
    }
}
