//! Smooth scrolling for in-page anchor links.
//!
//! The target sits below the sticky header with a small gap. Reduced motion
//! turns the animated scroll into an instant jump. Links whose fragment does
//! not resolve fall through to default browser navigation.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "browser")]
pub mod dom;

/// How the viewport travels to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    /// Jump in one frame, overriding any CSS `scroll-behavior` on the page.
    Instant,
}

/// A scroll the host should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub motion: ScrollMotion,
}

/// Element id named by an in-page `href`, if any.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `target_top` just below the header.
#[must_use]
pub fn plan_scroll(target_top: f64, header_height: f64, offset: f64, reduced_motion: bool) -> ScrollRequest {
    let motion = if reduced_motion { ScrollMotion::Instant } else { ScrollMotion::Smooth };
    ScrollRequest { top: target_top - header_height - offset, motion }
}
