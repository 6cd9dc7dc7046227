//! Interactive behavior for the D38 Security Labs marketing site.
//!
//! This crate is compiled to WebAssembly and runs in the browser, attaching
//! behavior to server-rendered HTML: a rotating services carousel, the contact
//! form validator, the mobile navigation toggle, and smooth in-page scrolling.
//!
//! Each component is split into a pure state machine (always compiled, tested
//! on the host) and a DOM binding compiled only with the `browser` feature.
//! The host page calls `app::boot` once and keeps the returned handle alive.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Rotating card carousel state machine and its DOM binding |
//! | [`form`] | Contact form rules, honeypot check, and submit orchestration |
//! | [`menu`] | Mobile navigation open/closed toggle |
//! | [`scroll`] | Smooth scrolling to in-page anchors |
//! | [`motion`] | Reduced-motion preference query |
//! | [`config`] | Optional runtime config embedded in the page |
//! | [`consts`] | Timings, selectors, class names, and user-facing copy |
//! | [`error`] | Crate error type |
//! | `dom` | Event listener handles and query helpers (`browser` only) |
//! | `app` | Bootstrap and the `Site` handle (`browser` only) |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod error;
pub mod form;
pub mod menu;
pub mod motion;
pub mod scroll;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;

pub use error::SiteError;
