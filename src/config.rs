//! Runtime configuration embedded in the page.
//!
//! The page may carry a `<script type="application/json" id="site-config">`
//! block overriding timings. The block must hold a JSON object. Every key is
//! optional and absent keys keep the defaults from [`crate::consts`]. Unknown
//! keys are rejected so typos surface as a logged warning. Autoplay delays
//! under [`crate::consts::MIN_AUTOPLAY_DELAY_MS`] fall back to the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

use crate::consts::{
    AUTOPLAY_DELAY_MS, MIN_AUTOPLAY_DELAY_MS, SCROLL_OFFSET_PX, SUBMIT_DELAY_MS, SWIPE_THRESHOLD_PX,
};
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub autoplay_delay_ms: u32,
    pub swipe_threshold_px: f64,
    pub scroll_offset_px: f64,
    pub submit_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: AUTOPLAY_DELAY_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            scroll_offset_px: SCROLL_OFFSET_PX,
            submit_delay_ms: SUBMIT_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Parse config from the JSON text of the config element.
    ///
    /// Blank text yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the text is not a JSON object of
    /// known keys with the right types.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let value = serde_json::from_str::<Value>(raw)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("site config must be a JSON object").into());
        }
        let config = serde_json::from_value::<Self>(value)?;
        Ok(config.sanitized())
    }

    /// Replace nonsensical values with defaults.
    fn sanitized(mut self) -> Self {
        if self.autoplay_delay_ms < MIN_AUTOPLAY_DELAY_MS {
            self.autoplay_delay_ms = AUTOPLAY_DELAY_MS;
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            self.swipe_threshold_px = SWIPE_THRESHOLD_PX;
        }
        if !self.scroll_offset_px.is_finite() {
            self.scroll_offset_px = SCROLL_OFFSET_PX;
        }
        self
    }
}
