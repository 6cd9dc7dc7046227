//! Shared constants: timings, DOM contract, and user-facing copy.

// ── Timing ──────────────────────────────────────────────────────

/// Delay between autoplay advances, in milliseconds.
pub const AUTOPLAY_DELAY_MS: u32 = 4500;

/// Shortest autoplay delay a page config may ask for.
pub const MIN_AUTOPLAY_DELAY_MS: u32 = 1000;

/// Horizontal drag distance, in CSS pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Extra gap kept between the sticky header and a scroll target.
pub const SCROLL_OFFSET_PX: f64 = 20.0;

/// Latency of the placeholder form submission.
pub const SUBMIT_DELAY_MS: u32 = 1500;

// ── Motion ──────────────────────────────────────────────────────

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const REDUCED_MOTION_BODY_CLASS: &str = "reduced-motion";

// ── Carousel DOM contract ───────────────────────────────────────

pub const CAROUSEL_SELECTOR: &str = ".rotating-carousel";
pub const CARD_SELECTOR: &str = ".rotating-service-card";
pub const INDICATOR_SELECTOR: &str = ".rotating-carousel__indicator";
pub const PREV_SELECTOR: &str = ".rotating-carousel__nav--prev";
pub const NEXT_SELECTOR: &str = ".rotating-carousel__nav--next";
pub const CARD_CLASS_PREFIX: &str = "rotating-service-card--";
pub const INDICATOR_ACTIVE_CLASS: &str = "rotating-carousel__indicator--active";

/// Debug scaffolding stripped from the page at startup.
pub const DEBUG_ELEMENTS_SELECTOR: &str = "#autoplay-toggle, .carousel-debug, [data-debug=\"carousel\"]";

// ── Form DOM contract ───────────────────────────────────────────

pub const FORM_SELECTOR: &str = ".contact-form";
pub const TIMESTAMP_ID: &str = "timestamp";
pub const HONEYPOT_SELECTOR: &str = "input[name=\"website\"]";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const FORM_STATUS_SELECTOR: &str = ".form-success";
pub const VISIBLE_CLASS: &str = "visible";

// ── Menu / scroll DOM contract ──────────────────────────────────

pub const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub const MENU_NAV_SELECTOR: &str = ".header__nav";
pub const MENU_LINK_SELECTOR: &str = ".nav-link";
pub const MENU_BAR_SELECTOR: &str = ".hamburger";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const HEADER_SELECTOR: &str = ".header";

/// Element carrying optional JSON config for the site.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

// ── Copy ────────────────────────────────────────────────────────

pub const MSG_REQUIRED: &str = "Este campo es obligatorio.";
pub const MSG_INVALID_EMAIL: &str = "Por favor, ingresa un email válido.";
pub const MSG_PERSONAL_EMAIL: &str = "Por favor, utiliza un email corporativo.";
pub const MSG_SUBMIT_SUCCESS: &str = "¡Mensaje enviado con éxito! Te contactaremos pronto.";
pub const MSG_SUBMIT_FAILURE: &str = "Error al enviar el mensaje. Por favor, intenta de nuevo.";
pub const SUBMIT_LABEL_IDLE: &str = "Enviar Mensaje";
pub const SUBMIT_LABEL_BUSY: &str = "Enviando...";

/// Free mail providers rejected by the corporate email policy.
pub const PERSONAL_EMAIL_DOMAINS: [&str; 8] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "icloud.com",
    "protonmail.com",
    "aol.com",
];
