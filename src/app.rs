//! Bootstrap: wires every component to the page and hands back a [`Site`].
//!
//! The host page loads the module and keeps the handle:
//!
//! ```js
//! import init, { boot } from "./pkg/d38_site.js";
//! await init();
//! const site = await boot();
//! ```
//!
//! Components degrade independently: a missing anchor or a failed binding is
//! logged and the rest of the page still comes up.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, ErrorEvent, MediaQueryListEvent};

use crate::carousel::dom::CarouselHandle;
use crate::config::SiteConfig;
use crate::consts::{
    CAROUSEL_SELECTOR, CONFIG_ELEMENT_ID, DEBUG_ELEMENTS_SELECTOR, FORM_SELECTOR, REDUCED_MOTION_BODY_CLASS,
};
use crate::dom::{self, EventListener};
use crate::error::SiteError;
use crate::form::dom::FormHandle;
use crate::menu::dom::MenuHandle;
use crate::motion::{MediaMotion, MotionPreference};
use crate::scroll::dom::ScrollHandle;

/// Install the panic hook and console logger as soon as the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

/// Every live component on the page. Dropping it detaches all behavior.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Site {
    carousels: Rc<Vec<CarouselHandle>>,
    form: Option<FormHandle>,
    menu: Option<MenuHandle>,
    scroll: Option<ScrollHandle>,
    motion: Rc<MediaMotion>,
    _observers: Vec<EventListener>,
}

#[wasm_bindgen]
impl Site {
    #[wasm_bindgen(js_name = carouselCount)]
    #[must_use]
    pub fn carousel_count(&self) -> usize {
        self.carousels.len()
    }

    /// Index of the center card of carousel `n`.
    #[wasm_bindgen(js_name = carouselIndex)]
    #[must_use]
    pub fn carousel_index(&self, n: usize) -> Option<usize> {
        self.carousels.get(n).map(CarouselHandle::current)
    }

    #[wasm_bindgen(js_name = carouselPlaying)]
    #[must_use]
    pub fn carousel_playing(&self, n: usize) -> Option<bool> {
        self.carousels.get(n).map(CarouselHandle::is_playing)
    }

    #[wasm_bindgen(js_name = formFieldCount)]
    #[must_use]
    pub fn form_field_count(&self) -> usize {
        self.form.as_ref().map_or(0, FormHandle::field_count)
    }

    #[wasm_bindgen(js_name = menuOpen)]
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(MenuHandle::is_open)
    }

    #[wasm_bindgen(js_name = anchorLinkCount)]
    #[must_use]
    pub fn anchor_link_count(&self) -> usize {
        self.scroll.as_ref().map_or(0, ScrollHandle::link_count)
    }

    #[wasm_bindgen(js_name = reducedMotion)]
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.motion.prefers_reduced_motion()
    }
}

/// Wire the page once the document has been parsed.
///
/// # Errors
///
/// Fails only when there is no window or document; component failures are
/// logged instead.
#[wasm_bindgen]
pub async fn boot() -> Result<Site, JsValue> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        dom_content_loaded(&document).await?;
    }
    Ok(Site::wire(&document)?)
}

impl Site {
    fn wire(document: &Document) -> Result<Self, SiteError> {
        let config = load_config(document);
        if let Err(err) = remove_debug_elements(document) {
            log::warn!("debug element cleanup failed: {err}");
        }

        let motion = Rc::new(MediaMotion::new());
        let shared_motion: Rc<dyn MotionPreference> = motion.clone();

        let carousels = Rc::new(bind_carousels(document, &shared_motion, &config));
        let form = component("contact form", bind_form(document, &config));
        let menu = component("mobile menu", MenuHandle::bind(document));
        let scroll = component(
            "smooth scroll",
            ScrollHandle::bind(document, Rc::clone(&shared_motion), config.scroll_offset_px).map(Some),
        );

        let body = document.body().ok_or(SiteError::NoDocument)?;
        if motion.prefers_reduced_motion() {
            dom::set_class(&body, REDUCED_MOTION_BODY_CLASS, true)?;
        }

        let mut observers = Vec::new();
        if let Some(list) = motion.query_list() {
            let carousels = Rc::clone(&carousels);
            let body = body.clone();
            observers.push(EventListener::new(list, "change", move |event| {
                let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let reduced = change.matches();
                let toggled = dom::set_class(&body, REDUCED_MOTION_BODY_CLASS, reduced);
                dom::log_failure("reduced-motion class", toggled);
                for carousel in carousels.iter() {
                    dom::log_failure("reduced-motion carousel", carousel.reduced_motion_changed(reduced));
                }
            })?);
        }

        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        observers.push(EventListener::new(&window, "error", |event| {
            match event.dyn_ref::<ErrorEvent>() {
                Some(err) => log::error!(
                    "page error: {} ({}:{}:{})",
                    err.message(),
                    err.filename(),
                    err.lineno(),
                    err.colno()
                ),
                None => log::error!("page error: {}", event.type_()),
            }
        })?);

        log::info!("D38 Security Labs: site initialized");
        Ok(Self { carousels, form, menu, scroll, motion, _observers: observers })
    }
}

/// Log a component binding failure and carry on without it.
fn component<T>(name: &str, result: Result<Option<T>, SiteError>) -> Option<T> {
    match result {
        Ok(handle) => handle,
        Err(err) => {
            log::warn!("{name} disabled: {err}");
            None
        }
    }
}

fn bind_carousels(
    document: &Document,
    motion: &Rc<dyn MotionPreference>,
    config: &SiteConfig,
) -> Vec<CarouselHandle> {
    let containers = match dom::query_document(document, CAROUSEL_SELECTOR) {
        Ok(containers) => containers,
        Err(err) => {
            log::warn!("carousel lookup failed: {err}");
            return Vec::new();
        }
    };
    containers
        .iter()
        .filter_map(|container| component("carousel", CarouselHandle::bind(container, Rc::clone(motion), config)))
        .collect()
}

fn bind_form(document: &Document, config: &SiteConfig) -> Result<Option<FormHandle>, SiteError> {
    match document.query_selector(FORM_SELECTOR)? {
        Some(form) => FormHandle::bind(form, config),
        None => {
            log::debug!("no contact form on page");
            Ok(None)
        }
    }
}

fn load_config(document: &Document) -> SiteConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        SiteConfig::default()
    })
}

fn remove_debug_elements(document: &Document) -> Result<(), SiteError> {
    for el in dom::query_document(document, DEBUG_ELEMENTS_SELECTOR)? {
        el.remove();
    }
    Ok(())
}

async fn dom_content_loaded(document: &Document) -> Result<(), SiteError> {
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    let mut tx = Some(tx);
    let _listener = EventListener::new(document, "DOMContentLoaded", move |_| {
        if let Some(tx) = tx.take() {
            if tx.send(()).is_err() {
                log::debug!("boot no longer waiting for DOMContentLoaded");
            }
        }
    })?;
    rx.await
        .map_err(|_| SiteError::Dom("DOMContentLoaded listener dropped".to_owned()))
}
