//! Browser binding for anchor scrolling.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{ScrollMotion, ScrollRequest, fragment_target, plan_scroll};
use crate::consts::{ANCHOR_LINK_SELECTOR, HEADER_SELECTOR};
use crate::dom::{self, EventListener};
use crate::error::SiteError;
use crate::motion::MotionPreference;

/// Click handlers on every in-page anchor link.
#[derive(Debug)]
pub struct ScrollHandle {
    listeners: Vec<EventListener>,
}

impl ScrollHandle {
    /// # Errors
    ///
    /// Fails when the browser rejects a query or listener registration.
    pub fn bind(document: &Document, motion: Rc<dyn MotionPreference>, offset: f64) -> Result<Self, SiteError> {
        let links = dom::query_document(document, ANCHOR_LINK_SELECTOR)?;
        let mut listeners = Vec::with_capacity(links.len());
        for link in links {
            let document = document.clone();
            let motion = Rc::clone(&motion);
            let anchor = link.clone();
            listeners.push(EventListener::new(&link, "click", move |event| {
                let result = scroll_to_anchor(&document, &anchor, &event, motion.as_ref(), offset);
                dom::log_failure("smooth scroll", result);
            })?);
        }
        log::debug!("smooth scroll bound to {} links", listeners.len());
        Ok(Self { listeners })
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.listeners.len()
    }
}

fn scroll_to_anchor(
    document: &Document,
    anchor: &Element,
    event: &Event,
    motion: &dyn MotionPreference,
    offset: f64,
) -> Result<(), SiteError> {
    let Some(href) = anchor.get_attribute("href") else {
        return Ok(());
    };
    let Some(target) = fragment_target(&href)
        .and_then(|id| document.get_element_by_id(id))
        .and_then(dom::cast::<HtmlElement>)
    else {
        return Ok(());
    };
    event.prevent_default();

    let header_height = document
        .query_selector(HEADER_SELECTOR)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().map(HtmlElement::offset_height))
        .unwrap_or(0);
    let request = plan_scroll(
        f64::from(target.offset_top()),
        f64::from(header_height),
        offset,
        motion.prefers_reduced_motion(),
    );
    perform(&request)
}

fn perform(request: &ScrollRequest) -> Result<(), SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let options = ScrollToOptions::new();
    options.set_top(request.top);
    options.set_behavior(match request.motion {
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
        ScrollMotion::Instant => ScrollBehavior::Instant,
    });
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
