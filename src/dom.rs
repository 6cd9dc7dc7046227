//! DOM plumbing shared by the component bindings.
//!
//! [`EventListener`] owns its closure and unregisters on drop, so a component
//! handle that is dropped leaves no callbacks behind.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement};

use crate::error::SiteError;

pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Register `handler` for `kind` events on `target`.
    ///
    /// # Errors
    ///
    /// Fails when the browser rejects the registration.
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    /// Register a passive listener; the handler cannot cancel the event.
    ///
    /// # Errors
    ///
    /// Fails when the browser rejects the registration.
    pub fn passive<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.kind);
        }
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener").field("kind", &self.kind).finish_non_exhaustive()
    }
}

/// The page document.
///
/// # Errors
///
/// Fails outside a browser window.
pub fn document() -> Result<Document, SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    window.document().ok_or(SiteError::NoDocument)
}

/// All elements under `root` matching `selector`, in document order.
///
/// # Errors
///
/// Fails on an invalid selector.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = root.query_selector_all(selector)?;
    Ok(elements_of(&list))
}

/// All elements in the document matching `selector`.
///
/// # Errors
///
/// Fails on an invalid selector.
pub fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = document.query_selector_all(selector)?;
    Ok(elements_of(&list))
}

fn elements_of(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Downcast an element, `None` when it is of another type.
pub fn cast<T: JsCast>(el: Element) -> Option<T> {
    match el.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => None,
    }
}

/// Add or remove `class` on `el`.
///
/// # Errors
///
/// Fails when the class token is rejected by the browser.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), SiteError> {
    let classes = el.class_list();
    if on {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}

/// Set an inline style property on `el` when it is an HTML element.
///
/// # Errors
///
/// Fails when the style declaration rejects the property.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), SiteError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Run a fallible event handler, logging any failure instead of throwing
/// into the browser.
pub fn log_failure(context: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
