//! Browser binding for [`MobileMenu`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use super::MobileMenu;
use crate::consts::{MENU_BAR_SELECTOR, MENU_LINK_SELECTOR, MENU_NAV_SELECTOR, MENU_TOGGLE_SELECTOR};
use crate::dom::{self, EventListener};
use crate::error::SiteError;

#[derive(Debug)]
struct MenuView {
    state: RefCell<MobileMenu>,
    toggle: Element,
    nav: Element,
    bars: Vec<Element>,
}

impl MenuView {
    fn render(&self) -> Result<(), SiteError> {
        let menu = *self.state.borrow();
        self.toggle.set_attribute("aria-expanded", menu.aria_expanded())?;
        dom::set_style(&self.nav, "display", menu.nav_display())?;
        for (bar, style) in self.bars.iter().zip(menu.bar_styles()) {
            dom::set_style(bar, style.property, style.value)?;
        }
        Ok(())
    }

    /// Apply `step` to the state and re-render when it reports a change.
    fn update(&self, step: impl FnOnce(&mut MobileMenu) -> bool) {
        let changed = step(&mut *self.state.borrow_mut());
        if changed {
            dom::log_failure("mobile menu", self.render());
        }
    }
}

/// A live mobile menu. Dropping it removes its listeners.
#[derive(Debug)]
pub struct MenuHandle {
    view: Rc<MenuView>,
    _listeners: Vec<EventListener>,
}

impl MenuHandle {
    /// Wire the trigger and nav panel. Returns `Ok(None)` when either is
    /// missing from the page.
    ///
    /// # Errors
    ///
    /// Fails when the browser rejects a query or listener registration.
    pub fn bind(document: &Document) -> Result<Option<Self>, SiteError> {
        let (Some(toggle), Some(nav)) = (
            document.query_selector(MENU_TOGGLE_SELECTOR)?,
            document.query_selector(MENU_NAV_SELECTOR)?,
        ) else {
            log::debug!("mobile menu anchors missing; skipping");
            return Ok(None);
        };
        let bars = dom::query_all(&toggle, MENU_BAR_SELECTOR)?;
        let links = dom::query_all(&nav, MENU_LINK_SELECTOR)?;
        let view = Rc::new(MenuView { state: RefCell::new(MobileMenu::new()), toggle, nav, bars });

        let mut listeners = Vec::new();

        let on_toggle = Rc::clone(&view);
        listeners.push(EventListener::new(&view.toggle, "click", move |_| {
            on_toggle.update(|menu| {
                menu.toggle();
                true
            });
        })?);

        for link in &links {
            let on_link = Rc::clone(&view);
            listeners.push(EventListener::new(link, "click", move |_| {
                on_link.update(MobileMenu::link_activated);
            })?);
        }

        let on_key = Rc::clone(&view);
        listeners.push(EventListener::new(document, "keydown", move |event| {
            if let Some(ev) = event.dyn_ref::<KeyboardEvent>() {
                let key = ev.key();
                on_key.update(|menu| menu.key(&key));
            }
        })?);

        Ok(Some(Self { view, _listeners: listeners }))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.view.state.borrow().is_open()
    }
}
