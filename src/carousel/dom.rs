//! Browser binding for [`Carousel`].
//!
//! One [`CarouselHandle`] per `.rotating-carousel` container. DOM events are
//! translated into state machine calls and the returned [`Action`]s are
//! applied here: class and attribute refresh for `Render`, the autoplay
//! `Interval` for the timer actions.
//!
//! Arrow keys are heard on the container, so they only act while focus is
//! inside this carousel.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, MouseEvent, TouchEvent};

use super::{Action, CardPosition, Carousel};
use crate::config::SiteConfig;
use crate::consts::{
    CARD_CLASS_PREFIX, CARD_SELECTOR, INDICATOR_ACTIVE_CLASS, INDICATOR_SELECTOR, NEXT_SELECTOR, PREV_SELECTOR,
};
use crate::dom::{self, EventListener};
use crate::error::SiteError;
use crate::motion::MotionPreference;

struct Shared {
    core: RefCell<Carousel>,
    cards: Vec<Element>,
    indicators: Vec<Element>,
    timer: RefCell<Option<Interval>>,
    autoplay_delay_ms: u32,
}

/// A live carousel. Dropping it stops autoplay and removes its listeners.
pub struct CarouselHandle {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

impl std::fmt::Debug for CarouselHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselHandle")
            .field("core", &self.shared.core)
            .field("cards", &self.shared.cards.len())
            .finish_non_exhaustive()
    }
}

impl CarouselHandle {
    /// Wire the carousel inside `container`. Returns `Ok(None)` when the
    /// container holds no cards.
    ///
    /// # Errors
    ///
    /// Fails when the browser rejects a query or listener registration.
    pub fn bind(
        container: &Element,
        motion: Rc<dyn MotionPreference>,
        config: &SiteConfig,
    ) -> Result<Option<Self>, SiteError> {
        let cards = dom::query_all(container, CARD_SELECTOR)?;
        let Some(core) = Carousel::new(cards.len(), motion) else {
            log::debug!("carousel container has no cards; skipping");
            return Ok(None);
        };
        let core = core.with_swipe_threshold(config.swipe_threshold_px);
        let indicators = dom::query_all(container, INDICATOR_SELECTOR)?;

        if !container.has_attribute("tabindex") {
            container.set_attribute("tabindex", "0")?;
        }

        let shared = Rc::new(Shared {
            core: RefCell::new(core),
            cards,
            indicators,
            timer: RefCell::new(None),
            autoplay_delay_ms: config.autoplay_delay_ms,
        });

        let mut listeners = Vec::new();
        if let Some(prev) = container.query_selector(PREV_SELECTOR)? {
            listeners.push(on(&shared, &prev, "click", |c, _| c.prev())?);
        }
        if let Some(next) = container.query_selector(NEXT_SELECTOR)? {
            listeners.push(on(&shared, &next, "click", |c, _| c.next())?);
        }
        for (index, indicator) in shared.indicators.iter().enumerate() {
            listeners.push(on(&shared, indicator, "click", move |c, _| c.goto_slide(index))?);
        }

        listeners.push(on(&shared, container, "keydown", |c, event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return Vec::new();
            };
            match c.key(&key) {
                Some(actions) => {
                    event.prevent_default();
                    actions
                }
                None => Vec::new(),
            }
        })?);

        listeners.push(on(&shared, container, "mouseenter", |c, _| c.hover_enter())?);
        listeners.push(on(&shared, container, "mouseleave", |c, _| c.hover_leave())?);

        listeners.push(on_passive(&shared, container, "touchstart", |c, event| {
            touch_x(event).map_or_else(Vec::new, |x| c.drag_start(x))
        })?);
        listeners.push(on_passive(&shared, container, "touchmove", |c, event| {
            if let Some(x) = touch_x(event) {
                c.drag_move(x);
            }
            Vec::new()
        })?);
        listeners.push(on_passive(&shared, container, "touchend", |c, _| c.drag_end())?);

        listeners.push(on(&shared, container, "mousedown", |c, event| {
            mouse_x(event).map_or_else(Vec::new, |x| c.drag_start(x))
        })?);
        listeners.push(on(&shared, container, "mousemove", |c, event| {
            if let Some(x) = mouse_x(event) {
                c.drag_move(x);
            }
            Vec::new()
        })?);
        listeners.push(on(&shared, container, "mouseup", |c, _| c.drag_end())?);

        let initial = shared.core.borrow_mut().start();
        apply(&shared, initial)?;

        log::debug!("carousel bound with {} cards", shared.cards.len());
        Ok(Some(Self { shared, _listeners: listeners }))
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.shared.core.borrow().current()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.shared.core.borrow().is_playing()
    }

    /// Forward a platform reduced-motion change.
    ///
    /// # Errors
    ///
    /// Fails when the resulting render is rejected by the browser.
    pub fn reduced_motion_changed(&self, reduced: bool) -> Result<(), SiteError> {
        let actions = self.shared.core.borrow_mut().reduced_motion_changed(reduced);
        apply(&self.shared, actions)
    }
}

fn on<F>(shared: &Rc<Shared>, target: &EventTarget, kind: &'static str, step: F) -> Result<EventListener, SiteError>
where
    F: Fn(&mut Carousel, &Event) -> Vec<Action> + 'static,
{
    let shared = Rc::clone(shared);
    EventListener::new(target, kind, move |event| {
        let actions = step(&mut *shared.core.borrow_mut(), &event);
        dom::log_failure("carousel", apply(&shared, actions));
    })
}

fn on_passive<F>(
    shared: &Rc<Shared>,
    target: &EventTarget,
    kind: &'static str,
    step: F,
) -> Result<EventListener, SiteError>
where
    F: Fn(&mut Carousel, &Event) -> Vec<Action> + 'static,
{
    let shared = Rc::clone(shared);
    EventListener::passive(target, kind, move |event| {
        let actions = step(&mut *shared.core.borrow_mut(), &event);
        dom::log_failure("carousel", apply(&shared, actions));
    })
}

fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn mouse_x(event: &Event) -> Option<f64> {
    event.dyn_ref::<MouseEvent>().map(|ev| f64::from(ev.client_x()))
}

fn apply(shared: &Rc<Shared>, actions: Vec<Action>) -> Result<(), SiteError> {
    for action in actions {
        match action {
            Action::Render => render(shared)?,
            Action::StartAutoplay => start_timer(shared),
            Action::StopAutoplay => {
                shared.timer.borrow_mut().take();
            }
        }
    }
    Ok(())
}

/// Replace the autoplay interval. The old one is cleared before the new one
/// exists, so at most one timer is ever live.
fn start_timer(shared: &Rc<Shared>) {
    shared.timer.borrow_mut().take();
    let weak: Weak<Shared> = Rc::downgrade(shared);
    let interval = Interval::new(shared.autoplay_delay_ms, move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let actions = shared.core.borrow_mut().tick();
        dom::log_failure("carousel autoplay", apply(&shared, actions));
    });
    *shared.timer.borrow_mut() = Some(interval);
}

fn render(shared: &Shared) -> Result<(), SiteError> {
    let core = shared.core.borrow();
    for (index, card) in shared.cards.iter().enumerate() {
        for suffix in CardPosition::ALL_SUFFIXES {
            dom::set_class(card, &format!("{CARD_CLASS_PREFIX}{suffix}"), false)?;
        }
        if let Some(suffix) = core.position(index).class_suffix() {
            dom::set_class(card, &format!("{CARD_CLASS_PREFIX}{suffix}"), true)?;
        }
        if core.is_current(index) {
            card.set_attribute("aria-current", "true")?;
        } else {
            card.remove_attribute("aria-current")?;
        }
    }
    for (index, indicator) in shared.indicators.iter().enumerate() {
        dom::set_class(indicator, INDICATOR_ACTIVE_CLASS, core.is_indicator_active(index))?;
    }
    Ok(())
}
