//! Browser binding for the contact form.
//!
//! [`FormView`] is the DOM side of [`FormSurface`]; [`FormHandle`] owns the
//! blur, input, and submit listeners. Fields without a matching
//! `{field}-error` element are left unvalidated.

use std::rc::Rc;

use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::submit::{FormSurface, SimulatedSubmitter, SubmitStatus, run_submit};
use super::{Field, FieldState, FormSnapshot, should_clear_on_input};
use crate::config::SiteConfig;
use crate::consts::{
    FORM_STATUS_SELECTOR, HONEYPOT_SELECTOR, SUBMIT_BUTTON_SELECTOR, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE,
    TIMESTAMP_ID, VISIBLE_CLASS,
};
use crate::dom::{self, EventListener};
use crate::error::SiteError;

/// A text input or a textarea.
#[derive(Debug, Clone)]
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn from_element(el: Element) -> Option<Self> {
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(el) => dom::cast::<HtmlTextAreaElement>(el).map(Self::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn required(&self) -> bool {
        match self {
            Self::Input(el) => el.required(),
            Self::TextArea(el) => el.required(),
        }
    }

    fn element(&self) -> &Element {
        match self {
            Self::Input(el) => el,
            Self::TextArea(el) => el,
        }
    }
}

#[derive(Debug)]
struct BoundField {
    field: Field,
    control: Control,
    error: Element,
}

impl BoundField {
    fn show(&self, state: &FieldState) -> Result<(), SiteError> {
        let invalid = if state.valid { "false" } else { "true" };
        self.control.element().set_attribute("aria-invalid", invalid)?;
        self.error.set_text_content(Some(&state.message()));
        dom::set_class(&self.error, VISIBLE_CLASS, !state.valid)
    }

    fn hide_error(&self) -> Result<(), SiteError> {
        self.control.element().set_attribute("aria-invalid", "false")?;
        dom::set_class(&self.error, VISIBLE_CLASS, false)
    }

    fn validate(&self) -> Result<(), SiteError> {
        let state = FieldState::evaluate(self.field, &self.control.value(), self.control.required());
        self.show(&state)
    }
}

#[derive(Debug)]
pub struct FormView {
    form: HtmlFormElement,
    fields: Vec<BoundField>,
    timestamp: Option<HtmlInputElement>,
    honeypot: Option<HtmlInputElement>,
    submit_button: Option<HtmlButtonElement>,
    status: Option<Element>,
}

impl FormView {
    fn locate(form: HtmlFormElement) -> Result<Self, SiteError> {
        let document = dom::document()?;
        let mut fields = Vec::new();
        for field in Field::ALL {
            let control = form
                .query_selector(&format!("#{}", field.id()))?
                .and_then(Control::from_element);
            let error = document.get_element_by_id(&field.error_id());
            match (control, error) {
                (Some(control), Some(error)) => fields.push(BoundField { field, control, error }),
                _ => log::debug!("form field {} incomplete; not validated", field.id()),
            }
        }
        let timestamp = form
            .query_selector(&format!("#{TIMESTAMP_ID}"))?
            .and_then(dom::cast::<HtmlInputElement>);
        let honeypot = form
            .query_selector(HONEYPOT_SELECTOR)?
            .and_then(dom::cast::<HtmlInputElement>);
        let submit_button = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)?
            .and_then(dom::cast::<HtmlButtonElement>);
        let status = form.query_selector(FORM_STATUS_SELECTOR)?;
        Ok(Self { form, fields, timestamp, honeypot, submit_button, status })
    }

    fn bound(&self, field: Field) -> Option<&BoundField> {
        self.fields.iter().find(|b| b.field == field)
    }
}

impl FormSurface for FormView {
    fn stamp_timestamp(&self) {
        if let Some(input) = &self.timestamp {
            input.set_value(&format!("{:.0}", Date::now()));
        }
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self
                .fields
                .iter()
                .map(|b| (b.field, b.control.value(), b.control.required()))
                .collect(),
            honeypot: self.honeypot.as_ref().map(HtmlInputElement::value),
        }
    }

    fn show_field(&self, field: Field, state: &FieldState) {
        if let Some(bound) = self.bound(field) {
            dom::log_failure("show field state", bound.show(state));
        }
    }

    fn clear_field(&self, field: Field) {
        if let Some(bound) = self.bound(field) {
            bound.error.set_text_content(None);
            dom::log_failure("clear field state", bound.hide_error());
        }
    }

    fn set_busy(&self, busy: bool) {
        if let Some(button) = &self.submit_button {
            button.set_disabled(busy);
            button.set_text_content(Some(if busy { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL_IDLE }));
        }
    }

    fn show_status(&self, status: SubmitStatus) {
        if let Some(el) = &self.status {
            el.set_text_content(Some(status.message()));
            dom::log_failure("show submit status", dom::set_class(el, VISIBLE_CLASS, true));
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// A live contact form. Dropping it removes its listeners.
#[derive(Debug)]
pub struct FormHandle {
    view: Rc<FormView>,
    _listeners: Vec<EventListener>,
}

impl FormHandle {
    /// Wire validation and submission for `form`. Returns `Ok(None)` when the
    /// element is not a `<form>`.
    ///
    /// # Errors
    ///
    /// Fails when the browser rejects a query or listener registration.
    pub fn bind(form: Element, config: &SiteConfig) -> Result<Option<Self>, SiteError> {
        let form = match form.dyn_into::<HtmlFormElement>() {
            Ok(form) => form,
            Err(_) => {
                log::debug!("contact form selector matched a non-form element; skipping");
                return Ok(None);
            }
        };
        let view = Rc::new(FormView::locate(form)?);
        view.stamp_timestamp();

        let mut listeners = Vec::new();
        for (index, bound) in view.fields.iter().enumerate() {
            let target = bound.control.element();

            let on_blur = Rc::clone(&view);
            listeners.push(EventListener::new(target, "blur", move |_| {
                if let Some(bound) = on_blur.fields.get(index) {
                    dom::log_failure("validate field", bound.validate());
                }
            })?);

            let on_input = Rc::clone(&view);
            listeners.push(EventListener::new(target, "input", move |_| {
                if let Some(bound) = on_input.fields.get(index) {
                    if should_clear_on_input(&bound.control.value()) {
                        dom::log_failure("clear field error", bound.hide_error());
                    }
                }
            })?);
        }

        let submitter = SimulatedSubmitter { delay_ms: config.submit_delay_ms };
        let on_submit = Rc::clone(&view);
        listeners.push(EventListener::new(&view.form, "submit", move |event| {
            event.prevent_default();
            let view = Rc::clone(&on_submit);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = run_submit(view.as_ref(), &submitter).await;
                log::debug!("contact form outcome: {outcome:?}");
            });
        })?);

        log::debug!("contact form bound with {} fields", view.fields.len());
        Ok(Some(Self { view, _listeners: listeners }))
    }

    /// Number of fields under validation.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.view.fields.len()
    }
}
