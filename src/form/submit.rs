//! Submit orchestration for the contact form.
//!
//! [`run_submit`] drives one submission attempt against two seams: a
//! [`FormSurface`] (the rendered form) and a [`Submitter`] (the backend).
//! The DOM binding implements the surface; tests use recording fakes.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures stay on the fields. Backend failures are logged and
//! surfaced as a single status message; field contents are kept for retry.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;

use super::{Field, FieldState, FormSnapshot, validate_form};
use crate::consts::{MSG_SUBMIT_FAILURE, MSG_SUBMIT_SUCCESS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission transport failed: {0}")]
    Transport(String),
}

/// Status line shown under the form after a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Failure,
}

impl SubmitStatus {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => MSG_SUBMIT_SUCCESS,
            Self::Failure => MSG_SUBMIT_FAILURE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation or the honeypot stopped the submission before sending.
    Rejected,
    Sent,
    Failed(SubmitError),
}

/// The rendered form as seen by the submit flow.
pub trait FormSurface {
    /// Write the current time into the hidden timestamp field.
    fn stamp_timestamp(&self);
    fn snapshot(&self) -> FormSnapshot;
    /// Show one field's validation state.
    fn show_field(&self, field: Field, state: &FieldState);
    /// Clear a field's error marker and message.
    fn clear_field(&self, field: Field);
    /// Disable the submit control and show the busy label, or restore it.
    fn set_busy(&self, busy: bool);
    fn show_status(&self, status: SubmitStatus);
    /// Clear every input.
    fn reset(&self);
}

/// Backend receiving validated form data.
pub trait Submitter {
    fn submit(&self, data: &FormSnapshot) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Run one submission attempt. The caller has already suppressed the
/// browser's default submission.
pub async fn run_submit<S, B>(surface: &S, backend: &B) -> SubmitOutcome
where
    S: FormSurface,
    B: Submitter,
{
    surface.stamp_timestamp();

    let snapshot = surface.snapshot();
    let report = validate_form(&snapshot);
    for (field, state) in &report.fields {
        surface.show_field(*field, state);
    }
    if !report.is_valid() {
        return SubmitOutcome::Rejected;
    }

    surface.set_busy(true);
    let result = backend.submit(&snapshot).await;
    let outcome = match result {
        Ok(()) => {
            surface.show_status(SubmitStatus::Success);
            surface.reset();
            surface.stamp_timestamp();
            for (field, _, _) in &snapshot.fields {
                surface.clear_field(*field);
            }
            log::info!("contact form sent");
            SubmitOutcome::Sent
        }
        Err(err) => {
            log::error!("contact form submission failed: {err}");
            surface.show_status(SubmitStatus::Failure);
            SubmitOutcome::Failed(err)
        }
    };
    surface.set_busy(false);
    outcome
}

/// Placeholder backend: waits, then reports success. Stands in for the
/// hosting provider's form endpoint.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

#[cfg(feature = "browser")]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, _data: &FormSnapshot) -> Result<(), SubmitError> {
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}
