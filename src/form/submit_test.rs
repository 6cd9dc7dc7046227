use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::form::FieldError;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Stamp,
    Show(Field, Option<FieldError>),
    Clear(Field),
    Busy(bool),
    Status(SubmitStatus),
    Reset,
}

struct FakeSurface {
    snapshot: FormSnapshot,
    calls: RefCell<Vec<Call>>,
}

impl FakeSurface {
    fn new(email: &str, honeypot: &str) -> Self {
        Self {
            snapshot: FormSnapshot {
                fields: vec![
                    (Field::Nombre, "Ada".to_owned(), true),
                    (Field::Email, email.to_owned(), true),
                    (Field::Mensaje, "Hola".to_owned(), true),
                ],
                honeypot: Some(honeypot.to_owned()),
            },
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl FormSurface for FakeSurface {
    fn stamp_timestamp(&self) {
        self.calls.borrow_mut().push(Call::Stamp);
    }

    fn snapshot(&self) -> FormSnapshot {
        self.snapshot.clone()
    }

    fn show_field(&self, field: Field, state: &FieldState) {
        self.calls.borrow_mut().push(Call::Show(field, state.error));
    }

    fn clear_field(&self, field: Field) {
        self.calls.borrow_mut().push(Call::Clear(field));
    }

    fn set_busy(&self, busy: bool) {
        self.calls.borrow_mut().push(Call::Busy(busy));
    }

    fn show_status(&self, status: SubmitStatus) {
        self.calls.borrow_mut().push(Call::Status(status));
    }

    fn reset(&self) {
        self.calls.borrow_mut().push(Call::Reset);
    }
}

struct FakeBackend {
    result: Result<(), SubmitError>,
    received: RefCell<Vec<FormSnapshot>>,
}

impl FakeBackend {
    fn ok() -> Self {
        Self { result: Ok(()), received: RefCell::new(Vec::new()) }
    }

    fn failing() -> Self {
        Self {
            result: Err(SubmitError::Transport("offline".to_owned())),
            received: RefCell::new(Vec::new()),
        }
    }
}

impl Submitter for FakeBackend {
    async fn submit(&self, data: &FormSnapshot) -> Result<(), SubmitError> {
        self.received.borrow_mut().push(data.clone());
        self.result.clone()
    }
}

fn shows() -> Vec<Call> {
    vec![
        Call::Show(Field::Nombre, None),
        Call::Show(Field::Email, None),
        Call::Show(Field::Mensaje, None),
    ]
}

#[test]
fn successful_submit_resets_and_restores_control() {
    let surface = FakeSurface::new("ada@acme.com", "");
    let backend = FakeBackend::ok();

    let outcome = block_on(run_submit(&surface, &backend));

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(backend.received.borrow().len(), 1);
    let mut expected = vec![Call::Stamp];
    expected.extend(shows());
    expected.extend([
        Call::Busy(true),
        Call::Status(SubmitStatus::Success),
        Call::Reset,
        Call::Stamp,
        Call::Clear(Field::Nombre),
        Call::Clear(Field::Email),
        Call::Clear(Field::Mensaje),
        Call::Busy(false),
    ]);
    assert_eq!(surface.calls(), expected);
}

#[test]
fn failed_submit_keeps_fields_and_restores_control() {
    let surface = FakeSurface::new("ada@acme.com", "");
    let backend = FakeBackend::failing();

    let outcome = block_on(run_submit(&surface, &backend));

    assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Transport("offline".to_owned())));
    let calls = surface.calls();
    assert!(!calls.contains(&Call::Reset));
    assert!(calls.contains(&Call::Status(SubmitStatus::Failure)));
    assert_eq!(calls.last(), Some(&Call::Busy(false)));
}

#[test]
fn invalid_field_stops_before_backend() {
    let surface = FakeSurface::new("ada@gmail.com", "");
    let backend = FakeBackend::ok();

    let outcome = block_on(run_submit(&surface, &backend));

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(backend.received.borrow().is_empty());
    let calls = surface.calls();
    assert!(calls.contains(&Call::Show(Field::Email, Some(FieldError::PersonalEmail))));
    assert!(!calls.contains(&Call::Busy(true)));
}

#[test]
fn honeypot_stops_silently() {
    let surface = FakeSurface::new("ada@acme.com", "bot was here");
    let backend = FakeBackend::ok();

    let outcome = block_on(run_submit(&surface, &backend));

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(backend.received.borrow().is_empty());
    let mut expected = vec![Call::Stamp];
    expected.extend(shows());
    assert_eq!(surface.calls(), expected);
}

#[test]
fn status_messages_match_copy() {
    assert_eq!(SubmitStatus::Success.message(), "¡Mensaje enviado con éxito! Te contactaremos pronto.");
    assert_eq!(SubmitStatus::Failure.message(), "Error al enviar el mensaje. Por favor, intenta de nuevo.");
}
