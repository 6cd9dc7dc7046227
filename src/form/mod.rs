//! Contact form validation.
//!
//! Field rules are evaluated independently and surface at most one message
//! per field. Full-form validation re-checks every field and rejects the
//! submission outright when the hidden honeypot carries a value, without
//! telling the visitor why.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod submit;

#[cfg(feature = "browser")]
pub mod dom;

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{MSG_INVALID_EMAIL, MSG_PERSONAL_EMAIL, MSG_REQUIRED, PERSONAL_EMAIL_DOMAINS};

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Validated fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nombre,
    Email,
    Empresa,
    Mensaje,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Nombre, Field::Email, Field::Empresa, Field::Mensaje];

    /// Element id of the input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::Email => "email",
            Self::Empresa => "empresa",
            Self::Mensaje => "mensaje",
        }
    }

    /// Element id of the sibling error message.
    #[must_use]
    pub fn error_id(self) -> String {
        format!("{}-error", self.id())
    }
}

/// Why a field failed. `Display` is the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{}", MSG_REQUIRED)]
    Required,
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,
    #[error("{}", MSG_PERSONAL_EMAIL)]
    PersonalEmail,
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub valid: bool,
    pub error: Option<FieldError>,
}

impl FieldState {
    #[must_use]
    pub fn evaluate(field: Field, value: &str, required: bool) -> Self {
        let result = validate_field(field, value, required);
        Self { value: value.to_owned(), valid: result.is_ok(), error: result.err() }
    }

    /// Message to show, empty when valid.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

/// Validate one field.
///
/// The email rules only run when the trimmed value is non-empty, so an empty
/// optional email is valid.
///
/// # Errors
///
/// Returns the single [`FieldError`] to surface for the field.
pub fn validate_field(field: Field, value: &str, required: bool) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if required { Err(FieldError::Required) } else { Ok(()) };
    }
    if field == Field::Email {
        if !is_valid_email(value) {
            return Err(FieldError::InvalidEmail);
        }
        if !is_corporate_email(value) {
            return Err(FieldError::PersonalEmail);
        }
    }
    Ok(())
}

/// One `@` with non-blank text on both sides and a dot in the domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_ok_and(|re| re.is_match(email))
}

/// Whether the domain is not a known personal mail provider. Addresses
/// without a domain are not corporate.
#[must_use]
pub fn is_corporate_email(email: &str) -> bool {
    let Some(domain) = email.split('@').nth(1) else {
        return false;
    };
    let domain = domain.to_lowercase();
    !domain.is_empty() && !PERSONAL_EMAIL_DOMAINS.contains(&domain.as_str())
}

/// Typing clears a shown error only once the field has content again.
#[must_use]
pub fn should_clear_on_input(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Present fields with their value and `required` flag.
    pub fields: Vec<(Field, String, bool)>,
    /// Value of the hidden honeypot, when the form has one.
    pub honeypot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub fields: Vec<(Field, FieldState)>,
    pub honeypot_tripped: bool,
}

impl FormReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.honeypot_tripped && self.fields.iter().all(|(_, state)| state.valid)
    }
}

/// Validate every field and check the honeypot.
#[must_use]
pub fn validate_form(snapshot: &FormSnapshot) -> FormReport {
    let fields = snapshot
        .fields
        .iter()
        .map(|(field, value, required)| (*field, FieldState::evaluate(*field, value, *required)))
        .collect();
    let honeypot_tripped = snapshot
        .honeypot
        .as_deref()
        .is_some_and(|v| !v.trim().is_empty());
    if honeypot_tripped {
        log::debug!("honeypot field filled; rejecting submission");
    }
    FormReport { fields, honeypot_tripped }
}
