use super::*;

fn snapshot(email: &str, honeypot: Option<&str>) -> FormSnapshot {
    FormSnapshot {
        fields: vec![
            (Field::Nombre, "Ada Lovelace".to_owned(), true),
            (Field::Email, email.to_owned(), true),
            (Field::Empresa, String::new(), false),
            (Field::Mensaje, "Necesitamos una auditoría.".to_owned(), true),
        ],
        honeypot: honeypot.map(str::to_owned),
    }
}

// =============================================================
// Field ids
// =============================================================

#[test]
fn field_ids_follow_dom_contract() {
    let ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["nombre", "email", "empresa", "mensaje"]);
    assert_eq!(Field::Email.error_id(), "email-error");
    assert_eq!(Field::Mensaje.error_id(), "mensaje-error");
}

// =============================================================
// Email rules
// =============================================================

#[test]
fn email_syntax_accepts_simple_addresses() {
    assert!(is_valid_email("user@acme.com"));
    assert!(is_valid_email("first.last@sub.acme.co"));
}

#[test]
fn email_syntax_rejects_malformed_addresses() {
    for bad in ["not-an-email", "user@acme", "@acme.com", "user@.com", "a@b@c.com", "us er@acme.com", " user@acme.com"] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn personal_domains_are_not_corporate() {
    for domain in PERSONAL_EMAIL_DOMAINS {
        assert!(!is_corporate_email(&format!("someone@{domain}")), "{domain}");
    }
    assert!(!is_corporate_email("someone@GMail.COM"));
}

#[test]
fn other_domains_are_corporate() {
    assert!(is_corporate_email("user@acme.com"));
    assert!(is_corporate_email("user@gmail.com.ar"));
}

#[test]
fn address_without_domain_is_not_corporate() {
    assert!(!is_corporate_email("nobody"));
    assert!(!is_corporate_email("nobody@"));
}

// =============================================================
// validate_field
// =============================================================

#[test]
fn gmail_fails_with_corporate_message() {
    let err = validate_field(Field::Email, "user@gmail.com", true).expect_err("personal domain");
    assert_eq!(err, FieldError::PersonalEmail);
    assert_eq!(err.to_string(), "Por favor, utiliza un email corporativo.");
}

#[test]
fn corporate_address_passes() {
    assert_eq!(validate_field(Field::Email, "user@acme.com", true), Ok(()));
}

#[test]
fn malformed_address_fails_with_syntax_message() {
    let err = validate_field(Field::Email, "not-an-email", true).expect_err("bad syntax");
    assert_eq!(err, FieldError::InvalidEmail);
    assert_eq!(err.to_string(), "Por favor, ingresa un email válido.");
}

#[test]
fn blank_required_field_fails_with_required_message() {
    for field in Field::ALL {
        let err = validate_field(field, "   ", true).expect_err("blank required");
        assert_eq!(err, FieldError::Required);
        assert_eq!(err.to_string(), "Este campo es obligatorio.");
    }
}

#[test]
fn empty_optional_email_is_valid() {
    assert_eq!(validate_field(Field::Email, "", false), Ok(()));
    assert_eq!(validate_field(Field::Email, "  ", false), Ok(()));
}

#[test]
fn optional_email_with_content_is_still_checked() {
    assert_eq!(validate_field(Field::Email, "x@gmail.com", false), Err(FieldError::PersonalEmail));
}

#[test]
fn non_email_fields_accept_any_content() {
    assert_eq!(validate_field(Field::Nombre, "not-an-email", true), Ok(()));
    assert_eq!(validate_field(Field::Empresa, "x@gmail.com", false), Ok(()));
}

#[test]
fn field_state_tracks_value_and_message() {
    let bad = FieldState::evaluate(Field::Email, "user@yahoo.com", true);
    assert!(!bad.valid);
    assert_eq!(bad.value, "user@yahoo.com");
    assert_eq!(bad.message(), "Por favor, utiliza un email corporativo.");

    let good = FieldState::evaluate(Field::Nombre, "Ada", true);
    assert!(good.valid);
    assert_eq!(good.error, None);
    assert!(good.message().is_empty());
}

#[test]
fn input_clears_only_when_content_present() {
    assert!(should_clear_on_input("a"));
    assert!(!should_clear_on_input(""));
    assert!(!should_clear_on_input("   "));
}

// =============================================================
// validate_form
// =============================================================

#[test]
fn complete_form_is_valid() {
    let report = validate_form(&snapshot("ada@acme.com", Some("")));
    assert!(report.is_valid());
    assert!(!report.honeypot_tripped);
    assert_eq!(report.fields.len(), 4);
}

#[test]
fn honeypot_value_rejects_otherwise_valid_form() {
    let report = validate_form(&snapshot("ada@acme.com", Some("http://spam.example")));
    assert!(report.honeypot_tripped);
    assert!(!report.is_valid());
    assert!(report.fields.iter().all(|(_, state)| state.valid));
}

#[test]
fn whitespace_honeypot_is_ignored() {
    assert!(validate_form(&snapshot("ada@acme.com", Some("  "))).is_valid());
}

#[test]
fn missing_honeypot_is_ignored() {
    assert!(validate_form(&snapshot("ada@acme.com", None)).is_valid());
}

#[test]
fn every_field_is_reported_even_after_a_failure() {
    let mut snap = snapshot("user@gmail.com", None);
    snap.fields[0].1 = String::new();
    let report = validate_form(&snap);
    assert!(!report.is_valid());
    let errors: Vec<_> = report.fields.iter().map(|(f, s)| (*f, s.error)).collect();
    assert_eq!(
        errors,
        vec![
            (Field::Nombre, Some(FieldError::Required)),
            (Field::Email, Some(FieldError::PersonalEmail)),
            (Field::Empresa, None),
            (Field::Mensaje, None),
        ]
    );
}
