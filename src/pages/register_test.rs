use super::*;

#[test]
fn duplicate_email_conflict_gets_the_specific_message() {
    assert_eq!(register_error_message(&ApiError::Conflict), EMAIL_IN_USE);
}

#[test]
fn other_failures_get_the_generic_message() {
    assert_eq!(
        register_error_message(&ApiError::Network("status 500".to_owned())),
        REGISTRATION_FAILED
    );
    assert_eq!(
        register_error_message(&ApiError::Validation("bad email".to_owned())),
        REGISTRATION_FAILED
    );
    assert_eq!(register_error_message(&ApiError::Auth), REGISTRATION_FAILED);
}

#[test]
fn validate_register_input_requires_name_email_password() {
    assert!(validate_register_input("", "Acme", "a@b.com", "pw").is_err());
    assert!(validate_register_input("Ada", "Acme", "", "pw").is_err());
    assert!(validate_register_input("Ada", "Acme", "a@b.com", "").is_err());
}

#[test]
fn validate_register_input_allows_empty_company() {
    let (name, company, email, password) =
        validate_register_input(" Ada Lovelace ", "  ", "ada@example.com", "pw").unwrap();
    assert_eq!(name, "Ada Lovelace");
    assert_eq!(company, "");
    assert_eq!(email, "ada@example.com");
    assert_eq!(password, "pw");
}
