use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ada@example.com  ", "secret"),
        Ok(("ada@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "secret"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("ada@example.com", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately start or end with whitespace.
    assert_eq!(
        validate_login_input("a@b.com", " spaced "),
        Ok(("a@b.com".to_owned(), " spaced ".to_owned()))
    );
}
