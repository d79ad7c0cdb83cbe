use super::*;

#[test]
fn validate_register_input_trims_name_and_email() {
    assert_eq!(
        validate_register_input(" Ada ", " ada@b.com ", "pw", "pw"),
        Ok(RegisterInput { name: "Ada".to_owned(), email: "ada@b.com".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "a@b.com", "pw", "pw"), Err("Fill in every field."));
    assert_eq!(validate_register_input("Ada", "  ", "pw", "pw"), Err("Fill in every field."));
    assert_eq!(validate_register_input("Ada", "a@b.com", "", ""), Err("Fill in every field."));
}

#[test]
fn validate_register_input_checks_email_shape() {
    assert_eq!(validate_register_input("Ada", "ada", "pw", "pw"), Err("Enter a valid email address."));
}

#[test]
fn validate_register_input_requires_matching_confirmation() {
    assert_eq!(validate_register_input("Ada", "a@b.com", "pw", "pW"), Err("Passwords do not match."));
}
