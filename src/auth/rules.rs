use super::dto::{LoginRequest, RegisterRequest};
use crate::error::FieldError;
use crate::validate::{fail, is_valid_email, Rule};

// Registration rules run after the handler trims the name and normalizes
// the email, so length and format checks see the stored form.

fn name_length(req: &RegisterRequest) -> Option<FieldError> {
    let len = req.name.chars().count();
    if !(3..=30).contains(&len) {
        return fail("name", "must be between 3 and 30 characters");
    }
    None
}

fn email_format(req: &RegisterRequest) -> Option<FieldError> {
    if !is_valid_email(&req.email) {
        return fail("email", "must be a valid email address");
    }
    None
}

fn password_length(req: &RegisterRequest) -> Option<FieldError> {
    if req.password.len() < 6 {
        return fail("password", "must be at least 6 characters");
    }
    None
}

pub const REGISTER_RULES: &[Rule<RegisterRequest>] = &[name_length, email_format, password_length];

// Login only checks presence; credential matching decides the rest.

fn login_name(req: &LoginRequest) -> Option<FieldError> {
    if req.name.trim().is_empty() {
        return fail("name", "is required");
    }
    None
}

fn login_email(req: &LoginRequest) -> Option<FieldError> {
    if req.email.trim().is_empty() {
        return fail("email", "is required");
    }
    None
}

fn login_password(req: &LoginRequest) -> Option<FieldError> {
    if req.password.is_empty() {
        return fail("password", "is required");
    }
    None
}

pub const LOGIN_RULES: &[Rule<LoginRequest>] = &[login_name, login_email, login_password];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::validate::check;

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    fn failing_fields(err: ApiError) -> Vec<&'static str> {
        match err {
            ApiError::Validation(fields) => fields.into_iter().map(|f| f.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_registration_passes() {
        let req = register("Ann Lee", "ann@example.com", "secret1");
        assert!(check(&req, REGISTER_RULES).is_ok());
    }

    #[test]
    fn every_failing_register_field_is_reported() {
        let req = register("ab", "nope", "12345");
        let err = check(&req, REGISTER_RULES).unwrap_err();
        assert_eq!(failing_fields(err), vec!["name", "email", "password"]);
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert!(check(&register("abc", "a@b.co", "secret1"), REGISTER_RULES).is_ok());
        let max = "x".repeat(30);
        assert!(check(&register(&max, "a@b.co", "secret1"), REGISTER_RULES).is_ok());
        let too_long = "x".repeat(31);
        let err = check(&register(&too_long, "a@b.co", "secret1"), REGISTER_RULES).unwrap_err();
        assert_eq!(failing_fields(err), vec!["name"]);
    }

    #[test]
    fn empty_name_fails_the_length_rule() {
        let err = check(&register("", "a@b.co", "secret1"), REGISTER_RULES).unwrap_err();
        assert_eq!(failing_fields(err), vec!["name"]);
    }

    #[test]
    fn six_character_password_is_accepted() {
        assert!(check(&register("Ann Lee", "a@b.co", "123456"), REGISTER_RULES).is_ok());
    }

    #[test]
    fn login_requires_every_field() {
        let req = LoginRequest {
            name: String::new(),
            email: String::new(),
            password: String::new(),
        };
        let err = check(&req, LOGIN_RULES).unwrap_err();
        assert_eq!(failing_fields(err), vec!["name", "email", "password"]);
    }

    #[test]
    fn login_does_not_check_email_format() {
        let req = LoginRequest {
            name: "Ann".into(),
            email: "not-an-email".into(),
            password: "whatever".into(),
        };
        assert!(check(&req, LOGIN_RULES).is_ok());
    }
}
