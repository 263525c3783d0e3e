use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ApiError, FieldError};

/// A validation rule: a pure check from input to an optional field failure.
pub type Rule<T> = fn(&T) -> Option<FieldError>;

/// Run every rule against the input, collecting all failures rather than
/// stopping at the first.
pub fn check<T>(input: &T, rules: &[Rule<T>]) -> Result<(), ApiError> {
    let failures: Vec<FieldError> = rules.iter().filter_map(|rule| rule(input)).collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(failures))
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn fail(field: &'static str, message: &str) -> Option<FieldError> {
    Some(FieldError {
        field,
        message: message.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Input {
        a: String,
        b: String,
    }

    fn a_non_empty(input: &Input) -> Option<FieldError> {
        if input.a.is_empty() {
            return fail("a", "is required");
        }
        None
    }

    fn b_non_empty(input: &Input) -> Option<FieldError> {
        if input.b.is_empty() {
            return fail("b", "is required");
        }
        None
    }

    const RULES: &[Rule<Input>] = &[a_non_empty, b_non_empty];

    #[test]
    fn check_collects_every_failure() {
        let input = Input {
            a: String::new(),
            b: String::new(),
        };
        let err = check(&input, RULES).unwrap_err();
        match err {
            ApiError::Validation(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].field, "a");
                assert_eq!(fields[1].field, "b");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn check_passes_valid_input() {
        let input = Input {
            a: "x".into(),
            b: "y".into(),
        };
        assert!(check(&input, RULES).is_ok());
    }

    #[test]
    fn email_regex_accepts_plausible_addresses() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn email_regex_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }
}
