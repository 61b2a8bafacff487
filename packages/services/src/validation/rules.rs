//! Static field rules.
//!
//! Every rule is a pure, total function from a field value to an error
//! message; the empty string means the value passed. Rules other than
//! [`is_not_empty`] let an empty value through so that optional fields can
//! reuse them.

use std::sync::Arc;

/// A field validator: returns the error message for `value`, or an empty
/// string when there is nothing to report.
pub type Validator = Arc<dyn Fn(&str) -> String + Send + Sync>;

pub fn is_not_empty(value: &str) -> String {
    if value.trim().is_empty() {
        return "This field is required".to_string();
    }
    String::new()
}

pub fn is_only_numbers(value: &str) -> String {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return "Only numbers are allowed".to_string();
    }
    String::new()
}

pub fn is_email(email: &str) -> String {
    if email.is_empty() {
        return String::new();
    }

    let Some((local, domain)) = email.split_once('@') else {
        return "Email format is invalid".to_string();
    };
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty());
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return "Email format is invalid".to_string();
    }
    String::new()
}

pub fn is_phone_number(phone: &str) -> String {
    if phone.is_empty() {
        return String::new();
    }

    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !allowed || !(7..=15).contains(&digits) {
        return "Phone number is invalid".to_string();
    }
    String::new()
}

pub fn not_empty() -> Validator {
    Arc::new(is_not_empty)
}

pub fn only_numbers() -> Validator {
    Arc::new(is_only_numbers)
}

pub fn email() -> Validator {
    Arc::new(is_email)
}

pub fn phone_number() -> Validator {
    Arc::new(is_phone_number)
}

pub fn min_length(min: usize) -> Validator {
    Arc::new(move |value: &str| {
        if !value.is_empty() && value.chars().count() < min {
            return format!("Must be at least {} characters long", min);
        }
        String::new()
    })
}

pub fn max_length(max: usize) -> Validator {
    Arc::new(move |value: &str| {
        if value.chars().count() > max {
            return format!("Must be at most {} characters long", max);
        }
        String::new()
    })
}
