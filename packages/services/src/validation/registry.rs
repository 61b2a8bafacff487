use std::collections::HashMap;

use models::fields;

use super::rules::{self, Validator};

/// Field key → ordered list of static validators.
///
/// The registry only stores rules. Whether a caller stops at the first
/// failing rule or collects every message is up to the caller, see
/// [`ValidatorRegistry::first_error`] and [`ValidatorRegistry::all_errors`].
#[derive(Default, Clone)]
pub struct ValidatorRegistry {
    validators: HashMap<String, Vec<Validator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules of the client registration form.
    pub fn client_registration() -> Self {
        let mut registry = Self::new();
        registry.register(fields::COMPANY_NAME, vec![rules::not_empty(), rules::max_length(120)]);
        registry.register(fields::CONTACT_NAME, vec![rules::not_empty(), rules::max_length(80)]);
        registry.register(
            fields::EMAIL,
            vec![rules::not_empty(), rules::email(), rules::max_length(254)],
        );
        registry.register(fields::PHONE, vec![rules::phone_number()]);
        registry.register(
            fields::TAX_NUMBER,
            vec![
                rules::not_empty(),
                rules::only_numbers(),
                rules::min_length(9),
                rules::max_length(14),
            ],
        );
        registry.register(
            fields::AMOUNT,
            vec![rules::not_empty(), rules::only_numbers(), rules::max_length(12)],
        );
        registry
    }

    /// Associates `validators` with `key`, replacing any earlier list.
    pub fn register(&mut self, key: impl Into<String>, validators: Vec<Validator>) {
        self.validators.insert(key.into(), validators);
    }

    /// Validators registered for `key`, in registration order. Unknown keys
    /// yield an empty slice.
    pub fn get_validations(&self, key: &str) -> &[Validator] {
        self.validators.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first_error(&self, key: &str, value: &str) -> Option<String> {
        self.get_validations(key)
            .iter()
            .map(|validate| validate(value))
            .find(|message| !message.is_empty())
    }

    pub fn all_errors(&self, key: &str, value: &str) -> Vec<String> {
        self.get_validations(key)
            .iter()
            .map(|validate| validate(value))
            .filter(|message| !message.is_empty())
            .collect()
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
