use std::collections::HashMap;

use models::{ClientRegistration, ValidationMessage};

use super::registry::ValidatorRegistry;

pub type ValidationErrors = HashMap<String, Vec<String>>;

/// A submitted DTO whose fields are validated by key.
pub trait FormFields {
    fn fields(&self) -> Vec<(&'static str, &str)>;
}

impl FormFields for ClientRegistration {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        models::fields::CLIENT_REGISTRATION
            .iter()
            .filter_map(|key| self.field(key).map(|value| (*key, value)))
            .collect()
    }
}

pub trait InputValidator {
    /// Runs every registered rule on every field and collects all failures.
    fn validate(&self, registry: &ValidatorRegistry) -> Result<(), ValidationErrors>;

    fn is_valid(&self, registry: &ValidatorRegistry) -> bool {
        self.validate(registry).is_ok()
    }
}

impl<T: FormFields> InputValidator for T {
    fn validate(&self, registry: &ValidatorRegistry) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (key, value) in self.fields() {
            for message in registry.all_errors(key, value) {
                errors.add_error(key, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// Helper trait for combining validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
    fn merge(&mut self, other: ValidationErrors);
    /// One message per field (its first), ordered by field id.
    fn to_messages(&self) -> Vec<ValidationMessage>;
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string())
            .or_insert_with(Vec::new)
            .push(message);
    }

    fn merge(&mut self, other: ValidationErrors) {
        for (field, mut errors) in other {
            self.entry(field)
                .or_insert_with(Vec::new)
                .append(&mut errors);
        }
    }

    fn to_messages(&self) -> Vec<ValidationMessage> {
        let mut messages: Vec<ValidationMessage> = self
            .iter()
            .filter_map(|(field, errors)| {
                errors
                    .first()
                    .map(|message| ValidationMessage::new(field.clone(), message.clone()))
            })
            .collect();
        messages.sort_by(|a, b| a.field_id.cmp(&b.field_id));
        messages
    }
}
