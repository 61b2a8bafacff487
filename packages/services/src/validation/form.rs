use std::collections::HashMap;
use std::fmt;

use models::{fields, ClientRegistration, ValidationMessage};

use super::input_validator::{ValidationErrors, ValidationErrorsExt};
use super::registry::ValidatorRegistry;
use super::relay::ErrorRelay;
use super::rules::Validator;

#[derive(Debug, PartialEq, Eq)]
pub enum FormError {
    UnknownField(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField(key) => write!(f, "Form has no field named {}", key),
        }
    }
}

impl std::error::Error for FormError {}

struct FieldState {
    key: String,
    value: String,
    error: String,
    pipeline: Vec<Validator>,
}

impl FieldState {
    /// Every validator runs, so the relay pins the value it was checked
    /// against even while a static rule fails.
    fn revalidate(&mut self) {
        let messages: Vec<String> = self
            .pipeline
            .iter()
            .map(|validate| validate(&self.value))
            .collect();
        self.error = messages
            .into_iter()
            .find(|message| !message.is_empty())
            .unwrap_or_default();
    }
}

/// Values and displayed errors of one form.
///
/// Each field runs its static rules from the registry first and the relay's
/// server error last; the first non-empty message is the field's error.
pub struct FormState {
    fields: Vec<FieldState>,
    relay: ErrorRelay,
}

impl FormState {
    pub fn new(registry: &ValidatorRegistry, relay: ErrorRelay, keys: &[&str]) -> Self {
        let fields = keys
            .iter()
            .map(|key| {
                let mut pipeline = registry.get_validations(key).to_vec();
                pipeline.push(relay.validator_for(*key));
                FieldState {
                    key: key.to_string(),
                    value: String::new(),
                    error: String::new(),
                    pipeline,
                }
            })
            .collect();

        Self { fields, relay }
    }

    pub fn client_registration(registry: &ValidatorRegistry, relay: ErrorRelay) -> Self {
        Self::new(registry, relay, &fields::CLIENT_REGISTRATION)
    }

    /// Stores `value` and returns the field's error after re-validation.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> Result<&str, FormError> {
        let field = self.field_mut(key)?;
        field.value = value.into();
        field.revalidate();
        Ok(field.error.as_str())
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.field(key).map(|field| field.value.as_str())
    }

    /// Error currently displayed for `key`; empty when the field is fine.
    pub fn error(&self, key: &str) -> Option<&str> {
        self.field(key).map(|field| field.error.as_str())
    }

    /// Re-validates every field. Returns whether the form is free of errors.
    pub fn validate_all(&mut self) -> bool {
        for field in &mut self.fields {
            field.revalidate();
        }
        self.fields.iter().all(|field| field.error.is_empty())
    }

    pub fn errors(&self) -> Vec<ValidationMessage> {
        self.fields
            .iter()
            .filter(|field| !field.error.is_empty())
            .map(|field| ValidationMessage::new(field.key.clone(), field.error.clone()))
            .collect()
    }

    pub fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.key.clone(), field.value.clone()))
            .collect()
    }

    /// Hands a server response's field errors to the relay and shows them.
    pub fn apply_server_errors(&mut self, messages: Vec<ValidationMessage>) {
        self.relay.publish_errors(messages);
        for field in &mut self.fields {
            field.revalidate();
        }
    }

    pub fn to_registration(&mut self) -> Result<ClientRegistration, ValidationErrors> {
        if !self.validate_all() {
            let mut errors = ValidationErrors::new();
            for message in self.errors() {
                errors.add_error(&message.field_id, message.error_msg);
            }
            return Err(errors);
        }

        Ok(ClientRegistration::from_values(
            self.fields
                .iter()
                .map(|field| (field.key.as_str(), field.value.as_str())),
        ))
    }

    fn field(&self, key: &str) -> Option<&FieldState> {
        self.fields.iter().find(|field| field.key == key)
    }

    fn field_mut(&mut self, key: &str) -> Result<&mut FieldState, FormError> {
        self.fields
            .iter_mut()
            .find(|field| field.key == key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }
}
