use async_graphql::SimpleObject;
use models::ValidationMessage;
use services::validation::{ValidationErrors, ValidationErrorsExt};

/// One field's validation failure, as sent to the form
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_id: String,
    pub error_msg: String,
}

impl From<ValidationMessage> for FieldError {
    fn from(message: ValidationMessage) -> Self {
        FieldError {
            field_id: message.field_id,
            error_msg: message.error_msg,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct ValidationFailed {
    pub errors: Vec<FieldError>,
}

impl From<&ValidationErrors> for ValidationFailed {
    fn from(errors: &ValidationErrors) -> Self {
        ValidationFailed {
            errors: errors.to_messages().into_iter().map(FieldError::from).collect(),
        }
    }
}
