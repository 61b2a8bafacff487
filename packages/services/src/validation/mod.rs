pub mod form;
pub mod input_validator;
pub mod registry;
pub mod relay;
pub mod rules;

// Re-export common types and functions
pub use form::{FormError, FormState};
pub use input_validator::{FormFields, InputValidator, ValidationErrors, ValidationErrorsExt};
pub use registry::ValidatorRegistry;
pub use relay::{ErrorObserver, ErrorRelay, SubscriptionId};
pub use rules::Validator;
