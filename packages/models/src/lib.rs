pub mod clients;
pub mod fields;
pub mod validation_message;

pub use clients::{Client, ClientRegistration};
pub use validation_message::ValidationMessage;
