use super::{ClientMutationResult, RegisterClientInput};
use crate::errors::ValidationFailed;
use async_graphql::{Context, Result};
use models::ClientRegistration;
use repositories::{ClientRepository, RepositoryError};
use services::validation::{
    InputValidator, ValidationErrors, ValidationErrorsExt, ValidatorRegistry,
};

fn conflict_errors(e: &RepositoryError) -> ValidationErrors {
    let message = e.field_message();
    let mut errors = ValidationErrors::new();
    errors.add_error(&message.field_id, message.error_msg);
    errors
}

pub(super) async fn register_client(
    ctx: &Context<'_>,
    input: RegisterClientInput,
) -> Result<ClientMutationResult> {
    let registry = ctx.data::<ValidatorRegistry>()?;
    let repository = ctx.data::<ClientRepository>()?;
    let registration = ClientRegistration::from(input);

    // Report a taken e-mail together with the rule failures
    let mut validation_errors = registration.validate(registry).err().unwrap_or_default();
    if repository.find_by_email(&registration.email).is_some() {
        let taken = RepositoryError::DuplicateEmail(registration.email.trim().to_string());
        validation_errors.merge(conflict_errors(&taken));
    }
    if !validation_errors.is_empty() {
        tracing::info!(fields = validation_errors.len(), "client registration rejected");
        return Ok(ClientMutationResult::ValidationFailed(ValidationFailed::from(
            &validation_errors,
        )));
    }

    match repository.create(registration) {
        Ok(client) => {
            tracing::info!(client_id = %client.id, "client registered");
            Ok(ClientMutationResult::Client(client.into()))
        }
        Err(e) => {
            tracing::warn!(error = %e, "client registration conflict");
            Ok(ClientMutationResult::ValidationFailed(ValidationFailed::from(
                &conflict_errors(&e),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use models::{fields, ValidationMessage};
    use services::validation::{ErrorRelay, FormState, ValidatorRegistry};

    #[tokio::test]
    async fn test_register_client_stores_client() {
        let (schema, repository) = create_test_schema();
        let email = generate_unique_email("register");

        let query = register_client_query(&email, "123456789", "25000");
        let data = execute_json(&schema, &query).await;
        let result = &data["registerClient"];

        assert_eq!(result["__typename"], "Client");
        assert_eq!(result["email"], email.as_str());
        assert!(result["phone"].is_null());
        assert_eq!(repository.count(), 1);
    }

    #[tokio::test]
    async fn test_register_client_returns_one_error_per_field() {
        let (schema, repository) = create_test_schema();

        let data = execute_json(&schema, &register_client_query("not-an-email", "12ab", "")).await;
        let result = &data["registerClient"];

        assert_eq!(result["__typename"], "ValidationFailed");
        assert_eq!(
            field_errors(result),
            vec![
                ValidationMessage::new(fields::AMOUNT, "This field is required"),
                ValidationMessage::new(fields::EMAIL, "Email format is invalid"),
                ValidationMessage::new(fields::TAX_NUMBER, "Only numbers are allowed"),
            ]
        );
        assert_eq!(repository.count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_reported_on_email_field() {
        let (schema, _) = create_test_schema();
        let email = generate_unique_email("duplicate");
        execute_json(&schema, &register_client_query(&email, "123456789", "100")).await;

        let data = execute_json(&schema, &register_client_query(&email, "987654321", "200")).await;
        let result = &data["registerClient"];

        assert_eq!(result["__typename"], "ValidationFailed");
        assert_eq!(
            field_errors(result),
            vec![ValidationMessage::new(
                fields::EMAIL,
                "A client with this email is already registered"
            )]
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_reported_with_rule_failures() {
        let (schema, repository) = create_test_schema();
        let email = generate_unique_email("combined");
        execute_json(&schema, &register_client_query(&email, "123456789", "100")).await;

        let query = register_client_query(&email.to_uppercase(), "123456789", "12a");
        let data = execute_json(&schema, &query).await;
        let result = &data["registerClient"];

        assert_eq!(result["__typename"], "ValidationFailed");
        assert_eq!(
            field_errors(result),
            vec![
                ValidationMessage::new(fields::AMOUNT, "Only numbers are allowed"),
                ValidationMessage::new(
                    fields::EMAIL,
                    "A client with this email is already registered"
                ),
            ]
        );
        assert_eq!(repository.count(), 1);
    }

    #[tokio::test]
    async fn test_server_errors_reach_the_form() {
        let (schema, _) = create_test_schema();
        let email = generate_unique_email("taken");
        execute_json(&schema, &register_client_query(&email, "123456789", "100")).await;

        let relay = ErrorRelay::new();
        let mut form = FormState::client_registration(
            &ValidatorRegistry::client_registration(),
            relay.clone(),
        );
        form.set_value(fields::COMPANY_NAME, "Acme Ltd").unwrap();
        form.set_value(fields::CONTACT_NAME, "Jo Doe").unwrap();
        form.set_value(fields::EMAIL, email.as_str()).unwrap();
        form.set_value(fields::TAX_NUMBER, "123456789").unwrap();
        form.set_value(fields::AMOUNT, "100").unwrap();
        assert!(form.validate_all());

        let data = execute_json(&schema, &register_client_query(&email, "123456789", "100")).await;
        form.apply_server_errors(field_errors(&data["registerClient"]));

        assert_eq!(
            form.error(fields::EMAIL),
            Some("A client with this email is already registered")
        );
        assert_eq!(form.error(fields::AMOUNT), Some(""));

        let fresh = generate_unique_email("fresh");
        assert_eq!(form.set_value(fields::EMAIL, fresh.as_str()).unwrap(), "");
        assert!(form.validate_all());
        assert_eq!(
            relay.query(fields::EMAIL).as_deref(),
            Some("A client with this email is already registered")
        );
    }
}
